use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::models::PublishedReview;

/// Ledger of published review pages, one row per product.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let storage = Self { conn };
        storage.init_db()?;
        Ok(storage)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Self { conn };
        storage.init_db()?;
        Ok(storage)
    }

    fn init_db(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS published_reviews (
                id INTEGER PRIMARY KEY,
                product_name TEXT UNIQUE NOT NULL,
                niche TEXT NOT NULL,
                filename TEXT NOT NULL,
                path TEXT NOT NULL,
                review_count INTEGER NOT NULL,
                published_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_published_reviews_niche ON published_reviews(niche);
            "#,
        )?;

        Ok(())
    }

    /// Inserts or refreshes the ledger row for a product.
    pub fn record_published(&self, review: &PublishedReview) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO published_reviews (product_name, niche, filename, path, review_count, published_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(product_name) DO UPDATE SET
                niche = excluded.niche,
                filename = excluded.filename,
                path = excluded.path,
                review_count = excluded.review_count,
                published_at = excluded.published_at
            "#,
            params![
                review.product_name,
                review.niche,
                review.filename,
                review.path.to_string_lossy().into_owned(),
                review.review_count as i64,
                review.published_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    pub fn get_published(&self, product_name: &str) -> Result<Option<PublishedReview>> {
        let review = self
            .conn
            .query_row(
                r#"
                SELECT product_name, niche, filename, path, review_count, published_at
                FROM published_reviews
                WHERE product_name = ?1
                "#,
                params![product_name],
                read_published,
            )
            .optional()?;

        Ok(review)
    }

    /// All ledger rows, most recently published first.
    pub fn list_published(&self) -> Result<Vec<PublishedReview>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT product_name, niche, filename, path, review_count, published_at
            FROM published_reviews
            ORDER BY published_at DESC, id DESC
            "#,
        )?;

        let reviews = stmt
            .query_map([], read_published)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(reviews)
    }
}

fn read_published(row: &Row<'_>) -> rusqlite::Result<PublishedReview> {
    let published_at: String = row.get(5)?;
    Ok(PublishedReview {
        product_name: row.get(0)?,
        niche: row.get(1)?,
        filename: row.get(2)?,
        path: PathBuf::from(row.get::<_, String>(3)?),
        review_count: row.get::<_, i64>(4)?.max(0) as usize,
        published_at: DateTime::parse_from_rfc3339(&published_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
    })
}
