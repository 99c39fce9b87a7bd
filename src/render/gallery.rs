use maud::{html, Markup};

use crate::models::Product;

/// Neutral placeholder swapped in when a gallery image fails to load.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNjAwIiBoZWlnaHQ9IjQwMCIgdmlld0JveD0iMCAwIDYwMCA0MDAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSI2MDAiIGhlaWdodD0iNDAwIiBmaWxsPSIjZjNmNGY2Ii8+CjxyZWN0IHg9IjIwIiB5PSIyMCIgd2lkdGg9IjU2MCIgaGVpZ2h0PSIzNjAiIGZpbGw9Im5vbmUiIHN0cm9rZT0iIzY2N2VlYSIgc3Ryb2tlLXdpZHRoPSIyIi8+Cjx0ZXh0IHg9IjMwMCIgeT0iMTgwIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBmaWxsPSIjNjY3ZWVhIiBmb250LXNpemU9IjI0Ij7wn5O3PC90ZXh0Pgo8dGV4dCB4PSIzMDAiIHk9IjIyMCIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZmlsbD0iIzY2N2VlYSIgZm9udC1zaXplPSIxNiI+UHJvZHVjdCBJbWFnZTwvdGV4dD4KPC9zdmc+";

const UNSPLASH_PARAMS: &str = "w=600&h=400&fit=crop&crop=center&auto=format&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSet {
    Smartphone,
    Gaming,
    Generic,
}

impl ImageSet {
    pub fn for_product(product: &Product) -> Self {
        let name = product.name.to_lowercase();
        let category = product.category.to_lowercase();

        if category.contains("smartphone") || name.contains("iphone") {
            ImageSet::Smartphone
        } else if category.contains("gaming") || name.contains("steam deck") {
            ImageSet::Gaming
        } else {
            ImageSet::Generic
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub fallback: &'static str,
}

impl GalleryImage {
    fn new(photo_id: &str, alt: String, caption: impl Into<String>) -> Self {
        Self {
            src: format!(
                "https://images.unsplash.com/photo-{}?{}",
                photo_id, UNSPLASH_PARAMS
            ),
            alt,
            caption: caption.into(),
            fallback: FALLBACK_IMAGE,
        }
    }

    pub fn onerror_handler(&self) -> String {
        format!("this.src='{}'; this.onerror=null;", self.fallback)
    }
}

pub fn gallery_images(product: &Product) -> Vec<GalleryImage> {
    let name = &product.name;

    match ImageSet::for_product(product) {
        ImageSet::Smartphone => vec![
            GalleryImage::new(
                "1695048133142-1a20484d2569",
                format!("{} official product shot", name),
                format!("{} - Official Product Shot", name),
            ),
            GalleryImage::new(
                "1695048133096-5b90d5230e80",
                format!("{} unboxing", name),
                "Premium Unboxing Experience",
            ),
            GalleryImage::new(
                "1574484284002-952d92456975",
                format!("{} lifestyle usage", name),
                "Real-World Usage",
            ),
        ],
        ImageSet::Gaming => vec![
            GalleryImage::new(
                "1542751371-adc38448a05e",
                format!("{} gaming setup", name),
                format!("{} - Gaming Experience", name),
            ),
            GalleryImage::new(
                "1538481199705-c710c4e965fc",
                format!("{} portable gaming", name),
                "Portable Gaming Excellence",
            ),
        ],
        ImageSet::Generic => vec![
            GalleryImage::new(
                "1596462502278-27bfdc403348",
                format!("{} product photo", name),
                format!("{} - Official Product Shot", name),
            ),
            GalleryImage::new(
                "1556909114-f6e7ad7d3136",
                format!("{} in use", name),
                "Real-World Performance",
            ),
        ],
    }
}

pub fn image_gallery(product: &Product) -> Markup {
    let images = gallery_images(product);

    html! {
        section class="image-gallery" data-aos="fade-up" {
            h2 {
                i class="fas fa-images section-icon" {}
                (product.name) " Gallery: Real-World Usage"
            }
            div class="gallery-container glass-card" {
                p class="gallery-intro" {
                    "Experience the " (product.name) " through professional product shots, real user photos, and detailed images showcasing actual performance and build quality."
                }
                div class="gallery-grid" {
                    @for image in &images {
                        div class="gallery-item" {
                            img src=(image.src) alt=(image.alt) loading="lazy" onerror=(image.onerror_handler());
                            div class="gallery-overlay" {
                                div class="overlay-content" {
                                    i class="fas fa-search-plus" {}
                                    span { "View Full Size" }
                                }
                            }
                            div class="gallery-caption" { (image.caption) }
                        }
                    }
                }
            }
        }
    }
}
