pub mod product;
pub mod review;
pub mod document;
pub mod report;

pub use product::*;
pub use review::*;
pub use document::*;
pub use report::*;
