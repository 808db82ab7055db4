pub mod client;
pub mod error;
pub mod html;
pub mod normalize;
pub mod pagination;
pub mod product_page;
pub mod types;

pub use client::NsiClient;
pub use error::ScraperError;
pub use pagination::LARGE_PAGE_COUNT;
pub use product_page::{product_page_url, ProductPageParams};
