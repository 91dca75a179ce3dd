pub mod config;
pub mod error;
pub mod pagination;
pub mod result;

pub use config::AppConfig;
pub use error::CatalogError;
pub use pagination::{PageInfo, Pager};
pub use result::CatalogResult;
