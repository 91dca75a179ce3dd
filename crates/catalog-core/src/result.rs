use crate::error::CatalogError;

pub type CatalogResult<T> = Result<T, CatalogError>;
