//! Backend dataset briefs.
//!
//! The catalog backend answers `POST /datasets/filter` with a JSON array of
//! briefs. A brief carries less than a rendered card, so converting one
//! leaves the row/column/usage counters at zero and the dates unset.

use crate::Card;
use catalog_core::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetBrief {
    pub dataset_id: String,
    pub dataset_name: String,
    #[serde(default)]
    pub dataset_description: String,
    #[serde(default)]
    pub dataset_type: String,
    /// Size in kilobytes. The backend rounds to two decimals.
    #[serde(default)]
    pub dataset_size: f64,
}

impl DatasetBrief {
    /// Parse a backend response body.
    pub fn parse_list(json: &str) -> CatalogResult<Vec<Self>> {
        serde_json::from_str(json).map_err(|e| CatalogError::Serialization(e.to_string()))
    }
}

impl From<DatasetBrief> for Card {
    fn from(brief: DatasetBrief) -> Self {
        let size_kb = if brief.dataset_size.is_finite() && brief.dataset_size > 0.0 {
            brief.dataset_size.round() as u64
        } else {
            0
        };
        Card::new(brief.dataset_name)
            .with_id(brief.dataset_id)
            .with_size_kb(size_kb)
    }
}
