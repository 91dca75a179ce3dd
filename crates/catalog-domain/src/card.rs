use crate::form::parse_count_bound;
use catalog_core::{CatalogError, CatalogResult};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Display summary of one dataset, as rendered on the catalog page.
///
/// Missing, null or unreadable numeric attributes read as zero. Counts may
/// arrive as numbers or as numeric text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "sizeKb", alias = "size", deserialize_with = "lenient_count")]
    pub size_kb: u64,
    #[serde(default, alias = "rowCount", alias = "rows", deserialize_with = "lenient_count")]
    pub row_count: u64,
    #[serde(
        default,
        alias = "columnCount",
        alias = "columns",
        deserialize_with = "lenient_count"
    )]
    pub column_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub downloads: u64,
    #[serde(default, alias = "creationDate")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, alias = "lastModifiedDate")]
    pub modified_at: Option<NaiveDate>,
}

/// Count attribute as a number, numeric text (leading digits) or null.
/// Anything else, including negative values, is 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(text) => parse_count_bound(&text),
        _ => None,
    };
    Ok(count.unwrap_or(0))
}

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_size_kb(mut self, size_kb: u64) -> Self {
        self.size_kb = size_kb;
        self
    }

    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = row_count;
        self
    }

    pub fn with_column_count(mut self, column_count: u64) -> Self {
        self.column_count = column_count;
        self
    }

    pub fn with_views(mut self, views: u64) -> Self {
        self.views = views;
        self
    }

    pub fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = downloads;
        self
    }

    pub fn with_created_at(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    pub fn with_modified_at(mut self, date: NaiveDate) -> Self {
        self.modified_at = Some(date);
        self
    }

    /// Value of a numeric field, `None` for text and date fields.
    pub fn numeric(&self, field: CardField) -> Option<u64> {
        match field {
            CardField::SizeKb => Some(self.size_kb),
            CardField::RowCount => Some(self.row_count),
            CardField::ColumnCount => Some(self.column_count),
            CardField::Views => Some(self.views),
            CardField::Downloads => Some(self.downloads),
            CardField::Name | CardField::CreatedAt | CardField::ModifiedAt => None,
        }
    }

    /// Value of a date field. `None` for non-date fields and for cards
    /// without that date.
    pub fn date(&self, field: CardField) -> Option<NaiveDate> {
        match field {
            CardField::CreatedAt => self.created_at,
            CardField::ModifiedAt => self.modified_at,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
    Date,
}

/// A card attribute that can be filtered or sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Name,
    SizeKb,
    RowCount,
    ColumnCount,
    Views,
    Downloads,
    CreatedAt,
    ModifiedAt,
}

impl CardField {
    pub const ALL: [CardField; 8] = [
        CardField::Name,
        CardField::SizeKb,
        CardField::RowCount,
        CardField::ColumnCount,
        CardField::Views,
        CardField::Downloads,
        CardField::CreatedAt,
        CardField::ModifiedAt,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Name => FieldKind::Text,
            Self::CreatedAt | Self::ModifiedAt => FieldKind::Date,
            _ => FieldKind::Numeric,
        }
    }

    /// Canonical short name, accepted back by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::SizeKb => "size",
            Self::RowCount => "rows",
            Self::ColumnCount => "columns",
            Self::Views => "views",
            Self::Downloads => "downloads",
            Self::CreatedAt => "created",
            Self::ModifiedAt => "modified",
        }
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardField {
    type Err = CatalogError;

    /// Accepts canonical names, snake/camel case attribute names and the
    /// form control ids (`row-size`, `creation-date`, `views-sort`, ...).
    fn from_str(s: &str) -> CatalogResult<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let key = normalized.strip_suffix("-sort").unwrap_or(&normalized);

        let field = match key {
            "name" => Self::Name,
            "size" | "size-kb" | "sizekb" | "data-size" => Self::SizeKb,
            "rows" | "row-size" | "row-count" | "rowcount" => Self::RowCount,
            "columns" | "column-size" | "column-count" | "columncount" => Self::ColumnCount,
            "views" => Self::Views,
            "downloads" => Self::Downloads,
            "created" | "created-at" | "creation-date" | "creationdate" => Self::CreatedAt,
            "modified" | "modified-at" | "modify-date" | "lastmodifieddate" => Self::ModifiedAt,
            _ => {
                return Err(CatalogError::Validation(format!(
                    "unknown card field: {}",
                    s
                )))
            }
        };
        Ok(field)
    }
}
