//! Raw filter form input.
//!
//! The UI layer hands over whatever text is in the filter controls. Nothing
//! here fails: text that does not parse is simply "no bound", and an empty
//! or unknown sort field means "no sort".

use crate::filter::{FieldRange, FilterCriteria};
use crate::sort::{SortOrder, SortSpec};
use crate::{CardField, FieldKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Text content of the filter controls, keyed like the page's form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FilterForm {
    pub name: String,
    pub size_from: String,
    pub size_to: String,
    pub row_size_from: String,
    pub row_size_to: String,
    pub column_size_from: String,
    pub column_size_to: String,
    pub views_from: String,
    pub views_to: String,
    pub downloads_from: String,
    pub downloads_to: String,
    pub creation_date_from: String,
    pub creation_date_to: String,
    pub modify_date_from: String,
    pub modify_date_to: String,
    pub sort_field: String,
    pub sort_order: String,
}

impl FilterForm {
    /// Raw `(from, to)` text for a range field.
    pub fn range_text(&self, field: CardField) -> Option<(&str, &str)> {
        let (from, to) = match field {
            CardField::SizeKb => (&self.size_from, &self.size_to),
            CardField::RowCount => (&self.row_size_from, &self.row_size_to),
            CardField::ColumnCount => (&self.column_size_from, &self.column_size_to),
            CardField::Views => (&self.views_from, &self.views_to),
            CardField::Downloads => (&self.downloads_from, &self.downloads_to),
            CardField::CreatedAt => (&self.creation_date_from, &self.creation_date_to),
            CardField::ModifiedAt => (&self.modify_date_from, &self.modify_date_to),
            CardField::Name => return None,
        };
        Some((from.as_str(), to.as_str()))
    }

    pub fn set_range_text(&mut self, field: CardField, from: &str, to: &str) {
        let (from_slot, to_slot) = match field {
            CardField::SizeKb => (&mut self.size_from, &mut self.size_to),
            CardField::RowCount => (&mut self.row_size_from, &mut self.row_size_to),
            CardField::ColumnCount => (&mut self.column_size_from, &mut self.column_size_to),
            CardField::Views => (&mut self.views_from, &mut self.views_to),
            CardField::Downloads => (&mut self.downloads_from, &mut self.downloads_to),
            CardField::CreatedAt => (&mut self.creation_date_from, &mut self.creation_date_to),
            CardField::ModifiedAt => (&mut self.modify_date_from, &mut self.modify_date_to),
            CardField::Name => return,
        };
        *from_slot = from.to_string();
        *to_slot = to.to_string();
    }

    pub fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new().with_name(&self.name);
        for field in CardField::ALL {
            let Some((from, to)) = self.range_text(field) else {
                continue;
            };
            apply_range_text(&mut criteria, field, from, to);
        }
        criteria
    }

    /// The sort key selected in the form, if any.
    pub fn sort_spec(&self) -> Option<SortSpec> {
        parse_sort(&self.sort_field, &self.sort_order)
    }
}

/// Parse raw `(from, to)` text into the range for `field`.
pub fn apply_range_text(criteria: &mut FilterCriteria, field: CardField, from: &str, to: &str) {
    match field.kind() {
        FieldKind::Numeric => criteria.set_numeric_range(
            field,
            FieldRange::new(parse_count_bound(from), parse_count_bound(to)),
        ),
        FieldKind::Date => criteria.set_date_range(
            field,
            FieldRange::new(parse_date_bound(from), parse_date_bound(to)),
        ),
        FieldKind::Text => {}
    }
}

/// Lenient sort selection: an empty or unknown field clears sorting.
pub fn parse_sort(field: &str, order: &str) -> Option<SortSpec> {
    if field.trim().is_empty() {
        return None;
    }
    match field.parse::<CardField>() {
        Ok(field) => Some(SortSpec::new(field, SortOrder::from_form(order))),
        Err(e) => {
            tracing::debug!("Ignoring sort selection: {}", e);
            None
        }
    }
}

/// Leading decimal digits of the trimmed text (`"12kb"` reads as 12).
///
/// Empty text, text without leading digits, negative numbers and values
/// that overflow are all "no bound".
pub fn parse_count_bound(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}

/// `YYYY-MM-DD`, the value format of a date input. Anything else is "no
/// bound".
pub fn parse_date_bound(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
