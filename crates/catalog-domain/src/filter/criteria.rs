//! Filter criteria.
//!
//! Provides `FilterCriteria`, which holds the active filter settings (what to
//! filter by), as opposed to the `CardFilter` implementations that perform
//! the actual filtering.

use crate::{CardField, FieldKind};
use chrono::NaiveDate;

/// Inclusive `[from, to]` range where either bound may be absent.
///
/// An absent `from` is unbounded below (for counts that is the same as 0),
/// an absent `to` is unbounded above. A range whose `to` is below its `from`
/// is not an error: it resolves to the unbounded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange<T> {
    pub from: Option<T>,
    pub to: Option<T>,
}

impl<T> Default for FieldRange<T> {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
        }
    }
}

impl<T: PartialOrd + Copy> FieldRange<T> {
    pub fn new(from: Option<T>, to: Option<T>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether `to < from`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if to < from)
    }

    /// The range actually applied: inverted ranges become unbounded.
    pub fn resolved(&self) -> Self {
        if self.is_inverted() {
            Self::unbounded()
        } else {
            *self
        }
    }

    /// Whether any bound is set. Inverted ranges still count as active; they
    /// just let everything through.
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn contains(&self, value: T) -> bool {
        let range = self.resolved();
        range.from.is_none_or(|from| value >= from) && range.to.is_none_or(|to| value <= to)
    }
}

/// The active set of filter predicates: a name substring plus one range per
/// numeric and date field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the card name, stored trimmed. Empty
    /// or whitespace-only input matches everything.
    pub name: String,
    pub size_kb: FieldRange<u64>,
    pub row_count: FieldRange<u64>,
    pub column_count: FieldRange<u64>,
    pub views: FieldRange<u64>,
    pub downloads: FieldRange<u64>,
    pub created_at: FieldRange<NaiveDate>,
    pub modified_at: FieldRange<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the name substring. Surrounding whitespace is ignored.
    pub fn with_name(mut self, name: impl AsRef<str>) -> Self {
        self.set_name(name);
        self
    }

    pub fn set_name(&mut self, name: impl AsRef<str>) {
        self.name = name.as_ref().trim().to_string();
    }

    /// Builder: set the range for a numeric field. Ignored for other fields.
    pub fn with_numeric_range(mut self, field: CardField, range: FieldRange<u64>) -> Self {
        self.set_numeric_range(field, range);
        self
    }

    /// Builder: set the range for a date field. Ignored for other fields.
    pub fn with_date_range(mut self, field: CardField, range: FieldRange<NaiveDate>) -> Self {
        self.set_date_range(field, range);
        self
    }

    pub fn numeric_range(&self, field: CardField) -> Option<&FieldRange<u64>> {
        match field {
            CardField::SizeKb => Some(&self.size_kb),
            CardField::RowCount => Some(&self.row_count),
            CardField::ColumnCount => Some(&self.column_count),
            CardField::Views => Some(&self.views),
            CardField::Downloads => Some(&self.downloads),
            _ => None,
        }
    }

    pub fn date_range(&self, field: CardField) -> Option<&FieldRange<NaiveDate>> {
        match field {
            CardField::CreatedAt => Some(&self.created_at),
            CardField::ModifiedAt => Some(&self.modified_at),
            _ => None,
        }
    }

    pub fn set_numeric_range(&mut self, field: CardField, range: FieldRange<u64>) {
        let slot = match field {
            CardField::SizeKb => &mut self.size_kb,
            CardField::RowCount => &mut self.row_count,
            CardField::ColumnCount => &mut self.column_count,
            CardField::Views => &mut self.views,
            CardField::Downloads => &mut self.downloads,
            _ => return,
        };
        *slot = range;
    }

    pub fn set_date_range(&mut self, field: CardField, range: FieldRange<NaiveDate>) {
        let slot = match field {
            CardField::CreatedAt => &mut self.created_at,
            CardField::ModifiedAt => &mut self.modified_at,
            _ => return,
        };
        *slot = range;
    }

    /// Check if any filters are active.
    pub fn has_active_filters(&self) -> bool {
        !self.name.is_empty()
            || CardField::ALL.iter().any(|&field| match field.kind() {
                FieldKind::Numeric => self.numeric_range(field).is_some_and(|r| r.is_active()),
                FieldKind::Date => self.date_range(field).is_some_and(|r| r.is_active()),
                FieldKind::Text => false,
            })
    }

    /// Clear all filters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
