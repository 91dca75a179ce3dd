//! Card filtering implementations.
//!
//! Provides the CardFilter trait and the predicates a catalog view is built
//! from: name substring, numeric ranges and date ranges.

use crate::filter::{FieldRange, FilterCriteria};
use crate::{Card, CardField, FieldKind};
use chrono::NaiveDate;

/// Trait for filtering cards by various criteria.
pub trait CardFilter {
    /// Returns true if the card matches the filter criteria.
    fn matches(&self, card: &Card) -> bool;
}

/// Filter cards by name (case-insensitive substring).
pub struct NameFilter {
    query: String,
}

impl NameFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl CardFilter for NameFilter {
    fn matches(&self, card: &Card) -> bool {
        if self.query.is_empty() {
            return true;
        }
        card.name.to_lowercase().contains(&self.query)
    }
}

/// Filter cards whose numeric field lies within an inclusive range.
///
/// A non-numeric field places no constraint.
pub struct NumericRangeFilter {
    field: CardField,
    range: FieldRange<u64>,
}

impl NumericRangeFilter {
    pub fn new(field: CardField, range: FieldRange<u64>) -> Self {
        Self { field, range }
    }
}

impl CardFilter for NumericRangeFilter {
    fn matches(&self, card: &Card) -> bool {
        card.numeric(self.field)
            .is_none_or(|value| self.range.contains(value))
    }
}

/// Filter cards whose date field lies within an inclusive range.
///
/// Cards without the date only pass while the range resolves to unbounded.
pub struct DateRangeFilter {
    field: CardField,
    range: FieldRange<NaiveDate>,
}

impl DateRangeFilter {
    pub fn new(field: CardField, range: FieldRange<NaiveDate>) -> Self {
        Self { field, range }
    }
}

impl CardFilter for DateRangeFilter {
    fn matches(&self, card: &Card) -> bool {
        match card.date(self.field) {
            Some(date) => self.range.contains(date),
            None => !self.range.resolved().is_active(),
        }
    }
}

/// Combine multiple filters with AND logic.
///
/// A card matches only if it passes all filters.
pub struct CompositeFilter {
    filters: Vec<Box<dyn CardFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all cards).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    /// Build the conjunction of every active predicate in `criteria`.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut composite = Self::new();

        if !criteria.name.is_empty() {
            composite = composite.with_filter(Box::new(NameFilter::new(criteria.name.as_str())));
        }

        for field in CardField::ALL {
            match field.kind() {
                FieldKind::Numeric => {
                    if let Some(range) = criteria.numeric_range(field).filter(|r| r.is_active()) {
                        composite =
                            composite.with_filter(Box::new(NumericRangeFilter::new(field, *range)));
                    }
                }
                FieldKind::Date => {
                    if let Some(range) = criteria.date_range(field).filter(|r| r.is_active()) {
                        composite =
                            composite.with_filter(Box::new(DateRangeFilter::new(field, *range)));
                    }
                }
                FieldKind::Text => {}
            }
        }

        composite
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn CardFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check if the composite has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFilter for CompositeFilter {
    fn matches(&self, card: &Card) -> bool {
        self.filters.iter().all(|f| f.matches(card))
    }
}
