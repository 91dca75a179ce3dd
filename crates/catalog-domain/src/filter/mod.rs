//! Card filtering functionality.
//!
//! Provides the filter criteria and the predicates built from them.

pub mod card_filter;
pub mod criteria;

pub use card_filter::{CardFilter, CompositeFilter, DateRangeFilter, NameFilter, NumericRangeFilter};
pub use criteria::{FieldRange, FilterCriteria};
