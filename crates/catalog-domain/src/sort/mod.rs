//! Card sorting functionality.
//!
//! Provides the single active sort key and the comparators behind it.
//! Sorting is always stable: cards with equal keys keep their input order.

use crate::{Card, CardField};
use catalog_core::{CatalogError, CatalogResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortOrder {
    /// Lenient parse for raw form input: only `desc` sorts descending.
    pub fn from_form(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "desc" | "descending" => Self::Descending,
            _ => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> CatalogResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(CatalogError::Validation(format!("unknown sort order: {}", s))),
        }
    }
}

/// The single active `(field, order)` sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: CardField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: CardField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn asc(field: CardField) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn desc(field: CardField) -> Self {
        Self::new(field, SortOrder::Descending)
    }
}

/// Enum dispatch for comparing cards by a specific field.
pub enum SortBy {
    Name,
    SizeKb,
    RowCount,
    ColumnCount,
    Views,
    Downloads,
    CreatedAt,
    ModifiedAt,
}

impl SortBy {
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::SizeKb => a.size_kb.cmp(&b.size_kb),
            Self::RowCount => a.row_count.cmp(&b.row_count),
            Self::ColumnCount => a.column_count.cmp(&b.column_count),
            Self::Views => a.views.cmp(&b.views),
            Self::Downloads => a.downloads.cmp(&b.downloads),
            Self::CreatedAt => compare_dates(a.created_at, b.created_at),
            Self::ModifiedAt => compare_dates(a.modified_at, b.modified_at),
        }
    }

    /// Whether `card` has a value to sort on. Only dates can be missing.
    pub fn has_key(&self, card: &Card) -> bool {
        match self {
            Self::CreatedAt => card.created_at.is_some(),
            Self::ModifiedAt => card.modified_at.is_some(),
            _ => true,
        }
    }
}

/// Wrapper that applies sort order (ascending/descending) to a sort field.
pub struct OrderedSorter {
    sorter: SortBy,
    order: SortOrder,
}

impl OrderedSorter {
    pub fn new(sorter: SortBy, order: SortOrder) -> Self {
        Self { sorter, order }
    }

    pub fn for_spec(spec: SortSpec) -> Self {
        Self::new(get_sorter_for_field(spec.field), spec.order)
    }

    /// Sort a slice in place. Works with both `&Card` and `Card` elements.
    ///
    /// Descending reverses the comparison, not the result, so ties keep
    /// their input order in both directions. Cards missing the sort key
    /// go last in both directions.
    pub fn sort_by<T: Borrow<Card>>(&self, cards: &mut [T]) {
        cards.sort_by(|a, b| {
            let (a, b) = (a.borrow(), b.borrow());
            match (self.sorter.has_key(a), self.sorter.has_key(b)) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => Ordering::Equal,
                (true, true) => {
                    let cmp = self.sorter.compare(a, b);
                    match self.order {
                        SortOrder::Ascending => cmp,
                        SortOrder::Descending => cmp.reverse(),
                    }
                }
            }
        });
    }
}

/// Get the appropriate sorter for a sort field.
pub fn get_sorter_for_field(field: CardField) -> SortBy {
    match field {
        CardField::Name => SortBy::Name,
        CardField::SizeKb => SortBy::SizeKb,
        CardField::RowCount => SortBy::RowCount,
        CardField::ColumnCount => SortBy::ColumnCount,
        CardField::Views => SortBy::Views,
        CardField::Downloads => SortBy::Downloads,
        CardField::CreatedAt => SortBy::CreatedAt,
        CardField::ModifiedAt => SortBy::ModifiedAt,
    }
}

/// Undated cards sort after dated ones.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(ad), Some(bd)) => ad.cmp(&bd),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cards: &[&Card]) -> Vec<String> {
        cards.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_parse_sort_order() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_serde_uses_short_names() {
        assert_eq!(serde_json::to_string(&SortOrder::Ascending).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortOrder::Descending).unwrap(), "\"desc\"");

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let json = serde_json::to_string(&order).unwrap();
            assert_eq!(serde_json::from_str::<SortOrder>(&json).unwrap(), order);
            assert_eq!(json.trim_matches('"'), order.to_string());
        }

        let legacy: SortOrder = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(legacy, SortOrder::Descending);
    }

    #[test]
    fn test_sort_spec_serializes_order_as_accepted_by_from_str() {
        let json = serde_json::to_value(SortSpec::desc(CardField::Views)).unwrap();
        assert_eq!(json["order"], "desc");
        let order: SortOrder = json["order"].as_str().unwrap().parse().unwrap();
        assert_eq!(order, SortOrder::Descending);
    }

    #[test]
    fn test_sort_order_from_form() {
        assert_eq!(SortOrder::from_form("desc"), SortOrder::Descending);
        assert_eq!(SortOrder::from_form("asc"), SortOrder::Ascending);
        assert_eq!(SortOrder::from_form(""), SortOrder::Ascending);
    }

    #[test]
    fn test_size_sorter() {
        let small = Card::new("small").with_size_kb(5);
        let large = Card::new("large").with_size_kb(50);

        assert_eq!(SortBy::SizeKb.compare(&small, &large), Ordering::Less);
        assert_eq!(SortBy::SizeKb.compare(&large, &small), Ordering::Greater);
    }

    #[test]
    fn test_name_sorter_ignores_case() {
        let a = Card::new("alpha");
        let b = Card::new("Beta");
        assert_eq!(SortBy::Name.compare(&a, &b), Ordering::Less);
        assert_eq!(SortBy::Name.compare(&Card::new("IRIS"), &Card::new("iris")), Ordering::Equal);
    }

    #[test]
    fn test_ordered_sorter_ascending_is_stable() {
        let alpha = Card::new("alpha").with_size_kb(10);
        let beta = Card::new("beta").with_size_kb(5);
        let gamma = Card::new("gamma").with_size_kb(10);

        let mut cards = vec![&alpha, &beta, &gamma];
        OrderedSorter::for_spec(SortSpec::asc(CardField::SizeKb)).sort_by(&mut cards);

        assert_eq!(names(&cards), ["beta", "alpha", "gamma"]);
    }

    #[test]
    fn test_ordered_sorter_descending_is_stable() {
        let alpha = Card::new("alpha").with_size_kb(10);
        let beta = Card::new("beta").with_size_kb(5);
        let gamma = Card::new("gamma").with_size_kb(10);

        let mut cards = vec![&alpha, &beta, &gamma];
        OrderedSorter::for_spec(SortSpec::desc(CardField::SizeKb)).sort_by(&mut cards);

        assert_eq!(names(&cards), ["alpha", "gamma", "beta"]);
    }

    #[test]
    fn test_sort_owned_cards() {
        let mut cards = vec![
            Card::new("a").with_downloads(3),
            Card::new("b").with_downloads(1),
        ];
        OrderedSorter::new(SortBy::Downloads, SortOrder::Ascending).sort_by(&mut cards);
        assert_eq!(cards[0].name, "b");
    }

    #[test]
    fn test_date_sorter_missing_dates_last() {
        let dated = Card::new("dated").with_modified_at(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let undated = Card::new("undated");

        assert_eq!(SortBy::ModifiedAt.compare(&dated, &undated), Ordering::Less);
        assert_eq!(SortBy::ModifiedAt.compare(&undated, &dated), Ordering::Greater);
        assert_eq!(SortBy::ModifiedAt.compare(&undated, &undated), Ordering::Equal);
    }

    #[test]
    fn test_undated_cards_last_in_both_directions() {
        let date = |y| NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        let undated = Card::new("undated");
        let old = Card::new("old").with_created_at(date(2020));
        let new = Card::new("new").with_created_at(date(2024));

        let mut cards = vec![&undated, &old, &new];
        OrderedSorter::for_spec(SortSpec::desc(CardField::CreatedAt)).sort_by(&mut cards);
        assert_eq!(names(&cards), ["new", "old", "undated"]);

        OrderedSorter::for_spec(SortSpec::asc(CardField::CreatedAt)).sort_by(&mut cards);
        assert_eq!(names(&cards), ["old", "new", "undated"]);
    }

    #[test]
    fn test_get_sorter_for_field() {
        let sorter = get_sorter_for_field(CardField::Views);
        let a = Card::new("a").with_views(10);
        let b = Card::new("b").with_views(2);
        assert_eq!(sorter.compare(&b, &a), Ordering::Less);
    }
}
