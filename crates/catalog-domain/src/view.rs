//! Filtered, sorted view over a fixed set of cards.
//!
//! The full card set is captured once and never mutated; every view is
//! recomputed from it, so narrowing and then widening the filters never
//! loses cards.

use crate::filter::{CardFilter, CompositeFilter, FilterCriteria};
use crate::sort::{OrderedSorter, SortOrder, SortSpec};
use crate::{Card, CardField, DatasetBrief, FilterForm};

#[derive(Debug, Clone, Default)]
pub struct CardFilterSort {
    all_cards: Vec<Card>,
    criteria: FilterCriteria,
    sort: Option<SortSpec>,
}

impl CardFilterSort {
    /// Capture the card set in display order.
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            all_cards: cards,
            criteria: FilterCriteria::default(),
            sort: None,
        }
    }

    pub fn from_briefs(briefs: impl IntoIterator<Item = DatasetBrief>) -> Self {
        Self::new(briefs.into_iter().map(Card::from).collect())
    }

    pub fn all_cards(&self) -> &[Card] {
        &self.all_cards
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub(crate) fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    /// Make `field` the only sort key. `None` clears sorting.
    pub fn set_sort(&mut self, field: Option<CardField>, order: SortOrder) {
        self.sort = field.map(|field| SortSpec::new(field, order));
    }

    pub fn set_sort_spec(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Replace criteria and sort with what the filter form holds.
    pub fn apply_form(&mut self, form: &FilterForm) {
        self.criteria = form.criteria();
        self.sort = form.sort_spec();
    }

    /// Indices into `all_cards` of the visible cards, in display order.
    pub fn compute_indices(&self) -> Vec<usize> {
        let filter = CompositeFilter::from_criteria(&self.criteria);

        let mut visible: Vec<IndexedCard<'_>> = self
            .all_cards
            .iter()
            .enumerate()
            .filter(|(_, card)| filter.matches(card))
            .map(|(idx, card)| IndexedCard { idx, card })
            .collect();

        if let Some(spec) = self.sort {
            OrderedSorter::for_spec(spec).sort_by(&mut visible);
        }

        tracing::debug!(
            total = self.all_cards.len(),
            visible = visible.len(),
            sort = ?self.sort,
            "Recomputed card view"
        );

        visible.into_iter().map(|entry| entry.idx).collect()
    }

    /// The visible cards in display order. Pure: repeated calls with the
    /// same state return the same sequence.
    pub fn compute_view(&self) -> Vec<&Card> {
        self.compute_indices()
            .into_iter()
            .map(|idx| &self.all_cards[idx])
            .collect()
    }
}

/// A visible card together with its position in the full card set.
struct IndexedCard<'a> {
    idx: usize,
    card: &'a Card,
}

impl std::borrow::Borrow<Card> for IndexedCard<'_> {
    fn borrow(&self) -> &Card {
        self.card
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FieldRange;

    fn sample_cards() -> Vec<Card> {
        vec![
            Card::new("alpha").with_size_kb(10),
            Card::new("beta").with_size_kb(5),
            Card::new("gamma").with_size_kb(10),
        ]
    }

    fn names(view: &[&Card]) -> Vec<String> {
        view.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_name_filter_preserves_order() {
        let mut view = CardFilterSort::new(sample_cards());
        view.set_criteria(FilterCriteria::new().with_name("a"));

        assert_eq!(names(&view.compute_view()), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_sort_ascending_is_stable() {
        let mut view = CardFilterSort::new(sample_cards());
        view.set_sort(Some(CardField::SizeKb), SortOrder::Ascending);

        assert_eq!(names(&view.compute_view()), ["beta", "alpha", "gamma"]);
        assert_eq!(view.compute_indices(), [1, 0, 2]);
    }

    #[test]
    fn test_inverted_range_passes_everything() {
        let mut view = CardFilterSort::new(sample_cards());
        view.set_criteria(
            FilterCriteria::new()
                .with_numeric_range(CardField::SizeKb, FieldRange::new(Some(8), Some(3))),
        );

        assert_eq!(view.compute_view().len(), 3);
    }

    #[test]
    fn test_range_filter_excludes() {
        let mut view = CardFilterSort::new(sample_cards());
        view.set_criteria(
            FilterCriteria::new()
                .with_numeric_range(CardField::SizeKb, FieldRange::new(Some(8), None)),
        );

        assert_eq!(names(&view.compute_view()), ["alpha", "gamma"]);
    }

    #[test]
    fn test_compute_view_is_idempotent() {
        let mut view = CardFilterSort::new(sample_cards());
        view.set_criteria(FilterCriteria::new().with_name("a"));
        view.set_sort(Some(CardField::Name), SortOrder::Descending);

        let first = names(&view.compute_view());
        let second = names(&view.compute_view());
        assert_eq!(first, second);
        assert_eq!(first, ["gamma", "beta", "alpha"]);
    }

    #[test]
    fn test_new_sort_replaces_previous() {
        let cards = vec![
            Card::new("a").with_size_kb(1).with_views(30),
            Card::new("b").with_size_kb(2).with_views(20),
            Card::new("c").with_size_kb(3).with_views(10),
        ];
        let mut view = CardFilterSort::new(cards);
        view.set_sort(Some(CardField::SizeKb), SortOrder::Descending);
        view.set_sort(Some(CardField::Views), SortOrder::Ascending);

        assert_eq!(view.sort(), Some(SortSpec::asc(CardField::Views)));
        assert_eq!(names(&view.compute_view()), ["c", "b", "a"]);
    }

    #[test]
    fn test_clearing_sort_restores_insertion_order() {
        let mut view = CardFilterSort::new(sample_cards());
        view.set_criteria(FilterCriteria::new().with_name("a"));
        view.set_sort(Some(CardField::SizeKb), SortOrder::Descending);
        assert_eq!(names(&view.compute_view()), ["alpha", "gamma", "beta"]);

        view.set_sort(None, SortOrder::Ascending);
        assert_eq!(view.sort(), None);
        assert_eq!(names(&view.compute_view()), ["alpha", "beta", "gamma"]);

        view.set_sort_spec(Some(SortSpec::asc(CardField::SizeKb)));
        view.clear_sort();
        assert_eq!(names(&view.compute_view()), ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_refiltering_never_loses_cards() {
        let mut view = CardFilterSort::new(sample_cards());
        view.set_criteria(FilterCriteria::new().with_name("zzz"));
        assert!(view.compute_view().is_empty());

        view.set_criteria(FilterCriteria::default());
        assert_eq!(view.compute_view().len(), 3);
        assert_eq!(view.all_cards().len(), 3);
    }

    #[test]
    fn test_apply_form() {
        let mut view = CardFilterSort::new(sample_cards());
        let form = FilterForm {
            size_from: "6".to_string(),
            sort_field: "size".to_string(),
            sort_order: "desc".to_string(),
            ..FilterForm::default()
        };
        view.apply_form(&form);

        assert_eq!(names(&view.compute_view()), ["alpha", "gamma"]);
        assert_eq!(view.sort(), Some(SortSpec::desc(CardField::SizeKb)));
    }

    #[test]
    fn test_from_briefs() {
        let briefs = vec![DatasetBrief {
            dataset_id: "1".to_string(),
            dataset_name: "iris".to_string(),
            dataset_description: String::new(),
            dataset_type: "CSV".to_string(),
            dataset_size: 4.0,
        }];
        let view = CardFilterSort::from_briefs(briefs);
        assert_eq!(view.all_cards()[0].size_kb, 4);
    }

    #[test]
    fn test_date_sort_puts_undated_cards_last() {
        let date = |y| chrono::NaiveDate::from_ymd_opt(y, 1, 1).unwrap();
        let mut view = CardFilterSort::new(vec![
            Card::new("undated"),
            Card::new("old").with_created_at(date(2020)),
            Card::new("also undated"),
            Card::new("new").with_created_at(date(2024)),
        ]);

        view.set_sort(Some(CardField::CreatedAt), SortOrder::Descending);
        assert_eq!(
            names(&view.compute_view()),
            ["new", "old", "undated", "also undated"]
        );

        view.set_sort(Some(CardField::CreatedAt), SortOrder::Ascending);
        assert_eq!(
            names(&view.compute_view()),
            ["old", "new", "undated", "also undated"]
        );
    }

    #[test]
    fn test_empty_card_set() {
        let mut view = CardFilterSort::new(vec![]);
        view.set_sort(Some(CardField::Downloads), SortOrder::Descending);
        assert!(view.compute_view().is_empty());
    }
}
