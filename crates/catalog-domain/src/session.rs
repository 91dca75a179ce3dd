//! Eager re-rendering of the card view.
//!
//! A `FilterSession` owns the view state and a renderer. Every change to the
//! criteria or the sort key recomputes the view and hands the new order to
//! the renderer before returning, which is what "on input change" means for
//! the catalog page.

use crate::form::{apply_range_text, parse_sort};
use crate::sort::SortOrder;
use crate::{CardField, CardFilterSort, FilterCriteria, FilterForm};

/// Output boundary: puts the visible cards on screen.
///
/// `order` holds indices into the full card set, in display order. The
/// renderer already owns whatever it draws for each card.
#[cfg_attr(test, mockall::automock)]
pub trait ViewRenderer {
    fn render(&mut self, order: &[usize]);
}

/// One change coming from the filter controls.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    NameChanged(String),
    RangeChanged {
        field: CardField,
        from: String,
        to: String,
    },
    /// Raw sort selection. An empty or unknown field clears sorting.
    SortChanged {
        field: String,
        order: String,
    },
    SortCleared,
    FormChanged(FilterForm),
}

pub struct FilterSession<R: ViewRenderer> {
    view: CardFilterSort,
    renderer: R,
}

impl<R: ViewRenderer> FilterSession<R> {
    /// Takes ownership of the view and renders it once.
    pub fn new(view: CardFilterSort, renderer: R) -> Self {
        let mut session = Self { view, renderer };
        session.refresh();
        session
    }

    pub fn view(&self) -> &CardFilterSort {
        &self.view
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (CardFilterSort, R) {
        (self.view, self.renderer)
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.view.set_criteria(criteria);
        self.refresh();
    }

    pub fn set_sort(&mut self, field: Option<CardField>, order: SortOrder) {
        self.view.set_sort(field, order);
        self.refresh();
    }

    pub fn clear_sort(&mut self) {
        self.view.clear_sort();
        self.refresh();
    }

    pub fn apply_form(&mut self, form: &FilterForm) {
        self.view.apply_form(form);
        self.refresh();
    }

    pub fn handle_event(&mut self, event: FilterEvent) {
        tracing::debug!(?event, "Filter event");
        match event {
            FilterEvent::NameChanged(name) => {
                self.view.criteria_mut().set_name(name);
            }
            FilterEvent::RangeChanged { field, from, to } => {
                apply_range_text(self.view.criteria_mut(), field, &from, &to);
            }
            FilterEvent::SortChanged { field, order } => {
                self.view.set_sort_spec(parse_sort(&field, &order));
            }
            FilterEvent::SortCleared => self.view.clear_sort(),
            FilterEvent::FormChanged(form) => self.view.apply_form(&form),
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        let order = self.view.compute_indices();
        self.renderer.render(&order);
    }
}
