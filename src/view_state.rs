//! Session-local view state.
//!
//! A [`ViewState`] bundles the filter criteria with the current page index.
//! It is never edited in place: each transition returns a new value, and any
//! change to the criteria sends the view back to the first page.

use crate::filter::FilterCriteria;
use crate::pagination::Pager;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    criteria: FilterCriteria,
    page_index: usize,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState::default()
    }

    /// Fresh state opened on `page_index`, as configured by a view's paging
    /// settings. The index is clamped when the view is derived.
    pub fn starting_at(page_index: usize) -> Self {
        ViewState {
            criteria: FilterCriteria::default(),
            page_index,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Replace the criteria. Returns `self` unchanged when nothing differs,
    /// otherwise the new criteria on page 0.
    pub fn with_criteria(self, criteria: FilterCriteria) -> Self {
        if criteria == self.criteria {
            return self;
        }
        ViewState {
            criteria,
            page_index: 0,
        }
    }

    /// Select `value` for `field`; an empty value clears that filter.
    pub fn with_filter(self, field: &str, value: &str) -> Self {
        let criteria = self.criteria.clone().with_equals(field, value);
        self.with_criteria(criteria)
    }

    pub fn with_search(self, term: &str) -> Self {
        let criteria = self.criteria.clone().with_search(term);
        self.with_criteria(criteria)
    }

    pub fn cleared(self) -> Self {
        self.with_criteria(FilterCriteria::default())
    }

    /// Jump to `page_index`, clamped to the current page count.
    pub fn with_page(self, page_index: usize, page_count: usize) -> Self {
        let pager = Pager::new(self.page_index, page_count).set(page_index);
        ViewState {
            page_index: pager.page_index,
            ..self
        }
    }

    pub fn next_page(self, page_count: usize) -> Self {
        let pager = Pager::new(self.page_index, page_count).next();
        ViewState {
            page_index: pager.page_index,
            ..self
        }
    }

    pub fn prev_page(self, page_count: usize) -> Self {
        let pager = Pager::new(self.page_index, page_count).prev();
        ViewState {
            page_index: pager.page_index,
            ..self
        }
    }
}
