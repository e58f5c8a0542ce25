//! Filter engine.
//!
//! A [`FilterView`] selects rows from a parent [`RecordSet`] that satisfy a
//! [`FilterCriteria`]: every per-field equality selection plus an optional
//! case-insensitive quick-search term. It keeps a mapping from view indices
//! to parent indices, so matching rows stay in their original relative order
//! and the parent is never touched.

use crate::record::{Record, RecordSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// A field that offers an equality filter control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FilterField {
    pub label: String,
    pub field: String,
}

impl FilterField {
    pub fn new(label: impl Into<String>, field: impl Into<String>) -> Self {
        FilterField {
            label: label.into(),
            field: field.into(),
        }
    }
}

/// Active filter selections for a view.
///
/// An empty selection or search term is not stored: it means "no
/// constraint", never "match the empty string".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    equals: BTreeMap<String, String>,
    search: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    /// Require `field` to equal `value` exactly. An empty `value` clears the
    /// constraint on `field`.
    pub fn with_equals(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        let field = field.into();
        let value = value.into();
        if value.is_empty() {
            self.equals.remove(&field);
        } else {
            self.equals.insert(field, value);
        }
        self
    }

    /// Set the quick-search term. An empty term clears it.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    pub fn selected(&self, field: &str) -> Option<&str> {
        self.equals.get(field).map(String::as_str)
    }

    pub fn equals(&self) -> impl Iterator<Item = (&str, &str)> {
        self.equals.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.equals.is_empty() && self.search.is_none()
    }

    /// Whether `record` passes every constraint.
    pub fn matches(&self, record: &Record) -> bool {
        let needle = self.search.as_ref().map(|term| term.to_lowercase());
        self.matches_with(record, needle.as_deref())
    }

    fn matches_with(&self, record: &Record, needle: Option<&str>) -> bool {
        for (field, selected) in &self.equals {
            match record.get(field) {
                Some(value) if value.matches_exact(selected) => {}
                _ => return false,
            }
        }

        match needle {
            Some(needle) => record
                .values()
                .any(|value| value.display_string().to_lowercase().contains(needle)),
            None => true,
        }
    }
}

/// A read-only filtered projection of a record set.
pub struct FilterView {
    name: String,
    parent: RecordSet,
    criteria: FilterCriteria,
    view_to_parent: Vec<usize>,
}

impl FilterView {
    pub fn new(name: String, parent: RecordSet, criteria: FilterCriteria) -> Self {
        let mut view = FilterView {
            name,
            parent,
            criteria,
            view_to_parent: Vec::new(),
        };
        view.rebuild_index();
        view
    }

    fn rebuild_index(&mut self) {
        self.view_to_parent.clear();

        if self.criteria.is_unconstrained() {
            self.view_to_parent.extend(0..self.parent.len());
            return;
        }

        // Lowercase the search term once for the whole pass.
        let needle = self.criteria.search.as_ref().map(|term| term.to_lowercase());
        for (i, record) in self.parent.iter().enumerate() {
            if self.criteria.matches_with(record, needle.as_deref()) {
                self.view_to_parent.push(i);
            }
        }

        log::debug!(
            "filter view '{}': {} of {} rows match",
            self.name,
            self.view_to_parent.len(),
            self.parent.len()
        );
    }

    pub fn len(&self) -> usize {
        self.view_to_parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view_to_parent.is_empty()
    }

    /// Row `index` of the view, looked up in the parent set.
    pub fn get_row(&self, index: usize) -> Result<&Record, String> {
        let parent_index = self
            .view_to_parent
            .get(index)
            .copied()
            .ok_or_else(|| format!("Index {} out of range [0, {})", index, self.len()))?;
        self.parent.get_row(parent_index)
    }

    /// Materialize the matching rows as a new record set.
    pub fn to_record_set(&self) -> RecordSet {
        if self.view_to_parent.len() == self.parent.len() {
            return self.parent.clone();
        }
        self.parent.select(&self.view_to_parent)
    }
}

/// Rows of `records` satisfying `criteria`, in original order.
pub fn filter_records(records: &RecordSet, criteria: &FilterCriteria) -> RecordSet {
    FilterView::new("filter".to_string(), records.clone(), criteria.clone()).to_record_set()
}

/// Choices for one equality filter control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub label: String,
    pub field: String,
    pub values: Vec<String>,
    pub selected: Option<String>,
}

/// Option lists for each filter field. Always computed from the unfiltered
/// set, so picking one filter never prunes another's choices.
pub fn filter_options(
    records: &RecordSet,
    fields: &[FilterField],
    criteria: &FilterCriteria,
) -> Vec<FilterOptions> {
    fields
        .iter()
        .map(|f| FilterOptions {
            label: f.label.clone(),
            field: f.field.clone(),
            values: records.distinct_values(&f.field),
            selected: criteria.selected(&f.field).map(str::to_string),
        })
        .collect()
}
