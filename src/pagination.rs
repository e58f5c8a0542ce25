//! Pagination slicer.
//!
//! Pages are contiguous windows `[index * size, (index + 1) * size)` over a
//! filtered record set. Requested indices are clamped into range rather than
//! rejected, and an empty set has zero pages.

use crate::record::RecordSet;
use serde::Serialize;

/// Page size used when a view does not configure one, or configures zero.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Number of pages needed for `total` rows. Zero when `total` is zero.
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = effective_page_size(page_size);
    total.div_ceil(page_size)
}

/// Clamp `page_index` into `[0, page_count - 1]`, or 0 when there are no
/// pages.
pub fn clamp_page_index(page_index: usize, page_count: usize) -> usize {
    page_index.min(page_count.saturating_sub(1))
}

fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}

/// One page of a filtered record set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub records: RecordSet,
    /// Index actually served, after clamping.
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Length of the filtered set this page was cut from.
    pub total: usize,
}

impl Page {
    /// Position of the first row on this page within the filtered set.
    pub fn start(&self) -> usize {
        self.page_index * self.page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.page_count == 0 || self.page_index + 1 >= self.page_count
    }
}

/// Cut the `page_index`-th page of `records`.
///
/// A zero `page_size` falls back to [`DEFAULT_PAGE_SIZE`]. An out-of-range
/// index serves the nearest valid page.
pub fn paginate(records: &RecordSet, page_size: usize, page_index: usize) -> Page {
    let page_size = effective_page_size(page_size);
    let total = records.len();
    let page_count = page_count(total, page_size);
    let page_index = clamp_page_index(page_index, page_count);

    let start = page_index * page_size;
    let end = (start + page_size).min(total);

    Page {
        records: records.slice(start..end),
        page_index,
        page_count,
        page_size,
        total,
    }
}

/// Page navigation over a fixed page count.
///
/// Transitions clamp at both ends; `prev` on the first page and `next` on the
/// last page leave the index unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pager {
    pub page_index: usize,
    pub page_count: usize,
}

impl Pager {
    pub fn new(page_index: usize, page_count: usize) -> Self {
        Pager {
            page_index: clamp_page_index(page_index, page_count),
            page_count,
        }
    }

    pub fn set(self, page_index: usize) -> Self {
        Pager::new(page_index, self.page_count)
    }

    pub fn prev(self) -> Self {
        self.set(self.page_index.saturating_sub(1))
    }

    pub fn next(self) -> Self {
        self.set(self.page_index.saturating_add(1))
    }

    pub fn reset(self) -> Self {
        self.set(0)
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// One-based page numbers for the jump-to-page buttons.
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.page_count
    }
}
