//! Presenters for the two board variants.
//!
//! - [`table`]: the custom table, rendered as aligned plain text.
//! - [`grid`]: a serializable model for a third-party grid widget.
//!
//! Both take a [`crate::BoardView`] and do no filtering or slicing of their
//! own.

pub mod grid;
pub mod table;

use crate::board::ViewModel;
use serde::Serialize;

/// Shown while the record fetch is pending.
pub const LOADING_TEXT: &str = "Loading...";
/// Shown when the record fetch failed.
pub const ERROR_TEXT: &str = "Error loading data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    /// One-based page number as shown to the user.
    pub number: usize,
    pub current: bool,
}

/// The pagination footer shared by both variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBar {
    pub page_size: usize,
    pub total: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub pages: Vec<PageButton>,
}

impl PaginationBar {
    pub fn from_view_model(model: &ViewModel) -> Self {
        let pager = model.pager;
        PaginationBar {
            page_size: model.page.page_size,
            total: model.page.total,
            prev_enabled: pager.has_prev(),
            next_enabled: pager.has_next(),
            pages: pager
                .page_numbers()
                .map(|number| PageButton {
                    number,
                    current: number == pager.page_index + 1,
                })
                .collect(),
        }
    }
}
