//! The shared record pipeline.
//!
//! A [`Board`] owns one view's validated configuration and its loaded record
//! set. Given a [`ViewState`] it derives a [`ViewModel`]: resolved columns,
//! filter option lists, and the current page of filtered rows. Both
//! presenters in [`crate::render`] consume that model and nothing else, so
//! they cannot disagree on filtering or paging.
//!
//! # Examples
//!
//! ```
//! use approvals_board::{Board, LoadState, RecordSet, ViewConfig};
//! use serde_json::json;
//!
//! let records = RecordSet::from_json_value(&json!([
//!     {"title": "Laptop", "Status": "Approved"},
//!     {"title": "Badge", "Status": "Pending"},
//! ]));
//! let board = Board::new(ViewConfig::default(), LoadState::Ready(records));
//!
//! let state = board.initial_state().with_filter("Status", "Pending");
//! let model = board.view_model(&state);
//! assert_eq!(model.page.total, 1);
//! assert_eq!(model.page.records.get(0).unwrap().text("title"), Some("Badge"));
//! ```

use crate::columns::ResolvedColumn;
use crate::config::ViewConfig;
use crate::filter::{filter_options, filter_records, FilterOptions};
use crate::pagination::{paginate, Page, Pager};
use crate::record::RecordSet;
use crate::source::{mount, LoadState, RecordSource};
use crate::view_state::ViewState;

/// Everything a presenter needs to draw one view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub name: String,
    pub header_text: String,
    pub header_visible: bool,
    pub columns: Vec<ResolvedColumn>,
    pub filters: Vec<FilterOptions>,
    pub search: Option<String>,
    pub page: Page,
    pub pager: Pager,
}

/// What a presenter should show for a view.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    Loading,
    Failed { message: String },
    Ready(ViewModel),
}

pub struct Board {
    config: ViewConfig,
    load: LoadState,
}

impl Board {
    pub fn new(config: ViewConfig, load: LoadState) -> Self {
        Board { config, load }
    }

    /// Create a board and run its one fetch.
    pub fn mount<S: RecordSource + ?Sized>(config: ViewConfig, source: &S) -> Self {
        let load = mount(source);
        Board::new(config, load)
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Records the pipeline runs on; empty while loading or after failure.
    pub fn records(&self) -> RecordSet {
        self.load.records()
    }

    /// Swap in a freshly fetched record set.
    pub fn replace_records(&mut self, records: RecordSet) {
        self.load = LoadState::Ready(records);
    }

    /// State a newly mounted view starts from.
    pub fn initial_state(&self) -> ViewState {
        ViewState::starting_at(self.config.initial_page)
    }

    /// Derive the model for `state`. Never fails: with no data it yields an
    /// empty page.
    pub fn view_model(&self, state: &ViewState) -> ViewModel {
        let records = self.records();
        let criteria = state.criteria();

        let filtered = filter_records(&records, criteria);
        let page = paginate(&filtered, self.config.page_size, state.page_index());
        let pager = Pager::new(page.page_index, page.page_count);

        log::debug!(
            "view '{}': {} of {} rows, page {}/{}",
            self.config.name,
            filtered.len(),
            records.len(),
            page.page_index + 1,
            page.page_count
        );

        ViewModel {
            name: self.config.name.clone(),
            header_text: self.config.header_text.clone(),
            header_visible: self.config.header_visible,
            columns: self.config.columns.clone(),
            filters: filter_options(&records, &self.config.filters, criteria),
            search: criteria.search().map(str::to_string),
            page,
            pager,
        }
    }

    pub fn derive(&self, state: &ViewState) -> BoardView {
        match &self.load {
            LoadState::Loading => BoardView::Loading,
            LoadState::Failed(message) => BoardView::Failed {
                message: message.clone(),
            },
            LoadState::Ready(_) => BoardView::Ready(self.view_model(state)),
        }
    }
}
