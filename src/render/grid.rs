//! Grid variant: a JSON model for a third-party data grid.
//!
//! The grid receives column definitions and the already-paged rows; its own
//! filtering and pagination stay switched off so the shared pipeline is the
//! only source of truth.

use super::{PaginationBar, ERROR_TEXT};
use crate::board::{BoardView, ViewModel};
use crate::filter::FilterOptions;
use crate::record::Record;
use serde::Serialize;

/// Column filter type the grid shows in its column menu.
pub const TEXT_COLUMN_FILTER: &str = "agTextColumnFilter";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub header_name: String,
    pub field: String,
    pub filter: &'static str,
    pub flex: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridModel {
    pub header_text: String,
    pub header_visible: bool,
    pub column_defs: Vec<ColumnDef>,
    pub row_data: Vec<Record>,
    pub filters: Vec<FilterOptions>,
    pub quick_filter_text: String,
    pub pagination: PaginationBar,
}

impl GridModel {
    pub fn from_view_model(model: &ViewModel) -> Self {
        GridModel {
            header_text: model.header_text.clone(),
            header_visible: model.header_visible,
            column_defs: model
                .columns
                .iter()
                .map(|col| ColumnDef {
                    header_name: col.label.clone(),
                    field: col.field.clone(),
                    filter: TEXT_COLUMN_FILTER,
                    flex: 1,
                })
                .collect(),
            row_data: model.page.records.iter().cloned().collect(),
            filters: model.filters.clone(),
            quick_filter_text: model.search.clone().unwrap_or_default(),
            pagination: PaginationBar::from_view_model(model),
        }
    }
}

/// Payload handed to the grid, tagged by load status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GridPayload {
    Loading,
    Error { message: String },
    Ready(GridModel),
}

pub fn render(view: &BoardView) -> GridPayload {
    match view {
        BoardView::Loading => GridPayload::Loading,
        BoardView::Failed { .. } => GridPayload::Error {
            message: ERROR_TEXT.to_string(),
        },
        BoardView::Ready(model) => GridPayload::Ready(GridModel::from_view_model(model)),
    }
}

/// Serialized payload, as handed to the grid's host page.
pub fn render_json(view: &BoardView) -> serde_json::Value {
    serde_json::to_value(render(view)).unwrap_or_else(|e| {
        log::error!("failed to serialize grid payload: {}", e);
        serde_json::json!({ "status": "error", "message": ERROR_TEXT })
    })
}
