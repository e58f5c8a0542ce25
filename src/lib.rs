//! Approvals Board - client-side record pipeline
//!
//! Fetches a flat list of records once, then shapes it for display entirely
//! in memory: column resolution, equality filters plus quick search, and
//! pagination. Two presenters (a plain table and a grid model) consume the
//! same derived view model.

pub mod error;
pub mod value;
pub mod record;
pub mod columns;
pub mod config;
pub mod filter;
pub mod pagination;
pub mod view_state;
pub mod source;
pub mod board;
pub mod render;
pub mod messages;

pub use error::{ConfigError, SourceError};
pub use value::FieldValue;
pub use record::{Record, RecordSet};
pub use columns::{resolve_columns, ColumnCatalog, ColumnConfig, ResolvedColumn};
pub use config::{BoardConfig, PagingConfig, ViewConfig, ViewProfile};
pub use filter::{filter_options, filter_records, FilterCriteria, FilterField, FilterOptions, FilterView};
pub use pagination::{paginate, Page, Pager, DEFAULT_PAGE_SIZE};
pub use view_state::ViewState;
pub use source::{mount, FileSource, LoadState, RecordSource, StaticSource};
pub use board::{Board, BoardView, ViewModel};

#[cfg(feature = "client")]
pub use source::HttpSource;

// Mock API server - only when server feature is enabled
#[cfg(feature = "server")]
pub mod server;
