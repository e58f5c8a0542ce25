//! View configuration profiles.
//!
//! Profiles are read from JSON once and validated into [`ViewConfig`]
//! values: labels are resolved against the column catalog, unknown labels
//! are dropped, and missing settings take their defaults. Nothing
//! downstream inspects raw labels again.
//!
//! ```
//! use approvals_board::{BoardConfig, ColumnCatalog};
//!
//! let config = BoardConfig::from_json_str(r#"{
//!     "profiles": {
//!         "requests": {
//!             "columns": ["Title", "Status", "Unknown"],
//!             "filters": ["Status"],
//!             "paging": {"pageSize": 10}
//!         }
//!     }
//! }"#).unwrap();
//!
//! let view = config.view("requests", &ColumnCatalog::builtin()).unwrap();
//! assert_eq!(view.columns.len(), 2);
//! assert_eq!(view.page_size, 10);
//! assert!(view.header_visible);
//! ```

use crate::columns::{resolve_columns, ColumnCatalog, ColumnConfig, ResolvedColumn};
use crate::error::ConfigError;
use crate::filter::FilterField;
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_HEADER_TEXT: &str = "Approvals Board";

/// Read a field leniently: `null` or a value of the wrong shape becomes the
/// default instead of failing the whole document.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = JsonValue::deserialize(deserializer)?;
    Ok(serde_json::from_value(value.clone()).unwrap_or_else(|e| {
        log::warn!("ignoring config value {}: {}", value, e);
        T::default()
    }))
}

/// Any JSON number, truncated toward zero. `20.0` reads as `20`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;
    let number = value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.is_finite())
            .map(|n| n.trunc() as i64)
    });
    if number.is_none() && !value.is_null() {
        log::warn!("ignoring non-numeric paging value {}", value);
    }
    Ok(number)
}

/// Profiles keyed by name. A profile that is not an object is dropped on
/// its own; the rest are kept.
fn lenient_profiles<'de, D>(deserializer: D) -> Result<BTreeMap<String, ViewProfile>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match JsonValue::deserialize(deserializer)? {
        JsonValue::Object(entries) => entries,
        JsonValue::Null => return Ok(BTreeMap::new()),
        _ => {
            log::warn!("\"profiles\" is not an object; no profiles loaded");
            return Ok(BTreeMap::new());
        }
    };

    let mut profiles = BTreeMap::new();
    for (name, raw) in entries {
        match serde_json::from_value::<ViewProfile>(raw) {
            Ok(profile) => {
                profiles.insert(name, profile);
            }
            Err(e) => log::warn!("dropping profile '{}': {}", name, e),
        }
    }
    Ok(profiles)
}

/// Paging settings of a profile. Negative or zero values fall back to the
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingConfig {
    #[serde(default, deserialize_with = "lenient_number")]
    pub page_index: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub page_size: Option<i64>,
}

/// A raw configuration profile as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewProfile {
    /// Display labels, in order. Absent means the full catalog.
    #[serde(default, deserialize_with = "or_default")]
    pub columns: Option<Vec<String>>,
    /// Labels that get an equality filter control.
    #[serde(default, deserialize_with = "or_default")]
    pub filters: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub header_text: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub header_visibility: Option<bool>,
    #[serde(default, deserialize_with = "or_default")]
    pub paging: Option<PagingConfig>,
    /// Per-profile label → field overrides.
    #[serde(default, deserialize_with = "or_default")]
    pub aliases: BTreeMap<String, String>,
}

/// A validated view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewConfig {
    pub name: String,
    pub header_text: String,
    pub header_visible: bool,
    pub columns: Vec<ResolvedColumn>,
    pub filters: Vec<FilterField>,
    pub page_size: usize,
    pub initial_page: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewProfile::default().validate("default", &ColumnCatalog::builtin())
    }
}

impl ViewProfile {
    pub fn validate(&self, name: &str, catalog: &ColumnCatalog) -> ViewConfig {
        let column_config = self.columns.as_ref().map(|columns| ColumnConfig {
            columns: columns.clone(),
            aliases: self.aliases.clone(),
        });
        let columns = resolve_columns(column_config.as_ref(), catalog);

        let mut filters: Vec<FilterField> = Vec::new();
        for label in &self.filters {
            match catalog.resolve_label(label, &self.aliases) {
                Some(column) => {
                    // "Sent" and "Submited" both drive the same control.
                    if !filters.iter().any(|f| f.field == column.field) {
                        filters.push(FilterField::new(column.label, column.field));
                    }
                }
                None => log::warn!("profile '{}': ignoring unknown filter '{}'", name, label),
            }
        }

        if let Some(requested) = &self.columns {
            if requested.len() > columns.len() {
                log::warn!(
                    "profile '{}': dropped {} unknown or repeated column label(s)",
                    name,
                    requested.len() - columns.len()
                );
            }
        }

        let paging = self.paging.clone().unwrap_or_default();
        let page_size = match paging.page_size {
            Some(size) if size > 0 => size as usize,
            _ => DEFAULT_PAGE_SIZE,
        };
        let initial_page = match paging.page_index {
            Some(index) if index > 0 => index as usize,
            _ => 0,
        };

        ViewConfig {
            name: name.to_string(),
            header_text: self
                .header_text
                .clone()
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| DEFAULT_HEADER_TEXT.to_string()),
            header_visible: self.header_visibility.unwrap_or(true),
            columns,
            filters,
            page_size,
            initial_page,
        }
    }
}

/// Named configuration profiles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default, deserialize_with = "lenient_profiles")]
    pub profiles: BTreeMap<String, ViewProfile>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for BoardConfig {
    /// Built-in "requests" and "messages" boards.
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "requests".to_string(),
            ViewProfile {
                columns: Some(strings(&[
                    "Title",
                    "Last Name",
                    "First Name",
                    "Assigned to",
                    "SIDIS Nr.",
                    "Cell",
                    "Status",
                    "Submited",
                    "Last interaction",
                ])),
                filters: strings(&["Assigned to", "Status", "Submited"]),
                header_text: Some(DEFAULT_HEADER_TEXT.to_string()),
                header_visibility: Some(true),
                paging: Some(PagingConfig {
                    page_index: Some(0),
                    page_size: Some(20),
                }),
                aliases: BTreeMap::new(),
            },
        );
        profiles.insert(
            "messages".to_string(),
            ViewProfile {
                columns: Some(strings(&["From", "To", "Category", "Type", "Sent", "Resolved"])),
                filters: strings(&["Category", "Sent"]),
                header_text: Some("Messages".to_string()),
                header_visibility: Some(true),
                paging: Some(PagingConfig {
                    page_index: Some(0),
                    page_size: Some(10),
                }),
                aliases: BTreeMap::new(),
            },
        );
        BoardConfig { profiles }
    }
}

impl BoardConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Load `path` if given, falling back to the built-in profiles when it
    /// is absent or unusable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(config) => {
                    log::info!("loaded {} profile(s) from {}", config.profiles.len(), path.display());
                    config
                }
                Err(e) => {
                    log::warn!("{}: {}; using built-in profiles", path.display(), e);
                    BoardConfig::default()
                }
            },
            None => BoardConfig::default(),
        }
    }

    /// Validated view for profile `name`.
    pub fn view(&self, name: &str, catalog: &ColumnCatalog) -> Option<ViewConfig> {
        self.profiles
            .get(name)
            .map(|profile| profile.validate(name, catalog))
    }

    /// All profiles, validated, in name order.
    pub fn views(&self, catalog: &ColumnCatalog) -> Vec<ViewConfig> {
        self.profiles
            .iter()
            .map(|(name, profile)| profile.validate(name, catalog))
            .collect()
    }
}
