//! Column resolution.
//!
//! Maps the display labels named in a view's configuration to the record
//! fields they show. Labels are looked up in a [`ColumnCatalog`], which holds
//! the built-in displayable columns and the alias table.

use serde::Serialize;
use std::collections::BTreeMap;

/// A displayable column: the header label and the record field behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedColumn {
    pub label: String,
    pub field: String,
}

impl ResolvedColumn {
    pub fn new(label: impl Into<String>, field: impl Into<String>) -> Self {
        ResolvedColumn {
            label: label.into(),
            field: field.into(),
        }
    }
}

/// Columns requested by a view, plus optional per-view aliases that take
/// precedence over the catalog's.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnConfig {
    pub columns: Vec<String>,
    pub aliases: BTreeMap<String, String>,
}

impl ColumnConfig {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        ColumnConfig {
            columns: columns.into_iter().map(Into::into).collect(),
            aliases: BTreeMap::new(),
        }
    }

    pub fn with_alias(mut self, label: impl Into<String>, field: impl Into<String>) -> Self {
        self.aliases.insert(label.into(), field.into());
        self
    }
}

/// Known columns and the label → field alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCatalog {
    /// Default full column list, in display order.
    columns: Vec<ResolvedColumn>,
    aliases: Vec<(String, String)>,
}

const BUILTIN_COLUMNS: &[(&str, &str)] = &[
    ("From", "From"),
    ("To", "To"),
    ("Category", "Category"),
    ("Resolved", "Resolved"),
    ("Title", "title"),
    ("Last Name", "last name"),
    ("First Name", "first name"),
    ("Assigned to", "assigned to"),
    ("SIDIS Nr.", "sidis"),
    ("Cell", "cell"),
    ("Status", "Status"),
    ("Submited", "Submited"),
    ("Last interaction", "last interaction"),
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("Name", "first name"),
    ("Status", "Status"),
    ("Sent", "Submited"),
    ("Assigned to", "assigned to"),
    ("Title", "title"),
    ("Last Name", "last name"),
    ("First Name", "first name"),
    ("SIDIS Nr.", "sidis"),
    ("Cell", "cell"),
    ("Submited", "Submited"),
    ("Last interaction", "last interaction"),
    ("From", "From"),
    ("To", "To"),
    ("Category", "Category"),
    ("Resolved", "Resolved"),
    ("Type", "Type"),
];

impl Default for ColumnCatalog {
    fn default() -> Self {
        ColumnCatalog::builtin()
    }
}

impl ColumnCatalog {
    /// The Approvals Board's columns and aliases.
    pub fn builtin() -> Self {
        ColumnCatalog::new(
            BUILTIN_COLUMNS
                .iter()
                .map(|(label, field)| ResolvedColumn::new(*label, *field))
                .collect(),
            BUILTIN_ALIASES
                .iter()
                .map(|(label, field)| (label.to_string(), field.to_string()))
                .collect(),
        )
    }

    pub fn new(columns: Vec<ResolvedColumn>, aliases: Vec<(String, String)>) -> Self {
        ColumnCatalog { columns, aliases }
    }

    pub fn columns(&self) -> &[ResolvedColumn] {
        &self.columns
    }

    /// Field for a label, looked up case-insensitively. Aliases win over
    /// catalog columns. `None` means the label is unknown.
    pub fn field_for(&self, label: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(label))
            .map(|(_, field)| field.as_str())
            .or_else(|| {
                self.columns
                    .iter()
                    .find(|col| col.label.eq_ignore_ascii_case(label))
                    .map(|col| col.field.as_str())
            })
    }

    pub fn is_known(&self, label: &str) -> bool {
        self.field_for(label).is_some()
    }

    /// Resolve a single label, consulting `overrides` first.
    pub fn resolve_label(
        &self,
        label: &str,
        overrides: &BTreeMap<String, String>,
    ) -> Option<ResolvedColumn> {
        let field = overrides
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(label))
            .map(|(_, field)| field.as_str())
            .or_else(|| self.field_for(label))?;
        Some(ResolvedColumn::new(label, field))
    }
}

/// Resolve the active columns for a view.
///
/// With no configuration the catalog's full column list is returned. Labels
/// are kept in configuration order; unknown labels are dropped and a label
/// repeated later in the list is ignored. Pure: identical inputs give equal
/// outputs.
pub fn resolve_columns(
    config: Option<&ColumnConfig>,
    catalog: &ColumnCatalog,
) -> Vec<ResolvedColumn> {
    let Some(config) = config else {
        return catalog.columns().to_vec();
    };

    let mut resolved: Vec<ResolvedColumn> = Vec::with_capacity(config.columns.len());
    for label in &config.columns {
        if resolved.iter().any(|col| col.label.eq_ignore_ascii_case(label)) {
            continue;
        }
        match catalog.resolve_label(label, &config.aliases) {
            Some(column) => resolved.push(column),
            None => log::debug!("dropping unknown column label '{}'", label),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_dropped() {
        let catalog = ColumnCatalog::builtin();
        let config = ColumnConfig::new(["Status", "Unknown"]);
        let columns = resolve_columns(Some(&config), &catalog);
        assert_eq!(columns, vec![ResolvedColumn::new("Status", "Status")]);
    }

    #[test]
    fn test_absent_config_uses_full_list() {
        let catalog = ColumnCatalog::builtin();
        let columns = resolve_columns(None, &catalog);
        assert_eq!(columns.len(), BUILTIN_COLUMNS.len());
        assert_eq!(columns[0].label, "From");
        assert_eq!(columns.last().unwrap().field, "last interaction");
    }

    #[test]
    fn test_config_order_preserved() {
        let catalog = ColumnCatalog::builtin();
        let config = ColumnConfig::new(["Status", "Title", "Sent"]);
        let labels: Vec<_> = resolve_columns(Some(&config), &catalog)
            .into_iter()
            .map(|c| (c.label, c.field))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Status".to_string(), "Status".to_string()),
                ("Title".to_string(), "title".to_string()),
                ("Sent".to_string(), "Submited".to_string()),
            ]
        );
    }

    #[test]
    fn test_label_case_is_unified() {
        let catalog = ColumnCatalog::builtin();
        let config = ColumnConfig::new(["last interaction", "Last interaction"]);
        let columns = resolve_columns(Some(&config), &catalog);
        assert_eq!(columns, vec![ResolvedColumn::new("last interaction", "last interaction")]);
    }

    #[test]
    fn test_alias_only_label_is_known() {
        let catalog = ColumnCatalog::builtin();
        let config = ColumnConfig::new(["Name", "Type"]);
        let columns = resolve_columns(Some(&config), &catalog);
        assert_eq!(
            columns,
            vec![
                ResolvedColumn::new("Name", "first name"),
                ResolvedColumn::new("Type", "Type"),
            ]
        );
    }

    #[test]
    fn test_config_alias_overrides_catalog() {
        let catalog = ColumnCatalog::builtin();
        let config = ColumnConfig::new(["Status", "Owner"])
            .with_alias("Status", "state")
            .with_alias("Owner", "assigned to");
        let columns = resolve_columns(Some(&config), &catalog);
        assert_eq!(
            columns,
            vec![
                ResolvedColumn::new("Status", "state"),
                ResolvedColumn::new("Owner", "assigned to"),
            ]
        );
    }

    #[test]
    fn test_resolution_is_stable() {
        let catalog = ColumnCatalog::builtin();
        let config = ColumnConfig::new(["Title", "Cell", "Bogus", "Status"]);
        assert_eq!(
            resolve_columns(Some(&config), &catalog),
            resolve_columns(Some(&config), &catalog)
        );
    }

    #[test]
    fn test_empty_column_list() {
        let catalog = ColumnCatalog::builtin();
        let config = ColumnConfig::default();
        assert!(resolve_columns(Some(&config), &catalog).is_empty());
    }
}
