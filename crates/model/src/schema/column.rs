use serde::{Deserialize, Serialize};

/// Column definition as read from the live table catalog.
///
/// Immutable for the duration of a migration run; the rebuilder renders it
/// back into DDL verbatim, so `declared_type` and `default_value` keep the
/// exact text SQLite reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    pub ordinal: usize,
}
