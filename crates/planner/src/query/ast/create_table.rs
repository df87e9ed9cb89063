//! Defines the AST for a CREATE TABLE statement.

use crate::query::ast::common::TableRef;
use model::schema::column::ColumnMetadata;

/// Represents a complete CREATE TABLE statement.
#[derive(Debug, Clone, Default)]
pub struct CreateTable {
    pub table: TableRef,
    pub columns: Vec<ColumnDef>,
    pub if_not_exists: bool,
}

/// One column definition, carrying the catalog text verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub declared_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
}

impl From<&ColumnMetadata> for ColumnDef {
    fn from(col: &ColumnMetadata) -> Self {
        Self {
            name: col.name.clone(),
            declared_type: col.declared_type.clone(),
            not_null: col.not_null,
            default_value: col.default_value.clone(),
            is_primary_key: col.is_primary_key,
        }
    }
}
