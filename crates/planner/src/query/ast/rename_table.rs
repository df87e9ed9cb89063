use crate::query::ast::common::TableRef;

/// `ALTER TABLE <table> RENAME TO <new_name>`.
#[derive(Debug, Clone)]
pub struct RenameTable {
    pub table: TableRef,
    pub new_name: String,
}
