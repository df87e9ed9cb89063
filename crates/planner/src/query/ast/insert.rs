//! Defines the AST for an INSERT ... SELECT statement.

use crate::query::ast::{common::TableRef, select::Select};

#[derive(Debug, Clone)]
pub struct Insert {
    pub table: TableRef,
    pub columns: Vec<String>,
    pub select: Select,
}
