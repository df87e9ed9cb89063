//! Defines the core rendering trait and context for converting AST to SQL.

use crate::query::ast::common::TableRef;
use model::core::value::Value;

pub mod create_table;
pub mod drop_table;
pub mod expr;
pub mod insert;
pub mod rename_table;
pub mod select;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the bound parameters. Identifiers are
/// always quoted; only catalog-validated names may reach this layer, and
/// user-supplied values travel through `add_param`.
#[derive(Default)]
pub struct Renderer {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Binds a value and writes its numbered SQLite placeholder.
    pub fn add_param(&mut self, value: Value) {
        self.params.push(value);
        let placeholder = format!("?{}", self.params.len());
        self.sql.push_str(&placeholder);
    }

    /// Double-quotes an identifier, doubling any embedded quote.
    pub fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', "\"\""))
    }

    pub fn push_identifier(&mut self, ident: &str) {
        let quoted = self.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    pub fn render_table_ref(&mut self, table: &TableRef) {
        if let Some(schema) = &table.schema {
            self.push_identifier(schema);
            self.sql.push('.');
        }
        self.push_identifier(&table.name);
    }
}
