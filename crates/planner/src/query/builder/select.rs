use crate::query::ast::{
    common::{JoinKind, OrderDir, TableRef},
    expr::Expr,
    select::{FromClause, JoinClause, OrderByExpr, Select},
};
use model::core::value::Value;

#[derive(Debug, Clone)]
pub struct SelectBuilder {
    ast: Select,
}

impl SelectBuilder {
    pub fn from(table: TableRef, alias: Option<&str>) -> Self {
        Self {
            ast: Select {
                from: Some(FromClause {
                    table,
                    alias: alias.map(str::to_string),
                }),
                ..Default::default()
            },
        }
    }

    pub fn column(mut self, expr: Expr) -> Self {
        self.ast.columns.push(expr);
        self
    }

    pub fn columns(mut self, exprs: impl IntoIterator<Item = Expr>) -> Self {
        self.ast.columns.extend(exprs);
        self
    }

    pub fn left_join(mut self, table: TableRef, alias: &str, on: Expr) -> Self {
        self.ast.joins.push(JoinClause {
            kind: JoinKind::Left,
            table,
            alias: Some(alias.to_string()),
            on,
        });
        self
    }

    pub fn filter(mut self, expr: Expr) -> Self {
        self.ast.where_clause = Some(expr);
        self
    }

    pub fn order_by(mut self, expr: Expr, direction: Option<OrderDir>) -> Self {
        self.ast.order_by.push(OrderByExpr { expr, direction });
        self
    }

    pub fn limit(mut self, n: i64) -> Self {
        self.ast.limit = Some(Expr::Value(Value::Int(n)));
        self
    }

    pub fn build(self) -> Select {
        self.ast
    }
}

#[cfg(test)]
mod tests {
    use super::SelectBuilder;
    use crate::query::{ast::common::TableRef, ident, qualified};

    #[test]
    fn test_select_builder() {
        let ast = SelectBuilder::from(TableRef::new("organizations_old"), Some("b"))
            .column(ident("id"))
            .column(qualified("b", "approvedName"))
            .limit(10)
            .build();

        assert_eq!(ast.columns.len(), 2);
        assert!(ast.joins.is_empty());
        assert!(ast.limit.is_some());
        assert_eq!(ast.from.unwrap().alias.as_deref(), Some("b"));
    }
}
