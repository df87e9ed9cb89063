use crate::query::ast::expr::{Expr, Ident};
use model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod renderer;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn qualified(qualifier: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(qualifier.to_string()),
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}

pub fn alias(expr: Expr, name: &str) -> Expr {
    Expr::Alias {
        expr: Box::new(expr),
        alias: name.to_string(),
    }
}

pub fn like(expr: Expr, pattern: Expr) -> Expr {
    Expr::Like {
        expr: Box::new(expr),
        pattern: Box::new(pattern),
    }
}

pub fn eq(left: Expr, right: Expr) -> Expr {
    Expr::Eq {
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn between(expr: Expr, low: Expr, high: Expr) -> Expr {
    Expr::Between {
        expr: Box::new(expr),
        low: Box::new(low),
        high: Box::new(high),
    }
}
