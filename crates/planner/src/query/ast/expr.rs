use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub qualifier: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A quoted (optionally qualified) identifier.
    Identifier(Ident),

    /// A value bound as a query parameter.
    Value(Value),

    /// Raw SQL text spliced in verbatim (catalog-sourced only).
    Literal(String),

    /// `expr AS "alias"`.
    Alias { expr: Box<Expr>, alias: String },

    /// `expr LIKE pattern`.
    Like { expr: Box<Expr>, pattern: Box<Expr> },

    /// `left = right`.
    Eq { left: Box<Expr>, right: Box<Expr> },

    /// `expr BETWEEN low AND high` (inclusive on both ends).
    Between {
        expr: Box<Expr>,
        low: Box<Expr>,
        high: Box<Expr>,
    },

    /// Disjunction of the inner expressions.
    Or(Vec<Expr>),
}
