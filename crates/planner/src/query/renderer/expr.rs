use crate::query::{
    ast::expr::Expr,
    renderer::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => {
                if let Some(qualifier) = &ident.qualifier {
                    r.push_identifier(qualifier);
                    r.sql.push('.');
                }
                r.push_identifier(&ident.name);
            }
            Expr::Value(value) => r.add_param(value.clone()),
            Expr::Literal(text) => r.sql.push_str(text),
            Expr::Alias { expr, alias } => {
                expr.render(r);
                r.sql.push_str(" AS ");
                r.push_identifier(alias);
            }
            Expr::Like { expr, pattern } => {
                expr.render(r);
                r.sql.push_str(" LIKE ");
                pattern.render(r);
            }
            Expr::Eq { left, right } => {
                left.render(r);
                r.sql.push_str(" = ");
                right.render(r);
            }
            Expr::Between { expr, low, high } => {
                expr.render(r);
                r.sql.push_str(" BETWEEN ");
                low.render(r);
                r.sql.push_str(" AND ");
                high.render(r);
            }
            Expr::Or(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(" OR ");
                    }
                    part.render(r);
                }
            }
        }
    }
}
