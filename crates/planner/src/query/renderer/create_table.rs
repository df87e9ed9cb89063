use crate::query::{
    ast::create_table::{ColumnDef, CreateTable},
    renderer::{Render, Renderer},
};

impl Render for CreateTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("CREATE TABLE ");
        if self.if_not_exists {
            r.sql.push_str("IF NOT EXISTS ");
        }
        r.render_table_ref(&self.table);
        r.sql.push_str(" (");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            render_column_def(column, r);
        }
        r.sql.push_str(");");
    }
}

/// `"name" TYPE [NOT NULL] [DEFAULT v] [PRIMARY KEY]`, keeping the catalog's
/// type and default text verbatim. SQLite accepts a missing type.
fn render_column_def(column: &ColumnDef, r: &mut Renderer) {
    r.push_identifier(&column.name);
    if !column.declared_type.is_empty() {
        r.sql.push(' ');
        r.sql.push_str(&column.declared_type);
    }
    if column.not_null {
        r.sql.push_str(" NOT NULL");
    }
    if let Some(default) = &column.default_value {
        r.sql.push_str(" DEFAULT ");
        r.sql.push_str(default);
    }
    if column.is_primary_key {
        r.sql.push_str(" PRIMARY KEY");
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::{
            common::TableRef,
            create_table::{ColumnDef, CreateTable},
        },
        renderer::{Render, Renderer},
    };

    #[test]
    fn test_render_create_table() {
        let ast = CreateTable {
            table: TableRef::new("affiliates_new"),
            columns: vec![
                ColumnDef {
                    name: "id".to_string(),
                    declared_type: "INTEGER".to_string(),
                    not_null: false,
                    default_value: None,
                    is_primary_key: true,
                },
                ColumnDef {
                    name: "surname".to_string(),
                    declared_type: "TEXT".to_string(),
                    not_null: true,
                    default_value: Some("''".to_string()),
                    is_primary_key: false,
                },
            ],
            if_not_exists: false,
        };

        let mut renderer = Renderer::new();
        ast.render(&mut renderer);
        let (sql, params) = renderer.finish();

        assert!(params.is_empty());
        assert_eq!(
            sql,
            r#"CREATE TABLE "affiliates_new" ("id" INTEGER PRIMARY KEY, "surname" TEXT NOT NULL DEFAULT '');"#
        );
    }

    #[test]
    fn test_render_untyped_column() {
        let ast = CreateTable {
            table: TableRef::new("t"),
            columns: vec![ColumnDef {
                name: "anything".to_string(),
                declared_type: String::new(),
                not_null: false,
                default_value: None,
                is_primary_key: false,
            }],
            if_not_exists: true,
        };

        let mut renderer = Renderer::new();
        ast.render(&mut renderer);
        let (sql, _) = renderer.finish();

        assert_eq!(sql, r#"CREATE TABLE IF NOT EXISTS "t" ("anything");"#);
    }
}
