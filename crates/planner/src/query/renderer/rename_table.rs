use crate::query::{
    ast::rename_table::RenameTable,
    renderer::{Render, Renderer},
};

impl Render for RenameTable {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("ALTER TABLE ");
        r.render_table_ref(&self.table);
        r.sql.push_str(" RENAME TO ");
        r.push_identifier(&self.new_name);
        r.sql.push(';');
    }
}
