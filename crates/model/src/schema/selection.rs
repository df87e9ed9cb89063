use crate::schema::column::ColumnMetadata;

/// Outcome of reconciling a requested keep-list against the live columns.
#[derive(Debug, Clone)]
pub struct ColumnSelection {
    /// Columns carried into the rebuilt table, in keep-list order.
    pub keep: Vec<ColumnMetadata>,
    /// Names of columns to drop, in table order.
    pub drop: Vec<String>,
}

impl ColumnSelection {
    /// Requested names absent from the table are ignored, not errors.
    pub fn resolve(current: &[ColumnMetadata], requested: &[String]) -> Self {
        let keep: Vec<ColumnMetadata> = requested
            .iter()
            .filter_map(|name| current.iter().find(|col| &col.name == name))
            .cloned()
            .collect();

        let drop = current
            .iter()
            .filter(|col| !requested.contains(&col.name))
            .map(|col| col.name.clone())
            .collect();

        Self { keep, drop }
    }

    /// Nothing to drop: the migration is a no-op.
    pub fn is_noop(&self) -> bool {
        self.drop.is_empty()
    }

    /// Column used to window the copy: the first kept primary-key column,
    /// else the first kept column.
    pub fn batch_column(&self) -> Option<&ColumnMetadata> {
        self.keep
            .iter()
            .find(|col| col.is_primary_key)
            .or_else(|| self.keep.first())
    }

    pub fn keep_names(&self) -> Vec<String> {
        self.keep.iter().map(|col| col.name.clone()).collect()
    }
}
