/// Tunables for a column-drop run.
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    /// Width of the key window copied inside each transaction.
    pub batch_size: i64,
    /// Snapshot the database file before any mutation.
    pub create_backup: bool,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self {
            batch_size: 5000,
            create_backup: false,
        }
    }
}
