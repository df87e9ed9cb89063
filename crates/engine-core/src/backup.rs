use crate::error::MigrationError;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::info;

/// Copies the database file to `<db>.backup-<YYYYMMDDHHMMSS>` next to it.
///
/// Runs before any mutation; a copy failure aborts the whole migration. The
/// copy is byte-for-byte and assumes no other process holds an open write
/// transaction.
pub fn backup_database(db_path: &Path) -> Result<PathBuf, MigrationError> {
    let stamp = Local::now().format("%Y%m%d%H%M%S");
    let backup_path = PathBuf::from(format!("{}.backup-{stamp}", db_path.display()));
    std::fs::copy(db_path, &backup_path).map_err(MigrationError::Backup)?;
    info!(backup = %backup_path.display(), "created pre-migration backup");
    Ok(backup_path)
}
