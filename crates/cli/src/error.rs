use connectors::error::ConnectorError;
use engine_core::error::{ExportError, MigrationError, SearchError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Database file '{0}' does not exist")]
    DatabaseFileMissing(String),

    #[error("Columns file '{0}' does not exist")]
    ColumnsFileMissing(String),

    #[error("Failed to read the columns file: {0}")]
    ColumnsFileRead(std::io::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] MigrationError),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Database error: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
