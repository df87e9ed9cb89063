use connectors::error::ConnectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Table '{0}' does not exist in the database")]
    TableNotFound(String),

    #[error("Keep-list for table '{0}' matches none of its columns; refusing to build a table without a schema")]
    NoKeepColumns(String),

    #[error("Failed to create backup: {0}")]
    Backup(#[source] std::io::Error),

    #[error(
        "Batch copy for table '{table}' failed: {source} \
         (committed batches remain in '{table}_new'; '{table}' is untouched)"
    )]
    BatchCopy {
        table: String,
        source: ConnectorError,
    },

    #[error(transparent)]
    Connector(#[from] ConnectorError),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Unknown search column '{column}' for table '{table}'")]
    UnknownColumn { table: String, column: String },

    #[error(transparent)]
    Connector(#[from] ConnectorError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to flush output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Connector(#[from] ConnectorError),
}
