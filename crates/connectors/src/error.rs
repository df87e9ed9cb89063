use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Failed to open database at '{path}': {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },

    #[error("Table '{0}' does not exist in the database")]
    TableNotFound(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
