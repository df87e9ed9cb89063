use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild a table keeping only the columns listed in a file
    DropColumns {
        #[arg(long, help = "Path to the SQLite database file")]
        db: String,

        #[arg(long, help = "Name of the table to rebuild")]
        table: String,

        #[arg(long, help = "File with one column name to keep per line")]
        columns_file: String,

        #[arg(
            long,
            default_value_t = 5000,
            help = "Key-window width copied per transaction (default: 5000)"
        )]
        batch_size: i64,

        #[arg(long, help = "Copy the database file aside before making changes")]
        backup: bool,
    },
    /// Search businesses and affiliates with a LIKE term
    Search {
        #[arg(long, help = "Path to the SQLite database file")]
        db: String,

        #[arg(long, help = "Text matched with LIKE against the searchable columns")]
        term: String,

        #[arg(long, value_enum, default_value = "business")]
        by: SearchScope,

        #[arg(
            long,
            value_delimiter = ',',
            help = "Override the searched columns (validated against the table)"
        )]
        columns: Option<Vec<String>>,

        #[arg(long, help = "Cap the number of hits")]
        limit: Option<i64>,

        #[arg(long, help = "If set, prints the hits as JSON instead of text")]
        json: bool,
    },
    /// List tables and their column metadata
    Inspect {
        #[arg(long, help = "Path to the SQLite database file")]
        db: String,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Export one table's column metadata and sample values as CSV
    ExportColumns {
        #[arg(long, help = "Path to the SQLite database file")]
        db: String,

        #[arg(long, help = "Table to describe")]
        table: String,

        #[arg(long, help = "Destination CSV file")]
        output: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchScope {
    Business,
    Affiliate,
    Combined,
}
