use serde::Serialize;
use std::time::Duration;

/// Externally observable outcome of a completed migration.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationSummary {
    pub table: String,
    pub dropped_columns: Vec<String>,
    pub rows_copied: u64,
    pub elapsed: Duration,
}

impl MigrationSummary {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn rows_per_second(&self) -> f64 {
        let secs = self.elapsed_seconds();
        if secs > 0.0 {
            self.rows_copied as f64 / secs
        } else {
            0.0
        }
    }
}
