use std::time::{Duration, Instant};
use tracing::info;

/// Rolling throughput over a batched copy.
///
/// Rates and the remaining-time estimate are derived from rows committed so
/// far against wall-clock time; they are operator feedback, not a
/// correctness input.
pub struct CopyProgress {
    total_rows: u64,
    rows_copied: u64,
    started: Instant,
}

impl CopyProgress {
    pub fn new(total_rows: u64) -> Self {
        Self {
            total_rows,
            rows_copied: 0,
            started: Instant::now(),
        }
    }

    pub fn rows_copied(&self) -> u64 {
        self.rows_copied
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Records one committed batch and reports progress.
    pub fn record_batch(&mut self, rows: u64) {
        self.rows_copied += rows;

        let percent = if self.total_rows > 0 {
            self.rows_copied as f64 / self.total_rows as f64 * 100.0
        } else {
            0.0
        };
        let elapsed = self.started.elapsed().as_secs_f64();
        let rows_per_sec = if elapsed > 0.0 {
            self.rows_copied as f64 / elapsed
        } else {
            0.0
        };
        let est_remaining = if rows_per_sec > 0.0 {
            self.total_rows.saturating_sub(self.rows_copied) as f64 / rows_per_sec
        } else {
            0.0
        };

        info!(
            "Progress: {}/{} rows ({percent:.2}%) - {rows_per_sec:.1} rows/sec - est. remaining: {est_remaining:.1}s",
            self.rows_copied, self.total_rows
        );
    }
}
