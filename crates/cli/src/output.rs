use crate::error::CliError;
use engine_core::{inspect::DatabaseReport, search::SearchHit};
use model::migration::summary::MigrationSummary;

pub fn print_summary(summary: &MigrationSummary) {
    if summary.dropped_columns.is_empty() {
        println!("No columns to drop; table '{}' left unchanged.", summary.table);
        return;
    }
    println!(
        "Successfully dropped {} columns from '{}': {}",
        summary.dropped_columns.len(),
        summary.table,
        summary.dropped_columns.join(", ")
    );
    println!(
        "Processed {} rows in {:.2} seconds ({:.1} rows/sec)",
        summary.rows_copied,
        summary.elapsed_seconds(),
        summary.rows_per_second()
    );
}

pub fn print_hits(hits: &[SearchHit]) {
    for hit in hits {
        let affiliate = match (&hit.surname, &hit.firstname) {
            (None, None) => "None".to_string(),
            (surname, firstname) => format!(
                "{} {}",
                surname.as_deref().unwrap_or("-"),
                firstname.as_deref().unwrap_or("-")
            ),
        };
        println!(
            "Business: {} ({}) | Affiliate: {}",
            hit.business_name.as_deref().unwrap_or("-"),
            hit.business_number.as_deref().unwrap_or("-"),
            affiliate
        );
    }
    println!("Found {} total matches", hits.len());
}

pub fn print_report(report: &DatabaseReport) {
    println!("Tables in the database:");
    for table in &report.tables {
        println!("- {} ({} rows)", table.name, table.row_count);
        for column in &table.columns {
            let mut line = format!("    {}", column.name);
            if !column.declared_type.is_empty() {
                line.push(' ');
                line.push_str(&column.declared_type);
            }
            if column.not_null {
                line.push_str(" NOT NULL");
            }
            if column.is_primary_key {
                line.push_str(" PRIMARY KEY");
            }
            println!("{line}");
        }
    }
}

pub fn write_report(report: &DatabaseReport, path: &str) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(report).map_err(CliError::JsonSerialize)?;
    std::fs::write(path, json)?;
    Ok(())
}
