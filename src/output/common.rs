//! Common utilities for output formatters

use chrono::DateTime;
use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;

/// A flattened row that can be printed as a table, CSV, JSON or YAML
pub trait Tabular: Serialize {
    /// Column headers for table and CSV output
    fn headers() -> &'static [&'static str];

    /// Cell values, in header order
    fn row(&self) -> Vec<String>;
}

/// Print rows in the requested format
pub fn output_rows<T: Tabular>(rows: &[T], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(rows, no_header),
        OutputFormat::Csv => output_csv(rows, no_header),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Yaml => print_yaml(&rows),
    }
}

fn output_table<T: Tabular>(rows: &[T], no_header: bool) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(T::headers().to_vec());
    }
    for row in rows {
        table.add_row(row.row());
    }
    println!("{table}");
}

fn output_csv<T: Tabular>(rows: &[T], no_header: bool) {
    if !no_header {
        println!("{}", T::headers().join(","));
    }
    for row in rows {
        println!("{}", csv_line(&row.row()));
    }
}

fn csv_line(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| escape_csv(c))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render a unix timestamp (seconds) as UTC, or an empty cell when absent
pub fn format_timestamp(seconds: Option<i64>) -> String {
    seconds
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to render JSON: {}", e),
    }
}

/// Print any serializable value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) {
    match serde_yml::to_string(value) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Failed to render YAML: {}", e),
    }
}
