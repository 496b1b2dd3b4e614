//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

pub use table::DetailRow;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json_list(self)?),
        }
    }
}

/// A single record: field/value rows as a table, the record itself as JSON.
pub struct Details<'a, T> {
    pub record: &'a T,
    pub rows: Vec<DetailRow>,
}

impl<'a, T: Serialize> Details<'a, T> {
    pub fn new(record: &'a T, rows: Vec<DetailRow>) -> Self {
        Self { record, rows }
    }
}

impl<T: Serialize> Formattable for Details<'_, T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_details(&self.rows)),
            OutputFormat::Json => Ok(json::format_json(self.record)?),
        }
    }
}
