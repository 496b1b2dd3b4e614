//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// One line of a single-record table
#[derive(Debug, Clone, Tabled)]
pub struct DetailRow {
    #[tabled(rename = "FIELD")]
    pub field: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl DetailRow {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Format a single record as FIELD/VALUE rows
pub fn format_details(rows: &[DetailRow]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
