//! Turns a ledger view into downloadable payloads.

mod csv_export;
mod record;
mod table;

use tracing::debug;

use crate::error::Result;
use crate::models::Transaction;

pub use csv_export::to_csv;
pub use record::{export_records, ExportRecord};
pub use table::{to_table, ExportTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    /// Column/row table handed to a document renderer.
    Table,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Table => "table",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "table" | "pdf" => Some(Self::Table),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportPayload {
    /// CSV text plus its record count; quoted fields may span lines.
    Csv { text: String, rows: usize },
    Table(ExportTable),
}

impl ExportPayload {
    /// Number of data rows carried by the payload.
    pub fn row_count(&self) -> usize {
        match self {
            Self::Csv { rows, .. } => *rows,
            Self::Table(table) => table.rows.len(),
        }
    }
}

pub fn export(
    transactions: &[Transaction],
    format: ExportFormat,
    currency_code: &str,
) -> Result<ExportPayload> {
    debug!(%format, count = transactions.len(), "exporting transactions");
    match format {
        ExportFormat::Csv => Ok(ExportPayload::Csv {
            text: to_csv(transactions, currency_code)?,
            rows: transactions.len(),
        }),
        ExportFormat::Table => Ok(ExportPayload::Table(to_table(transactions, currency_code))),
    }
}
