use serde::Serialize;

use super::record::{export_records, ExportRecord};
use crate::models::Transaction;

/// Column names plus unquoted row values, for a generic table renderer
/// (e.g. a PDF document).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Tabular form of the export. An empty input has no columns and no rows.
pub fn to_table(transactions: &[Transaction], currency_code: &str) -> ExportTable {
    if transactions.is_empty() {
        return ExportTable::default();
    }

    ExportTable {
        columns: ExportRecord::COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: export_records(transactions, currency_code)
            .iter()
            .map(|r| r.values().iter().map(|v| v.to_string()).collect())
            .collect(),
    }
}
