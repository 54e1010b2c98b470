use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::record::{export_records, ExportRecord};
use crate::error::{EngineError, Result};
use crate::models::Transaction;

/// Render `transactions` as CSV text.
///
/// The header line is the bare column names; every value on the data lines
/// is double-quoted. Lines are joined by `\n` with no trailing newline, and an
/// empty input gives an empty string.
pub fn to_csv(transactions: &[Transaction], currency_code: &str) -> Result<String> {
    if transactions.is_empty() {
        return Ok(String::new());
    }

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in export_records(transactions, currency_code) {
        wtr.write_record(record.values())?;
    }
    let body = wtr
        .into_inner()
        .map_err(|e| EngineError::Export(format!("Failed to flush CSV writer: {e}")))?;
    let body = String::from_utf8(body)
        .map_err(|e| EngineError::Export(format!("CSV output is not UTF-8: {e}")))?;

    let mut out = ExportRecord::COLUMNS.join(",");
    out.push('\n');
    out.push_str(body.trim_end_matches('\n'));
    Ok(out)
}
