use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use super::columns::LedgerColumns;
use crate::models::{parse_iso_timestamp, Transaction};

/// A row that could not be turned into a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based record position in the source file, counting the header as 1.
    pub line: usize,
    pub reason: String,
}

/// Result of reading a ledger: every parseable row plus the rows skipped.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub transactions: Vec<Transaction>,
    pub rejected: Vec<Rejection>,
}

pub struct LedgerImporter;

impl LedgerImporter {
    pub fn read_path(path: &Path) -> Result<Ingested> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open ledger file: {}", path.display()))?;
        Self::read(file).with_context(|| format!("Failed to read ledger: {}", path.display()))
    }

    /// Read a ledger CSV with a header row. Malformed rows are skipped and
    /// reported; a missing required column fails the whole read.
    pub fn read<R: Read>(reader: R) -> Result<Ingested> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()
            .context("Failed to read CSV header")?
            .iter()
            .map(|s| s.to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            anyhow::bail!("Ledger CSV is empty");
        }
        let columns = LedgerColumns::from_headers(&headers)?;

        let mut rows: Vec<Result<Vec<String>, String>> = Vec::new();
        for result in rdr.records() {
            rows.push(
                result
                    .map(|record| record.iter().map(|s| s.to_string()).collect())
                    .map_err(|e| e.to_string()),
            );
        }

        let ingested = Self::parse(&rows, &columns);
        if !ingested.rejected.is_empty() {
            warn!(
                rejected = ingested.rejected.len(),
                accepted = ingested.transactions.len(),
                "skipped malformed ledger rows"
            );
        }
        debug!(count = ingested.transactions.len(), "ledger loaded");
        Ok(ingested)
    }

    /// Turn data rows into transactions. Row `i` is reported as line `i + 2`.
    pub(crate) fn parse(rows: &[Result<Vec<String>, String>], columns: &LedgerColumns) -> Ingested {
        let mut ingested = Ingested::default();

        for (i, row) in rows.iter().enumerate() {
            let line = i + 2;
            let parsed = row
                .as_ref()
                .map_err(|e| e.clone())
                .and_then(|fields| parse_row(fields, columns, line));
            match parsed {
                Ok(txn) => ingested.transactions.push(txn),
                Err(reason) => {
                    debug!(line, %reason, "rejected ledger row");
                    ingested.rejected.push(Rejection { line, reason });
                }
            }
        }

        ingested
    }
}

fn parse_row(
    row: &[String],
    columns: &LedgerColumns,
    line: usize,
) -> std::result::Result<Transaction, String> {
    let field = move |idx: Option<usize>| {
        idx.and_then(|i| row.get(i))
            .map(|s| s.trim())
            .unwrap_or("")
    };

    let date_str = field(Some(columns.date));
    let date =
        parse_iso_timestamp(date_str).ok_or_else(|| format!("invalid date '{date_str}'"))?;

    let amount_str = field(Some(columns.amount));
    if amount_str.is_empty() {
        return Err("missing amount".to_string());
    }
    let amount = parse_decimal(amount_str).map_err(|e| format!("invalid amount: {e}"))?;
    if amount < Decimal::ZERO {
        return Err(format!("amount must not be negative, got '{amount_str}'"));
    }

    let flag = field(Some(columns.increment));
    let increment = parse_flag(flag).ok_or_else(|| format!("invalid increment flag '{flag}'"))?;

    let balance_str = field(columns.current_balance);
    let current_balance =
        parse_decimal(balance_str).map_err(|e| format!("invalid current balance: {e}"))?;

    let id = match field(columns.id) {
        "" => format!("row-{line}"),
        id => id.to_string(),
    };

    Ok(Transaction {
        id,
        amount,
        increment,
        current_balance,
        description: field(columns.description).to_string(),
        mode: field(columns.mode).to_string(),
        date,
        user_id: field(columns.user_id).to_string(),
    })
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "credit" | "cr" => Some(true),
        "false" | "0" | "no" | "n" | "debit" | "dr" => Some(false),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let cleaned = s
        .replace(['$', ',', '₹', '€', '£'], "")
        .replace('"', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .with_context(|| format!("Failed to parse '{s}' as decimal"))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
