use rust_decimal::Decimal;
use serde::Serialize;

use crate::analytics::round_money;
use crate::models::Transaction;

/// A transaction as it appears in an export: internal fields (`id`,
/// `increment`, `user_id`) dropped, money and dates rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    /// Signed amount with currency code, e.g. `-42.50 USD`.
    pub amount: String,
    pub current_balance: String,
    pub description: String,
    pub mode: String,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
}

impl ExportRecord {
    /// Column headers, in field order.
    pub const COLUMNS: [&'static str; 5] = ["AMOUNT", "CURRENTBALANCE", "DESCRIPTION", "MODE", "DATE"];

    pub fn from_transaction(txn: &Transaction, currency_code: &str) -> Self {
        let sign = if txn.increment { '+' } else { '-' };
        Self {
            amount: format!("{sign}{} {currency_code}", money(txn.amount)),
            current_balance: format!("{} {currency_code}", money(txn.current_balance)),
            description: txn.description.clone(),
            mode: txn.mode.clone(),
            date: txn.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Field values in [`Self::COLUMNS`] order.
    pub fn values(&self) -> [&str; 5] {
        [
            self.amount.as_str(),
            self.current_balance.as_str(),
            self.description.as_str(),
            self.mode.as_str(),
            self.date.as_str(),
        ]
    }
}

fn money(value: Decimal) -> String {
    round_money(value).to_string()
}

pub fn export_records(transactions: &[Transaction], currency_code: &str) -> Vec<ExportRecord> {
    transactions
        .iter()
        .map(|t| ExportRecord::from_transaction(t, currency_code))
        .collect()
}
