use chrono::NaiveDate;
use tracing::debug;

use super::window::{end_of_day, start_of_day};
use crate::models::Transaction;

/// How many records the ledger view shows when no date range is chosen.
pub const RECENT_LIMIT: usize = 10;

/// Restrict `transactions` to an inclusive calendar-day window.
///
/// Without both bounds the first `recent_limit` records are returned in their
/// existing order, so callers should pass a newest-first list. A start after
/// the end yields an empty list.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    recent_limit: usize,
) -> Vec<Transaction> {
    let (Some(start), Some(end)) = (start, end) else {
        return transactions.iter().take(recent_limit).cloned().collect();
    };

    if start > end {
        debug!(%start, %end, "date range is inverted, nothing matches");
        return Vec::new();
    }

    let from = start_of_day(start);
    let to = end_of_day(end);
    transactions
        .iter()
        .filter(|t| t.date >= from && t.date <= to)
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
