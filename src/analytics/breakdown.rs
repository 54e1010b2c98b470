use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::round_money;
use super::window::{end_of_day, start_of_day, TimeWindow};
use crate::error::{EngineError, Result};
use crate::models::Transaction;

/// Slice colors, assigned by group position and repeated past the end.
pub const PALETTE: [&str; 8] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AF19FF", "#FF4560", "#008000", "#FF00FF",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeSlice {
    pub name: String,
    pub value: Decimal,
    /// Share of total income, e.g. `"62.50%"`.
    pub percentage: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeBreakdown {
    pub slices: Vec<IncomeSlice>,
    pub total_income: Decimal,
}

/// Whether `txn` falls in the breakdown's `window`.
///
/// `Monthly`/`Yearly` mean the calendar month/year containing `today`.
/// `Custom` keeps records strictly after the start of the first day and
/// strictly before the end of the last.
fn in_calendar_window(txn: &Transaction, window: &TimeWindow, today: NaiveDate) -> bool {
    match window {
        TimeWindow::AllTime => true,
        TimeWindow::Monthly => txn.date.year() == today.year() && txn.date.month() == today.month(),
        TimeWindow::Yearly => txn.date.year() == today.year(),
        TimeWindow::Custom { start, end } => {
            txn.date > start_of_day(*start) && txn.date < end_of_day(*end)
        }
    }
}

/// Percentage of `value` in `total` with two decimals and a `%` suffix.
/// A zero total gives `0.00%`.
fn format_share(value: Decimal, total: Decimal) -> String {
    let share = if total.is_zero() {
        Decimal::ZERO
    } else {
        value / total * Decimal::ONE_HUNDRED
    };
    format!("{}%", round_money(share))
}

/// Group credits inside `window` by description and report each group's
/// total and share of income. Groups keep the order in which their first
/// record appears.
pub fn income_breakdown(
    transactions: &[Transaction],
    window: &TimeWindow,
    today: NaiveDate,
) -> Result<IncomeBreakdown> {
    let mut groups: Vec<(String, Decimal)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in transactions
        .iter()
        .filter(|t| t.is_credit() && in_calendar_window(t, window, today))
    {
        match index.get(txn.description.as_str()) {
            Some(&i) => {
                groups[i].1 = groups[i]
                    .1
                    .checked_add(txn.amount)
                    .ok_or(EngineError::Overflow("summing income"))?;
            }
            None => {
                index.insert(txn.description.as_str(), groups.len());
                groups.push((txn.description.clone(), txn.amount));
            }
        }
    }

    let total_income = groups
        .iter()
        .try_fold(Decimal::ZERO, |acc, (_, v)| acc.checked_add(*v))
        .ok_or(EngineError::Overflow("summing income"))?;
    let slices: Vec<IncomeSlice> = groups
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| IncomeSlice {
            percentage: format_share(value, total_income),
            color: PALETTE[i % PALETTE.len()],
            name,
            value,
        })
        .collect();

    debug!(%window, groups = slices.len(), %total_income, "built income breakdown");
    Ok(IncomeBreakdown {
        slices,
        total_income,
    })
}

#[cfg(test)]
#[path = "breakdown_tests.rs"]
mod tests;
