use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::round_money;
use crate::error::{EngineError, Result};
use crate::models::{ExchangeRateTable, Transaction};

/// A calendar month. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(txn: &Transaction) -> Self {
        Self {
            year: txn.date.year(),
            month: txn.date.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One step of the cumulative walk over monthly expense totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyExpense {
    pub month: YearMonth,
    pub total: Decimal,
    /// Mean of this and every earlier populated month's total.
    pub moving_average: Decimal,
}

/// Debit totals per month, oldest first, each paired with the cumulative
/// average so far. Months without a debit do not appear.
pub fn monthly_expense_walk(transactions: &[Transaction]) -> Result<Vec<MonthlyExpense>> {
    let mut by_month: BTreeMap<YearMonth, Decimal> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_debit()) {
        let total = by_month.entry(YearMonth::of(txn)).or_default();
        *total = total
            .checked_add(txn.amount)
            .ok_or(EngineError::Overflow("summing monthly expenses"))?;
    }

    let mut running_sum = Decimal::ZERO;
    let mut running_count = 0usize;
    by_month
        .into_iter()
        .map(|(month, total)| -> Result<MonthlyExpense> {
            running_sum = running_sum
                .checked_add(total)
                .ok_or(EngineError::Overflow("averaging monthly expenses"))?;
            running_count += 1;
            Ok(MonthlyExpense {
                month,
                total,
                moving_average: running_sum / Decimal::from(running_count),
            })
        })
        .collect()
}

/// Average monthly expense over every month with at least one debit,
/// optionally scaled by a display-currency multiplier, rounded to cents.
/// Zero when there are no debits.
pub fn spending_limit(
    transactions: &[Transaction],
    multiplier: Option<Decimal>,
) -> Result<Decimal> {
    let walk = monthly_expense_walk(transactions)?;
    let average = walk
        .last()
        .map(|m| m.moving_average)
        .unwrap_or(Decimal::ZERO);
    debug!(months = walk.len(), %average, "computed spending limit");

    let scaled = match multiplier {
        Some(rate) => average
            .checked_mul(rate)
            .ok_or(EngineError::Overflow("converting the spending limit"))?,
        None => average,
    };
    Ok(round_money(scaled))
}

/// [`spending_limit`] for transactions stored in `base`, shown in `display`.
pub fn spending_limit_in(
    transactions: &[Transaction],
    base: &str,
    display: &str,
    rates: &ExchangeRateTable,
) -> Result<Decimal> {
    if base.trim().eq_ignore_ascii_case(display.trim()) {
        return spending_limit(transactions, None);
    }
    let rate = rates.rate(base, display)?;
    spending_limit(transactions, Some(rate))
}

#[cfg(test)]
#[path = "spending_tests.rs"]
mod tests;
