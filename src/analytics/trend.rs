use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::window::{first_of_previous_month, first_of_previous_year, start_of_day, TimeWindow};
use crate::models::Transaction;

/// Chart point label format, e.g. `Jan 5, 2024`.
const POINT_DATE_FORMAT: &str = "%b %-d, %Y";

/// One point of the income/expense line chart. Exactly one of `income` and
/// `expense` is non-zero unless the amount itself is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl TrendPoint {
    fn from_transaction(txn: &Transaction) -> Self {
        let (income, expense) = if txn.is_credit() {
            (txn.amount, Decimal::ZERO)
        } else {
            (Decimal::ZERO, txn.amount)
        };
        Self {
            date: txn.date.format(POINT_DATE_FORMAT).to_string(),
            income,
            expense,
        }
    }
}

/// Whether `txn` falls in the trend chart's `window`.
///
/// `Monthly` and `Yearly` look back to the start of the previous month or
/// year; `Custom` compares against midnight of each bound without widening the
/// end to the end of its day.
fn in_trend_window(txn: &Transaction, window: &TimeWindow, today: NaiveDate) -> bool {
    match window {
        TimeWindow::AllTime => true,
        TimeWindow::Monthly => txn.date >= start_of_day(first_of_previous_month(today)),
        TimeWindow::Yearly => txn.date >= start_of_day(first_of_previous_year(today)),
        TimeWindow::Custom { start, end } => {
            txn.date >= start_of_day(*start) && txn.date <= start_of_day(*end)
        }
    }
}

/// One point per transaction inside `window`, in input order. Same-day
/// transactions are not merged.
pub fn income_expense_series(
    transactions: &[Transaction],
    window: &TimeWindow,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    let points: Vec<TrendPoint> = transactions
        .iter()
        .filter(|t| in_trend_window(t, window, today))
        .map(TrendPoint::from_transaction)
        .collect();
    debug!(%window, points = points.len(), "built income/expense series");
    points
}

#[cfg(test)]
#[path = "trend_tests.rs"]
mod tests;
