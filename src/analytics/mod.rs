//! Pure transformations behind the dashboard views. Every function here takes
//! its inputs explicitly and returns a fresh value; nothing is cached.

mod breakdown;
mod convert;
mod range;
mod sort;
mod spending;
mod trend;
mod window;

use rust_decimal::{Decimal, RoundingStrategy};

pub use breakdown::{income_breakdown, IncomeBreakdown, IncomeSlice, PALETTE};
pub use convert::convert_transactions;
pub use range::{filter_by_date_range, RECENT_LIMIT};
pub use sort::{description_frequencies, sort_transactions, SortKey};
pub use spending::{
    monthly_expense_walk, spending_limit, spending_limit_in, MonthlyExpense, YearMonth,
};
pub use trend::{income_expense_series, TrendPoint};
pub use window::{end_of_day, start_of_day, TimeWindow};

/// Round to cents, halves away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
