use tracing::debug;

use super::round_money;
use crate::error::{EngineError, Result};
use crate::models::{CurrencyPair, ExchangeRateTable, Transaction};

/// Re-express `transactions` (stored in `base`) in `target`.
///
/// Identity conversions return the records untouched so no rounding is
/// introduced. Otherwise `amount` and `current_balance` are multiplied by the
/// `base->target` rate and rounded to cents. A missing rate or a product
/// outside the `Decimal` range is an error.
pub fn convert_transactions(
    transactions: &[Transaction],
    base: &str,
    target: &str,
    rates: &ExchangeRateTable,
) -> Result<Vec<Transaction>> {
    let pair = CurrencyPair::new(base, target);
    if pair.is_identity() {
        return Ok(transactions.to_vec());
    }

    let rate = rates.rate(&pair.base, &pair.target)?;
    debug!(%pair, %rate, count = transactions.len(), "converting transactions");

    let scale = |value: rust_decimal::Decimal| {
        value
            .checked_mul(rate)
            .map(round_money)
            .ok_or(EngineError::Overflow("converting currency"))
    };
    transactions
        .iter()
        .map(|t| -> Result<Transaction> {
            Ok(Transaction {
                amount: scale(t.amount)?,
                current_balance: scale(t.current_balance)?,
                ..t.clone()
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
