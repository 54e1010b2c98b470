#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::parse_iso_timestamp;

fn debit(amount: Decimal, date: &str) -> Transaction {
    Transaction::new("d", amount, false, parse_iso_timestamp(date).unwrap())
}

fn credit(amount: Decimal, date: &str) -> Transaction {
    Transaction::new("c", amount, true, parse_iso_timestamp(date).unwrap())
}

// ── spending_limit ────────────────────────────────────────────

#[test]
fn test_mean_of_two_months() {
    let txns = vec![
        debit(dec!(100), "2024-01-15").with_balance(dec!(900)),
        debit(dec!(200), "2024-02-10").with_balance(dec!(700)),
    ];
    let limit = spending_limit(&txns, None).unwrap();
    assert_eq!(limit, dec!(150.00));
    assert_eq!(limit.to_string(), "150.00");
}

#[test]
fn test_only_credits_is_zero() {
    let txns = vec![
        credit(dec!(5000), "2024-01-01"),
        credit(dec!(300), "2024-03-01"),
    ];
    assert_eq!(spending_limit(&txns, None).unwrap(), Decimal::ZERO);
}

#[test]
fn test_empty_is_zero() {
    assert_eq!(spending_limit(&[], None).unwrap(), Decimal::ZERO);
    assert_eq!(spending_limit(&[], Some(dec!(0.012))).unwrap(), Decimal::ZERO);
}

#[test]
fn test_same_month_debits_are_summed() {
    let txns = vec![
        debit(dec!(40), "2024-01-02"),
        debit(dec!(60), "2024-01-28"),
        debit(dec!(300), "2024-03-05"),
    ];
    // Months: Jan = 100, Mar = 300; February has no debit and is skipped.
    assert_eq!(spending_limit(&txns, None).unwrap(), dec!(200.00));
}

#[test]
fn test_order_independent() {
    let txns = vec![
        debit(dec!(300), "2024-03-05"),
        debit(dec!(100), "2023-12-31"),
        debit(dec!(200), "2024-01-01"),
    ];
    let mut reversed = txns.clone();
    reversed.reverse();
    assert_eq!(
        spending_limit(&txns, None).unwrap(),
        spending_limit(&reversed, None).unwrap()
    );
    assert_eq!(spending_limit(&txns, None).unwrap(), dec!(200.00));
}

#[test]
fn test_credits_ignored() {
    let txns = vec![
        debit(dec!(100), "2024-01-15"),
        credit(dec!(10000), "2024-01-20"),
    ];
    assert_eq!(spending_limit(&txns, None).unwrap(), dec!(100.00));
}

#[test]
fn test_rounded_to_cents() {
    let txns = vec![
        debit(dec!(10), "2024-01-15"),
        debit(dec!(10), "2024-02-15"),
        debit(dec!(11), "2024-03-15"),
    ];
    // 31 / 3 = 10.333...
    assert_eq!(spending_limit(&txns, None).unwrap(), dec!(10.33));
}

#[test]
fn test_multiplier_applied_before_rounding() {
    let txns = vec![
        debit(dec!(1000), "2024-01-15"),
        debit(dec!(2000), "2024-02-15"),
    ];
    // 1500 * 0.012 = 18.00
    assert_eq!(spending_limit(&txns, Some(dec!(0.012))).unwrap(), dec!(18.00));
}

// ── monthly_expense_walk ──────────────────────────────────────

#[test]
fn test_walk_is_chronological_cumulative_average() {
    let txns = vec![
        debit(dec!(300), "2024-03-01"),
        debit(dec!(100), "2024-01-01"),
        debit(dec!(200), "2024-02-01"),
    ];
    let walk = monthly_expense_walk(&txns).unwrap();
    let months: Vec<String> = walk.iter().map(|m| m.month.to_string()).collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
    assert_eq!(walk[0].moving_average, dec!(100));
    assert_eq!(walk[1].moving_average, dec!(150));
    assert_eq!(walk[2].moving_average, dec!(200));
    assert_eq!(walk[2].total, dec!(300));
}

#[test]
fn test_walk_orders_across_years() {
    let txns = vec![debit(dec!(1), "2024-01-01"), debit(dec!(1), "2023-11-01")];
    let walk = monthly_expense_walk(&txns).unwrap();
    assert_eq!(walk[0].month, YearMonth { year: 2023, month: 11 });
    assert_eq!(walk[1].month, YearMonth { year: 2024, month: 1 });
}

// ── spending_limit_in ─────────────────────────────────────────

#[test]
fn test_limit_in_same_currency_needs_no_rate() {
    let txns = vec![debit(dec!(100), "2024-01-15")];
    let limit = spending_limit_in(&txns, "INR", "inr", &ExchangeRateTable::new()).unwrap();
    assert_eq!(limit, dec!(100.00));
}

#[test]
fn test_limit_in_converts() {
    let mut rates = ExchangeRateTable::new();
    rates.insert("INR", "USD", dec!(0.012)).unwrap();
    let txns = vec![debit(dec!(1000), "2024-01-15")];
    assert_eq!(
        spending_limit_in(&txns, "INR", "USD", &rates).unwrap(),
        dec!(12.00)
    );
}

#[test]
fn test_limit_in_missing_rate() {
    let txns = vec![debit(dec!(1000), "2024-01-15")];
    assert!(spending_limit_in(&txns, "INR", "USD", &ExchangeRateTable::new()).is_err());
}

// ── overflow ──────────────────────────────────────────────────

#[test]
fn test_same_month_overflow_is_error() {
    let txns = vec![
        debit(Decimal::MAX, "2024-01-02"),
        debit(Decimal::MAX, "2024-01-03"),
    ];
    let err = spending_limit(&txns, None).unwrap_err();
    assert!(matches!(err, EngineError::Overflow(_)));
}

#[test]
fn test_running_sum_overflow_is_error() {
    let txns = vec![
        debit(Decimal::MAX, "2024-01-02"),
        debit(Decimal::MAX, "2024-02-02"),
    ];
    assert!(matches!(
        monthly_expense_walk(&txns),
        Err(EngineError::Overflow(_))
    ));
}

#[test]
fn test_multiplier_overflow_is_error() {
    let txns = vec![debit(Decimal::MAX, "2024-01-02")];
    assert!(matches!(
        spending_limit(&txns, Some(dec!(2))),
        Err(EngineError::Overflow(_))
    ));
}
