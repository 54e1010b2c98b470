#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::models::parse_iso_timestamp;

fn txn(amount: Decimal, increment: bool, date: &str) -> Transaction {
    Transaction::new("t", amount, increment, parse_iso_timestamp(date).unwrap())
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn labels(points: &[TrendPoint]) -> Vec<&str> {
    points.iter().map(|p| p.date.as_str()).collect()
}

// ── points ────────────────────────────────────────────────────

#[test]
fn test_point_split_income_expense() {
    let txns = vec![
        txn(dec!(500), true, "2024-05-01"),
        txn(dec!(42.50), false, "2024-05-02"),
    ];
    let points = income_expense_series(&txns, &TimeWindow::AllTime, day("2024-05-20"));
    assert_eq!(
        points,
        vec![
            TrendPoint {
                date: "May 1, 2024".into(),
                income: dec!(500),
                expense: Decimal::ZERO,
            },
            TrendPoint {
                date: "May 2, 2024".into(),
                income: Decimal::ZERO,
                expense: dec!(42.50),
            },
        ]
    );
}

#[test]
fn test_label_has_no_leading_zero() {
    let txns = vec![txn(dec!(1), true, "2024-01-05T09:30:00")];
    let points = income_expense_series(&txns, &TimeWindow::AllTime, day("2024-05-20"));
    assert_eq!(labels(&points), vec!["Jan 5, 2024"]);
}

#[test]
fn test_same_day_not_merged_and_order_kept() {
    let txns = vec![
        txn(dec!(3), false, "2024-05-02"),
        txn(dec!(1), true, "2024-05-01"),
        txn(dec!(2), false, "2024-05-02"),
    ];
    let points = income_expense_series(&txns, &TimeWindow::AllTime, day("2024-05-20"));
    assert_eq!(labels(&points), vec!["May 2, 2024", "May 1, 2024", "May 2, 2024"]);
    assert_eq!(points[0].expense, dec!(3));
    assert_eq!(points[2].expense, dec!(2));
}

#[test]
fn test_empty_input() {
    assert!(income_expense_series(&[], &TimeWindow::Monthly, day("2024-05-20")).is_empty());
}

// ── windows ───────────────────────────────────────────────────

#[test]
fn test_monthly_starts_at_previous_month() {
    let txns = vec![
        txn(dec!(1), true, "2024-03-31T23:59:59"),
        txn(dec!(2), true, "2024-04-01"),
        txn(dec!(3), true, "2024-05-19"),
    ];
    let points = income_expense_series(&txns, &TimeWindow::Monthly, day("2024-05-20"));
    assert_eq!(labels(&points), vec!["Apr 1, 2024", "May 19, 2024"]);
}

#[test]
fn test_monthly_in_january_reaches_back_to_december() {
    let txns = vec![
        txn(dec!(1), true, "2023-11-30"),
        txn(dec!(2), true, "2023-12-01"),
    ];
    let points = income_expense_series(&txns, &TimeWindow::Monthly, day("2024-01-10"));
    assert_eq!(labels(&points), vec!["Dec 1, 2023"]);
}

#[test]
fn test_yearly_starts_at_previous_year() {
    let txns = vec![
        txn(dec!(1), true, "2022-12-31"),
        txn(dec!(2), true, "2023-01-01"),
        txn(dec!(3), true, "2024-06-01"),
    ];
    let points = income_expense_series(&txns, &TimeWindow::Yearly, day("2024-06-15"));
    assert_eq!(labels(&points), vec!["Jan 1, 2023", "Jun 1, 2024"]);
}

#[test]
fn test_all_time_keeps_everything() {
    let txns = vec![
        txn(dec!(1), true, "1999-01-01"),
        txn(dec!(2), false, "2030-01-01"),
    ];
    assert_eq!(
        income_expense_series(&txns, &TimeWindow::AllTime, day("2024-06-15")).len(),
        2
    );
}

#[test]
fn test_custom_bounds_are_midnight() {
    let window = TimeWindow::Custom {
        start: day("2024-02-01"),
        end: day("2024-02-10"),
    };
    let txns = vec![
        txn(dec!(1), true, "2024-01-31T23:00:00"),
        txn(dec!(2), true, "2024-02-01"),
        txn(dec!(3), true, "2024-02-10T00:00:00"),
        txn(dec!(4), true, "2024-02-10T08:00:00"),
    ];
    let points = income_expense_series(&txns, &window, day("2024-06-15"));
    assert_eq!(labels(&points), vec!["Feb 1, 2024", "Feb 10, 2024"]);
    assert_eq!(points[1].income, dec!(3));
}

#[test]
fn test_custom_inverted_is_empty() {
    let window = TimeWindow::Custom {
        start: day("2024-02-10"),
        end: day("2024-02-01"),
    };
    let txns = vec![txn(dec!(1), true, "2024-02-05")];
    assert!(income_expense_series(&txns, &window, day("2024-06-15")).is_empty());
}
