use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Magnitude of the movement; the direction lives in `increment`.
    pub amount: Decimal,
    /// `true` for a credit (income), `false` for a debit (expense).
    pub increment: bool,
    /// Running account balance immediately after this transaction.
    pub current_balance: Decimal,
    pub description: String,
    pub mode: String,
    pub date: NaiveDateTime,
    pub user_id: String,
}

impl Transaction {
    pub fn new(id: impl Into<String>, amount: Decimal, increment: bool, date: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            amount,
            increment,
            current_balance: Decimal::ZERO,
            description: String::new(),
            mode: String::new(),
            date,
            user_id: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_balance(mut self, current_balance: Decimal) -> Self {
        self.current_balance = current_balance;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn is_credit(&self) -> bool {
        self.increment
    }

    pub fn is_debit(&self) -> bool {
        !self.increment
    }

    /// Amount with the direction applied: positive for credits, negative for debits.
    pub fn signed_amount(&self) -> Decimal {
        if self.increment {
            self.amount
        } else {
            -self.amount
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse an ISO 8601 date or timestamp. Offsets are normalised to UTC; a
/// bare date maps to midnight.
pub fn parse_iso_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
