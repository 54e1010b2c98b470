use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, Result};

/// An ordered base->target currency pair. Codes are stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: String,
    pub target: String,
}

impl CurrencyPair {
    pub fn new(base: &str, target: &str) -> Self {
        Self {
            base: base.trim().to_uppercase(),
            target: target.trim().to_uppercase(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.base == self.target
    }

    /// Parse a quote key: either two concatenated ISO codes (`"INRUSD"`) or
    /// two codes joined by `/`, `-`, `→` or `->`.
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        for sep in ["->", "→", "/", "-"] {
            if let Some((base, target)) = key.split_once(sep) {
                return Self::checked(base, target, key);
            }
        }
        if key.len() == 6 && key.is_ascii() {
            let (base, target) = key.split_at(3);
            return Self::checked(base, target, key);
        }
        Err(EngineError::InvalidCurrencyPair(key.to_string()))
    }

    fn checked(base: &str, target: &str, key: &str) -> Result<Self> {
        let valid = |code: &str| {
            let code = code.trim();
            code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())
        };
        if valid(base) && valid(target) {
            Ok(Self::new(base, target))
        } else {
            Err(EngineError::InvalidCurrencyPair(key.to_string()))
        }
    }
}

impl std::fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.base, self.target)
    }
}

/// Multipliers keyed by currency pair. Lookups never fall back to 1 for a
/// pair that is not present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "HashMap<String, Decimal>")]
pub struct ExchangeRateTable {
    rates: HashMap<CurrencyPair, Decimal>,
}

impl ExchangeRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, base: &str, target: &str, rate: Decimal) -> Result<()> {
        let pair = CurrencyPair::new(base, target);
        if rate <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                base: pair.base,
                target: pair.target,
                rate,
            });
        }
        self.rates.insert(pair, rate);
        Ok(())
    }

    /// Build a table from quote keys such as `"INRUSD"` or `"INR/USD"`.
    pub fn from_quotes<I, K>(quotes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: AsRef<str>,
    {
        let mut table = Self::new();
        for (key, rate) in quotes {
            let pair = CurrencyPair::parse(key.as_ref())?;
            table.insert(&pair.base, &pair.target, rate)?;
        }
        Ok(table)
    }

    /// Multiplier converting `base` amounts into `target`.
    pub fn rate(&self, base: &str, target: &str) -> Result<Decimal> {
        let pair = CurrencyPair::new(base, target);
        if pair.is_identity() {
            return Ok(Decimal::ONE);
        }
        self.rates
            .get(&pair)
            .copied()
            .ok_or(EngineError::MissingRate {
                base: pair.base,
                target: pair.target,
            })
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl TryFrom<HashMap<String, Decimal>> for ExchangeRateTable {
    type Error = EngineError;

    fn try_from(quotes: HashMap<String, Decimal>) -> Result<Self> {
        Self::from_quotes(quotes)
    }
}
