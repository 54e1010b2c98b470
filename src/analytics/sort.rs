use std::collections::HashMap;

use crate::models::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent first.
    #[default]
    Date,
    /// Largest magnitude first.
    Amount,
    /// Most frequent description (over the whole ledger) first.
    Description,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
            Self::Description => "description",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "date" => Some(Self::Date),
            "amount" => Some(Self::Amount),
            "description" | "frequency" => Some(Self::Description),
            _ => None,
        }
    }

    pub fn all() -> &'static [SortKey] {
        &[Self::Date, Self::Amount, Self::Description]
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Occurrence count of every description in `population`.
pub fn description_frequencies(population: &[Transaction]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for txn in population {
        *counts.entry(txn.description.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Return `records` ordered by `key`. All orderings are stable.
///
/// `population` is the full ledger; the description key ranks by how often a
/// description occurs there, so a filtered view keeps the global popularity.
pub fn sort_transactions(
    records: &[Transaction],
    key: SortKey,
    population: &[Transaction],
) -> Vec<Transaction> {
    let mut sorted = records.to_vec();
    match key {
        SortKey::Date => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Amount => sorted.sort_by(|a, b| b.amount.cmp(&a.amount)),
        SortKey::Description => {
            let frequencies = description_frequencies(population);
            let count = |t: &Transaction| {
                frequencies
                    .get(t.description.as_str())
                    .copied()
                    .unwrap_or(0)
            };
            sorted.sort_by_key(|t| std::cmp::Reverse(count(t)));
        }
    }
    sorted
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
