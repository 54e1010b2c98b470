use anyhow::Result;

/// Positions of the ledger fields within a CSV header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerColumns {
    pub id: Option<usize>,
    pub amount: usize,
    pub increment: usize,
    pub current_balance: Option<usize>,
    pub description: Option<usize>,
    pub mode: Option<usize>,
    pub date: usize,
    pub user_id: Option<usize>,
}

impl LedgerColumns {
    /// Map header names (case-insensitive, common aliases accepted) to
    /// column positions. `amount`, `increment` and `date` are required.
    pub fn from_headers(headers: &[String]) -> Result<Self> {
        let h: Vec<String> = headers
            .iter()
            .map(|s| s.trim().to_lowercase().replace([' ', '-'], "_"))
            .collect();

        let required = |names: &[&str]| {
            col_index(&h, names).ok_or_else(|| {
                anyhow::anyhow!(
                    "Ledger CSV is missing a '{}' column (found: {})",
                    names[0],
                    headers.join(", ")
                )
            })
        };

        Ok(Self {
            id: col_index(&h, &["id", "_id", "transaction_id"]),
            amount: required(&["amount"])?,
            increment: required(&["increment", "is_credit", "credit"])?,
            current_balance: col_index(&h, &["currentbalance", "current_balance", "balance"]),
            description: col_index(&h, &["description", "category", "label"]),
            mode: col_index(&h, &["mode", "payment_mode", "channel"]),
            date: required(&["date", "timestamp", "created_at"])?,
            user_id: col_index(&h, &["user_id", "userid", "user"]),
        })
    }
}

fn col_index(headers: &[String], names: &[&str]) -> Option<usize> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|h| h == name))
}
