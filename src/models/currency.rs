use serde::Serialize;

/// Display metadata for a currency. `code` is the join key into the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyDescriptor {
    pub code: &'static str,
    pub symbol: &'static str,
    pub country: &'static str,
}

impl CurrencyDescriptor {
    const fn new(code: &'static str, symbol: &'static str, country: &'static str) -> Self {
        Self {
            code,
            symbol,
            country,
        }
    }

    pub fn all() -> &'static [CurrencyDescriptor] {
        CURRENCIES
    }

    /// Find a currency by ISO code (case-insensitive).
    pub fn find(code: &str) -> Option<&'static CurrencyDescriptor> {
        CURRENCIES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Symbol for `code`, or an empty string for currencies not in the table.
    pub fn symbol_for(code: &str) -> &'static str {
        Self::find(code).map(|c| c.symbol).unwrap_or("")
    }
}

impl std::fmt::Display for CurrencyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.country, self.code, self.symbol)
    }
}

const CURRENCIES: &[CurrencyDescriptor] = &[
    CurrencyDescriptor::new("INR", "₹", "India"),
    CurrencyDescriptor::new("USD", "$", "United States"),
    CurrencyDescriptor::new("EUR", "€", "European Union"),
    CurrencyDescriptor::new("GBP", "£", "United Kingdom"),
    CurrencyDescriptor::new("JPY", "¥", "Japan"),
    CurrencyDescriptor::new("CNY", "¥", "China"),
    CurrencyDescriptor::new("AUD", "A$", "Australia"),
    CurrencyDescriptor::new("CAD", "C$", "Canada"),
    CurrencyDescriptor::new("CHF", "Fr", "Switzerland"),
    CurrencyDescriptor::new("SGD", "S$", "Singapore"),
    CurrencyDescriptor::new("AED", "د.إ", "United Arab Emirates"),
    CurrencyDescriptor::new("NZD", "NZ$", "New Zealand"),
];
