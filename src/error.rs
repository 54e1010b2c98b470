use thiserror::Error;

/// Failures surfaced by the analytics and export engine.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No exchange rate for {base}->{target}")]
    MissingRate { base: String, target: String },

    #[error("Exchange rate for {base}->{target} must be positive, got {rate}")]
    InvalidRate {
        base: String,
        target: String,
        rate: rust_decimal::Decimal,
    },

    #[error("Amount out of range while {0}")]
    Overflow(&'static str),

    #[error("Invalid currency pair: {0}")]
    InvalidCurrencyPair(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
