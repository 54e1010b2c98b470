mod currency;
mod exchange;
mod transaction;

pub use currency::CurrencyDescriptor;
pub use exchange::{CurrencyPair, ExchangeRateTable};
pub use transaction::{parse_iso_timestamp, Transaction};
