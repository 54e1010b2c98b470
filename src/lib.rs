//! LedgerLens turns a personal-finance ledger into the numbers a dashboard
//! shows: currency-converted views, a spending limit, date-range and sort
//! views, an income/expense series, an income breakdown and CSV/table exports.

pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;

pub use error::{EngineError, Result};
