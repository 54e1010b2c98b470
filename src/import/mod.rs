mod columns;
mod csv_import;

pub use columns::LedgerColumns;
pub use csv_import::{Ingested, LedgerImporter, Rejection};
