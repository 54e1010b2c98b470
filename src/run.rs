mod cli;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::warn;

use ledgerlens::analytics::{convert_transactions, TimeWindow};
use ledgerlens::config::{self, Config};
use ledgerlens::import::LedgerImporter;
use ledgerlens::models::{ExchangeRateTable, Transaction};

pub(crate) use cli::{as_cli, print_usage};

/// Flags that consume the following argument.
const VALUE_FLAGS: &[&str] = &[
    "--currency",
    "--rates",
    "--config",
    "--from",
    "--to",
    "--sort",
    "--window",
    "--format",
];

/// A ledger as read from disk and as shown to the user.
pub(crate) struct LoadedLedger {
    /// Amounts in the configured base currency.
    pub base: Vec<Transaction>,
    /// Amounts in the display currency.
    pub shown: Vec<Transaction>,
    pub rejected: usize,
}

/// Everything a command needs besides its own flags.
pub(crate) struct Session {
    pub config: Config,
    pub rates: ExchangeRateTable,
    /// Currency shown to the user; ledger amounts are in `config.base_currency`.
    pub display: String,
    pub today: NaiveDate,
}

impl Session {
    pub fn from_args(args: &[String]) -> Result<Self> {
        let config_path = match flag_value(args, "--config") {
            Some(path) => PathBuf::from(shellexpand(path)),
            None => config::default_path()?,
        };
        let config = Config::load(&config_path)?;

        let rates = match flag_value(args, "--rates") {
            Some(path) => config::load_rates(Path::new(&shellexpand(path)))?,
            None => config.load_rates()?,
        };

        let display = flag_value(args, "--currency")
            .unwrap_or(&config.display_currency)
            .trim()
            .to_uppercase();

        Ok(Self {
            config,
            rates,
            display,
            today: chrono::Local::now().date_naive(),
        })
    }

    /// Read a ledger and convert it into the display currency. Rejected rows
    /// are reported on stderr and otherwise ignored.
    pub fn load_ledger(&self, path: &str) -> Result<LoadedLedger> {
        let path = shellexpand(path);
        let path = Path::new(&path);
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }

        let ingested = LedgerImporter::read_path(path)?;
        for rejection in &ingested.rejected {
            warn!(line = rejection.line, reason = %rejection.reason, "row skipped");
        }

        let shown = convert_transactions(
            &ingested.transactions,
            &self.config.base_currency,
            &self.display,
            &self.rates,
        )
        .with_context(|| {
            format!(
                "Cannot show {} ledger in {}; add the rate with --rates <file.json>",
                self.config.base_currency, self.display
            )
        })?;
        Ok(LoadedLedger {
            rejected: ingested.rejected.len(),
            base: ingested.transactions,
            shown,
        })
    }

    /// `--window` (or `fallback`) combined with `--from`/`--to` bounds.
    pub fn window(&self, args: &[String], fallback: TimeWindow) -> Result<TimeWindow> {
        let (from, to) = date_bounds(args)?;
        let Some(mode) = flag_value(args, "--window") else {
            return Ok(match (from, to) {
                (Some(start), Some(end)) => TimeWindow::Custom { start, end },
                _ => fallback,
            });
        };
        TimeWindow::parse(mode, from, to).ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid window '{mode}'. Use monthly, yearly, all-time or custom --from D --to D"
            )
        })
    }
}

pub(crate) fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

pub(crate) fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Arguments that are neither flags nor flag values.
pub(crate) fn positionals(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        } else if !arg.starts_with('-') {
            out.push(arg.as_str());
        }
    }
    out
}

pub(crate) fn date_bounds(args: &[String]) -> Result<(Option<NaiveDate>, Option<NaiveDate>)> {
    let parse = |flag: &str| -> Result<Option<NaiveDate>> {
        flag_value(args, flag)
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .with_context(|| format!("{flag} expects YYYY-MM-DD, got '{s}'"))
            })
            .transpose()
    };
    Ok((parse("--from")?, parse("--to")?))
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
