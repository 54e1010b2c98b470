use anyhow::{Context, Result};
use rust_decimal::Decimal;

use ledgerlens::analytics::{
    filter_by_date_range, income_breakdown, income_expense_series, sort_transactions,
    spending_limit_in, SortKey,
};
use ledgerlens::export::{export, ExportFormat, ExportPayload};
use ledgerlens::models::{CurrencyDescriptor, Transaction};

use super::{date_bounds, flag_value, has_flag, positionals, shellexpand, Session};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    let rest = &args[2..];
    match args[1].as_str() {
        "summary" | "s" => cli_summary(rest),
        "list" | "ls" => cli_list(rest),
        "trend" => cli_trend(rest),
        "income" => cli_income(rest),
        "export" => cli_export(rest),
        "currencies" => cli_currencies(),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("ledgerlens {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("LedgerLens - transaction analytics and export for a personal ledger");
    println!();
    println!("Usage: ledgerlens <command> <ledger.csv> [options]");
    println!();
    println!("Commands:");
    println!("  summary <ledger.csv>          Totals and the monthly spending limit");
    println!("  list <ledger.csv>             Latest transactions");
    println!("    --from <YYYY-MM-DD>         Start of date range (needs --to)");
    println!("    --to <YYYY-MM-DD>           End of date range (needs --from)");
    println!("    --sort <date|amount|description>");
    println!("    --all                       List every transaction");
    println!("  trend <ledger.csv>            Income/expense series");
    println!("    --window <monthly|yearly|all-time|custom>");
    println!("    --json                      Print JSON instead of a table");
    println!("  income <ledger.csv>           Income breakdown by description");
    println!("    --window, --json            As for trend");
    println!("  export <ledger.csv> [path]    Export the list view");
    println!("    --format <csv|table>        Table is written as JSON (default: csv)");
    println!("  currencies                    Supported currencies");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Global options:");
    println!("  --currency <CODE>             Display currency");
    println!("  --rates <file.json>           Exchange quotes, e.g. {{\"INRUSD\": 0.012}}");
    println!("  --config <file.json>          Config file (default: user config dir)");
}

fn ledger_arg<'a>(args: &'a [String], command: &str) -> Result<&'a str> {
    positionals(args)
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Usage: ledgerlens {command} <ledger.csv> [options]"))
}

fn sort_key(args: &[String]) -> Result<SortKey> {
    match flag_value(args, "--sort") {
        Some(s) => SortKey::parse(s).ok_or_else(|| {
            let keys: Vec<&str> = SortKey::all().iter().map(|k| k.as_str()).collect();
            anyhow::anyhow!("Unknown sort key '{s}'. Use one of: {}", keys.join(", "))
        }),
        None => Ok(SortKey::default()),
    }
}

/// The list view: newest first, limited to a date range or the latest
/// records, then ordered by `--sort`.
fn list_view(
    args: &[String],
    session: &Session,
    ledger: &[Transaction],
) -> Result<Vec<Transaction>> {
    let (from, to) = date_bounds(args)?;
    let limit = if has_flag(args, "--all") {
        usize::MAX
    } else {
        session.config.recent_limit
    };
    let newest_first = sort_transactions(ledger, SortKey::Date, ledger);
    let view = filter_by_date_range(&newest_first, from, to, limit);
    Ok(sort_transactions(&view, sort_key(args)?, ledger))
}

fn money(value: Decimal, code: &str) -> String {
    let symbol = CurrencyDescriptor::symbol_for(code);
    if symbol.is_empty() {
        format!("{value:.2} {code}")
    } else {
        format!("{symbol}{value:.2}")
    }
}

fn total<'a>(txns: impl Iterator<Item = &'a Transaction>) -> Result<Decimal> {
    txns.map(|t| t.amount)
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| anyhow::anyhow!("Ledger totals exceed the supported amount range"))
}

fn cli_summary(args: &[String]) -> Result<()> {
    let path = ledger_arg(args, "summary")?;
    let session = Session::from_args(args)?;
    let loaded = session.load_ledger(path)?;
    let ledger = &loaded.shown;

    let credits = total(ledger.iter().filter(|t| t.is_credit()))?;
    let debits = total(ledger.iter().filter(|t| t.is_debit()))?;
    let limit = spending_limit_in(
        &loaded.base,
        &session.config.base_currency,
        &session.display,
        &session.rates,
    )?;
    let balance = sort_transactions(ledger, SortKey::Date, ledger)
        .first()
        .map(|t| t.current_balance);
    let code = session.display.as_str();

    println!("LedgerLens - {path}");
    println!("{}", "─".repeat(40));
    println!("  Transactions:   {}", ledger.len());
    println!("  Income:         {}", money(credits, code));
    println!("  Expenses:       {}", money(debits, code));
    if let Some(balance) = balance {
        println!("  Balance:        {}", money(balance, code));
    }
    println!("  Spending limit: {}", money(limit, code));
    if loaded.rejected > 0 {
        println!("  Skipped rows:   {}", loaded.rejected);
    }
    Ok(())
}

fn cli_list(args: &[String]) -> Result<()> {
    let path = ledger_arg(args, "list")?;
    let session = Session::from_args(args)?;
    let ledger = session.load_ledger(path)?.shown;
    let view = list_view(args, &session, &ledger)?;

    if view.is_empty() {
        println!("No transactions");
        return Ok(());
    }

    println!(
        "{:<12} {:>14} {:>14} {:<24} Mode",
        "Date", "Amount", "Balance", "Description"
    );
    println!("{}", "─".repeat(78));
    for txn in &view {
        println!(
            "{:<12} {:>14} {:>14} {:<24} {}",
            txn.day().format("%Y-%m-%d"),
            format!("{:.2}", txn.signed_amount()),
            format!("{:.2}", txn.current_balance),
            txn.description,
            txn.mode,
        );
    }
    println!("{} of {} transactions ({})", view.len(), ledger.len(), session.display);
    Ok(())
}

fn cli_trend(args: &[String]) -> Result<()> {
    let path = ledger_arg(args, "trend")?;
    let session = Session::from_args(args)?;
    let window = session.window(args, session.config.trend_window)?;
    let ledger = session.load_ledger(path)?.shown;
    let series = income_expense_series(&ledger, &window, session.today);

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!("Income vs expense ({window}, {})", session.display);
    println!("{:<14} {:>14} {:>14}", "Date", "Income", "Expense");
    println!("{}", "─".repeat(44));
    for point in &series {
        println!(
            "{:<14} {:>14} {:>14}",
            point.date,
            format!("{:.2}", point.income),
            format!("{:.2}", point.expense)
        );
    }
    Ok(())
}

fn cli_income(args: &[String]) -> Result<()> {
    let path = ledger_arg(args, "income")?;
    let session = Session::from_args(args)?;
    let window = session.window(args, session.config.income_window)?;
    let ledger = session.load_ledger(path)?.shown;
    let breakdown = income_breakdown(&ledger, &window, session.today)?;

    if has_flag(args, "--json") {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    if breakdown.slices.is_empty() {
        println!("No income ({window})");
        return Ok(());
    }

    println!("Income by source ({window})");
    println!("{}", "─".repeat(52));
    for slice in &breakdown.slices {
        println!(
            "  {:<24} {:>14} {:>8}  {}",
            slice.name,
            money(slice.value, &session.display),
            slice.percentage,
            slice.color
        );
    }
    println!("  {:<24} {:>14}", "Total", money(breakdown.total_income, &session.display));
    Ok(())
}

fn cli_export(args: &[String]) -> Result<()> {
    let path = ledger_arg(args, "export")?;
    let format = match flag_value(args, "--format") {
        Some(f) => ExportFormat::parse(f)
            .ok_or_else(|| anyhow::anyhow!("Unknown export format '{f}'. Use csv or table"))?,
        None => ExportFormat::default(),
    };
    let session = Session::from_args(args)?;
    let ledger = session.load_ledger(path)?.shown;
    let view = list_view(args, &session, &ledger)?;

    let payload = export(&view, format, &session.display)?;
    let count = payload.row_count();
    let text = match &payload {
        ExportPayload::Csv { text, .. } => text.clone(),
        ExportPayload::Table(table) => serde_json::to_string_pretty(table)?,
    };

    match positionals(args).get(1) {
        Some(output) => {
            let output = shellexpand(output);
            std::fs::write(&output, &text)
                .with_context(|| format!("Failed to write export: {output}"))?;
            if count == 0 {
                println!("No transactions to export");
            } else {
                println!("Exported {count} transactions to {output}");
            }
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cli_currencies() -> Result<()> {
    for currency in CurrencyDescriptor::all() {
        println!("{currency}");
    }
    Ok(())
}
