use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use finly_core::bill::{Bill, Frequency, due_within, overdue};
use finly_core::currency::CurrencyInfo;
use finly_core::stats::{category_breakdown, compute_stats, monthly_series};
use finly_core::time::{date_in_tz, month_of, today_in_tz};
use finly_core::{Category, CategoryKind, Transaction, TxKind, TxSource, format_amount};
use finly_ingest::load_backup;
use finly_sms::{CandidateTransaction, parse_sms_transaction};

mod config;
mod store;

#[derive(Parser, Debug)]
#[command(name = "finly", version, about = "Local-first personal finance tracker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions from an SMS backup (JSON, XML, CSV, or plain text)
    Import {
        /// Path to the exported backup file
        file: PathBuf,

        /// Record every extracted transaction in the store
        #[arg(long)]
        save: bool,

        /// Show at most this many candidates
        #[arg(long)]
        limit: Option<usize>,

        /// Also list messages that produced no transaction
        #[arg(long)]
        show_skipped: bool,
    },

    /// Run the extractor on a single pasted message
    Parse {
        /// Message body
        text: String,

        /// Originating address/name
        #[arg(long, default_value = "UNKNOWN")]
        sender: String,
    },

    /// Record a transaction manually
    Add {
        /// income | expense
        #[arg(long)]
        kind: String,

        #[arg(long)]
        amount: f64,

        /// Category id (see `finly categories`)
        #[arg(long)]
        category: String,

        #[arg(long)]
        description: Option<String>,

        /// YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        merchant: Option<String>,
    },

    /// List stored transactions, newest first
    List {
        /// Restrict to one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,

        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Current-month summary: totals, growth, breakdown, due bills
    Dashboard,

    /// Manage recurring bills
    Bill {
        #[command(subcommand)]
        command: BillCommand,
    },

    /// List the category vocabulary
    Categories,

    /// Export stored transactions
    Export {
        /// Output file
        out: PathBuf,

        /// json | csv
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Show or change settings (currency region, timezone)
    Config {
        #[arg(long)]
        region: Option<String>,

        #[arg(long)]
        timezone: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum BillCommand {
    /// Add a bill
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        amount: f64,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,

        /// Category id (default: utilities)
        #[arg(long, default_value = "utilities")]
        category: String,

        /// monthly | quarterly | yearly; makes the bill recurring
        #[arg(long)]
        frequency: Option<String>,
    },

    /// List all bills
    List,

    /// Mark a bill paid (recurring bills roll to the next cycle)
    Pay {
        id: String,
    },

    /// Bills due soon, plus anything overdue
    Due {
        /// Days ahead to look
        #[arg(long, default_value_t = 7)]
        window: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Import { file, save, limit, show_skipped } => {
            import(file, save, limit, show_skipped)?;
        }
        Command::Parse { text, sender } => {
            let cfg = config::load_config()?;
            match parse_sms_transaction(&text, &sender) {
                Some(c) => print_candidate(&c, cfg.currency()),
                None => println!("No transaction detected."),
            }
        }
        Command::Add { kind, amount, category, description, date, merchant } => {
            add(kind, amount, category, description, date, merchant)?;
        }
        Command::List { month, limit } => {
            list(month, limit)?;
        }
        Command::Dashboard => {
            dashboard()?;
        }
        Command::Bill { command } => match command {
            BillCommand::Add { name, amount, due, category, frequency } => {
                bill_add(name, amount, due, category, frequency)?;
            }
            BillCommand::List => bill_list()?,
            BillCommand::Pay { id } => bill_pay(&id)?,
            BillCommand::Due { window } => bill_due(window)?,
        },
        Command::Categories => {
            print_categories();
        }
        Command::Export { out, format } => {
            export(out, &format)?;
        }
        Command::Config { region, timezone } => {
            configure(region, timezone)?;
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> Result<TxKind> {
    match s {
        "income" => Ok(TxKind::Income),
        "expense" => Ok(TxKind::Expense),
        other => bail!("kind must be income or expense, got: {other}"),
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date (YYYY-MM-DD): {s}"))
}

fn parse_frequency(s: &str) -> Result<Frequency> {
    match s {
        "monthly" => Ok(Frequency::Monthly),
        "quarterly" => Ok(Frequency::Quarterly),
        "yearly" => Ok(Frequency::Yearly),
        other => bail!("frequency must be monthly, quarterly, or yearly, got: {other}"),
    }
}

fn kind_str(kind: TxKind) -> &'static str {
    match kind {
        TxKind::Income => "income",
        TxKind::Expense => "expense",
    }
}

fn preview(content: &str) -> String {
    let flat = content.replace('\n', " ");
    if flat.chars().count() > 60 {
        let cut: String = flat.chars().take(57).collect();
        format!("{}...", cut.trim_end())
    } else {
        flat
    }
}

fn print_candidate(c: &CandidateTransaction, currency: &CurrencyInfo) {
    let mut line = format!(
        "[{}] {} {} | {}",
        kind_str(c.kind),
        format_amount(c.amount, currency),
        c.category.id(),
        c.description
    );
    if let Some(account) = &c.account {
        line.push_str(&format!(" | a/c {account}"));
    }
    println!("- {line}");
}

fn import(file: PathBuf, save: bool, limit: Option<usize>, show_skipped: bool) -> Result<()> {
    if !file.exists() {
        bail!("backup not found: {}", file.display());
    }

    let cfg = config::load_config()?;
    let messages = load_backup(&file, Utc::now())?;
    println!("Loaded {} messages from {}\n", messages.len(), file.display());

    let mut extracted = Vec::new();
    let mut skipped = 0usize;
    for msg in &messages {
        match parse_sms_transaction(&msg.content, &msg.sender) {
            Some(candidate) => extracted.push((msg, candidate)),
            None => {
                skipped += 1;
                if show_skipped {
                    println!("  (no transaction) {}: {}", msg.sender, preview(&msg.content));
                }
            }
        }
    }

    let shown = limit.unwrap_or(extracted.len()).min(extracted.len());
    for (_, candidate) in extracted.iter().take(shown) {
        print_candidate(candidate, cfg.currency());
    }
    if extracted.len() > shown {
        println!("  ... and {} more", extracted.len() - shown);
    }

    println!(
        "\n{} of {} messages produced transactions ({} skipped)",
        extracted.len(),
        messages.len(),
        skipped
    );

    if !save {
        if !extracted.is_empty() {
            println!("Re-run with --save to record them.");
        }
        return Ok(());
    }

    let today = today_in_tz(&cfg.timezone)?;
    let mut txns = store::load_transactions()?;
    let mut recorded = 0usize;
    for (msg, candidate) in extracted {
        let id = store::next_id("tx", txns.iter().map(|t| t.id.as_str()));
        // Prefer the backup's message timestamp as the transaction date
        let date = date_in_tz(msg.received_at, &cfg.timezone).unwrap_or(today);
        txns.push(candidate.into_transaction(id, date, Utc::now()));
        recorded += 1;
    }
    store::save_transactions(&txns)?;
    println!("Recorded {recorded} transactions ({} total in store).", txns.len());

    Ok(())
}

fn add(
    kind: String,
    amount: f64,
    category: String,
    description: Option<String>,
    date: Option<String>,
    merchant: Option<String>,
) -> Result<()> {
    let kind = parse_kind(&kind)?;
    let category = Category::from_id(&category)
        .with_context(|| format!("unknown category: {category} (see `finly categories`)"))?;

    match kind {
        TxKind::Income if category.kind() != CategoryKind::Income => {
            bail!("{} is not an income category", category.id())
        }
        TxKind::Expense if category.kind() == CategoryKind::Income => {
            bail!("{} is an income category", category.id())
        }
        _ => {}
    }

    if !(amount.is_finite() && amount > 0.0) {
        bail!("amount must be a positive number");
    }

    let cfg = config::load_config()?;
    let date = match date {
        Some(d) => parse_date(&d)?,
        None => today_in_tz(&cfg.timezone)?,
    };

    let mut txns = store::load_transactions()?;
    let id = store::next_id("tx", txns.iter().map(|t| t.id.as_str()));
    let description = description.unwrap_or_else(|| category.display_name().to_string());

    let mut tx = Transaction::new(
        id.clone(),
        kind,
        amount,
        category,
        description,
        date,
        Utc::now(),
        TxSource::Manual,
    );
    if let Some(m) = merchant {
        tx = tx.with_merchant(m);
    }
    txns.push(tx);
    store::save_transactions(&txns)?;

    println!("Recorded {id}: [{}] {} {}", kind_str(kind), format_amount(amount, cfg.currency()), category.id());
    Ok(())
}

fn parse_month(s: &str) -> Result<(i32, u32)> {
    let parsed = (|| {
        let (y, m) = s.split_once('-')?;
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        (1..=12).contains(&month).then_some((year, month))
    })();
    parsed.with_context(|| format!("invalid month (YYYY-MM): {s}"))
}

fn list(month: Option<String>, limit: usize) -> Result<()> {
    let cfg = config::load_config()?;
    let mut txns = store::load_transactions()?;

    if let Some(month) = month {
        let (year, month) = parse_month(&month)?;
        txns.retain(|t| month_of(t.date) == (year, month));
    }

    txns.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

    for t in txns.iter().take(limit) {
        let mut line = format!(
            "{}  {}  [{}] {:>12}  {:<14} {}",
            t.id,
            t.date,
            kind_str(t.kind),
            format_amount(t.amount, cfg.currency()),
            t.category.id(),
            t.description
        );
        if let Some(merchant) = &t.merchant {
            line.push_str(&format!(" ({merchant})"));
        }
        println!("{line}");
    }

    if txns.len() > limit {
        println!("... and {} more", txns.len() - limit);
    }
    println!("\n{} transactions", txns.len());
    Ok(())
}

fn dashboard() -> Result<()> {
    let cfg = config::load_config()?;
    let currency = cfg.currency();
    let today = today_in_tz(&cfg.timezone)?;
    let txns = store::load_transactions()?;
    let bills = store::load_bills()?;

    let stats = compute_stats(&txns, today);
    let (year, month) = month_of(today);

    println!("# Finly dashboard: {}\n", today.format("%B %Y"));
    println!(
        "Income:    {:>14}   {:+.1}% vs last month",
        format_amount(stats.total_income, currency),
        stats.income_growth
    );
    println!(
        "Expenses:  {:>14}   {:+.1}% vs last month",
        format_amount(stats.total_expenses, currency),
        stats.expense_growth
    );
    println!(
        "Net:       {:>14}   {:+.1}% vs last month",
        format_amount(stats.net_income, currency),
        stats.net_growth
    );
    println!("Savings rate: {:.1}%", stats.savings_rate);
    if let Some(top) = stats.top_category {
        println!("Top spending: {}", top.display_name());
    }

    let breakdown = category_breakdown(&txns, year, month);
    if !breakdown.is_empty() {
        println!("\n## Spending by category\n");
        for (category, total) in &breakdown {
            println!("  {:<16} {:>14}", category.display_name(), format_amount(*total, currency));
        }
    }

    println!("\n## Last 6 months\n");
    for p in monthly_series(&txns, year, month, 6) {
        println!(
            "  {:04}-{:02}   in {:>14}   out {:>14}",
            p.year,
            p.month,
            format_amount(p.income, currency),
            format_amount(p.expenses, currency)
        );
    }

    let late = overdue(&bills, today);
    let upcoming = due_within(&bills, today, 7);
    if !late.is_empty() || !upcoming.is_empty() {
        println!("\n## Bills\n");
        for b in late {
            println!(
                "  OVERDUE  {:<20} {:>12}  was due {}",
                b.name,
                format_amount(b.amount, currency),
                b.due_date
            );
        }
        for b in upcoming {
            println!(
                "  due in {:>2}d  {:<20} {:>12}",
                b.days_until_due(today),
                b.name,
                format_amount(b.amount, currency)
            );
        }
    }

    Ok(())
}

fn bill_add(name: String, amount: f64, due: String, category: String, frequency: Option<String>) -> Result<()> {
    let category = Category::from_id(&category)
        .with_context(|| format!("unknown category: {category} (see `finly categories`)"))?;
    if category.kind() == CategoryKind::Income {
        bail!("{} is an income category", category.id());
    }
    if !(amount.is_finite() && amount > 0.0) {
        bail!("amount must be a positive number");
    }
    let due = parse_date(&due)?;

    let mut bills = store::load_bills()?;
    let id = store::next_id("bill", bills.iter().map(|b| b.id.as_str()));
    let mut bill = Bill::new(id.clone(), name, amount, due, category, Utc::now());
    if let Some(freq) = frequency {
        bill = bill.recurring(parse_frequency(&freq)?);
    }
    bills.push(bill);
    store::save_bills(&bills)?;

    println!("Added {id} (due {due})");
    Ok(())
}

fn bill_list() -> Result<()> {
    let cfg = config::load_config()?;
    let today = today_in_tz(&cfg.timezone)?;
    let bills = store::load_bills()?;

    for b in &bills {
        let status = if b.is_paid {
            "paid".to_string()
        } else if b.is_overdue(today) {
            "OVERDUE".to_string()
        } else {
            format!("due {}", b.due_date)
        };
        let cadence = match b.frequency {
            Some(Frequency::Monthly) => " (monthly)",
            Some(Frequency::Quarterly) => " (quarterly)",
            Some(Frequency::Yearly) => " (yearly)",
            None => "",
        };
        println!(
            "{}  {:<20} {:>12}  {:<12} {}{}",
            b.id,
            b.name,
            format_amount(b.amount, cfg.currency()),
            b.category.id(),
            status,
            cadence
        );
    }

    println!("\n{} bills", bills.len());
    Ok(())
}

fn bill_pay(id: &str) -> Result<()> {
    let mut bills = store::load_bills()?;
    let Some(bill) = bills.iter_mut().find(|b| b.id == id) else {
        bail!("no bill with id {id}");
    };

    let was_recurring = bill.is_recurring;
    bill.mark_paid();
    let message = if was_recurring {
        format!("Paid {id}; next due {}", bill.due_date)
    } else {
        format!("Paid {id}")
    };
    store::save_bills(&bills)?;
    println!("{message}");
    Ok(())
}

fn bill_due(window: i64) -> Result<()> {
    let cfg = config::load_config()?;
    let today = today_in_tz(&cfg.timezone)?;
    let bills = store::load_bills()?;

    let late = overdue(&bills, today);
    for b in &late {
        println!("OVERDUE  {:<20} {:>12}  was due {}", b.name, format_amount(b.amount, cfg.currency()), b.due_date);
    }

    let upcoming = due_within(&bills, today, window);
    for b in &upcoming {
        println!(
            "in {:>2}d   {:<20} {:>12}",
            b.days_until_due(today),
            b.name,
            format_amount(b.amount, cfg.currency())
        );
    }

    if late.is_empty() && upcoming.is_empty() {
        println!("Nothing due in the next {window} days.");
    }
    Ok(())
}

fn print_categories() {
    for (kind, title) in [
        (CategoryKind::Income, "Income"),
        (CategoryKind::Expense, "Expense"),
        (CategoryKind::Bill, "Bills"),
    ] {
        println!("{title}:");
        for category in Category::of_kind(kind) {
            println!("  {:<16} {}", category.id(), category.display_name());
        }
    }
}

fn export(out: PathBuf, format: &str) -> Result<()> {
    let txns = store::load_transactions()?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&txns)?;
            std::fs::write(&out, json).with_context(|| format!("write {}", out.display()))?;
        }
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)
                .with_context(|| format!("write {}", out.display()))?;
            wtr.write_record([
                "id", "type", "amount", "category", "description", "date", "source", "merchant",
                "account",
            ])?;
            for t in &txns {
                let amount = format!("{:.2}", t.amount);
                let date = t.date.to_string();
                let source = match t.source {
                    TxSource::Manual => "manual",
                    TxSource::Sms => "sms",
                };
                wtr.write_record([
                    t.id.as_str(),
                    kind_str(t.kind),
                    amount.as_str(),
                    t.category.id(),
                    t.description.as_str(),
                    date.as_str(),
                    source,
                    t.merchant.as_deref().unwrap_or(""),
                    t.account.as_deref().unwrap_or(""),
                ])?;
            }
            wtr.flush()?;
        }
        other => bail!("unsupported format: {other} (use json or csv)"),
    }

    println!("Exported {} transactions to {}", txns.len(), out.display());
    Ok(())
}

fn configure(region: Option<String>, timezone: Option<String>) -> Result<()> {
    let mut cfg = config::load_config()?;

    if region.is_none() && timezone.is_none() {
        let currency = cfg.currency();
        println!("region   = {}  ({} {})", cfg.region, currency.name, currency.symbol);
        println!("timezone = {}", cfg.timezone);
        return Ok(());
    }

    if let Some(region) = region {
        let region = region.to_ascii_uppercase();
        let Some(currency) = finly_core::currency_for_region(&region) else {
            bail!("unknown region: {region}");
        };
        println!("Currency set to {} ({})", currency.name, currency.symbol);
        cfg.region = region;
    }

    if let Some(timezone) = timezone {
        // Validates the IANA name as a side effect
        today_in_tz(&timezone).with_context(|| format!("unknown timezone: {timezone}"))?;
        cfg.timezone = timezone;
    }

    config::save_config(&cfg)?;
    println!("Saved {}", config::config_path()?.display());
    Ok(())
}
