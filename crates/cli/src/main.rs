use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use variadics::collections::sequences_equal;

mod parse;

use parse::{bind_report, parse_slot_names, parse_token_list};

#[derive(Parser)]
#[command(name = "variadics")]
#[command(about = "Bind positional optional arguments and compare sequences")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Bind VALUES onto the named slots; `nil` marks an omitted value
    Bind {
        /// Comma-separated slot names, e.g. name,age,height
        #[arg(long)]
        slots: String,
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Compare two comma-separated sequences element-wise
    Equal {
        #[arg(long, allow_hyphen_values = true)]
        left: String,
        #[arg(long, allow_hyphen_values = true)]
        right: String,
    },
    /// Print the library name and version as JSON
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Bind { slots, values } => run_bind(&slots, &values),
        Action::Equal { left, right } => run_equal(&left, &right),
        Action::Report => report(),
    }
}

fn run_bind(slots: &str, values: &[String]) -> Result<()> {
    let names = parse_slot_names(slots).context("parsing --slots")?;
    tracing::info!(slots = names.len(), supplied = values.len(), "bind");
    if values.len() > names.len() {
        tracing::debug!(
            ignored = values.len() - names.len(),
            "more values than slots"
        );
    }

    let report = bind_report(names, values);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_equal(left: &str, right: &str) -> Result<()> {
    let (l, r) = (parse_token_list(left), parse_token_list(right));
    tracing::debug!(left = l.len(), right = r.len(), "equal");
    let equal = sequences_equal(&l, &r);
    println!("{}", equal);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "name": "variadics",
        "version": variadics::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
