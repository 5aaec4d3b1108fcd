use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use fincast::config::PlanConfig;
use fincast::display::ProjectionReport;
use fincast::projection;

#[derive(Parser)]
#[command(
    name = "fincast",
    author = "Kaylee Beyene",
    version,
    about = "Command-line personal finance projection tool",
    long_about = "fincast reads a YAML snapshot of your accounts, monthly expenses, \
                  and monthly income, then projects account balances forward month \
                  by month with compounded growth, recurring contributions, and an \
                  annual income raise."
)]
struct Cli {
    /// Path to the YAML plan file
    plan: PathBuf,

    /// Number of months to project
    #[arg(short, long, default_value_t = 14)]
    months: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned table for the terminal
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let contents = fs::read_to_string(&cli.plan)
        .with_context(|| format!("Failed to read plan file: {}", cli.plan.display()))?;
    let document: serde_yaml::Value =
        serde_yaml::from_str(&contents).context("Failed to parse plan file as YAML")?;

    let (plan, warnings) = PlanConfig::from_yaml(&document);
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    let mut assets = plan.into_assets()?;
    projection::run(&mut assets, cli.months);

    let report = ProjectionReport::new(&assets, cli.months);
    match cli.format {
        OutputFormat::Text => print!("{}", report.format_terminal()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
