use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sling_activity::{ActivityDescription, ActivityDigest, describe};
use sling_core::TransactionRecord;
use sling_ingest::{IngestReport, parse_activity_file};
use std::path::PathBuf;

mod config;
mod logging;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "sling", version, about = "Classify and describe Sling activity-feed rows")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one row given on the command line
    Describe {
        /// Avatar identifier (domain, asset tag, initials or emoji)
        #[arg(long)]
        avatar: String,

        /// Counterparty or merchant name
        #[arg(long)]
        title: String,

        /// Free-text annotation, e.g. "Card payment"
        #[arg(long, default_value = "")]
        subtitle: String,

        /// Signed amount, e.g. -£100.00
        #[arg(long, allow_hyphen_values = true)]
        amount: String,

        /// Secondary annotation, e.g. "+0.50 AAPL"
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        detail: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Describe every row of a feed export (CSV or JSON)
    Feed {
        /// Feed export path (defaults to feed.default_path from config)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Only rows dated on or after this day (YYYY-MM-DD)
        #[arg(long)]
        since: Option<NaiveDate>,

        /// Print JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Per-category totals for a feed export
    Digest {
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long)]
        since: Option<NaiveDate>,
    },

    /// Manage ~/.sling/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    logging::init(&cfg.log.level);

    match cli.command {
        Command::Describe {
            avatar,
            title,
            subtitle,
            amount,
            detail,
            json,
        } => {
            if !amount.starts_with(['+', '-']) {
                bail!("amount must start with + or - (got {amount:?})");
            }
            let record = TransactionRecord::new(avatar, title, subtitle, amount)
                .with_subtitle_right(detail);
            let description = describe(&record);
            if json {
                println!("{}", serde_json::to_string_pretty(&description)?);
            } else {
                println!("kind:     {}", description.classification.kind);
                if let Some(flow) = description.classification.savings {
                    println!("savings:  {flow:?}");
                }
                println!("headline: {}", description.headline());
                println!(
                    "category: {} ({})",
                    description.category.name, description.category.icon
                );
            }
        }

        Command::Feed { file, since, json } => {
            let report = load_feed(&cfg, file, since)?;
            for entry in &report.entries {
                let description = describe(&entry.record);
                if json {
                    println!("{}", serde_json::to_string(&description)?);
                } else {
                    let date = entry
                        .date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "----------".to_string());
                    println!("{date}  {}", format_row(&description, &cfg));
                }
            }
            if !json {
                print_rejected(&report);
            }
        }

        Command::Digest { file, since } => {
            let report = load_feed(&cfg, file, since)?;
            let digest = ActivityDigest::build(&report.records());

            println!("{} rows in {} categories\n", report.entries.len(), digest.len());
            for s in &digest {
                let icon = if cfg.display.show_icons {
                    format!(" [{}]", s.icon)
                } else {
                    String::new()
                };
                println!(
                    "{}{} | count={} | out={:.2} | in={:.2}",
                    s.name, icon, s.count, s.money_out, s.money_in
                );
                for headline in &s.sample_headlines {
                    println!("    - {headline}");
                }
            }
            print_rejected(&report);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn load_feed(cfg: &Config, file: Option<PathBuf>, since: Option<NaiveDate>) -> Result<IngestReport> {
    let path = file.unwrap_or_else(|| PathBuf::from(&cfg.feed.default_path));
    if !path.exists() {
        bail!("feed not found: {} (pass --file <path>)", path.display());
    }
    let report = parse_activity_file(&path).with_context(|| format!("loading {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = report.entries.len(), "loaded feed");
    Ok(match since {
        Some(day) => report.since(day),
        None => report,
    })
}

fn format_row(description: &ActivityDescription, cfg: &Config) -> String {
    let mut line = format!(
        "{:<24} {:<48} {}",
        description.classification.kind.as_str(),
        description.headline(),
        description.category.name
    );
    if cfg.display.show_icons {
        line.push_str(&format!(" [{}]", description.category.icon));
    }
    line
}

fn print_rejected(report: &IngestReport) {
    if report.rejected.is_empty() {
        return;
    }
    println!("\nSkipped {} rows:", report.rejected.len());
    for (row, err) in &report.rejected {
        println!("  row {row}: {err}");
    }
}
