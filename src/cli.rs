//! CLI interface for daily-review.
//!
//! One command: run the interview on stdin/stdout, then save it.
//! Works the same whether a person types the answers or an agent pipes
//! five lines in.

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use daily_review::config::{Layer, Settings};
use daily_review::journal::{Format, Journal};
use daily_review::session;

/// Daily review: five questions, one dated journal file.
#[derive(Debug, Parser)]
#[command(name = "daily-review", version, after_long_help = FILES_HELP)]
pub struct Cli {
    /// Directory for journal files.
    /// Overrides DAILY_REVIEW_MEMORY_PATH and the config file.
    #[arg(long, value_name = "PATH")]
    memory_path: Option<PathBuf>,

    /// Output format.
    /// Overrides DAILY_REVIEW_FORMAT and the config file.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

const FILES_HELP: &str = r#"Files:
  <memory-path>/YYYY-MM-DD.md     every review of the day, appended
  <memory-path>/YYYY-MM-DD.json   latest review of the day only

Config (~/.daily-review/config.toml):
  memory-path = "/path/to/journal"
  format = "md""#;

/// CLI-facing format, mapped to the domain `Format`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Markdown block, appended to today's log.
    #[value(alias = "markdown")]
    Md,
    /// JSON object, replacing today's snapshot.
    #[value(alias = "structured")]
    Json,
}

impl FormatArg {
    fn to_domain(self) -> Format {
        match self {
            Self::Md => Format::Markdown,
            Self::Json => Format::Structured,
        }
    }
}

impl Cli {
    /// Flags as the highest-priority settings layer.
    fn flags(&self) -> Layer {
        Layer {
            memory_path: self.memory_path.clone(),
            format: self.format.map(FormatArg::to_domain),
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.flags()).map_err(|e| e.to_string())?;
    cmd_review(&settings)
}

fn cmd_review(settings: &Settings) -> Result<(), String> {
    let record = session::run_session(&mut io::stdin().lock(), &mut io::stdout().lock())
        .map_err(|e| format!("review not saved: {e}"))?;

    let path = Journal::new(&settings.memory_path)
        .write(record, settings.format)
        .map_err(|e| format!("error saving review: {e}"))?;

    println!("\n✅ Review saved to: {}", path.display());
    println!("   Keep shipping. Keep learning. 🎯");
    Ok(())
}
