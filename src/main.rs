mod commands;
mod config;
mod render;
mod source;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spacecal")]
#[command(about = "Render spaces calendar month and quarter grids from an occurrence file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the monthly grid view
    Month {
        #[arg(short, long)]
        year: i32,

        /// Month to render (1-12)
        #[arg(short, long)]
        month: u32,

        /// JSON file with the calendar's occurrences
        #[arg(short, long)]
        occurrences: PathBuf,

        /// Calendar to render (by slug)
        #[arg(short, long, default_value = "calendar")]
        calendar: String,

        /// IANA timezone override (e.g. "Europe/Berlin")
        #[arg(long)]
        timezone: Option<String>,
    },
    /// Render the quarterly view (three months plus navigation)
    Quarter {
        #[arg(short, long)]
        year: i32,

        /// Quarter to render (1-4)
        #[arg(short, long)]
        quarter: u32,

        /// JSON file with the calendar's occurrences
        #[arg(short, long)]
        occurrences: PathBuf,

        /// Calendar to render (by slug)
        #[arg(short, long, default_value = "calendar")]
        calendar: String,

        /// IANA timezone override (e.g. "Europe/Berlin")
        #[arg(long)]
        timezone: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Month {
            year,
            month,
            occurrences,
            calendar,
            timezone,
        } => commands::month::run(year, month, &occurrences, &calendar, timezone.as_deref()),
        Commands::Quarter {
            year,
            quarter,
            occurrences,
            calendar,
            timezone,
        } => commands::quarter::run(year, quarter, &occurrences, &calendar, timezone.as_deref()),
    }
}
