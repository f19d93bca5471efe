mod ranges;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ranges::{
    commands, data,
    registry::{Registry, QUICK_RANGES_KEY},
};

#[derive(Parser)]
#[clap(about)]
/// A CLI for the quick time-range presets of the dashboard time picker
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display all presets, grouped by section
    All,
    /// Display the preset sections and their entry counts
    Sections,
    /// Display a single preset by its label
    Show {
        /// Label of the preset, e.g. "Last 7 days"
        #[arg(value_parser = parse_label)]
        display: String,
    },
    /// Display the presets of a single section
    Section {
        /// Section index
        index: u32,
    },
    /// Export the presets as JSON
    Export {
        /// File to write to instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the preset table
    Check,
}

fn main() {
    if let Err(e) = run() {
        print!("{e}");
    }
}

fn run() -> Result<()> {
    let cli = Cli::try_parse()?;

    let mut registry = Registry::new();
    registry.register(QUICK_RANGES_KEY, data::quick_ranges())?;

    match cli.command {
        Command::All => commands::all(&registry),
        Command::Sections => commands::sections(&registry),
        Command::Show { display } => commands::show(&registry, display),
        Command::Section { index } => commands::section(&registry, index),
        Command::Export { output } => commands::export(&registry, output),
        Command::Check => commands::check(&registry),
    }
}

fn parse_label(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("label must not be empty".to_string());
    }
    Ok(s.to_string())
}
