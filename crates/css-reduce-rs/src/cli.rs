//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Reduce a stylesheet to the rules a rendered page actually uses.
#[derive(Debug, Parser)]
#[command(name = "css-reduce-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Stylesheet to reduce
    #[arg(long)]
    pub css: Utf8PathBuf,

    /// Rendered page markup used as usage evidence
    #[arg(long)]
    pub html: Utf8PathBuf,

    /// Script file scanned for class-name tokens (repeatable)
    #[arg(long = "js")]
    pub js: Vec<Utf8PathBuf>,

    /// Comma-separated class names to always retain
    #[arg(long)]
    pub safelist: Option<String>,

    /// Drop descendant rules of safelisted classes instead of preserving
    /// everything beneath dynamic-state selectors
    #[arg(long)]
    pub flat: bool,

    /// Overall deadline in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Write the reduced stylesheet here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<Utf8PathBuf>,

    /// Summary format
    #[arg(long, value_enum, default_value = "human")]
    pub format: SummaryFormat,

    /// Directory searched for css-reduce.config.json
    #[arg(long, default_value = ".")]
    pub workspace: Utf8PathBuf,

    /// Suppress the summary
    #[arg(long)]
    pub quiet: bool,
}

/// Summary output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SummaryFormat {
    /// Human-readable summary (default)
    #[default]
    Human,
    /// JSON summary
    Json,
}

/// Parses a comma-separated safelist string into class names.
pub fn parse_safelist(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
