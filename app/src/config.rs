//! FILENAME: app/src/config.rs
// PURPOSE: Command-line arguments and the resolved application configuration.
// CONTEXT: Flags fall back to PINACULO_* environment variables, then defaults.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

/// Compute a Pinnacle numerology report from a name and a birth date.
#[derive(Parser, Debug)]
#[command(name = "pinaculo", version, about)]
pub struct Cli {
    /// Full name of the person.
    #[arg(long, required_unless_present = "preview")]
    pub name: Option<String>,

    /// Birth date as DD/MM/YYYY or YYYY-MM-DD.
    #[arg(long, required_unless_present = "preview")]
    pub date: Option<String>,

    /// Compute the example report for "Carlos Carpio", 06/05/1982.
    #[arg(long, conflicts_with_all = ["name", "date"])]
    pub preview: bool,

    /// Output format.
    #[arg(long, value_enum, env = "PINACULO_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Also write log lines to this file (truncated on start).
    #[arg(long, env = "PINACULO_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// How the report is printed on stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Panels with position titles
    #[default]
    Text,
    /// camelCase JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

// ============================================================================
// RESOLVED CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub format: OutputFormat,
    pub log_file: Option<PathBuf>,
    pub preview: bool,
    pub name: Option<String>,
    pub date: Option<String>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        AppConfig {
            format: cli.format,
            log_file: cli.log_file,
            preview: cli.preview,
            name: cli.name,
            date: cli.date,
        }
    }
}

impl AppConfig {
    /// Parses the process arguments; exits with status 2 on bad arguments.
    pub fn from_args() -> Self {
        AppConfig::from(Cli::parse())
    }

    /// Parses an explicit argument list, the first item being the binary name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(AppConfig::from)
    }
}
