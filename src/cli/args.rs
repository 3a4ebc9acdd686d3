//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::compat::RuleKind;
use crate::config::{ConfigFormat, DEFAULT_VERSION_KEY};
use crate::report::ReportFormat;
use crate::ui::OutputMode;

/// Check that a configuration file's version is compatible with the application.
#[derive(Debug, Parser)]
#[command(name = "cfgcompat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub check: CheckArgs,

    /// Show diagnostic details
    #[arg(short, long)]
    pub verbose: bool,

    /// Print nothing but errors; rely on the exit status
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode selected by `--verbose`/`--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.verbose, self.quiet)
    }
}

/// Arguments describing one compatibility check.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Path to the configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: PathBuf,

    /// Dotted key path holding the version
    #[arg(short = 'k', long, default_value = DEFAULT_VERSION_KEY, value_name = "KEY")]
    pub version_key: String,

    /// Version of the running application (the reference for exact/minimum/maximum)
    #[arg(short, long, value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Configuration format; inferred from the file extension when omitted
    #[arg(short = 't', long, value_enum, value_name = "TYPE")]
    pub config_type: Option<ConfigFormat>,

    /// Comparison rule between the found and reference versions
    #[arg(short, long, value_enum, default_value_t = RuleKind::Minimum)]
    pub rule: RuleKind,

    /// Lower bound for the range rule
    #[arg(long, value_name = "VERSION")]
    pub min_version: Option<String>,

    /// Upper bound for the range rule
    #[arg(long, value_name = "VERSION")]
    pub max_version: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::new(),
            version_key: DEFAULT_VERSION_KEY.to_string(),
            app_version: None,
            config_type: None,
            rule: RuleKind::Minimum,
            min_version: None,
            max_version: None,
            json: false,
        }
    }
}

impl CheckArgs {
    pub fn report_format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Human
        }
    }

    /// The reference version(s) as typed, for reporting.
    pub fn reference_text(&self) -> String {
        match self.rule {
            RuleKind::Range => format!(
                "[{}, {}]",
                self.min_version.as_deref().unwrap_or(""),
                self.max_version.as_deref().unwrap_or("")
            ),
            _ => self.app_version.clone().unwrap_or_default(),
        }
    }
}
