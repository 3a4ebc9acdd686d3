//! Rendering check results.
//!
//! The check produces one [`CheckReport`]; a [`Reporter`] turns it into
//! human-readable lines ([`human`]) or a JSON document ([`json`]) through a
//! [`UserInterface`].

pub mod human;
pub mod json;

use std::path::PathBuf;

use serde::Serialize;

use crate::compat::{RuleKind, Verdict};
use crate::config::ConfigFormat;
use crate::error::Result;
use crate::ui::UserInterface;

/// Everything known about one compatibility check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub verdict: Verdict,
    /// The version text found in the configuration, if any.
    pub found_version_raw: Option<String>,
    /// The reference version(s) as given on the command line.
    pub reference_version_raw: String,
    pub rule: RuleKind,
    /// The rule with its parsed references, e.g. `>= 2.0.0`.
    pub requirement: String,
    pub key: String,
    pub config_path: PathBuf,
    pub config_format: ConfigFormat,
    /// Reasons and observations collected while checking.
    pub diagnostics: Vec<String>,
}

impl CheckReport {
    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

/// Writes a [`CheckReport`] in the chosen format.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Render `report` to `ui`.
    pub fn emit(&self, report: &CheckReport, ui: &mut dyn UserInterface) -> Result<()> {
        match self.format {
            ReportFormat::Human => {
                human::render(report, ui);
                Ok(())
            }
            ReportFormat::Json => {
                let text = json::render(report)?;
                ui.data(&text);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn report(verdict: Verdict, found: Option<&str>) -> CheckReport {
        CheckReport {
            verdict,
            found_version_raw: found.map(String::from),
            reference_version_raw: "2.0.0".to_string(),
            rule: RuleKind::Minimum,
            requirement: ">= 2.0.0".to_string(),
            key: "version".to_string(),
            config_path: PathBuf::from("app.yml"),
            config_format: ConfigFormat::Yaml,
            diagnostics: vec!["first diagnostic".to_string()],
        }
    }
}
