//! JSON output.
//!
//! Emits the whole report, diagnostics included, for tooling integration.

use serde::Serialize;

use crate::compat::Verdict;
use crate::error::{CheckError, Result};

use super::CheckReport;

/// A check that stopped before producing a report.
#[derive(Debug, Serialize)]
struct ErrorReport {
    verdict: Verdict,
    error: String,
}

/// Serialize `report` as pretty-printed JSON.
pub fn render(report: &CheckReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| CheckError::Other(e.into()))
}

/// Serialize an error that prevented the check, with an `unknown` verdict.
pub fn render_error(error: &CheckError) -> Result<String> {
    let report = ErrorReport {
        verdict: Verdict::Unknown,
        error: error.to_string(),
    };
    serde_json::to_string_pretty(&report).map_err(|e| CheckError::Other(e.into()))
}
