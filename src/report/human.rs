//! Human-readable output.

use crate::compat::Verdict;
use crate::ui::UserInterface;

use super::CheckReport;

/// Write `report` as a status line, plus diagnostics in verbose mode.
///
/// An unknown verdict always names its first reason, verbose or not.
pub fn render(report: &CheckReport, ui: &mut dyn UserInterface) {
    let found = report.found_version_raw.as_deref().unwrap_or("<none>");

    match report.verdict {
        Verdict::Compatible => ui.success(&format!(
            "Configuration version {} is compatible (requires {})",
            found, report.requirement
        )),
        Verdict::Incompatible => ui.warning(&format!(
            "Configuration version {} is not compatible (requires {})",
            found, report.requirement
        )),
        Verdict::Unknown => {
            let reason = report
                .diagnostics
                .first()
                .map(String::as_str)
                .unwrap_or("no version found");
            ui.error(&format!(
                "Could not determine configuration version: {}",
                reason
            ));
        }
    }

    if !ui.output_mode().shows_details() {
        return;
    }

    ui.detail(
        "Config",
        &format!(
            "{} ({})",
            report.config_path.display(),
            report.config_format
        ),
    );
    ui.detail("Key", &report.key);
    ui.detail("Found", found);
    ui.detail("Rule", report.rule.as_str());
    ui.detail("Reference", &report.reference_version_raw);
    ui.detail("Verdict", report.verdict.label());
    for diagnostic in &report.diagnostics {
        ui.note(diagnostic);
    }
}
