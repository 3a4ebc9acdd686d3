//! One compatibility check over a loaded configuration document.

use tracing::debug;

use crate::compat::{evaluate, CompatibilityRule, Verdict};
use crate::config::{locate_detailed, ConfigDocument, KeyPath, Located};
use crate::error::CheckError;
use crate::report::CheckReport;
use crate::version::Version;

/// Locate, parse and evaluate the version in `document`.
///
/// Never fails: a missing or unusable value yields [`Verdict::Unknown`] with
/// the reason as the first diagnostic.
pub fn check_document(
    document: &ConfigDocument,
    key: &KeyPath,
    rule: &CompatibilityRule,
    reference_raw: &str,
) -> CheckReport {
    let mut diagnostics = Vec::new();

    let (found_version_raw, verdict) = match locate_detailed(&document.root, key) {
        Located::Missing => {
            debug!("No value at key '{}'", key);
            let missing = CheckError::MissingKey {
                key: key.to_string(),
            };
            diagnostics.push(missing.to_string());
            (None, Verdict::Unknown)
        }
        Located::NotScalar { kind } => {
            debug!("Key '{}' holds a {}", key, kind);
            diagnostics.push(format!(
                "Version key '{}' holds a {}, not a version",
                key, kind
            ));
            (None, Verdict::Unknown)
        }
        Located::Fractional { raw } => {
            debug!("Key '{}' holds the number {}", key, raw);
            diagnostics.push(format!(
                "Version key '{}' holds the number {}, whose original text is lost; quote it",
                key, raw
            ));
            (Some(raw), Verdict::Unknown)
        }
        Located::Scalar { raw, numeric } => {
            debug!("Found '{}' at key '{}'", raw, key);
            let parsed = Version::parse(&raw);
            match &parsed {
                Ok(version) => diagnostics.push(rule.explain(version)),
                Err(e) => diagnostics.push(CheckError::InvalidVersion(e.clone()).to_string()),
            }
            if numeric {
                diagnostics.push(format!(
                    "Value {} is stored as a number; quote it to keep its exact text",
                    raw
                ));
            }
            (Some(raw), evaluate(parsed.as_ref(), rule))
        }
    };

    CheckReport {
        verdict,
        found_version_raw,
        reference_version_raw: reference_raw.to_string(),
        rule: rule.kind(),
        requirement: rule.to_string(),
        key: key.to_string(),
        config_path: document.path.clone(),
        config_format: document.format,
        diagnostics,
    }
}
