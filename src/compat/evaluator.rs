//! Applying a rule to a found version.

use tracing::debug;

use crate::version::{ParseError, Version};

use super::{CompatibilityRule, Verdict};

/// Decide compatibility of `found` under `rule`.
///
/// A failed parse short-circuits to [`Verdict::Unknown`] without comparing.
pub fn evaluate(found: Result<&Version, &ParseError>, rule: &CompatibilityRule) -> Verdict {
    let found = match found {
        Ok(version) => version,
        Err(e) => {
            debug!("Skipping comparison, found version did not parse: {}", e);
            return Verdict::Unknown;
        }
    };

    let verdict = if rule.accepts(found) {
        Verdict::Compatible
    } else {
        Verdict::Incompatible
    };
    debug!("{} against {} -> {}", found, rule, verdict);
    verdict
}
