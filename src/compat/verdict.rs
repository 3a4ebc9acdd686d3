//! The tri-state outcome of a compatibility check.

use serde::Serialize;

/// Exit code for a compatible configuration.
pub const EXIT_COMPATIBLE: i32 = 0;
/// Exit code for an incompatible configuration.
pub const EXIT_INCOMPATIBLE: i32 = 1;
/// Exit code for an unknown verdict or any error.
pub const EXIT_ERROR: i32 = 2;

/// Result of checking one found version against a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The found version satisfies the rule.
    Compatible,
    /// The found version was parsed and violates the rule.
    Incompatible,
    /// The version was missing or unparsable.
    Unknown,
}

impl Verdict {
    /// Process exit status for this verdict.
    pub fn exit_code(&self) -> i32 {
        match self {
            Verdict::Compatible => EXIT_COMPATIBLE,
            Verdict::Incompatible => EXIT_INCOMPATIBLE,
            Verdict::Unknown => EXIT_ERROR,
        }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, Verdict::Compatible)
    }

    /// Uppercase label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Compatible => "COMPATIBLE",
            Verdict::Incompatible => "INCOMPATIBLE",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
