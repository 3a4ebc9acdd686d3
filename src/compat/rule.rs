//! Compatibility rules.
//!
//! The rule is chosen by name once at startup ([`RuleKind`]) and turned into
//! a [`CompatibilityRule`] carrying its parsed reference versions. After that
//! nothing dispatches on the name again.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::{CheckError, Result};
use crate::version::Version;

/// Rule names as selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Found version must equal the reference.
    Exact,
    /// Found version must be at least the reference.
    #[default]
    Minimum,
    /// Found version must be at most the reference.
    Maximum,
    /// Found version must lie within inclusive bounds.
    Range,
}

impl RuleKind {
    /// Lowercase name, as accepted by `--rule`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Exact => "exact",
            RuleKind::Minimum => "minimum",
            RuleKind::Maximum => "maximum",
            RuleKind::Range => "range",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comparison policy with its reference version(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompatibilityRule {
    /// `found == reference`
    Exact(Version),
    /// `found >= reference`
    Minimum(Version),
    /// `found <= reference`
    Maximum(Version),
    /// `lower <= found <= upper`
    Range { lower: Version, upper: Version },
}

impl CompatibilityRule {
    /// Build a rule from its name and the raw reference arguments.
    ///
    /// `reference` is used by the single-version rules, `lower`/`upper` by
    /// [`RuleKind::Range`]. Missing, unparsable or inverted references are
    /// reported as [`CheckError::InvalidRule`].
    pub fn build(
        kind: RuleKind,
        reference: Option<&str>,
        lower: Option<&str>,
        upper: Option<&str>,
    ) -> Result<Self> {
        match kind {
            RuleKind::Exact => Ok(Self::Exact(required(kind, "--app-version", reference)?)),
            RuleKind::Minimum => Ok(Self::Minimum(required(kind, "--app-version", reference)?)),
            RuleKind::Maximum => Ok(Self::Maximum(required(kind, "--app-version", reference)?)),
            RuleKind::Range => {
                let lower = required(kind, "--min-version", lower)?;
                let upper = required(kind, "--max-version", upper)?;
                if lower > upper {
                    return Err(CheckError::InvalidRule {
                        message: format!(
                            "range lower bound {} is greater than upper bound {}",
                            lower, upper
                        ),
                    });
                }
                Ok(Self::Range { lower, upper })
            }
        }
    }

    /// The name this rule was selected by.
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Exact(_) => RuleKind::Exact,
            Self::Minimum(_) => RuleKind::Minimum,
            Self::Maximum(_) => RuleKind::Maximum,
            Self::Range { .. } => RuleKind::Range,
        }
    }

    /// Whether `found` satisfies this rule.
    pub fn accepts(&self, found: &Version) -> bool {
        match self {
            Self::Exact(reference) => found == reference,
            Self::Minimum(reference) => found >= reference,
            Self::Maximum(reference) => found <= reference,
            Self::Range { lower, upper } => lower <= found && found <= upper,
        }
    }

    /// A one-line account of how `found` relates to the reference.
    pub fn explain(&self, found: &Version) -> String {
        let verb = if self.accepts(found) { "satisfies" } else { "fails" };
        format!("{} {} requirement {}", found, verb, self)
    }
}

impl std::fmt::Display for CompatibilityRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(v) => write!(f, "== {}", v),
            Self::Minimum(v) => write!(f, ">= {}", v),
            Self::Maximum(v) => write!(f, "<= {}", v),
            Self::Range { lower, upper } => write!(f, ">= {}, <= {}", lower, upper),
        }
    }
}

fn required(kind: RuleKind, flag: &str, raw: Option<&str>) -> Result<Version> {
    let raw = raw.ok_or_else(|| CheckError::InvalidRule {
        message: format!("{} rule requires {}", kind, flag),
    })?;
    Version::parse(raw).map_err(|e| CheckError::InvalidRule {
        message: format!("{} for {}", e, flag),
    })
}
