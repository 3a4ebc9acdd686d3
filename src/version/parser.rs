//! Turning raw strings into [`Version`] values.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::Version;

/// Optional `v` prefix, dotted numeric components, optional `-`/`+` suffix.
static RE_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[vV]?(?P<core>[0-9]+(?:\.[0-9]+)*)(?:[-+](?P<suffix>[0-9A-Za-z.+-]+))?$").unwrap()
});

/// Reasons a string is not a version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("Version string is empty")]
    Empty,

    /// The input has no recognizable numeric component sequence.
    #[error("Invalid version '{input}': expected dotted numbers such as 1.2.3")]
    InvalidFormat { input: String },

    /// A component does not fit in 64 bits.
    #[error("Invalid version '{input}': component '{component}' is too large")]
    ComponentOverflow { input: String, component: String },
}

impl ParseError {
    /// The offending input, if there was any.
    pub fn input(&self) -> Option<&str> {
        match self {
            ParseError::Empty => None,
            ParseError::InvalidFormat { input } | ParseError::ComponentOverflow { input, .. } => {
                Some(input)
            }
        }
    }
}

impl Version {
    /// Parse a version string.
    ///
    /// Surrounding whitespace and a single leading `v` are ignored. The first
    /// `-` or `+` starts the suffix label; everything before it must be
    /// dot-separated integers.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let caps = RE_VERSION
            .captures(trimmed)
            .ok_or_else(|| ParseError::InvalidFormat {
                input: trimmed.to_string(),
            })?;

        let components = caps["core"]
            .split('.')
            .map(|segment| {
                segment
                    .parse::<u64>()
                    .map_err(|_| ParseError::ComponentOverflow {
                        input: trimmed.to_string(),
                        component: segment.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let suffix = caps.name("suffix").map(|m| m.as_str().to_string());

        Ok(Version::from_parts(components, suffix))
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}
