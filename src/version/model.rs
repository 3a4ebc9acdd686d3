//! The [`Version`] value type and its ordering.

use std::cmp::Ordering;
use std::fmt;

/// A parsed version.
///
/// Ordering pads the shorter component list with zeros, so `1.2` and `1.2.0`
/// are equal. A version with a suffix sorts before the same version without
/// one; two suffixes compare lexicographically.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
    suffix: Option<String>,
}

impl Version {
    /// Build a version from already-validated parts.
    ///
    /// `components` must not be empty.
    pub(crate) fn from_parts(components: Vec<u64>, suffix: Option<String>) -> Self {
        debug_assert!(!components.is_empty());
        Self { components, suffix }
    }

    /// The numeric components, as written.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The suffix label after the first `-` or `+`, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Whether this version carries a pre-release suffix.
    pub fn is_prerelease(&self) -> bool {
        self.suffix.is_some()
    }

    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let depth = self.components.len().max(other.components.len());
        for i in 0..depth {
            match self.component(i).cmp(&other.component(i)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        match (&self.suffix, &other.suffix) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self
            .components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", core)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "-{}", suffix)?;
        }
        Ok(())
    }
}
