//! Version compatibility decisions.
//!
//! - [`CompatibilityRule`] is the comparison policy with its references
//! - [`evaluate`] applies a rule to a found version
//! - [`Verdict`] is the outcome and its exit code
//!
//! # Example
//!
//! ```
//! use cfgcompat::compat::{evaluate, CompatibilityRule, RuleKind, Verdict};
//! use cfgcompat::version::Version;
//!
//! let rule = CompatibilityRule::build(RuleKind::Minimum, Some("2.0.0"), None, None).unwrap();
//! let found = Version::parse("2.4.0");
//! assert_eq!(evaluate(found.as_ref(), &rule), Verdict::Compatible);
//! ```

pub mod evaluator;
pub mod rule;
pub mod verdict;

pub use evaluator::evaluate;
pub use rule::{CompatibilityRule, RuleKind};
pub use verdict::{Verdict, EXIT_COMPATIBLE, EXIT_ERROR, EXIT_INCOMPATIBLE};
