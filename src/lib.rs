//! cfgcompat - configuration version compatibility checks.
//!
//! cfgcompat reads a JSON, YAML or TOML configuration file, extracts a version
//! field, and decides whether it is compatible with the running application's
//! version under a chosen rule.
//!
//! # Modules
//!
//! - [`check`] - One check over a loaded document
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compat`] - Compatibility rules, evaluation and verdicts
//! - [`config`] - Configuration loading and key lookup
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON rendering of check results
//! - [`ui`] - Terminal output
//! - [`version`] - Version parsing and ordering
//!
//! # Example
//!
//! ```
//! use cfgcompat::check::check_document;
//! use cfgcompat::compat::{CompatibilityRule, RuleKind, Verdict};
//! use cfgcompat::config::{ConfigDocument, ConfigFormat, KeyPath};
//! use serde_json::json;
//!
//! let document = ConfigDocument {
//!     path: "app.json".into(),
//!     format: ConfigFormat::Json,
//!     root: json!({"version": "1.9.0"}),
//! };
//! let key = KeyPath::parse("version").unwrap();
//! let rule = CompatibilityRule::build(RuleKind::Minimum, Some("2.0.0"), None, None).unwrap();
//!
//! let report = check_document(&document, &key, &rule, "2.0.0");
//! assert_eq!(report.verdict, Verdict::Incompatible);
//! assert_eq!(report.exit_code(), 1);
//! ```

pub mod check;
pub mod cli;
pub mod compat;
pub mod config;
pub mod error;
pub mod report;
pub mod ui;
pub mod version;

pub use error::{CheckError, Result};
