//! Configuration loading and version lookup.
//!
//! - File formats in [`format`]
//! - Reading and parsing files in [`loader`]
//! - Key path lookup in [`locator`]
//!
//! # Example
//!
//! ```
//! use cfgcompat::config::{locate, parse_document, ConfigFormat, KeyPath};
//! use std::path::Path;
//!
//! let doc = parse_document("app:\n  version: 1.4.2\n", ConfigFormat::Yaml, Path::new("app.yml")).unwrap();
//! let key = KeyPath::parse("app.version").unwrap();
//! assert_eq!(locate(&doc, &key), Some("1.4.2".to_string()));
//! ```

pub mod format;
pub mod loader;
pub mod locator;

pub use format::ConfigFormat;
pub use loader::{load_document, parse_document, resolve_format, ConfigDocument};
pub use locator::{locate, locate_detailed, KeyPath, Located};

/// Key looked up when `--version-key` is not given.
pub const DEFAULT_VERSION_KEY: &str = "version";
