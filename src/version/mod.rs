//! Version parsing and ordering.
//!
//! A [`Version`] is a dotted sequence of non-negative integers of any depth
//! with an optional suffix label (`2.4.0`, `1.2`, `3.0.0-rc.1`, `v1.4.2.7`).
//!
//! # Example
//!
//! ```
//! use cfgcompat::version::Version;
//!
//! let found = Version::parse("1.2").unwrap();
//! let required = Version::parse("1.2.0").unwrap();
//! assert_eq!(found, required);
//!
//! let rc = Version::parse("1.2.0-rc.1").unwrap();
//! assert!(rc < required);
//! ```

pub mod model;
pub mod parser;

pub use model::Version;
pub use parser::ParseError;
