//! Finding the version value inside a loaded document.
//!
//! A missing key is an ordinary outcome here, so lookups return
//! [`Option`]/[`Located`] rather than errors.

use serde_json::Value;

use crate::error::{CheckError, Result};

/// A dotted path into a document, e.g. `app.meta.version` or `releases.0.version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted key path. Empty paths and empty segments are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || CheckError::InvalidKeyPath {
            key: raw.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(invalid());
        }
        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid());
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// What was found at a key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// A scalar, rendered as text. `numeric` is set when the source was a
    /// number rather than a string.
    Scalar { raw: String, numeric: bool },
    /// A non-integer number. YAML and TOML have already dropped its
    /// original text (`1.10` arrives as `1.1`), so it cannot be trusted.
    Fractional { raw: String },
    /// Nothing there, or an empty/null value.
    Missing,
    /// A table or list where a version was expected.
    NotScalar { kind: &'static str },
}

/// Look up `path` in `doc`, describing what was found.
///
/// A top-level key equal to the whole dotted path takes precedence over
/// walking the segments, so `{"app.version": "1.0"}` matches `app.version`.
/// Array elements are addressed by decimal index.
pub fn locate_detailed(doc: &Value, path: &KeyPath) -> Located {
    let node = doc
        .as_object()
        .and_then(|map| map.get(path.as_str()))
        .or_else(|| walk(doc, path.segments()));

    match node {
        None | Some(Value::Null) => Located::Missing,
        Some(Value::String(s)) if s.trim().is_empty() => Located::Missing,
        Some(Value::String(s)) => Located::Scalar {
            raw: s.clone(),
            numeric: false,
        },
        Some(Value::Number(n)) if n.is_f64() => Located::Fractional { raw: n.to_string() },
        Some(Value::Number(n)) => Located::Scalar {
            raw: n.to_string(),
            numeric: true,
        },
        Some(Value::Bool(b)) => Located::Scalar {
            raw: b.to_string(),
            numeric: false,
        },
        Some(Value::Array(_)) => Located::NotScalar { kind: "list" },
        Some(Value::Object(_)) => Located::NotScalar { kind: "table" },
    }
}

/// Look up the raw scalar at `path`, or `None` if there is no usable value.
pub fn locate(doc: &Value, path: &KeyPath) -> Option<String> {
    match locate_detailed(doc, path) {
        Located::Scalar { raw, .. } => Some(raw),
        Located::Fractional { .. } | Located::Missing | Located::NotScalar { .. } => None,
    }
}

fn walk<'a>(doc: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments.iter().try_fold(doc, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(s: &str) -> KeyPath {
        KeyPath::parse(s).unwrap()
    }

    #[test]
    fn parse_splits_on_dots() {
        let path = key("app.meta.version");
        assert_eq!(path.segments(), &["app", "meta", "version"]);
        assert_eq!(path.to_string(), "app.meta.version");
    }

    #[test]
    fn parse_rejects_empty_and_hollow_paths() {
        assert!(KeyPath::parse("").is_err());
        assert!(KeyPath::parse("  ").is_err());
        assert!(KeyPath::parse("app..version").is_err());
        assert!(KeyPath::parse(".version").is_err());
        assert!(KeyPath::parse("version.").is_err());
    }

    #[test]
    fn finds_top_level_string() {
        let doc = json!({"version": "1.2.3"});
        assert_eq!(locate(&doc, &key("version")), Some("1.2.3".to_string()));
    }

    #[test]
    fn walks_nested_tables() {
        let doc = json!({"app": {"meta": {"version": "4.0"}}});
        assert_eq!(
            locate(&doc, &key("app.meta.version")),
            Some("4.0".to_string())
        );
    }

    #[test]
    fn indexes_into_lists() {
        let doc = json!({"releases": [{"version": "1.0"}, {"version": "2.0"}]});
        assert_eq!(
            locate(&doc, &key("releases.1.version")),
            Some("2.0".to_string())
        );
        assert_eq!(locate(&doc, &key("releases.5.version")), None);
        assert_eq!(locate(&doc, &key("releases.first.version")), None);
    }

    #[test]
    fn literal_dotted_key_takes_precedence() {
        let doc = json!({
            "app.version": "9.9.9",
            "app": {"version": "1.0.0"}
        });
        assert_eq!(locate(&doc, &key("app.version")), Some("9.9.9".to_string()));
    }

    #[test]
    fn missing_key_is_none() {
        let doc = json!({"name": "svc"});
        assert_eq!(locate_detailed(&doc, &key("version")), Located::Missing);
        assert_eq!(locate(&doc, &key("name.version")), None);
    }

    #[test]
    fn null_and_empty_values_count_as_missing() {
        let doc = json!({"a": null, "b": "", "c": "   "});
        assert_eq!(locate_detailed(&doc, &key("a")), Located::Missing);
        assert_eq!(locate_detailed(&doc, &key("b")), Located::Missing);
        assert_eq!(locate_detailed(&doc, &key("c")), Located::Missing);
    }

    #[test]
    fn integers_are_rendered_and_flagged() {
        let doc = json!({"int": 3});
        assert_eq!(
            locate_detailed(&doc, &key("int")),
            Located::Scalar {
                raw: "3".to_string(),
                numeric: true
            }
        );
        assert_eq!(locate(&doc, &key("int")), Some("3".to_string()));
    }

    #[test]
    fn fractional_numbers_are_not_usable() {
        let doc = json!({"float": 1.1});
        assert_eq!(
            locate_detailed(&doc, &key("float")),
            Located::Fractional {
                raw: "1.1".to_string()
            }
        );
        assert_eq!(locate(&doc, &key("float")), None);
    }

    #[test]
    fn booleans_are_rendered_as_text() {
        let doc = json!({"version": true});
        assert_eq!(locate(&doc, &key("version")), Some("true".to_string()));
    }

    #[test]
    fn containers_are_not_scalars() {
        let doc = json!({"version": {"major": 1}, "versions": ["1.0"]});
        assert_eq!(
            locate_detailed(&doc, &key("version")),
            Located::NotScalar { kind: "table" }
        );
        assert_eq!(
            locate_detailed(&doc, &key("versions")),
            Located::NotScalar { kind: "list" }
        );
        assert_eq!(locate(&doc, &key("version")), None);
    }

    #[test]
    fn non_object_root_has_no_keys() {
        let doc = json!("1.0.0");
        assert_eq!(locate(&doc, &key("version")), None);
    }
}
