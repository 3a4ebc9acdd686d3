//! Configuration file loading.
//!
//! Every supported format is deserialized into the same document model,
//! [`serde_json::Value`], so key lookup does not care where the data came
//! from.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::format::ConfigFormat;
use crate::error::{CheckError, Result};

/// A configuration file loaded into memory.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    /// Where the document was read from.
    pub path: PathBuf,
    /// The format it was parsed as.
    pub format: ConfigFormat,
    /// The parsed content.
    pub root: Value,
}

/// Pick the format to load `path` with.
///
/// An explicit format wins; otherwise the file extension decides.
pub fn resolve_format(path: &Path, explicit: Option<ConfigFormat>) -> Result<ConfigFormat> {
    explicit
        .or_else(|| ConfigFormat::from_path(path))
        .ok_or_else(|| CheckError::UnknownFormat {
            path: path.to_path_buf(),
        })
}

/// Read and parse a configuration file.
pub fn load_document(path: &Path, format: ConfigFormat) -> Result<ConfigDocument> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckError::Io(e)
        }
    })?;

    let root = parse_document(&content, format, path)?;
    debug!("Loaded {} config from {}", format, path.display());

    Ok(ConfigDocument {
        path: path.to_path_buf(),
        format,
        root,
    })
}

/// Parse configuration text in the given format.
pub fn parse_document(content: &str, format: ConfigFormat, source_path: &Path) -> Result<Value> {
    let parsed: std::result::Result<Value, String> = match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| CheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    })
}
