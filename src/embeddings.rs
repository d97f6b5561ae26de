//! Song embedding input
//!
//! Embeddings arrive as a JSON array of `{song_name, x, y}` objects,
//! typically produced by a separate dimensionality-reduction step. The
//! loader is deliberately forgiving: every failure mode maps to a distinct
//! diagnostic and the caller falls back to an empty collection, so a broken
//! or missing input still produces a (blank) board rather than aborting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One song's 2D display coordinate plus identifying name.
///
/// `song_name` is expected to match a file name discovered under the songs
/// directory; nothing enforces that here. A name with no matching file
/// renders normally but cannot be played (the page logs it to the console).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEmbedding {
    pub song_name: String,
    pub x: f64,
    pub y: f64,
}

/// Why an embeddings file could not be loaded.
///
/// All variants are recoverable: callers report the message and continue
/// with an empty record list.
#[derive(Debug)]
pub enum LoadError {
    /// File does not exist
    Missing(PathBuf),
    /// File exists but could not be read
    Read(PathBuf, io::Error),
    /// Contents are not valid JSON
    Parse(PathBuf, serde_json::Error),
    /// Valid JSON, but not an array of embedding records
    Shape(PathBuf, String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Missing(p) => {
                write!(f, "embeddings file '{}' not found", p.display())
            }
            LoadError::Read(p, e) => {
                write!(f, "could not read '{}': {}", p.display(), e)
            }
            LoadError::Parse(p, e) => {
                write!(f, "could not decode JSON from '{}': {}", p.display(), e)
            }
            LoadError::Shape(p, detail) => {
                write!(
                    f,
                    "'{}' should contain a JSON list of song objects ({})",
                    p.display(),
                    detail
                )
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Load embedding records from a JSON file.
///
/// The file must hold a JSON array whose elements each carry `song_name`,
/// `x`, and `y`. Extra fields are ignored. A malformed element rejects the
/// whole array; this is a shape check, not per-record validation.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<SongEmbedding>, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|e| LoadError::Read(path.to_path_buf(), e))?;

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| LoadError::Parse(path.to_path_buf(), e))?;

    if !value.is_array() {
        return Err(LoadError::Shape(
            path.to_path_buf(),
            format!("top-level value is {}", json_type_name(&value)),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| LoadError::Shape(path.to_path_buf(), e.to_string()))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
