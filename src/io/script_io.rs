use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::ops::Action;

/// Error type for reading action scripts
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid action script {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a JSON array of actions. A path of `-` reads stdin.
pub fn read_script(path: &Path) -> Result<Vec<Action>, ScriptError> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ScriptError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| ScriptError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?
    };
    parse_script(&text).map_err(|e| ScriptError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn parse_script(text: &str) -> Result<Vec<Action>, serde_json::Error> {
    serde_json::from_str(text)
}
