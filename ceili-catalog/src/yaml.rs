//! YAML loading for human-curated dance records.
//!
//! A catalogue directory holds any number of `.yaml`/`.yml` files. Each file
//! contains either a single dance or a list of dances; files are read in
//! file-name order so the resulting record order is stable.

use crate::types::SourceDance;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// Parse dance records from YAML text.
///
/// `origin` names the source in error messages (a path, or `<builtin>`).
/// An empty or comment-only document yields no records.
pub fn parse_dances(contents: &str, origin: &str) -> Result<Vec<SourceDance>, YamlError> {
    let parse_err = |e| YamlError::Parse {
        path: origin.to_string(),
        source: e,
    };
    let value: serde_yml::Value = serde_yml::from_str(contents).map_err(parse_err)?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    if value.is_sequence() {
        serde_yml::from_value(value).map_err(parse_err)
    } else {
        serde_yml::from_value::<SourceDance>(value)
            .map(|dance| vec![dance])
            .map_err(parse_err)
    }
}

/// Load all dance records from YAML files in a directory.
///
/// A missing directory yields an empty list.
pub fn load_dances(dir: &Path) -> Result<Vec<SourceDance>, YamlError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(YamlError::NotADirectory(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| YamlError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut dances = Vec::new();
    for entry in entries {
        let path = entry.path();
        let contents = std::fs::read_to_string(&path).map_err(|e| YamlError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let loaded = parse_dances(&contents, &path.display().to_string())?;
        log::debug!("Loaded {} dance(s) from {}", loaded.len(), path.display());
        dances.extend(loaded);
    }

    Ok(dances)
}
