use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::schema::RawScoringConfig;
use super::validation::build_config;
use crate::scoring::ScoringConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("failed to read grant config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse grant config '{grant}': {source}")]
    Parse {
        grant: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid grant config '{grant}': {}", .problems.join("; "))]
    Invalid { grant: String, problems: Vec<String> },
}

/// Parses and validates one grant configuration document.
pub fn parse_config(grant: &str, json: &str) -> Result<ScoringConfig, ConfigLoadError> {
    let raw: RawScoringConfig =
        serde_json::from_str(json).map_err(|source| ConfigLoadError::Parse {
            grant: grant.to_string(),
            source,
        })?;

    build_config(raw).map_err(|problems| ConfigLoadError::Invalid {
        grant: grant.to_string(),
        problems,
    })
}

/// Reads a grant configuration file. The grant type is the file stem.
pub fn load_and_validate_config(path: &Path) -> Result<ScoringConfig, ConfigLoadError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&grant_type_for(path), &json)
}

pub(crate) fn grant_type_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
