//! Grant scoring configurations: file loading, validation and the per-grant registry.

pub mod loader;
pub mod schema;
pub mod validation;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

pub use loader::{load_and_validate_config, parse_config, ConfigLoadError};

use crate::scoring::ScoringConfig;

pub const EXAMPLE_GRANT: &str = "example-grant";
pub const ADDING_VALUE: &str = "adding-value";
/// Adding-value revision with matrix, dependency and score-only questions.
pub const ADDING_VALUE_MATRIX: &str = "adding-value-matrix";

const BUILT_INS: [(&str, &str); 3] = [
    (EXAMPLE_GRANT, include_str!("../../grants/example-grant.json")),
    (ADDING_VALUE, include_str!("../../grants/adding-value.json")),
    (
        ADDING_VALUE_MATRIX,
        include_str!("../../grants/adding-value-matrix.json"),
    ),
];

/// Validated scoring configurations keyed by grant type.
#[derive(Debug, Clone, Default)]
pub struct GrantRegistry {
    configs: BTreeMap<String, Arc<ScoringConfig>>,
}

impl GrantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the configurations shipped with the crate.
    pub fn with_built_ins() -> Result<Self, ConfigLoadError> {
        let mut registry = Self::new();
        for (grant_type, json) in BUILT_INS {
            registry.insert(grant_type, parse_config(grant_type, json)?);
        }
        Ok(registry)
    }

    /// Loads every `*.json` file in `dir`, in file-name order. A file replaces any
    /// configuration already registered under its stem.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ConfigLoadError> {
        let io_error = |source: io::Error| ConfigLoadError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            let config = load_and_validate_config(path)?;
            let grant_type = loader::grant_type_for(path);
            info!(
                event = "grant_config.loaded",
                grant_type = %grant_type,
                path = %path.display(),
                questions = config.questions.len()
            );
            self.insert(grant_type, config);
        }

        Ok(paths.len())
    }

    pub fn insert(&mut self, grant_type: impl Into<String>, config: ScoringConfig) {
        self.configs.insert(grant_type.into(), Arc::new(config));
    }

    pub fn get(&self, grant_type: &str) -> Option<Arc<ScoringConfig>> {
        self.configs.get(grant_type).cloned()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Registered grants in grant-type order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScoringConfig)> {
        self.configs
            .iter()
            .map(|(grant_type, config)| (grant_type.as_str(), config.as_ref()))
    }
}
