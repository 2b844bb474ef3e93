//! Explicit run configuration, passed into components at construction

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SolguardError};

/// Everything a run needs to know about its surroundings. There is no
/// ambient path state; each component receives the values it uses.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SolguardConfig {
    /// Root of the contract corpus
    pub corpus_root: PathBuf,
    /// Persistent ABI cache file
    pub cache_file: PathBuf,
    /// Directory that receives one report file per invariant category
    pub report_dir: PathBuf,
    /// Etherscan API key pool for the rotor
    pub api_keys: Vec<String>,
    /// Content keywords a corpus file must contain (all of them)
    pub keywords: Vec<String>,
    /// Content keywords that disqualify a corpus file (any of them)
    pub exclude_keywords: Vec<String>,
}

impl Default for SolguardConfig {
    fn default() -> Self {
        Self {
            corpus_root: PathBuf::from("."),
            cache_file: PathBuf::from("cache.json"),
            report_dir: PathBuf::from("invariants"),
            api_keys: vec![],
            keywords: vec![],
            exclude_keywords: vec![],
        }
    }
}

impl SolguardConfig {
    /// Load a TOML configuration file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| SolguardError::Configuration(format!("{}: {e}", path.display())))
    }
}
