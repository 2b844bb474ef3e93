//! Corpus-wide frequency of mutating function names, fed by the ABI cache

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::core::errors::Result;
use crate::core::ContractKey;
use crate::explorer::cache::AbiCache;
use crate::explorer::AbiProvider;

/// Function name to contributing source paths, in first-seen order.
/// Insertion order is preserved so the presentation sort breaks ties
/// deterministically.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    order: Vec<String>,
    paths: HashMap<String, Vec<PathBuf>>,
}

impl FrequencyTable {
    fn record(&mut self, name: &str, path: &Path) {
        if !self.paths.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.paths
            .entry(name.to_string())
            .or_default()
            .push(path.to_path_buf());
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn paths_for(&self, name: &str) -> Option<&[PathBuf]> {
        self.paths.get(name).map(|paths| paths.as_slice())
    }

    /// Rows sorted by occurrence count descending; the sort is stable so
    /// equal counts keep table insertion order.
    pub fn into_sorted(self) -> Vec<(String, Vec<PathBuf>)> {
        let Self { order, mut paths } = self;
        let mut rows: Vec<(String, Vec<PathBuf>)> = order
            .into_iter()
            .map(|name| {
                let entry = paths.remove(&name).unwrap_or_default();
                (name, entry)
            })
            .collect();
        rows.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
        rows
    }
}

/// Build the frequency table for a corpus. Each path contributes the
/// mutating functions of its contract's interface, a given name at most
/// once per contract even when the interface repeats it (overloads).
/// A filename that does not encode an address aborts the whole run.
pub fn build_frequency_table<P: AbiProvider>(
    cache: &mut AbiCache<P>,
    paths: &[PathBuf],
) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::default();
    for path in paths {
        let key = ContractKey::from_path(path)?;
        log::debug!("contract {} at 0x{}", key.name, key.address);
        let interface = cache.fetch_interface(&key.prefixed_address())?;

        let mut seen = HashSet::new();
        let names: Vec<String> = interface
            .iter()
            .filter(|entry| entry.is_mutating_function())
            .filter_map(|entry| entry.name.clone())
            .filter(|name| seen.insert(name.clone()))
            .collect();
        for name in &names {
            table.record(name, path);
        }
    }
    Ok(table)
}
