//! Persistent address-to-interface cache in front of the explorer

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::core::errors::{Result, SolguardError};
use crate::core::AbiEntry;
use crate::explorer::AbiProvider;

/// Durable map from `0x`-prefixed address to contract interface.
///
/// Loaded wholesale at construction, grows monotonically during a run and
/// is rewritten to disk on every miss, so a crash loses at most the
/// in-flight address. Unverified contracts are cached as an empty
/// interface and never re-fetched.
pub struct AbiCache<P> {
    provider: P,
    path: PathBuf,
    map: HashMap<String, Vec<AbiEntry>>,
    hits: usize,
    misses: usize,
}

impl<P: AbiProvider> AbiCache<P> {
    /// Load the cache file, or start empty when it does not exist yet.
    /// An unreadable or corrupt file is fatal rather than silently reset.
    pub fn load(path: PathBuf, provider: P) -> Result<Self> {
        let map = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| SolguardError::Cache(format!("{}: {e}", path.display())))?;
            serde_json::from_str(&raw)
                .map_err(|e| SolguardError::Cache(format!("{}: {e}", path.display())))?
        } else {
            HashMap::new()
        };
        Ok(Self {
            provider,
            path,
            map,
            hits: 0,
            misses: 0,
        })
    }

    /// Return the interface for a `0x`-prefixed address, fetching and
    /// persisting on the first miss. The empty slice is a legitimate
    /// cached answer for unverified contracts.
    pub fn fetch_interface(&mut self, address: &str) -> Result<&[AbiEntry]> {
        if self.map.contains_key(address) {
            self.hits += 1;
        } else {
            self.misses += 1;
            let entries = self.provider.fetch_abi(address)?.unwrap_or_default();
            log::info!(
                "fetched ABI for {address}: {} entries{}",
                entries.len(),
                if entries.is_empty() { " (unverified)" } else { "" }
            );
            self.map.insert(address.to_string(), entries);
            self.persist()?;
        }
        Ok(self
            .map
            .get(address)
            .map(|entries| entries.as_slice())
            .unwrap_or(&[]))
    }

    pub fn contains(&self, address: &str) -> bool {
        self.map.contains_key(address)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.map.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }

    // Whole-file overwrite, not atomic; kept simple on purpose.
    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.map)?;
        fs::write(&self.path, raw)
            .map_err(|e| SolguardError::Cache(format!("{}: {e}", self.path.display())))
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ABI cache: {} entries, {} hits, {} misses",
            self.entries, self.hits, self.misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    /// Counts fetches so tests can assert the cache never re-queries
    struct StubProvider {
        abis: HashMap<String, Option<Vec<AbiEntry>>>,
        calls: std::rc::Rc<std::cell::RefCell<usize>>,
    }

    impl AbiProvider for StubProvider {
        fn fetch_abi(&mut self, address: &str) -> Result<Option<Vec<AbiEntry>>> {
            *self.calls.borrow_mut() += 1;
            Ok(self.abis.get(address).cloned().unwrap_or(None))
        }
    }

    fn transfer_entry() -> AbiEntry {
        AbiEntry {
            name: Some("transfer".into()),
            kind: Some("function".into()),
            state_mutability: Some("nonpayable".into()),
        }
    }

    fn stub_with(
        address: &str,
        abi: Option<Vec<AbiEntry>>,
    ) -> (StubProvider, std::rc::Rc<std::cell::RefCell<usize>>) {
        let calls = std::rc::Rc::new(std::cell::RefCell::new(0));
        let mut abis = HashMap::new();
        abis.insert(address.to_string(), abi);
        (
            StubProvider {
                abis,
                calls: calls.clone(),
            },
            calls,
        )
    }

    #[test]
    fn second_fetch_is_a_hit_with_no_network_access() {
        let dir = TempDir::new().unwrap();
        let (stub, calls) = stub_with("0xabc", Some(vec![transfer_entry()]));
        let mut cache = AbiCache::load(dir.path().join("cache.json"), stub).unwrap();

        let first = cache.fetch_interface("0xabc").unwrap().to_vec();
        let second = cache.fetch_interface("0xabc").unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn unverified_contract_is_cached_as_empty_interface() {
        let dir = TempDir::new().unwrap();
        let (stub, calls) = stub_with("0xdead", None);
        let mut cache = AbiCache::load(dir.path().join("cache.json"), stub).unwrap();

        assert!(cache.fetch_interface("0xdead").unwrap().is_empty());
        assert!(cache.fetch_interface("0xdead").unwrap().is_empty());
        assert_eq!(*calls.borrow(), 1);
        assert!(cache.contains("0xdead"));
    }

    #[test]
    fn cache_round_trips_through_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");

        let (stub, _) = stub_with("0xabc", Some(vec![transfer_entry()]));
        let mut cache = AbiCache::load(path.clone(), stub).unwrap();
        cache.fetch_interface("0xabc").unwrap();
        drop(cache);

        // A provider that fails on any call proves the reload serves from disk
        struct FailingProvider;
        impl AbiProvider for FailingProvider {
            fn fetch_abi(&mut self, address: &str) -> Result<Option<Vec<AbiEntry>>> {
                Err(SolguardError::explorer(address, "unexpected network call"))
            }
        }

        let mut reloaded = AbiCache::load(path, FailingProvider).unwrap();
        let entries = reloaded.fetch_interface("0xabc").unwrap();
        assert_eq!(entries, &[transfer_entry()]);
        assert_eq!(reloaded.stats().hits, 1);
    }

    #[test]
    fn corrupt_cache_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{not json").unwrap();

        let (stub, _) = stub_with("0xabc", None);
        assert!(AbiCache::load(path, stub).is_err());
    }

    #[test]
    fn provider_errors_propagate_uncaught() {
        let dir = TempDir::new().unwrap();

        struct FailingProvider;
        impl AbiProvider for FailingProvider {
            fn fetch_abi(&mut self, address: &str) -> Result<Option<Vec<AbiEntry>>> {
                Err(SolguardError::explorer(address, "boom"))
            }
        }

        let mut cache = AbiCache::load(dir.path().join("cache.json"), FailingProvider).unwrap();
        assert!(cache.fetch_interface("0xabc").is_err());
        // The failed address was not cached
        assert!(!cache.contains("0xabc"));
    }
}
