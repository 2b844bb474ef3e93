use rand::Rng;

use crate::core::errors::{Result, SolguardError};

/// Round-robin scheduler over a pool of block explorer API keys.
///
/// Each call increments the counter first, then indexes `counter % len`,
/// wrapping indefinitely. The starting offset is randomized so parallel
/// runs of the tool do not all hammer the same first key.
///
/// Not safe for concurrent callers without external locking; the pipeline
/// is single-threaded by design.
pub struct KeyRotator {
    keys: Vec<String>,
    counter: usize,
}

impl KeyRotator {
    pub fn new(keys: Vec<String>) -> Result<Self> {
        if keys.is_empty() {
            return Err(SolguardError::Configuration(
                "at least one API key is required".to_string(),
            ));
        }
        let offset = rand::rng().random_range(0..keys.len());
        Self::with_offset(keys, offset)
    }

    /// Deterministic constructor, used by tests and reproducible runs
    pub fn with_offset(keys: Vec<String>, offset: usize) -> Result<Self> {
        if keys.is_empty() {
            return Err(SolguardError::Configuration(
                "at least one API key is required".to_string(),
            ));
        }
        Ok(Self {
            keys,
            counter: offset,
        })
    }

    pub fn next_key(&mut self) -> &str {
        self.counter = self.counter.wrapping_add(1);
        &self.keys[self.counter % self.keys.len()]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pool() -> Vec<String> {
        vec!["alpha".into(), "bravo".into(), "charlie".into()]
    }

    #[test]
    fn rejects_empty_pool() {
        assert!(KeyRotator::new(Vec::new()).is_err());
    }

    #[test]
    fn cycles_through_pool_in_order() {
        let mut rotor = KeyRotator::with_offset(pool(), 0).unwrap();
        assert_eq!(rotor.next_key(), "bravo");
        assert_eq!(rotor.next_key(), "charlie");
        assert_eq!(rotor.next_key(), "alpha");
        assert_eq!(rotor.next_key(), "bravo");
    }

    #[test]
    fn wraps_indefinitely() {
        let mut rotor = KeyRotator::with_offset(pool(), 1).unwrap();
        let first_cycle: Vec<String> = (0..3).map(|_| rotor.next_key().to_string()).collect();
        let second_cycle: Vec<String> = (0..3).map(|_| rotor.next_key().to_string()).collect();
        assert_eq!(first_cycle, second_cycle);
    }

    #[test]
    fn random_offset_stays_within_pool() {
        let mut rotor = KeyRotator::new(pool()).unwrap();
        let key = rotor.next_key().to_string();
        assert!(pool().contains(&key));
    }
}
