pub mod cache;
pub mod client;
pub mod rotor;

use crate::core::errors::Result;
use crate::core::AbiEntry;

/// Source of contract interfaces, seam between the cache and the network.
///
/// `Ok(None)` means the contract exists but its source is not verified;
/// the cache records that as a permanent empty interface.
pub trait AbiProvider {
    fn fetch_abi(&mut self, address: &str) -> Result<Option<Vec<AbiEntry>>>;
}
