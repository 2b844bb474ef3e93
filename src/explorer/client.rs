//! Blocking Etherscan client for contract ABI lookups

use serde::Deserialize;

use crate::core::errors::{Result, SolguardError};
use crate::core::AbiEntry;
use crate::explorer::rotor::KeyRotator;
use crate::explorer::AbiProvider;

const DEFAULT_API_URL: &str = "https://api.etherscan.io/api";

/// The explorer marks unverified contracts with this result string
/// instead of a non-2xx status.
const UNVERIFIED_SENTINEL: &str = "Contract source code not verified";

/// Response envelope shared by all Etherscan API actions. For `getabi`
/// the `result` field is itself a string-encoded JSON array.
#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    message: String,
    result: String,
}

/// Executes `module=contract&action=getabi` lookups, one blocking GET per
/// call, rotating the API key on every request.
///
/// There is deliberately no retry and no timeout: transport failures and
/// malformed payloads surface to the caller, and a hung call blocks the
/// run until the process is killed.
pub struct EtherscanClient {
    http: reqwest::blocking::Client,
    rotor: KeyRotator,
    api_url: String,
}

impl EtherscanClient {
    pub fn new(rotor: KeyRotator) -> Self {
        Self::with_api_url(rotor, DEFAULT_API_URL)
    }

    /// Point the client at a different endpoint, used by tests
    pub fn with_api_url(rotor: KeyRotator, api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            rotor,
            api_url: api_url.into(),
        }
    }
}

impl AbiProvider for EtherscanClient {
    fn fetch_abi(&mut self, address: &str) -> Result<Option<Vec<AbiEntry>>> {
        let apikey = self.rotor.next_key().to_string();
        let envelope: Envelope = self
            .http
            .get(&self.api_url)
            .query(&[
                ("module", "contract"),
                ("action", "getabi"),
                ("address", address),
                ("apikey", &apikey),
            ])
            .send()?
            .json()?;

        log::debug!(
            "etherscan getabi {address}: status={} message={}",
            envelope.status,
            envelope.message
        );

        if envelope.result == UNVERIFIED_SENTINEL {
            return Ok(None);
        }

        let entries: Vec<AbiEntry> = serde_json::from_str(&envelope.result)
            .map_err(|e| SolguardError::explorer(address, e.to_string()))?;
        Ok(Some(entries))
    }
}
