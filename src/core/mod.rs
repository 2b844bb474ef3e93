pub mod errors;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, SolguardError};

/// Address/name pair encoded in a corpus filename of the form
/// `<hexAddress>_<ContractName>.<ext>` (directory components ignored).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractKey {
    /// Hex address without the `0x` prefix, exactly as it appears in the filename
    pub address: String,
    pub name: String,
}

impl ContractKey {
    /// Parse the key out of a corpus path. Fails loudly when the separator
    /// or the address shape is missing rather than misindexing the corpus.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| SolguardError::FilenameConvention(path.to_path_buf()))?;
        let stem = file_name.split('.').next().unwrap_or(file_name);
        let (address, name) = stem
            .split_once('_')
            .ok_or_else(|| SolguardError::FilenameConvention(path.to_path_buf()))?;
        if name.is_empty()
            || address.len() != 40
            || !address.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(SolguardError::FilenameConvention(path.to_path_buf()));
        }
        Ok(Self {
            address: address.to_string(),
            name: name.to_string(),
        })
    }

    /// The `0x`-prefixed form used as the cache key and explorer query
    pub fn prefixed_address(&self) -> String {
        format!("0x{}", self.address)
    }
}

/// One exposed function descriptor from a contract interface.
///
/// Unknown payload fields (inputs, outputs, ...) are dropped on
/// deserialization; only the fields the analysis consults are kept.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AbiEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(
        rename = "stateMutability",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub state_mutability: Option<String>,
}

impl AbiEntry {
    /// True for entries that are functions and can mutate contract state.
    /// Entries without a `type` field cannot be classified and never match.
    pub fn is_mutating_function(&self) -> bool {
        if self.kind.as_deref() != Some("function") {
            return false;
        }
        !matches!(self.state_mutability.as_deref(), Some("view") | Some("pure"))
    }
}

/// A source position, 1-based line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub path: PathBuf,
    pub line: usize,
}

impl SourceLocation {
    /// Markdown link that jumps to the exact source line
    pub fn clickable(&self) -> String {
        format!("[Code File]({}#L{})", self.path.display(), self.line)
    }
}

/// A normalized guard statement together with where it was first seen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardStatement {
    pub text: String,
    pub location: SourceLocation,
}

/// Semantic bucket a guard statement is sorted into. The set is closed;
/// statements no heuristic recognizes land in `Uncategorizable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvariantCategory {
    IgnoreComment,
    IgnoreAlwaysFalse,
    IgnoreAlwaysTrue,
    IgnoreSafeMath,
    IgnoreZeroCheck,
    EnforceSpecification,
    SenderOwnerOf,
    SenderPermission,
    OwnerPermission,
    ZeroAddress,
    TimeControl,
    OfferIdControl,
    WhitelistControl,
    MsgValueControl,
    EoaValidation,
    BalanceControl,
    ArrayLengthControl,
    AmountEnforcement,
    Uncategorizable,
}

impl std::fmt::Display for InvariantCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(InvariantCategory, &str)] = &[
            (InvariantCategory::IgnoreComment, "Ignore: comment"),
            (InvariantCategory::IgnoreAlwaysFalse, "Ignore: always false"),
            (InvariantCategory::IgnoreAlwaysTrue, "Ignore: always true"),
            (InvariantCategory::IgnoreSafeMath, "Ignore: safe math"),
            (InvariantCategory::IgnoreZeroCheck, "Ignore: check with 0"),
            (InvariantCategory::EnforceSpecification, "enforce specification"),
            (InvariantCategory::SenderOwnerOf, "sender ownerOf"),
            (InvariantCategory::SenderPermission, "sender permission checks"),
            (InvariantCategory::OwnerPermission, "owner permission checks"),
            (InvariantCategory::ZeroAddress, "address(0)"),
            (InvariantCategory::TimeControl, "time control"),
            (InvariantCategory::OfferIdControl, "offerId control"),
            (InvariantCategory::WhitelistControl, "whitelist control"),
            (InvariantCategory::MsgValueControl, "msg.value control"),
            (InvariantCategory::EoaValidation, "EOA validation"),
            (InvariantCategory::BalanceControl, "balance control"),
            (InvariantCategory::ArrayLengthControl, "array length control"),
            (InvariantCategory::AmountEnforcement, "amount enforcement"),
            (InvariantCategory::Uncategorizable, "Uncategorizable"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(cat, _)| cat == self)
            .map(|(_, s)| *s)
            .unwrap_or("Uncategorizable");

        write!(f, "{display_str}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn contract_key_from_well_formed_path() {
        let key = ContractKey::from_path(Path::new(
            "mainnet/c7/C7ddD330A9aE4870d4100363846fE84b40d01e37_NFTMarketplace.sol",
        ))
        .unwrap();
        assert_eq!(key.address, "C7ddD330A9aE4870d4100363846fE84b40d01e37");
        assert_eq!(key.name, "NFTMarketplace");
        assert_eq!(
            key.prefixed_address(),
            "0xC7ddD330A9aE4870d4100363846fE84b40d01e37"
        );
    }

    #[test]
    fn contract_key_keeps_full_remainder_as_name() {
        let key = ContractKey::from_path(Path::new(
            "ad/ADc6cfA74Bc2547DE15d7505C1aC1cF7BB4BEF14_Green_Energy_Token.sol",
        ))
        .unwrap();
        assert_eq!(key.name, "Green_Energy_Token");
    }

    #[test]
    fn contract_key_rejects_missing_separator() {
        let err = ContractKey::from_path(Path::new("mainnet/NFTMarketplace.sol")).unwrap_err();
        assert!(matches!(
            err,
            crate::core::errors::SolguardError::FilenameConvention(_)
        ));
    }

    #[test]
    fn contract_key_rejects_non_hex_address() {
        assert!(ContractKey::from_path(Path::new("zz/not-an-address_Token.sol")).is_err());
    }

    #[test]
    fn mutating_filter_drops_views_and_untyped_entries() {
        let transfer = AbiEntry {
            name: Some("transfer".into()),
            kind: Some("function".into()),
            state_mutability: Some("nonpayable".into()),
        };
        let balance_of = AbiEntry {
            name: Some("balanceOf".into()),
            kind: Some("function".into()),
            state_mutability: Some("view".into()),
        };
        let untyped = AbiEntry {
            name: Some("mystery".into()),
            kind: None,
            state_mutability: None,
        };
        let event = AbiEntry {
            name: Some("Transfer".into()),
            kind: Some("event".into()),
            state_mutability: None,
        };
        assert!(transfer.is_mutating_function());
        assert!(!balance_of.is_mutating_function());
        assert!(!untyped.is_mutating_function());
        assert!(!event.is_mutating_function());
    }

    #[test]
    fn abi_entry_ignores_unknown_payload_fields() {
        let entry: AbiEntry = serde_json::from_str(
            r#"{"name":"buy","type":"function","stateMutability":"payable","inputs":[],"outputs":[]}"#,
        )
        .unwrap();
        assert_eq!(entry.name.as_deref(), Some("buy"));
        assert!(entry.is_mutating_function());
    }

    #[test]
    fn clickable_reference_format() {
        let loc = SourceLocation {
            path: PathBuf::from("c7/C7dd_NFT.sol"),
            line: 42,
        };
        assert_eq!(loc.clickable(), "[Code File](c7/C7dd_NFT.sol#L42)");
    }

    #[test]
    fn category_display_strings() {
        assert_eq!(
            InvariantCategory::IgnoreZeroCheck.to_string(),
            "Ignore: check with 0"
        );
        assert_eq!(InvariantCategory::SenderOwnerOf.to_string(), "sender ownerOf");
        assert_eq!(InvariantCategory::ZeroAddress.to_string(), "address(0)");
        assert_eq!(InvariantCategory::OfferIdControl.to_string(), "offerId control");
    }
}
