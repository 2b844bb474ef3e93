// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod explorer;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AbiEntry, ContractKey, GuardStatement, InvariantCategory, SourceLocation,
};

pub use crate::analysis::{
    classify::classify,
    frequency::{build_frequency_table, FrequencyTable},
    guards::{extract_guards, normalize_statement, scan_content},
};

pub use crate::explorer::{
    cache::AbiCache, client::EtherscanClient, rotor::KeyRotator, AbiProvider,
};

pub use crate::config::SolguardConfig;
pub use crate::io::{reports::ReportWriter, walker::CorpusWalker};
