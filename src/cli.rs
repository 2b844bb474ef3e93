use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solguard")]
#[command(about = "Smart-contract guard statement and invariant analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract require-style guard statements, classify them into
    /// invariant categories and append per-category reports
    Guards {
        /// Corpus root to scan for contract sources
        path: PathBuf,

        /// Directory receiving one report file per category
        #[arg(long = "report-dir")]
        report_dir: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Keep only files containing all of these keywords
        #[arg(long = "keyword", value_delimiter = ',')]
        keywords: Vec<String>,

        /// Drop files containing any of these keywords
        #[arg(long = "exclude-keyword", value_delimiter = ',')]
        exclude_keywords: Vec<String>,

        /// Glob patterns of paths to skip
        #[arg(long = "ignore", value_delimiter = ',')]
        ignore_patterns: Vec<String>,
    },

    /// Crawl contract interfaces through the explorer cache and print
    /// the mutating-function frequency table
    Frequency {
        /// Corpus root to scan for contract sources
        path: PathBuf,

        /// Persistent ABI cache file
        #[arg(long = "cache-file")]
        cache_file: Option<PathBuf>,

        /// Etherscan API keys (repeatable or comma-separated)
        #[arg(long = "api-key", env = "SOLGUARD_API_KEYS", value_delimiter = ',')]
        api_keys: Vec<String>,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Also list the contributing file paths per function
        #[arg(long = "show-paths")]
        show_paths: bool,

        /// Keep only files containing all of these keywords
        #[arg(long = "keyword", value_delimiter = ',')]
        keywords: Vec<String>,

        /// Drop files containing any of these keywords
        #[arg(long = "exclude-keyword", value_delimiter = ',')]
        exclude_keywords: Vec<String>,
    },
}
