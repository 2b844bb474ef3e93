//! The frequency pipeline: crawl contract interfaces through the cache
//! and print how often each mutating function name appears in the corpus.

use anyhow::Result;
use std::path::PathBuf;

use crate::analysis::frequency::build_frequency_table;
use crate::config::SolguardConfig;
use crate::explorer::cache::AbiCache;
use crate::explorer::client::EtherscanClient;
use crate::explorer::rotor::KeyRotator;
use crate::io::reports::print_frequency_table;
use crate::io::walker::{filter_by_keywords, CorpusWalker};

pub struct FrequencyConfig {
    pub path: PathBuf,
    pub cache_file: Option<PathBuf>,
    pub api_keys: Vec<String>,
    pub config: Option<PathBuf>,
    pub show_paths: bool,
    pub keywords: Vec<String>,
    pub exclude_keywords: Vec<String>,
}

pub fn run(args: FrequencyConfig) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SolguardConfig::from_file(path)?,
        None => SolguardConfig::default(),
    };
    config.corpus_root = args.path;
    if let Some(cache_file) = args.cache_file {
        config.cache_file = cache_file;
    }
    if !args.api_keys.is_empty() {
        config.api_keys = args.api_keys;
    }
    if !args.keywords.is_empty() {
        config.keywords = args.keywords;
    }
    if !args.exclude_keywords.is_empty() {
        config.exclude_keywords = args.exclude_keywords;
    }

    let rotor = KeyRotator::new(config.api_keys.clone())?;
    let client = EtherscanClient::new(rotor);
    let mut cache = AbiCache::load(config.cache_file.clone(), client)?;

    let mut files = CorpusWalker::new(config.corpus_root.clone()).walk()?;
    if !config.keywords.is_empty() || !config.exclude_keywords.is_empty() {
        files = filter_by_keywords(&files, &config.keywords, &config.exclude_keywords)?;
    }

    // Table rows carry corpus-relative paths so the printed links are portable
    let relative: Vec<PathBuf> = files
        .iter()
        .map(|path| {
            path.strip_prefix(&config.corpus_root)
                .unwrap_or(path.as_path())
                .to_path_buf()
        })
        .collect();

    let table = build_frequency_table(&mut cache, &relative)?;
    let rows = table.into_sorted();
    print_frequency_table(&rows, args.show_paths);
    log::info!("{}", cache.stats());

    Ok(())
}
