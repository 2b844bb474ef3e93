//! The guards pipeline: discover corpus files, extract and classify
//! guard statements, append per-category reports.

use anyhow::Result;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::analysis::classify::classify;
use crate::analysis::guards::extract_guards;
use crate::config::SolguardConfig;
use crate::core::InvariantCategory;
use crate::io::reports::ReportWriter;
use crate::io::walker::{filter_by_keywords, CorpusWalker};

pub struct GuardsConfig {
    pub path: PathBuf,
    pub report_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub keywords: Vec<String>,
    pub exclude_keywords: Vec<String>,
    pub ignore_patterns: Vec<String>,
}

pub fn run(args: GuardsConfig) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => SolguardConfig::from_file(path)?,
        None => SolguardConfig::default(),
    };
    config.corpus_root = args.path;
    if let Some(report_dir) = args.report_dir {
        config.report_dir = report_dir;
    }
    if !args.keywords.is_empty() {
        config.keywords = args.keywords;
    }
    if !args.exclude_keywords.is_empty() {
        config.exclude_keywords = args.exclude_keywords;
    }

    let mut files = CorpusWalker::new(config.corpus_root.clone())
        .with_ignore_patterns(args.ignore_patterns)
        .walk()?;
    log::info!("corpus: {} source files", files.len());

    if !config.keywords.is_empty() || !config.exclude_keywords.is_empty() {
        files = filter_by_keywords(&files, &config.keywords, &config.exclude_keywords)?;
        log::info!("after keyword filter: {} files", files.len());
    }

    let guards = extract_guards(&config.corpus_root, &files)?;

    let writer = ReportWriter::new(config.report_dir.clone());
    writer.ensure_dir()?;

    let mut counts: HashMap<InvariantCategory, usize> = HashMap::new();
    for guard in &guards {
        let category = classify(&guard.text);
        writer.append(category, guard)?;
        *counts.entry(category).or_default() += 1;
        log::debug!("{category}: {} ({})", guard.text, guard.location.clickable());
    }

    let mut summary: Vec<(InvariantCategory, usize)> = counts.into_iter().collect();
    summary.sort_by(|a, b| b.1.cmp(&a.1));
    println!(
        "{} unique guard statements, reports in {}",
        guards.len(),
        config.report_dir.display()
    );
    for (category, count) in summary {
        println!("({category}, {count})");
    }

    Ok(())
}
