use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::Result;

/// Discovers corpus source files under a root directory.
///
/// Results are sorted lexicographically: dedup order and frequency-table
/// insertion order downstream are functions of processing order, and raw
/// directory-walk order is filesystem-dependent.
pub struct CorpusWalker {
    root: PathBuf,
    extension: String,
    ignore_patterns: Vec<String>,
}

impl CorpusWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "sol".to_string(),
            ignore_patterns: vec![],
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        if ext.to_string_lossy() != self.extension {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

/// Keep only files whose lower-cased content contains every required
/// keyword and none of the excluded ones. Used to narrow a raw contract
/// dump to one domain before analysis.
pub fn filter_by_keywords(
    paths: &[PathBuf],
    required: &[String],
    excluded: &[String],
) -> Result<Vec<PathBuf>> {
    let mut selected = Vec::new();
    for path in paths {
        let content = fs::read_to_string(path)?.to_lowercase();
        let wanted = required.iter().all(|kw| content.contains(&kw.to_lowercase()))
            && !excluded.iter().any(|kw| content.contains(&kw.to_lowercase()));
        if wanted {
            selected.push(path.clone());
        }
    }
    Ok(selected)
}
