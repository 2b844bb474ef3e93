//! Guard statement extraction: find `require`-style preconditions in raw
//! source lines, normalize them and deduplicate across the whole corpus.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::Result;
use crate::core::{GuardStatement, SourceLocation};

lazy_static! {
    static ref DOUBLE_QUOTED: Regex = Regex::new(r#""[^"]*""#).unwrap();
    static ref SINGLE_QUOTED: Regex = Regex::new(r"'[^']*'").unwrap();
}

/// A trimmed line is a guard candidate iff it starts with the `require`
/// token, carries a statement terminator, and is not a comment line.
pub fn is_guard_candidate(trimmed: &str) -> bool {
    trimmed.starts_with("require")
        && trimmed.contains(';')
        && !trimmed.starts_with("//")
        && !trimmed.starts_with("/*")
}

/// Normalize a candidate line into the dedup/classification key:
/// truncate at the first `;` (dropping trailing comments), strip all
/// whitespace, and blank the contents of quoted message literals so
/// cosmetic error-text differences do not split otherwise equal guards.
pub fn normalize_statement(line: &str) -> String {
    let body = line.split(';').next().unwrap_or(line);
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = DOUBLE_QUOTED.replace_all(&compact, "\"\"");
    SINGLE_QUOTED.replace_all(&compact, "\"\"").into_owned()
}

/// Scan one file's contents, pushing a `GuardStatement` for every
/// normalized text not seen before. `seen` is the corpus-wide dedup set;
/// the first location encountered wins, later occurrences are dropped.
pub fn scan_content(
    path: &Path,
    content: &str,
    seen: &mut HashSet<String>,
    out: &mut Vec<GuardStatement>,
) {
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if !is_guard_candidate(line) {
            continue;
        }
        let text = normalize_statement(line);
        if seen.insert(text.clone()) {
            out.push(GuardStatement {
                text,
                location: SourceLocation {
                    path: path.to_path_buf(),
                    line: idx + 1,
                },
            });
        }
    }
}

/// Extract all unique guard statements from the corpus, in processing
/// order. Locations are recorded relative to `root` so report links stay
/// portable. A file read failure aborts the run.
pub fn extract_guards(root: &Path, paths: &[PathBuf]) -> Result<Vec<GuardStatement>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for path in paths {
        let content = fs::read_to_string(path)?;
        let relative = path.strip_prefix(root).unwrap_or(path.as_path());
        scan_content(relative, &content, &mut seen, &mut out);
    }
    Ok(out)
}
