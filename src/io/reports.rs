//! Report output: per-category invariant files and the frequency listing

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::{GuardStatement, InvariantCategory};

/// Appends classified guard statements to one file per category.
///
/// Files are opened in append mode per record and never truncated, so
/// re-running over the same corpus duplicates every record; dedup is a
/// within-run property of the extractor, not of the reports.
pub struct ReportWriter {
    report_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(report_dir: PathBuf) -> Self {
        Self { report_dir }
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.report_dir)?;
        Ok(())
    }

    /// Append one record: the normalized statement, a clickable source
    /// reference, and a blank separator line.
    pub fn append(&self, category: InvariantCategory, statement: &GuardStatement) -> Result<()> {
        let path = self.report_dir.join(format!("{category}.md"));
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", statement.text)?;
        writeln!(file, "{}", statement.location.clickable())?;
        writeln!(file)?;
        Ok(())
    }
}

/// Print the frequency rows as `(name, count)` pairs, optionally
/// followed by the contributing file links.
pub fn print_frequency_table(rows: &[(String, Vec<PathBuf>)], show_paths: bool) {
    println!("Function frequency:");
    for (name, paths) in rows {
        println!("({}, {})", name, paths.len());
        if show_paths {
            for path in paths {
                println!("[Code File]({})", path.display());
            }
        }
    }
}
