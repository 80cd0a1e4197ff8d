//! Rewrite engine: discovery, per-file processing, outcome aggregation.

use crate::diff::{DiffSummary, colorized_diff, unified_diff};
use crate::error::{RestyleError, Result};
use crate::matcher::FileMatcher;
use crate::transform::{FileChange, RulePipeline};
use std::fs;
use std::path::{Path, PathBuf};

/// The per-file result classification.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The file was rewritten (or would be, in dry-run mode).
    Changed,
    /// No rule matched; the file was not written.
    Unchanged,
    /// Reading or writing the file failed; the run continued.
    Failed(String),
}

/// Result for a single discovered file, with its path relative to the root.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
    change: Option<FileChange>,
}

/// Aggregate counts for one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub total: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Updated {} of {} file(s)", self.changed, self.total)?;
        if self.failed > 0 {
            write!(f, ", {} failed", self.failed)?;
        }
        Ok(())
    }
}

/// The result of one full pass over the tree.
#[derive(Debug)]
pub struct RewriteResult {
    pub reports: Vec<FileReport>,
    pub summary: RunSummary,
    pub diff_summary: DiffSummary,
}

impl RewriteResult {
    /// Returns true if any per-file error occurred.
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    /// Generates a unified diff of all pending changes (dry-run mode only;
    /// in apply mode the file contents are not retained).
    pub fn diff(&self) -> String {
        self.render_diff(unified_diff)
    }

    /// Generates a colorized diff for terminal display.
    pub fn colorized_diff(&self) -> String {
        self.render_diff(colorized_diff)
    }

    fn render_diff(&self, render: fn(&str, &str, &Path) -> String) -> String {
        self.reports
            .iter()
            .filter_map(|r| r.change.as_ref())
            .map(|c| render(&c.original, &c.transformed, &c.path))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The rewrite entry point: walks a tree and applies a rule pipeline to
/// every matching file, in place.
pub struct Rewrite {
    root: PathBuf,
    matcher: FileMatcher,
    rules: RulePipeline,
    dry_run: bool,
}

impl Rewrite {
    /// Creates a rewrite rooted at the given directory, targeting `.html`
    /// files by default.
    pub fn in_tree(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            matcher: FileMatcher::new("html"),
            rules: RulePipeline::new(),
            dry_run: false,
        }
    }

    /// Overrides the target file extension (without dot).
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.matcher = FileMatcher::new(ext);
        self
    }

    /// Sets the rule pipeline to apply.
    pub fn rules(mut self, rules: RulePipeline) -> Self {
        self.rules = rules;
        self
    }

    /// Enables dry-run mode: nothing is written, and pending changes are
    /// retained for diff rendering.
    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Runs the full pass: discover, transform, conditionally write back.
    ///
    /// Per-file read and write errors are folded into the file's report and
    /// never abort the run; only a missing root is fatal. There is no
    /// transactional guarantee across files.
    pub fn run(self) -> Result<RewriteResult> {
        let files = self.matcher.collect(&self.root)?;

        let mut reports = Vec::new();
        let mut summary = RunSummary::default();
        let mut diff_summary = DiffSummary::default();

        for path in files {
            summary.total += 1;
            let rel = path.strip_prefix(&self.root).unwrap_or(&path).to_path_buf();

            match self.process_file(&path) {
                Ok(change) if change.is_modified() => {
                    summary.changed += 1;
                    diff_summary.merge(&DiffSummary::from_diff(
                        &change.original,
                        &change.transformed,
                    ));
                    // Pending changes are only retained for the dry-run
                    // preview, keyed by the root-relative path.
                    let pending = self.dry_run.then(|| FileChange {
                        path: rel.clone(),
                        ..change
                    });
                    reports.push(FileReport {
                        path: rel,
                        outcome: Outcome::Changed,
                        change: pending,
                    });
                }
                Ok(_) => {
                    summary.unchanged += 1;
                    reports.push(FileReport {
                        path: rel,
                        outcome: Outcome::Unchanged,
                        change: None,
                    });
                }
                Err(e) => {
                    summary.failed += 1;
                    reports.push(FileReport {
                        path: rel,
                        outcome: Outcome::Failed(e.to_string()),
                        change: None,
                    });
                }
            }
        }

        Ok(RewriteResult {
            reports,
            summary,
            diff_summary,
        })
    }

    /// Reads, transforms, and conditionally writes back one file.
    ///
    /// The write replaces the whole file and passes bytes through with no
    /// newline translation, so existing line endings are preserved. The
    /// write is only attempted once the transform has produced different
    /// content, so a write failure leaves the pre-transform file on disk.
    fn process_file(&self, path: &Path) -> Result<FileChange> {
        let original = fs::read_to_string(path).map_err(|e| RestyleError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let transformed = self.rules.apply(&original);

        if transformed != original && !self.dry_run {
            fs::write(path, &transformed).map_err(|e| RestyleError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        Ok(FileChange {
            path: path.to_path_buf(),
            original,
            transformed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            total: 5,
            changed: 3,
            unchanged: 2,
            failed: 0,
        };

        assert_eq!(summary.to_string(), "Updated 3 of 5 file(s)");
    }

    #[test]
    fn test_summary_display_with_failures() {
        let summary = RunSummary {
            total: 5,
            changed: 3,
            unchanged: 1,
            failed: 1,
        };

        assert_eq!(summary.to_string(), "Updated 3 of 5 file(s), 1 failed");
    }
}
