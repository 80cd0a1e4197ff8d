//! Diff rendering for dry-run previews.

use similar::{ChangeTag, TextDiff};
use std::fmt::Write;
use std::path::Path;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Generates a unified diff between the original and rewritten content.
pub fn unified_diff(original: &str, modified: &str, path: &Path) -> String {
    render(original, modified, path, false)
}

/// Generates a colorized diff for terminal display.
pub fn colorized_diff(original: &str, modified: &str, path: &Path) -> String {
    render(original, modified, path, true)
}

fn render(original: &str, modified: &str, path: &Path, color: bool) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut output = String::new();

    let (head, reset) = if color { (CYAN, RESET) } else { ("", "") };
    writeln!(&mut output, "{}--- a/{}{}", head, path.display(), reset).ok();
    writeln!(&mut output, "{}+++ b/{}{}", head, path.display(), reset).ok();

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 && !color {
            writeln!(&mut output).ok();
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, tint) = match change.tag() {
                    ChangeTag::Delete => ("-", RED),
                    ChangeTag::Insert => ("+", GREEN),
                    ChangeTag::Equal => (" ", ""),
                };

                if color && !tint.is_empty() {
                    write!(&mut output, "{}{}{}{}", tint, sign, change.value(), RESET).ok();
                } else {
                    write!(&mut output, "{}{}", sign, change.value()).ok();
                }
            }
        }
    }

    output
}

/// Line-level totals across all rewritten files, shown under a dry-run diff.
#[derive(Debug, Default)]
pub struct DiffSummary {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffSummary {
    /// Counts the changed lines between original and rewritten content.
    pub fn from_diff(original: &str, modified: &str) -> Self {
        let diff = TextDiff::from_lines(original, modified);
        let mut insertions = 0;
        let mut deletions = 0;

        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => insertions += 1,
                ChangeTag::Delete => deletions += 1,
                ChangeTag::Equal => {}
            }
        }

        Self {
            files_changed: usize::from(insertions > 0 || deletions > 0),
            insertions,
            deletions,
        }
    }

    /// Combines two summaries.
    pub fn merge(&mut self, other: &DiffSummary) {
        self.files_changed += other.files_changed;
        self.insertions += other.insertions;
        self.deletions += other.deletions;
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file(s) changed, {} insertions(+), {} deletions(-)",
            self.files_changed, self.insertions, self.deletions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unified_diff_marks_changed_lines() {
        let diff = unified_diff("a\nb\n", "a\nc\n", &PathBuf::from("x.html"));

        assert!(diff.contains("--- a/x.html"));
        assert!(diff.contains("-b"));
        assert!(diff.contains("+c"));
    }

    #[test]
    fn test_summary_counts_lines() {
        let summary = DiffSummary::from_diff("a\nb\n", "a\nc\nd\n");

        assert_eq!(summary.files_changed, 1);
        assert_eq!(summary.insertions, 2);
        assert_eq!(summary.deletions, 1);
    }

    #[test]
    fn test_summary_identical_content() {
        let summary = DiffSummary::from_diff("same\n", "same\n");

        assert_eq!(summary.files_changed, 0);
        assert_eq!(summary.insertions, 0);
        assert_eq!(summary.deletions, 0);
    }
}
