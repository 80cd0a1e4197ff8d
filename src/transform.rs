//! Ordered regex substitution pipeline.

use crate::error::Result;
use regex::Regex;
use std::path::PathBuf;

/// A single find-and-replace rule: a compiled regex and a replacement
/// template that may reference capture groups (`${1}`, `${2}`, ...).
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Compiles a rule from a pattern and replacement template.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Applies the rule to the full text, replacing every non-overlapping
    /// match. Matching is case-sensitive.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }

    /// Returns a description of the rule.
    pub fn describe(&self) -> String {
        format!(
            "Replace pattern '{}' with '{}'",
            self.pattern.as_str(),
            self.replacement
        )
    }
}

/// A strictly ordered list of rules applied as a linear pipeline.
///
/// Each rule rescans the whole text from the start; the output of rule N is
/// the input of rule N+1. Order is load-bearing: later rules deliberately
/// target byproducts of earlier ones (an empty `style=""` left behind by a
/// color-stripping rule, for instance), so rules must never be reordered.
#[derive(Default)]
pub struct RulePipeline {
    rules: Vec<Rule>,
}

impl RulePipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule, compiling the pattern.
    pub fn rule(mut self, pattern: &str, replacement: &str) -> Result<Self> {
        self.rules.push(Rule::new(pattern, replacement)?);
        Ok(self)
    }

    /// Threads the text through every rule in order.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in &self.rules {
            result = rule.apply(&result);
        }
        result
    }

    /// Returns descriptions of all rules in application order.
    pub fn describe(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.describe()).collect()
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A pending change to a single file.
#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub original: String,
    pub transformed: String,
}

impl FileChange {
    /// Returns true if the content was modified.
    pub fn is_modified(&self) -> bool {
        self.original != self.transformed
    }
}
