//! # Restyle
//!
//! Batch inline-style migration for HTML directory trees.
//!
//! This crate walks a directory tree, applies a fixed, ordered list of regex
//! substitutions to every `.html` file, and writes each file back in place
//! only when its content actually changed. It exists to migrate inline
//! `style` attributes and legacy class names toward centralized stylesheet
//! classes.
//!
//! The substitutions are textual: markup is never parsed into a DOM, and the
//! style-attribute rules deliberately rely on double-quoted, single-line
//! attribute values. Rule order is fixed and load-bearing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restyle::prelude::*;
//!
//! // Preview the migration without touching any files
//! let result = Rewrite::in_tree("./site")
//!     .rules(inline_color_rules()?)
//!     .dry_run()
//!     .run()?;
//!
//! println!("{}", result.diff());
//! println!("{}", result.summary);
//! # Ok::<(), restyle::error::RestyleError>(())
//! ```
//!
//! ## Applying in place
//!
//! ```rust,no_run
//! use restyle::prelude::*;
//!
//! let result = Rewrite::in_tree("./site")
//!     .rules(inline_color_rules()?)
//!     .run()?;
//!
//! for report in &result.reports {
//!     match &report.outcome {
//!         Outcome::Changed => println!("updated: {}", report.path.display()),
//!         Outcome::Unchanged => println!("no changes: {}", report.path.display()),
//!         Outcome::Failed(reason) => println!("error: {}: {}", report.path.display(), reason),
//!     }
//! }
//! # Ok::<(), restyle::error::RestyleError>(())
//! ```
//!
//! Per-file read or write failures are reported as [`Outcome::Failed`] and
//! never abort the run; only a missing root directory is fatal.

pub mod diff;
pub mod error;
pub mod matcher;
pub mod rewrite;
pub mod rules;
pub mod transform;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::diff::{DiffSummary, colorized_diff, unified_diff};
    pub use crate::error::{RestyleError, Result};
    pub use crate::matcher::FileMatcher;
    pub use crate::rewrite::{FileReport, Outcome, Rewrite, RewriteResult, RunSummary};
    pub use crate::rules::inline_color_rules;
    pub use crate::transform::{FileChange, Rule, RulePipeline};
}

pub use prelude::*;
