//! CLI for the restyle tool.

use anyhow::{Context, Result};
use clap::Parser;
use restyle::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "restyle")]
#[command(version, about = "Batch inline-style migration for HTML files", long_about = None)]
struct Cli {
    /// Root directory to process
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File extension to rewrite (without dot)
    #[arg(short, long, default_value = "html")]
    extension: String,

    /// Preview changes without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Print the migration rules in application order and exit
    #[arg(long)]
    list_rules: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = inline_color_rules().context("Failed to compile migration rules")?;

    if cli.list_rules {
        for (idx, desc) in rules.describe().iter().enumerate() {
            println!("{:2}. {}", idx + 1, desc);
        }
        return Ok(());
    }

    let mut rewrite = Rewrite::in_tree(&cli.path)
        .extension(cli.extension.as_str())
        .rules(rules);

    if cli.dry_run {
        rewrite = rewrite.dry_run();
    }

    let result = rewrite
        .run()
        .with_context(|| format!("Failed to process {}", cli.path.display()))?;

    for report in &result.reports {
        match &report.outcome {
            Outcome::Changed => println!("updated: {}", report.path.display()),
            Outcome::Unchanged => println!("no changes: {}", report.path.display()),
            Outcome::Failed(reason) => println!("error: {}: {}", report.path.display(), reason),
        }
    }

    if cli.dry_run {
        print!("{}", result.colorized_diff());
        println!("{}", result.diff_summary);
    }

    println!("{}", result.summary);

    // All non-erroring files were still processed, but surface the failures
    // in the exit status.
    if result.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
