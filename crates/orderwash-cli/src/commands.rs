//! Command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use orderwash_core::{RunOutput, run_csv_file};
use orderwash_report::{ReportPaths, write_run_outputs};
use orderwash_rules::RuleSet;

use crate::cli::{RulesArgs, RunArgs};

/// What a `run` invocation produced, for summary printing and exit codes.
pub struct RunResult {
    pub input: PathBuf,
    pub output: RunOutput,
    /// Artifact paths, absent for dry runs.
    pub paths: Option<ReportPaths>,
}

/// Execute `orderwash run`.
pub fn run(args: &RunArgs) -> Result<RunResult> {
    let rules = load_rules(args.rules.as_deref())?;
    let output = run_csv_file(&args.input, &rules)?;

    if !output.summary.balances() {
        warn!(
            input = output.summary.input_records,
            output = output.summary.output_records,
            rejected = output.summary.rejected_records(),
            "reconciliation does not balance"
        );
    }

    let paths = if args.dry_run {
        info!("dry run, skipping artifact output");
        None
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.input));
        let paths = write_run_outputs(
            &output_dir,
            &output.clean,
            &output.ledger,
            &output.summary,
        )?;
        info!(dir = %output_dir.display(), "run artifacts written");
        Some(paths)
    };

    Ok(RunResult {
        input: args.input.clone(),
        output,
        paths,
    })
}

/// Execute `orderwash rules`: print the active noise tables.
pub fn rules(args: &RulesArgs) -> Result<()> {
    let rules = load_rules(args.rules.as_deref())?;

    println!("Order id sentinels:");
    for sentinel in rules.id_sentinels.iter() {
        println!("  {sentinel:?}");
    }
    println!();
    println!("Product placeholders:");
    for placeholder in rules.product_blacklist.iter() {
        println!("  {placeholder:?}");
    }
    println!();
    println!("Country aliases:");
    for (alias, canonical) in rules.country_aliases.iter() {
        println!("  {alias:?} -> {canonical}");
    }
    Ok(())
}

fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => {
            RuleSet::load(path).with_context(|| format!("load rules file {}", path.display()))
        }
        None => RuleSet::load_default().context("load default rules"),
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}
