//! Output generation for orderwash pipeline runs.
//!
//! Three artifacts per run, all deterministic for a given input:
//!
//! - **clean.csv**: the canonical 13-column clean record set
//! - **rejections.csv**: the rejection ledger, one row per excluded record
//! - **reconciliation.json**: counts tying input to output by reason code

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

mod clean_csv;
mod ledger_csv;
mod reconciliation;

pub use clean_csv::{CLEAN_COLUMNS, write_clean_csv, write_clean_csv_file};
pub use ledger_csv::{LEDGER_COLUMNS, write_ledger_csv, write_ledger_csv_file};
pub use reconciliation::{
    ReconciliationReport, write_reconciliation_json, write_reconciliation_json_file,
};

use orderwash_model::{CleanRecord, RejectionLedger, RunSummary};

/// Paths of the artifacts a run wrote.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub clean_csv: PathBuf,
    pub ledger_csv: PathBuf,
    pub reconciliation_json: PathBuf,
}

/// Write all run artifacts into an output directory, creating it if needed.
pub fn write_run_outputs(
    output_dir: &Path,
    clean: &[CleanRecord],
    ledger: &RejectionLedger,
    summary: &RunSummary,
) -> Result<ReportPaths> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let paths = ReportPaths {
        clean_csv: output_dir.join("clean.csv"),
        ledger_csv: output_dir.join("rejections.csv"),
        reconciliation_json: output_dir.join("reconciliation.json"),
    };

    write_clean_csv_file(&paths.clean_csv, clean)?;
    write_ledger_csv_file(&paths.ledger_csv, ledger)?;
    write_reconciliation_json_file(
        &paths.reconciliation_json,
        &ReconciliationReport::from_summary(summary),
    )?;

    Ok(paths)
}
