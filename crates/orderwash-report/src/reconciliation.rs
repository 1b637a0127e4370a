//! Reconciliation report: the accounting identity as a machine-readable
//! artifact, so an operator can explain every input row that did not reach
//! the output.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use orderwash_model::{RejectReason, RunSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub input_records: usize,
    pub output_records: usize,
    pub rejected_records: usize,
    /// Rejection counts keyed by wire-format reason code.
    pub rejections: BTreeMap<RejectReason, usize>,
    /// True when input = output + rejections; a false value means the run
    /// itself is buggy, not the data.
    pub balanced: bool,
}

impl ReconciliationReport {
    pub fn from_summary(summary: &RunSummary) -> Self {
        Self {
            input_records: summary.input_records,
            output_records: summary.output_records,
            rejected_records: summary.rejected_records(),
            rejections: summary.rejections.clone(),
            balanced: summary.balances(),
        }
    }
}

/// Write the reconciliation report as pretty-printed JSON.
pub fn write_reconciliation_json<W: Write>(writer: W, report: &ReconciliationReport) -> Result<()> {
    serde_json::to_writer_pretty(writer, report).context("serialize reconciliation report")?;
    Ok(())
}

/// Write the reconciliation report to a file.
pub fn write_reconciliation_json_file(path: &Path, report: &ReconciliationReport) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create reconciliation output {}", path.display()))?;
    write_reconciliation_json(file, report)
}
