//! Rejection ledger CSV output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use orderwash_model::RejectionLedger;

/// Ledger columns, in order.
pub const LEDGER_COLUMNS: [&str; 5] = ["origin", "stage", "reason", "order_id", "detail"];

/// Write the rejection ledger as CSV, one row per excluded record.
pub fn write_ledger_csv<W: Write>(writer: W, ledger: &RejectionLedger) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(LEDGER_COLUMNS)
        .context("write ledger header")?;
    for entry in &ledger.entries {
        csv_writer
            .write_record([
                entry.origin.to_string(),
                entry.stage.as_str().to_string(),
                entry.reason.as_str().to_string(),
                entry.order_id.clone(),
                entry.detail.clone(),
            ])
            .with_context(|| format!("write ledger entry for origin {}", entry.origin))?;
    }
    csv_writer.flush().context("flush ledger output")?;
    Ok(())
}

/// Write the rejection ledger to a file.
pub fn write_ledger_csv_file(path: &Path, ledger: &RejectionLedger) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create ledger output {}", path.display()))?;
    write_ledger_csv(file, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderwash_model::{RejectReason, RejectionEntry, Stage};

    #[test]
    fn writes_reason_codes_in_wire_spelling() {
        let mut ledger = RejectionLedger::default();
        ledger.push(RejectionEntry {
            origin: 4,
            stage: Stage::Identity,
            reason: RejectReason::InvalidId,
            order_id: "???".to_string(),
            detail: "sentinel order id \"???\"".to_string(),
        });
        ledger.push(RejectionEntry {
            origin: 9,
            stage: Stage::Normalize,
            reason: RejectReason::MissingOrInvalidDate,
            order_id: "1002".to_string(),
            detail: "missing order date".to_string(),
        });

        let mut buffer = Vec::new();
        write_ledger_csv(&mut buffer, &ledger).expect("write");
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "origin,stage,reason,order_id,detail");
        assert!(lines[1].starts_with("4,identity,invalid_id,???,"));
        assert!(lines[2].starts_with("9,normalize,missing_or_invalid_date,1002,"));
    }
}
