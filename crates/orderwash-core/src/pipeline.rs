//! Stage sequencing for a cleaning run.
//!
//! Fixed order: ingestion, identity resolution, normalization, imputation.
//! A record rejected at any stage goes to the ledger and no further; the
//! rest of the batch continues. Output ordering is stable by origin index
//! and nothing is published until the whole run completes, so a run is
//! deterministic end to end.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use orderwash_ingest::CsvIngestOptions;
use orderwash_model::{
    CleanRecord, RawRecord, RejectReason, RejectionEntry, RejectionLedger, RunSummary, Stage,
};
use orderwash_rules::RuleSet;
use orderwash_transform::{DonorTables, NormalizedRecord, normalize_record};

/// Everything a run produces: the clean set, the rejection ledger, and the
/// reconciliation summary tying the two back to the input count.
#[derive(Debug)]
pub struct RunOutput {
    pub clean: Vec<CleanRecord>,
    pub ledger: RejectionLedger,
    pub summary: RunSummary,
}

/// Run the full pipeline over already-ingested records.
pub fn run_records(records: Vec<RawRecord>, rules: &RuleSet) -> RunOutput {
    let input_count = records.len();
    info!(records = input_count, "pipeline run started");

    let mut ledger = RejectionLedger::default();

    // Stage: identity resolution.
    let identity = crate::identity::resolve_identities(records, &rules.id_sentinels);
    for entry in identity.rejections {
        ledger.push(entry);
    }
    info!(kept = identity.kept.len(), stage = %Stage::Identity, "stage complete");

    // Stage: per-field normalization.
    let mut normalized: Vec<NormalizedRecord> = Vec::with_capacity(identity.kept.len());
    for (record, canonical_id) in identity.kept {
        match normalize_record(rules, &record, canonical_id) {
            Ok(norm) => normalized.push(norm),
            Err(reason) => ledger.push(RejectionEntry {
                origin: record.origin,
                stage: Stage::Normalize,
                reason,
                order_id: record.order_id.clone().unwrap_or_default(),
                detail: normalize_detail(&record, reason),
            }),
        }
    }
    info!(kept = normalized.len(), stage = %Stage::Normalize, "stage complete");

    // Stage: imputation. Aggregate pass first, then per-record apply.
    let tables = DonorTables::build(&normalized);
    let mut clean: Vec<CleanRecord> = Vec::with_capacity(normalized.len());
    for record in normalized {
        let origin = record.origin;
        let order_id = record.order_id.clone();
        let product = record.product_name.clone();
        match tables.apply(record) {
            Ok(record) => clean.push(record),
            Err(reason) => ledger.push(RejectionEntry {
                origin,
                stage: Stage::Impute,
                reason,
                order_id,
                detail: format!("no donor for {product:?}"),
            }),
        }
    }
    info!(kept = clean.len(), stage = %Stage::Impute, "stage complete");

    clean.sort_by_key(|r| r.origin);
    ledger.sort_by_origin();
    let summary = RunSummary::new(input_count, clean.len(), &ledger);
    info!(
        input = summary.input_records,
        output = summary.output_records,
        rejected = summary.rejected_records(),
        "pipeline run finished"
    );

    RunOutput {
        clean,
        ledger,
        summary,
    }
}

/// Convenience entry point: ingest a CSV file and run the pipeline.
pub fn run_csv_file(path: &Path, rules: &RuleSet) -> anyhow::Result<RunOutput> {
    let options = CsvIngestOptions::new(path.display().to_string());
    let records = orderwash_ingest::ingest_csv_file(path, &options)
        .with_context(|| format!("ingest {}", path.display()))?;
    Ok(run_records(records, rules))
}

fn normalize_detail(record: &RawRecord, reason: RejectReason) -> String {
    match reason {
        RejectReason::MissingOrInvalidDate => match &record.order_date {
            Some(value) => format!("unparseable order date {value:?}"),
            None => "missing order date".to_string(),
        },
        RejectReason::InvalidProduct => match &record.product_name {
            Some(value) => format!("placeholder product name {value:?}"),
            None => "missing product name".to_string(),
        },
        other => other.as_str().to_string(),
    }
}
