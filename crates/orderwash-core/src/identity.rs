//! Identity resolution: order-id validity and first-occurrence dedup.
//!
//! A valid order id is a strict positive-integer token that is not in the
//! configured sentinel set. Valid ids are canonicalized to their plain
//! decimal form (`"007"` and `"7"` are the same order) and deduplicated on
//! that canonical value: the record with the lowest origin index survives,
//! every later occurrence is rejected. Because the tie-break is positional,
//! input ordering is part of this stage's contract.

use std::collections::BTreeMap;

use tracing::debug;

use orderwash_model::{RawRecord, RejectReason, RejectionEntry, Stage};
use orderwash_rules::IdSentinels;

/// The partition produced by identity resolution: at most one record per
/// canonical order id, plus a rejection entry for everything else.
#[derive(Debug)]
pub struct IdentityOutcome {
    /// Surviving records paired with their canonical order id, in input order.
    pub kept: Vec<(RawRecord, String)>,
    pub rejections: Vec<RejectionEntry>,
}

/// Why an order id failed the validity predicate.
enum IdFault {
    Missing,
    Sentinel,
    NotAPositiveInteger,
}

/// Canonical id for a valid token, or the fault that makes it invalid.
fn canonical_order_id(value: Option<&str>, sentinels: &IdSentinels) -> Result<String, IdFault> {
    let raw = value.unwrap_or("").trim();
    if raw.is_empty() {
        return Err(IdFault::Missing);
    }
    if sentinels.contains(raw) {
        return Err(IdFault::Sentinel);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdFault::NotAPositiveInteger);
    }
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id.to_string()),
        _ => Err(IdFault::NotAPositiveInteger),
    }
}

/// Partition records into kept-per-id and rejected.
pub fn resolve_identities(records: Vec<RawRecord>, sentinels: &IdSentinels) -> IdentityOutcome {
    let mut kept: Vec<(RawRecord, String)> = Vec::with_capacity(records.len());
    let mut rejections = Vec::new();
    // Canonical id -> origin of the first occurrence.
    let mut first_seen: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        let raw_id = record.order_id.clone().unwrap_or_default();
        match canonical_order_id(record.order_id.as_deref(), sentinels) {
            Ok(canonical) => {
                if let Some(&first_origin) = first_seen.get(&canonical) {
                    rejections.push(RejectionEntry {
                        origin: record.origin,
                        stage: Stage::Identity,
                        reason: RejectReason::DuplicateId,
                        order_id: raw_id,
                        detail: format!("duplicate of record at origin {first_origin}"),
                    });
                } else {
                    first_seen.insert(canonical.clone(), record.origin);
                    kept.push((record, canonical));
                }
            }
            Err(fault) => {
                let detail = match fault {
                    IdFault::Missing => "missing order id".to_string(),
                    IdFault::Sentinel => format!("sentinel order id {raw_id:?}"),
                    IdFault::NotAPositiveInteger => {
                        format!("order id {raw_id:?} is not a positive integer")
                    }
                };
                rejections.push(RejectionEntry {
                    origin: record.origin,
                    stage: Stage::Identity,
                    reason: RejectReason::InvalidId,
                    order_id: raw_id,
                    detail,
                });
            }
        }
    }

    debug!(
        kept = kept.len(),
        rejected = rejections.len(),
        "resolved order identities"
    );
    IdentityOutcome { kept, rejections }
}
