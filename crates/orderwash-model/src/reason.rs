use std::fmt;

use serde::{Deserialize, Serialize};

/// Pipeline stage at which a record was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Identity,
    Normalize,
    Impute,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Identity => "identity",
            Stage::Normalize => "normalize",
            Stage::Impute => "impute",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason code attached to every rejection ledger entry.
///
/// The spellings below are the wire format: they appear verbatim in the
/// ledger CSV and the reconciliation report, and operators key on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    InvalidId,
    DuplicateId,
    MissingOrInvalidDate,
    InvalidProduct,
    UnresolvablePriceGap,
    UnresolvableQuantityGap,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidId => "invalid_id",
            RejectReason::DuplicateId => "duplicate_id",
            RejectReason::MissingOrInvalidDate => "missing_or_invalid_date",
            RejectReason::InvalidProduct => "invalid_product",
            RejectReason::UnresolvablePriceGap => "unresolvable_price_gap",
            RejectReason::UnresolvableQuantityGap => "unresolvable_quantity_gap",
        }
    }

    /// All reason codes, in ledger/report display order.
    pub fn all() -> [RejectReason; 6] {
        [
            RejectReason::InvalidId,
            RejectReason::DuplicateId,
            RejectReason::MissingOrInvalidDate,
            RejectReason::InvalidProduct,
            RejectReason::UnresolvablePriceGap,
            RejectReason::UnresolvableQuantityGap,
        ]
    }

    /// The stage that emits this reason.
    pub fn stage(&self) -> Stage {
        match self {
            RejectReason::InvalidId | RejectReason::DuplicateId => Stage::Identity,
            RejectReason::MissingOrInvalidDate | RejectReason::InvalidProduct => Stage::Normalize,
            RejectReason::UnresolvablePriceGap | RejectReason::UnresolvableQuantityGap => {
                Stage::Impute
            }
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
