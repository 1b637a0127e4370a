pub mod ids;
pub mod ledger;
pub mod reason;
pub mod record;

pub use ids::RecordId;
pub use ledger::{RejectionEntry, RejectionLedger, RunSummary};
pub use reason::{RejectReason, Stage};
pub use record::{CleanRecord, RawRecord};
