use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RecordId;

/// One ingested row, field values preserved verbatim.
///
/// Nothing is coerced or rejected at this stage; blank cells become `None`
/// and everything else is carried as-is for the downstream stages to judge.
/// `origin` is the zero-based position of the row in its input ordering and
/// is the tie-breaker for duplicate resolution, so ingestion order must be
/// preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: RecordId,
    pub origin: u64,
    pub order_id: Option<String>,
    pub order_date: Option<String>,
    pub customer_name: Option<String>,
    pub country: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
    pub discount_code: Option<String>,
    pub sales_rep: Option<String>,
    pub payment_method: Option<String>,
    pub order_source: Option<String>,
    pub email: Option<String>,
}

/// The canonical output shape. Email is dropped; every surviving record
/// traces to exactly one `RawRecord` via `origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub origin: u64,
    /// Strict positive-integer token, unique across the output set.
    pub order_id: String,
    /// Canonical ISO year-month-day.
    pub order_date: NaiveDate,
    pub customer_name: Option<String>,
    pub country: Option<String>,
    pub product_id: Option<String>,
    pub product_name: String,
    pub category: Option<String>,
    /// Strictly positive; imputed when the source value was zero/missing.
    pub quantity: f64,
    /// Strictly positive; imputed when the source value was zero/missing.
    pub unit_price: f64,
    pub discount_code: Option<String>,
    pub sales_rep: Option<String>,
    pub payment_method: Option<String>,
    pub order_source: Option<String>,
}
