//! Per-field normalization, applied after identity resolution.
//!
//! Each normalizer is independent; only the date and product rules can
//! reject a record. Quantity and price become typed gaps here and are
//! resolved by the imputation engine, which needs the normalized product
//! and category values as lookup keys.

pub mod country;
pub mod date;
pub mod name;
pub mod numeric;
pub mod product;

use chrono::NaiveDate;

use orderwash_model::{RawRecord, RejectReason};
use orderwash_rules::RuleSet;

/// A record after field normalization: dates typed, text cleaned, numeric
/// gaps explicit. Quantity/price of `None` means "impute me".
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    pub origin: u64,
    pub order_id: String,
    pub order_date: NaiveDate,
    pub customer_name: Option<String>,
    pub country: Option<String>,
    pub product_id: Option<String>,
    pub product_name: String,
    pub category: Option<String>,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    pub discount_code: Option<String>,
    pub sales_rep: Option<String>,
    pub payment_method: Option<String>,
    pub order_source: Option<String>,
}

/// Normalize one identity-resolved record.
///
/// `order_id` is the canonical id established by identity resolution.
/// Failures carry the reason code for the rejection ledger; the date check
/// runs before the product check, so a record failing both is ledgered as
/// `missing_or_invalid_date`.
pub fn normalize_record(
    rules: &RuleSet,
    record: &RawRecord,
    order_id: String,
) -> Result<NormalizedRecord, RejectReason> {
    let order_date = record
        .order_date
        .as_deref()
        .and_then(date::parse_order_date)
        .ok_or(RejectReason::MissingOrInvalidDate)?;

    let product_name =
        product::usable_product_name(&rules.product_blacklist, record.product_name.as_deref())
            .ok_or(RejectReason::InvalidProduct)?;

    Ok(NormalizedRecord {
        origin: record.origin,
        order_id,
        order_date,
        customer_name: name::clean_customer_name(record.customer_name.as_deref()),
        country: country::normalize_country(&rules.country_aliases, record.country.as_deref()),
        product_id: trimmed(record.product_id.as_deref()),
        product_name,
        category: trimmed(record.category.as_deref()),
        quantity: numeric::amount_or_gap(record.quantity.as_deref()),
        unit_price: numeric::amount_or_gap(record.unit_price.as_deref()),
        discount_code: trimmed(record.discount_code.as_deref()),
        sales_rep: trimmed(record.sales_rep.as_deref()),
        payment_method: trimmed(record.payment_method.as_deref()),
        order_source: trimmed(record.order_source.as_deref()),
    })
}

/// Passthrough fields keep their content, trimmed; blank collapses to None.
fn trimmed(value: Option<&str>) -> Option<String> {
    let raw = value?.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}
