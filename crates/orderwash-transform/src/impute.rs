//! Gap imputation for quantity and unit price.
//!
//! Explicitly two-pass: [`DonorTables::build`] aggregates over the whole
//! normalized kept set once, producing immutable lookups, and
//! [`DonorTables::apply`] then fills each record's gaps against those
//! lookups. Donor pools contain only originally-positive values, never
//! other imputed ones, so results do not depend on application order.

use std::collections::BTreeMap;

use tracing::debug;

use orderwash_model::{CleanRecord, RejectReason};

use crate::normalize::NormalizedRecord;

/// Immutable donor lookups computed in the aggregate pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorTables {
    /// Arithmetic mean of all strictly positive quantities in the kept set.
    /// `None` when the set has no positive quantity at all.
    quantity_mean: Option<f64>,
    /// Max strictly positive unit price per (product name, category) pair.
    max_price: BTreeMap<(String, String), f64>,
}

fn price_key(record: &NormalizedRecord) -> (String, String) {
    (
        record.product_name.to_lowercase(),
        record
            .category
            .as_deref()
            .unwrap_or_default()
            .to_lowercase(),
    )
}

impl DonorTables {
    /// Aggregate pass over the normalized kept set.
    pub fn build(records: &[NormalizedRecord]) -> Self {
        let mut quantity_sum = 0.0;
        let mut quantity_count = 0usize;
        let mut max_price: BTreeMap<(String, String), f64> = BTreeMap::new();

        for record in records {
            if let Some(quantity) = record.quantity {
                quantity_sum += quantity;
                quantity_count += 1;
            }
            if let Some(price) = record.unit_price {
                let entry = max_price.entry(price_key(record)).or_insert(price);
                if price > *entry {
                    *entry = price;
                }
            }
        }

        let quantity_mean = if quantity_count > 0 {
            Some(quantity_sum / quantity_count as f64)
        } else {
            None
        };
        debug!(
            donors = quantity_count,
            price_groups = max_price.len(),
            "built imputation donor tables"
        );

        Self {
            quantity_mean,
            max_price,
        }
    }

    /// The global quantity donor mean, if any positive quantity existed.
    pub fn quantity_mean(&self) -> Option<f64> {
        self.quantity_mean
    }

    /// The max-price donor for a record's (product, category) pair.
    pub fn max_price_for(&self, record: &NormalizedRecord) -> Option<f64> {
        self.max_price.get(&price_key(record)).copied()
    }

    /// Apply pass: resolve a record's gaps against the donor tables.
    ///
    /// A price gap with no (product, category) donor cannot be resolved and
    /// rejects the record rather than emitting a zero price; the quantity
    /// analogue only occurs when the whole kept set had no positive
    /// quantity.
    pub fn apply(&self, record: NormalizedRecord) -> Result<CleanRecord, RejectReason> {
        let unit_price = match record.unit_price {
            Some(price) => price,
            None => self
                .max_price_for(&record)
                .ok_or(RejectReason::UnresolvablePriceGap)?,
        };
        let quantity = match record.quantity {
            Some(quantity) => quantity,
            None => self
                .quantity_mean
                .ok_or(RejectReason::UnresolvableQuantityGap)?,
        };

        Ok(CleanRecord {
            origin: record.origin,
            order_id: record.order_id,
            order_date: record.order_date,
            customer_name: record.customer_name,
            country: record.country,
            product_id: record.product_id,
            product_name: record.product_name,
            category: record.category,
            quantity,
            unit_price,
            discount_code: record.discount_code,
            sales_rep: record.sales_rep,
            payment_method: record.payment_method,
            order_source: record.order_source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        origin: u64,
        product: &str,
        category: &str,
        quantity: Option<f64>,
        unit_price: Option<f64>,
    ) -> NormalizedRecord {
        NormalizedRecord {
            origin,
            order_id: format!("{}", 1000 + origin),
            order_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            customer_name: None,
            country: None,
            product_id: None,
            product_name: product.to_string(),
            category: Some(category.to_string()),
            quantity,
            unit_price,
            discount_code: None,
            sales_rep: None,
            payment_method: None,
            order_source: None,
        }
    }

    #[test]
    fn quantity_mean_covers_only_positive_originals() {
        let records = vec![
            record(0, "Denim Jacket", "Apparel", Some(2.0), Some(49.99)),
            record(1, "Wool Scarf", "Apparel", Some(4.0), Some(19.5)),
            record(2, "Denim Jacket", "Apparel", None, Some(49.99)),
        ];
        let tables = DonorTables::build(&records);
        assert_eq!(tables.quantity_mean(), Some(3.0));
    }

    #[test]
    fn price_gap_takes_group_max() {
        let records = vec![
            record(0, "Denim Jacket", "Apparel", Some(1.0), Some(44.0)),
            record(1, "Denim Jacket", "Apparel", Some(1.0), Some(49.99)),
            record(2, "Denim Jacket", "Home", Some(1.0), Some(10.0)),
            record(3, "Denim Jacket", "Apparel", Some(1.0), None),
        ];
        let tables = DonorTables::build(&records);
        let clean = tables.apply(records[3].clone()).expect("imputed");
        assert_eq!(clean.unit_price, 49.99);
    }

    #[test]
    fn price_group_match_ignores_case() {
        let records = vec![
            record(0, "DENIM JACKET", "APPAREL", Some(1.0), Some(49.99)),
            record(1, "Denim Jacket", "Apparel", Some(1.0), None),
        ];
        let tables = DonorTables::build(&records);
        assert_eq!(tables.max_price_for(&records[1]), Some(49.99));
    }

    #[test]
    fn price_gap_without_donor_rejects() {
        let records = vec![
            record(0, "Denim Jacket", "Apparel", Some(1.0), Some(49.99)),
            record(1, "Copper Kettle", "Home", Some(1.0), None),
        ];
        let tables = DonorTables::build(&records);
        let err = tables.apply(records[1].clone()).unwrap_err();
        assert_eq!(err, RejectReason::UnresolvablePriceGap);
    }

    #[test]
    fn quantity_gap_without_any_donor_rejects() {
        let records = vec![record(0, "Denim Jacket", "Apparel", None, Some(49.99))];
        let tables = DonorTables::build(&records);
        let err = tables.apply(records[0].clone()).unwrap_err();
        assert_eq!(err, RejectReason::UnresolvableQuantityGap);
    }

    #[test]
    fn donor_tables_do_not_chain_imputed_values() {
        // The gap row at origin 2 must not contribute to the mean that the
        // gap row at origin 3 receives.
        let records = vec![
            record(0, "A", "X", Some(2.0), Some(5.0)),
            record(1, "A", "X", Some(4.0), Some(5.0)),
            record(2, "A", "X", None, Some(5.0)),
            record(3, "A", "X", None, Some(5.0)),
        ];
        let tables = DonorTables::build(&records);
        let a = tables.apply(records[2].clone()).unwrap();
        let b = tables.apply(records[3].clone()).unwrap();
        assert_eq!(a.quantity, 3.0);
        assert_eq!(b.quantity, 3.0);
    }
}
