//! Integration tests for the full pipeline.

use std::io::Write;

use orderwash_core::{run_csv_file, run_records};
use orderwash_model::{RawRecord, RecordId, RejectReason, Stage};
use orderwash_rules::RuleSet;

struct RawBuilder {
    record: RawRecord,
}

fn raw(origin: u64, order_id: &str) -> RawBuilder {
    RawBuilder {
        record: RawRecord {
            id: RecordId::from_first_16_bytes_of_sha256([origin as u8; 32]),
            origin,
            order_id: non_blank(order_id),
            order_date: Some("2024-01-15".to_string()),
            customer_name: Some("maria lopez".to_string()),
            country: Some("USA".to_string()),
            product_id: Some("P-1".to_string()),
            product_name: Some("Denim Jacket".to_string()),
            category: Some("Apparel".to_string()),
            quantity: Some("2".to_string()),
            unit_price: Some("49.99".to_string()),
            discount_code: None,
            sales_rep: None,
            payment_method: Some("card".to_string()),
            order_source: Some("web".to_string()),
            email: None,
        },
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl RawBuilder {
    fn date(mut self, value: &str) -> Self {
        self.record.order_date = non_blank(value);
        self
    }
    fn product(mut self, value: &str) -> Self {
        self.record.product_name = non_blank(value);
        self
    }
    fn category(mut self, value: &str) -> Self {
        self.record.category = non_blank(value);
        self
    }
    fn quantity(mut self, value: &str) -> Self {
        self.record.quantity = non_blank(value);
        self
    }
    fn price(mut self, value: &str) -> Self {
        self.record.unit_price = non_blank(value);
        self
    }
    fn build(self) -> RawRecord {
        self.record
    }
}

#[test]
fn sentinel_order_id_is_rejected_as_invalid_id() {
    let output = run_records(vec![raw(0, "???").build()], &RuleSet::default());

    assert!(output.clean.is_empty());
    assert_eq!(output.ledger.len(), 1);
    let entry = &output.ledger.entries[0];
    assert_eq!(entry.reason, RejectReason::InvalidId);
    assert_eq!(entry.stage, Stage::Identity);
    assert_eq!(entry.order_id, "???");
}

#[test]
fn duplicate_keeps_first_occurrence_with_sign_corrected_quantity() {
    // Same order id at origins 2 and 9; the origin-2 record survives with
    // its own field values, sign-corrected.
    let records = vec![
        raw(0, "100").build(),
        raw(2, "500").quantity("-5").build(),
        raw(9, "500").quantity("3").build(),
    ];

    let output = run_records(records, &RuleSet::default());

    let with_500: Vec<_> = output
        .clean
        .iter()
        .filter(|r| r.order_id == "500")
        .collect();
    assert_eq!(with_500.len(), 1);
    assert_eq!(with_500[0].origin, 2);
    assert_eq!(with_500[0].quantity, 5.0);
    assert_eq!(output.ledger.count_for(RejectReason::DuplicateId), 1);
    assert_eq!(output.ledger.entries[0].origin, 9);
}

#[test]
fn zero_price_imputes_from_product_category_max() {
    let records = vec![
        raw(0, "100").price("49.99").build(),
        raw(1, "101").price("44.00").build(),
        raw(2, "102").price("0").build(),
    ];

    let output = run_records(records, &RuleSet::default());

    assert_eq!(output.clean.len(), 3);
    let imputed = output.clean.iter().find(|r| r.origin == 2).unwrap();
    assert_eq!(imputed.unit_price, 49.99);
}

#[test]
fn zero_quantity_imputes_global_mean_of_positive_quantities() {
    // Positive quantities 2 and 2.6: mean 2.3.
    let records = vec![
        raw(0, "100").quantity("2").build(),
        raw(1, "101").quantity("2.6").build(),
        raw(2, "102").quantity("0").build(),
    ];

    let output = run_records(records, &RuleSet::default());

    let imputed = output.clean.iter().find(|r| r.origin == 2).unwrap();
    assert!((imputed.quantity - 2.3).abs() < 1e-9);
}

#[test]
fn price_gap_without_donor_is_dropped_and_ledgered() {
    let records = vec![
        raw(0, "100").build(),
        raw(1, "101")
            .product("Copper Kettle")
            .category("Home")
            .price("0")
            .build(),
    ];

    let output = run_records(records, &RuleSet::default());

    assert_eq!(output.clean.len(), 1);
    assert_eq!(
        output.ledger.count_for(RejectReason::UnresolvablePriceGap),
        1
    );
    let entry = &output.ledger.entries[0];
    assert_eq!(entry.stage, Stage::Impute);
    assert_eq!(entry.origin, 1);
}

#[test]
fn bad_date_and_placeholder_product_reject_at_normalize() {
    let records = vec![
        raw(0, "100").build(),
        raw(1, "101").date("last tuesday").build(),
        raw(2, "102").date("").build(),
        raw(3, "103").product("unknown item").build(),
    ];

    let output = run_records(records, &RuleSet::default());

    assert_eq!(output.clean.len(), 1);
    assert_eq!(
        output.ledger.count_for(RejectReason::MissingOrInvalidDate),
        2
    );
    assert_eq!(output.ledger.count_for(RejectReason::InvalidProduct), 1);
    assert!(
        output
            .ledger
            .entries
            .iter()
            .all(|e| e.stage == Stage::Normalize)
    );
}

#[test]
fn conservation_and_uniqueness_hold_for_a_mixed_batch() {
    let records = vec![
        raw(0, "100").build(),
        raw(1, "???").build(),
        raw(2, "100").build(),
        raw(3, "101").date("nonsense").build(),
        raw(4, "102").product("unknown").build(),
        raw(5, "103").quantity("0").build(),
        raw(6, "104").price("-49.99").build(),
        raw(7, "0").build(),
    ];
    let input_count = records.len();

    let output = run_records(records, &RuleSet::default());

    assert!(output.summary.balances());
    assert_eq!(output.summary.input_records, input_count);
    assert_eq!(
        input_count,
        output.clean.len() + output.ledger.len()
    );

    let mut ids: Vec<&str> = output.clean.iter().map(|r| r.order_id.as_str()).collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len(), "order ids must be pairwise distinct");
}

#[test]
fn output_is_order_stable_and_strictly_positive() {
    let records = vec![
        raw(3, "103").build(),
        raw(0, "100").quantity("-2").build(),
        raw(5, "105").price("0").build(),
        raw(1, "101").build(),
    ];

    let output = run_records(records, &RuleSet::default());

    let origins: Vec<u64> = output.clean.iter().map(|r| r.origin).collect();
    let mut sorted = origins.clone();
    sorted.sort_unstable();
    assert_eq!(origins, sorted);
    for record in &output.clean {
        assert!(record.quantity > 0.0);
        assert!(record.unit_price > 0.0);
    }
}

#[test]
fn running_twice_is_byte_identical() {
    let records: Vec<RawRecord> = vec![
        raw(0, "100").build(),
        raw(1, "???").build(),
        raw(2, "100").quantity("-4").build(),
        raw(3, "101").quantity("0").build(),
        raw(4, "102").price("0").build(),
    ];

    let first = run_records(records.clone(), &RuleSet::default());
    let second = run_records(records, &RuleSet::default());

    assert_eq!(first.clean, second.clean);
    assert_eq!(first.ledger, second.ledger);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn csv_entry_point_runs_end_to_end() {
    let csv = "OrderID,OrderDate,CustomerName,Country,ProductID,ProductName,Category,Quantity,UnitPrice,DiscountCode,SalesRep,PaymentMethod,OrderSource,Email\n\
               1001,2024-01-15,maria lopez,USA,P-1,Denim Jacket,Apparel,2,49.99,,,card,web,\n\
               ???,2024-01-15,,US,P-2,Wool Scarf,Apparel,1,19.50,,,card,web,\n\
               1002,16/01/2024,ANA  SILVA,uk,P-1,Denim Jacket,Apparel,0,0,,,card,store,\n";
    let mut file = tempfile::NamedTempFile::new().expect("temp csv");
    file.write_all(csv.as_bytes()).expect("write csv");

    let output = run_csv_file(file.path(), &RuleSet::default()).expect("run");

    assert_eq!(output.summary.input_records, 3);
    assert_eq!(output.clean.len(), 2);
    assert_eq!(output.ledger.count_for(RejectReason::InvalidId), 1);

    let second = output.clean.iter().find(|r| r.order_id == "1002").unwrap();
    assert_eq!(second.order_date.to_string(), "2024-01-16");
    assert_eq!(second.customer_name.as_deref(), Some("Ana silva"));
    assert_eq!(second.country.as_deref(), Some("United Kingdom"));
    // Quantity imputed from the only donor (2), price from the group max.
    assert_eq!(second.quantity, 2.0);
    assert_eq!(second.unit_price, 49.99);
}
