//! Clean-set CSV output.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use orderwash_model::CleanRecord;

/// Canonical output columns, in order. Downstream grouping consumers key on
/// these names.
pub const CLEAN_COLUMNS: [&str; 13] = [
    "OrderID",
    "OrderDate",
    "CustomerName",
    "Country",
    "ProductID",
    "ProductName",
    "Category",
    "Quantity",
    "UnitPrice",
    "DiscountCode",
    "SalesRep",
    "PaymentMethod",
    "OrderSource",
];

/// Format an amount without trailing zeros ("2", "2.3", "49.99").
pub(crate) fn format_amount(value: f64) -> String {
    let s = format!("{value}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Write the clean record set as CSV.
pub fn write_clean_csv<W: Write>(writer: W, records: &[CleanRecord]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CLEAN_COLUMNS)
        .context("write clean-set header")?;
    for record in records {
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();
        csv_writer
            .write_record([
                record.order_id.clone(),
                record.order_date.to_string(),
                opt(&record.customer_name),
                opt(&record.country),
                opt(&record.product_id),
                record.product_name.clone(),
                opt(&record.category),
                format_amount(record.quantity),
                format_amount(record.unit_price),
                opt(&record.discount_code),
                opt(&record.sales_rep),
                opt(&record.payment_method),
                opt(&record.order_source),
            ])
            .with_context(|| format!("write clean record {}", record.order_id))?;
    }
    csv_writer.flush().context("flush clean-set output")?;
    Ok(())
}

/// Write the clean record set to a file.
pub fn write_clean_csv_file(path: &Path, records: &[CleanRecord]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create clean-set output {}", path.display()))?;
    write_clean_csv(file, records)
}
