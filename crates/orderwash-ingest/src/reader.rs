//! CSV reading into origin-indexed [`RawRecord`]s.
//!
//! Ingestion is a pure transform: no field is validated or rejected here.
//! Cells are trimmed for blank detection, blanks become `None`, and every
//! record carries its zero-based input position, which later stages use as
//! the duplicate tie-breaker. A missing expected column is the one fatal
//! error; it aborts the run before any record is produced.

use std::io::Read;
use std::path::Path;

use sha2::Digest;
use tracing::debug;

use orderwash_model::{RawRecord, RecordId};

use crate::error::IngestError;

/// The columns an input source must expose, in canonical output order.
/// Header matching is case-insensitive; extra columns are ignored.
pub const EXPECTED_COLUMNS: [&str; 14] = [
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
    "Email",
];

#[derive(Debug, Clone)]
pub struct CsvIngestOptions {
    /// Stable source identifier used for deterministic record-id derivation
    /// (e.g. the input path as given on the command line).
    pub source_id: String,
}

impl CsvIngestOptions {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
        }
    }
}

fn derive_record_id(source_id: &str, origin: u64) -> RecordId {
    // Deterministic: sha256("<source_id>\0<origin>") and take first 16 bytes.
    let mut hasher = sha2::Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(origin.to_string().as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    RecordId::from_first_16_bytes_of_sha256(digest)
}

/// Column positions resolved from a header row.
struct ColumnIndex {
    positions: [usize; 14],
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, IngestError> {
        let mut positions = [usize::MAX; 14];
        for (pos, header) in headers.iter().enumerate() {
            let name = header.trim_matches('\u{feff}').trim();
            if let Some(slot) = EXPECTED_COLUMNS
                .iter()
                .position(|c| c.eq_ignore_ascii_case(name))
                && positions[slot] == usize::MAX
            {
                positions[slot] = pos;
            }
        }
        for (slot, column) in EXPECTED_COLUMNS.iter().enumerate() {
            if positions[slot] == usize::MAX {
                return Err(IngestError::MissingColumn { column });
            }
        }
        Ok(Self { positions })
    }

    fn get<'a>(&self, record: &'a csv::StringRecord, slot: usize) -> Option<String> {
        let value = record.get(self.positions[slot])?.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

/// Read all records from a CSV file.
pub fn ingest_csv_file(
    csv_path: &Path,
    options: &CsvIngestOptions,
) -> Result<Vec<RawRecord>, IngestError> {
    let reader = std::fs::File::open(csv_path).map_err(|source| IngestError::Io {
        path: csv_path.to_path_buf(),
        source,
    })?;
    ingest_csv_reader(reader, options)
}

/// Read all records from any CSV byte source.
pub fn ingest_csv_reader<R: Read>(
    reader: R,
    options: &CsvIngestOptions,
) -> Result<Vec<RawRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let index = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let origin = idx as u64;
        records.push(RawRecord {
            id: derive_record_id(&options.source_id, origin),
            origin,
            order_id: index.get(&record, 0),
            order_date: index.get(&record, 1),
            customer_name: index.get(&record, 2),
            country: index.get(&record, 3),
            product_id: index.get(&record, 4),
            product_name: index.get(&record, 5),
            category: index.get(&record, 6),
            quantity: index.get(&record, 7),
            unit_price: index.get(&record, 8),
            discount_code: index.get(&record, 9),
            sales_rep: index.get(&record, 10),
            payment_method: index.get(&record, 11),
            order_source: index.get(&record, 12),
            email: index.get(&record, 13),
        });
    }
    debug!(records = records.len(), source = %options.source_id, "ingested raw records");
    Ok(records)
}
