pub mod error;
pub mod reader;

pub use error::IngestError;
pub use reader::{CsvIngestOptions, EXPECTED_COLUMNS, ingest_csv_file, ingest_csv_reader};
