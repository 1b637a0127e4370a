use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to open input {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input is missing expected column {column:?}")]
    MissingColumn { column: &'static str },

    #[error("failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),
}
