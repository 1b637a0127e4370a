//! Field normalizers and the imputation engine.

pub mod impute;
pub mod normalize;

pub use impute::DonorTables;
pub use normalize::{NormalizedRecord, normalize_record};
