use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("country table is empty")]
    EmptyTable,
    #[error("invalid country identifier: {0}")]
    InvalidCountryIdentifier(String),
    #[error("invalid calling code for {country}: {code:?}")]
    InvalidCallingCode { country: String, code: String },
    #[error("no phone number lengths for {0}")]
    EmptyPhoneNumberLengths(String),
    #[error("invalid mobile prefix for {country}: {prefix:?}")]
    InvalidMobilePrefix { country: String, prefix: String },
    #[error("duplicate country in table: {0}")]
    DuplicateCountry(String),
    #[error("failed to parse country table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read country table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
