//! Errors raised at the edges of the crate
//!
//! The projection itself cannot fail; only encoding, decoding and writing do.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to encode inputs as a query string: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    #[error("failed to decode query string: {0}")]
    QueryDecode(#[from] serde_urlencoded::de::Error),

    #[error("failed to write CSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
