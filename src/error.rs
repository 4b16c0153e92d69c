//! Error types for folio operations.

use thiserror::Error;

/// Errors that can occur while handling documents.
///
/// The transform itself is total by design; only parsing document JSON can
/// fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
