use thiserror::Error;

/// Rejection raised when untyped input cannot be decoded into a record.
///
/// Decoding is atomic: on failure no record is produced.
///
#[derive(Debug, Error)]
#[error("invalid pod record: {0}")]
pub struct ValidationError(#[from] serde_json::Error);
