use thiserror::Error;

/// The scanner report could not be decoded.
///
/// Raised for syntactically invalid JSON and for documents that do not match
/// the report shape (e.g. a non-numeric `line`). Decoding is all-or-nothing;
/// there is no partial recovery.
#[derive(Debug, Error)]
#[error("failed to decode scanner report")]
pub struct DecodeError(#[from] serde_json::Error);

/// The quality report could not be written.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize quality report")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write quality report")]
    Io(#[from] std::io::Error),
}

/// Terminal failure of the convert pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}
