//! Error type for the few fallible operations around the reconciliation core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Create was attempted without samples or without metadata.
    #[error("`samples` and `metadata` cannot be empty")]
    MissingPayload,

    /// A sample selected for creation has no metadata entry.
    #[error("No metadata found for sample {0}")]
    MissingMetadata(String),

    /// A field name that is not part of the metadata webform.
    #[error("Unknown metadata field: {0}")]
    UnknownField(String),

    /// Metadata file could not be read.
    #[error("Metadata file error: {0}")]
    Parse(String),
}
