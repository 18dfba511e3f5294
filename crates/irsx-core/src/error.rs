//! Error types for the irsx-core library.

use thiserror::Error;

use crate::models::filing::SchemaVariant;

/// Main error type for the irsx library.
#[derive(Error, Debug)]
pub enum IrsxError {
    /// Document-level extraction failure.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Persistence collaborator failure.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Failures that stop extraction of a single document.
///
/// Neither kind is fatal to a batch; the batch driver counts them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The input bytes are not well-formed XML.
    #[error("malformed document: {detail}")]
    Malformed { detail: String },

    /// Well-formed, but no registered strategy accepted the document.
    #[error("no strategy matched the document (attempted: {})", join_variants(.attempted))]
    Unrecognized { attempted: Vec<SchemaVariant> },
}

impl DocumentError {
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self::Malformed {
            detail: detail.to_string(),
        }
    }
}

fn join_variants(variants: &[SchemaVariant]) -> String {
    variants
        .iter()
        .map(|v| v.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised by a [`ReturnStore`](crate::store::ReturnStore) implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record is missing part of its natural key.
    #[error("missing key field: {0}")]
    MissingKey(&'static str),

    /// The referenced organization does not exist.
    #[error("unknown organization id: {0}")]
    UnknownOrganization(u64),
}

/// Result type for the irsx library.
pub type Result<T> = std::result::Result<T, IrsxError>;
