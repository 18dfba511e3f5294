//! Core library for IRS e-file return extraction.
//!
//! This crate provides:
//! - Namespace-aware XML parsing and path lookup
//! - Return variant detection (Form 990, 990-PF, 990-EZ)
//! - Field location and coercion (dates, amounts, counts, URLs)
//! - A batch driver that loads extracted records into a store

pub mod batch;
pub mod document;
pub mod error;
pub mod models;
pub mod returns;
pub mod store;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use batch::{BatchProcessor, BatchProgress, BatchReport, DocumentStatus, ProgressSink};
pub use error::{DocumentError, IrsxError, Result, StoreError};
pub use models::config::{IrsxConfig, OutputFormat};
pub use models::filing::{
    ExtractionOutcome, OrganizationFields, ParsedReturn, ReturnFields, SchemaVariant,
};
pub use returns::{DocumentParser, Resolver, ReturnStrategy};
pub use store::{InMemoryStore, OrganizationId, ReturnStore};
