//! Return variant resolution and field extraction.

pub mod locator;
mod parser;
pub mod paths;
pub mod resolver;
pub mod rules;
pub mod strategies;

pub use locator::FieldLocator;
pub use parser::DocumentParser;
pub use resolver::{registered_strategies, Resolver};
pub use strategies::{Irs990EzStrategy, Irs990PfStrategy, Irs990Strategy, ReturnStrategy};

use crate::error::DocumentError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
