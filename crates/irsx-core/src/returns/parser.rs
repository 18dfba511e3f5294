//! Document parser entry point.

use std::time::Instant;

use tracing::{debug, info};

use crate::document::ParsedTree;
use crate::models::filing::{ExtractionOutcome, ParsedReturn};

use super::resolver::Resolver;
use super::Result;

/// Turns raw return documents into normalized records.
///
/// Holds no per-document state, so one parser can serve any number of
/// documents from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser<'a> {
    resolver: Resolver<'a>,
}

impl DocumentParser<'static> {
    /// Parser over the registered strategies.
    pub fn new() -> Self {
        Self::with_resolver(Resolver::registered())
    }
}

impl Default for DocumentParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> DocumentParser<'a> {
    pub fn with_resolver(resolver: Resolver<'a>) -> Self {
        Self { resolver }
    }

    /// Parse a document into an [`ExtractionOutcome`].
    pub fn parse(&self, bytes: &[u8]) -> ExtractionOutcome {
        match self.try_parse(bytes) {
            Ok(parsed) => parsed.into(),
            Err(err) => err.into(),
        }
    }

    /// Parse a document, returning document-level failures as errors.
    pub fn try_parse(&self, bytes: &[u8]) -> Result<ParsedReturn> {
        let start = Instant::now();

        let tree = ParsedTree::parse(bytes).inspect_err(|err| debug!("{}", err))?;
        let strategy = self.resolver.resolve(&tree)?;
        let (organization, return_info) = strategy.extract(&tree);

        info!(
            "Parsed {} return ({} elements) in {}us",
            strategy.variant(),
            tree.len(),
            start.elapsed().as_micros()
        );

        Ok(ParsedReturn {
            variant: strategy.variant(),
            organization,
            return_info,
        })
    }
}
