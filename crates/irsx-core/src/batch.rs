//! Batch driver: runs the parser over many documents and loads the results.

use std::io;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{IrsxError, Result, StoreError};
use crate::models::config::BatchConfig;
use crate::models::filing::ExtractionOutcome;
use crate::returns::DocumentParser;
use crate::store::ReturnStore;

/// Tallies for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub unrecognized: usize,
    pub malformed: usize,
    pub read_failures: usize,
    pub store_failures: usize,
    pub organizations_created: usize,
    pub returns_created: usize,
}

impl BatchReport {
    /// Documents that did not produce a stored record.
    pub fn failed(&self) -> usize {
        self.unrecognized + self.malformed + self.read_failures + self.store_failures
    }
}

/// Progress snapshot handed to a [`ProgressSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchProgress {
    pub attempted: usize,
    pub total: usize,
    /// Fraction done in `[0, 1]`. Never decreases within a run.
    pub fraction: f64,
}

/// What happened to a single document.
#[derive(Debug)]
pub enum DocumentStatus {
    /// The document was read and parsed; successful records were stored.
    Processed(ExtractionOutcome),
    /// The document bytes could not be read.
    ReadFailed(io::Error),
    /// The document parsed but the store rejected the record.
    StoreFailed {
        outcome: ExtractionOutcome,
        error: StoreError,
    },
}

/// Receives progress and per-document results from a batch run.
pub trait ProgressSink {
    fn progress(&mut self, progress: BatchProgress);

    fn document(&mut self, _name: &str, _status: &DocumentStatus) {}
}

/// Runs a [`DocumentParser`] over a sequence of documents.
///
/// A failing document is counted and skipped; it never stops the run unless
/// read failures are configured to abort.
#[derive(Debug, Clone)]
pub struct BatchProcessor<'p> {
    parser: DocumentParser<'p>,
    progress_interval: usize,
    continue_on_error: bool,
}

impl BatchProcessor<'static> {
    pub fn new(config: &BatchConfig) -> Self {
        Self::with_parser(DocumentParser::new(), config)
    }
}

impl<'p> BatchProcessor<'p> {
    pub fn with_parser(parser: DocumentParser<'p>, config: &BatchConfig) -> Self {
        Self {
            parser,
            progress_interval: config.progress_interval.max(1),
            continue_on_error: config.continue_on_error,
        }
    }

    /// Process `documents`, of which there are expected to be `total`.
    pub fn process<I, S>(
        &self,
        documents: I,
        total: usize,
        store: &mut S,
        mut sink: Option<&mut dyn ProgressSink>,
    ) -> Result<BatchReport>
    where
        I: IntoIterator<Item = (String, io::Result<Vec<u8>>)>,
        S: ReturnStore + ?Sized,
    {
        let mut report = BatchReport::default();

        for (name, bytes) in documents {
            report.attempted += 1;

            let status = match bytes {
                Ok(bytes) => self.load(&name, &bytes, store, &mut report),
                Err(err) => {
                    report.read_failures += 1;
                    warn!("Failed to read {}: {}", name, err);
                    if !self.continue_on_error {
                        return Err(IrsxError::Io(err));
                    }
                    DocumentStatus::ReadFailed(err)
                }
            };

            if let Some(sink) = sink.as_deref_mut() {
                sink.document(&name, &status);
                if report.attempted % self.progress_interval == 0 {
                    sink.progress(snapshot(report.attempted, total));
                }
            }

            if report.attempted % self.progress_interval == 0 {
                info!(
                    "Processed {}/{} documents ({} ok, {} failed)",
                    report.attempted,
                    total,
                    report.succeeded,
                    report.failed()
                );
            }
        }

        if let Some(sink) = sink.as_deref_mut() {
            sink.progress(snapshot(report.attempted, total));
        }

        info!(
            "Batch complete: {} attempted, {} succeeded, {} unrecognized, {} malformed, {} read failures, {} store failures",
            report.attempted,
            report.succeeded,
            report.unrecognized,
            report.malformed,
            report.read_failures,
            report.store_failures
        );

        Ok(report)
    }

    fn load<S>(
        &self,
        name: &str,
        bytes: &[u8],
        store: &mut S,
        report: &mut BatchReport,
    ) -> DocumentStatus
    where
        S: ReturnStore + ?Sized,
    {
        let outcome = self.parser.parse(bytes);

        let ExtractionOutcome::Success {
            organization,
            return_info,
            ..
        } = &outcome
        else {
            match &outcome {
                ExtractionOutcome::Malformed { detail } => {
                    report.malformed += 1;
                    debug!("Skipping malformed document {}: {}", name, detail);
                }
                _ => {
                    report.unrecognized += 1;
                    debug!("Skipping unrecognized document {}", name);
                }
            }
            return DocumentStatus::Processed(outcome);
        };

        if organization.name.is_none() {
            debug!("No organization name in {}, nothing stored", name);
            report.succeeded += 1;
            return DocumentStatus::Processed(outcome);
        }

        let stored = store.upsert_organization(organization).and_then(|(id, created)| {
            let return_created = match return_info.period() {
                Some(_) => store.upsert_return(id, return_info)?,
                None => false,
            };
            Ok((created, return_created))
        });

        match stored {
            Ok((org_created, return_created)) => {
                report.succeeded += 1;
                report.organizations_created += usize::from(org_created);
                report.returns_created += usize::from(return_created);
                DocumentStatus::Processed(outcome)
            }
            Err(error) => {
                report.store_failures += 1;
                warn!("Failed to store {}: {}", name, error);
                DocumentStatus::StoreFailed { outcome, error }
            }
        }
    }
}

fn snapshot(attempted: usize, total: usize) -> BatchProgress {
    let fraction = if attempted >= total {
        1.0
    } else {
        attempted as f64 / total as f64
    };
    BatchProgress {
        attempted,
        total,
        fraction,
    }
}
