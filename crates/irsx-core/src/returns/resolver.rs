//! Strategy registry and resolution.

use tracing::debug;

use crate::document::ParsedTree;
use crate::error::DocumentError;
use crate::models::filing::SchemaVariant;

use super::strategies::{Irs990EzStrategy, Irs990PfStrategy, Irs990Strategy, ReturnStrategy};
use super::Result;

/// Registered strategies in priority order.
static REGISTRY: [&dyn ReturnStrategy; 3] = [&Irs990Strategy, &Irs990PfStrategy, &Irs990EzStrategy];

/// The process-wide strategy list.
pub fn registered_strategies() -> &'static [&'static dyn ReturnStrategy] {
    &REGISTRY
}

/// Picks the strategy for a document by probing classifiers in order.
///
/// The first strategy that accepts wins, even if a later one would also accept.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    strategies: &'a [&'a dyn ReturnStrategy],
}

impl Resolver<'static> {
    /// Resolver over the registered strategies.
    pub fn registered() -> Self {
        Self::new(registered_strategies())
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::registered()
    }
}

impl<'a> Resolver<'a> {
    pub fn new(strategies: &'a [&'a dyn ReturnStrategy]) -> Self {
        Self { strategies }
    }

    /// Variants in probing order.
    pub fn variants(&self) -> Vec<SchemaVariant> {
        self.strategies.iter().map(|s| s.variant()).collect()
    }

    /// The first strategy whose classifier accepts the document.
    pub fn resolve(&self, tree: &ParsedTree) -> Result<&'a dyn ReturnStrategy> {
        let mut attempted = Vec::with_capacity(self.strategies.len());

        for &strategy in self.strategies {
            attempted.push(strategy.variant());
            if strategy.classify(tree) {
                debug!("Resolved document as {}", strategy.variant());
                return Ok(strategy);
            }
        }

        Err(DocumentError::Unrecognized { attempted })
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("strategies", &self.variants())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filing::{OrganizationFields, ReturnFields};
    use crate::test_fixtures::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn tree(xml: &str) -> ParsedTree {
        ParsedTree::parse(xml.as_bytes()).unwrap()
    }

    /// Accepts every document and counts how often it was asked.
    struct AcceptAll {
        variant: SchemaVariant,
        calls: AtomicUsize,
    }

    impl AcceptAll {
        fn new(variant: SchemaVariant) -> Self {
            Self {
                variant,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl ReturnStrategy for AcceptAll {
        fn variant(&self) -> SchemaVariant {
            self.variant
        }

        fn classify(&self, _tree: &ParsedTree) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            true
        }

        fn extract(&self, _tree: &ParsedTree) -> (OrganizationFields, ReturnFields) {
            Default::default()
        }
    }

    #[test]
    fn test_registration_order() {
        assert_eq!(
            Resolver::registered().variants(),
            vec![
                SchemaVariant::Irs990,
                SchemaVariant::Irs990Pf,
                SchemaVariant::Irs990Ez,
            ]
        );
    }

    #[test]
    fn test_resolves_each_family() {
        let resolver = Resolver::registered();
        let cases = [
            (IRS990_FULL, SchemaVariant::Irs990),
            (IRS990PF_FULL, SchemaVariant::Irs990Pf),
            (IRS990EZ_FULL, SchemaVariant::Irs990Ez),
        ];
        for (xml, expected) in cases {
            assert_eq!(resolver.resolve(&tree(xml)).unwrap().variant(), expected);
        }
    }

    #[test]
    fn test_exhaustion_lists_all_attempts() {
        let err = Resolver::registered().resolve(&tree(FOREIGN)).err().unwrap();
        assert_eq!(
            err,
            DocumentError::Unrecognized {
                attempted: vec![
                    SchemaVariant::Irs990,
                    SchemaVariant::Irs990Pf,
                    SchemaVariant::Irs990Ez,
                ]
            }
        );
    }

    #[test]
    fn test_first_acceptor_wins_and_stops_probing() {
        let first = AcceptAll::new(SchemaVariant::Irs990Ez);
        let second = AcceptAll::new(SchemaVariant::Irs990);
        let strategies: [&dyn ReturnStrategy; 2] = [&first, &second];
        let resolver = Resolver::new(&strategies);

        let chosen = resolver.resolve(&tree(FOREIGN)).unwrap();
        assert_eq!(chosen.variant(), SchemaVariant::Irs990Ez);
        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_overlapping_document_goes_to_earlier_registration() {
        let tree = tree(OVERLAPPING_TYPES);
        assert!(Irs990PfStrategy.classify(&tree));

        for _ in 0..3 {
            let chosen = Resolver::registered().resolve(&tree).unwrap();
            assert_eq!(chosen.variant(), SchemaVariant::Irs990);
        }
    }

    #[test]
    fn test_empty_registry_is_unrecognized() {
        let resolver = Resolver::new(&[]);
        assert_eq!(
            resolver.resolve(&tree(IRS990_FULL)).err(),
            Some(DocumentError::Unrecognized { attempted: vec![] })
        );
    }
}
