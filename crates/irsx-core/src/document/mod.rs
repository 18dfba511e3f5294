//! XML document handling.

pub mod path;
mod tree;

pub use path::{FieldPath, PathError};
pub use tree::{ElementName, NodeId, ParsedTree};

use crate::error::DocumentError;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Namespace URI used by IRS e-file schemas.
pub const IRS_NAMESPACE: &str = "http://www.irs.gov/efile";

/// Prefix that extraction paths use for the document's return namespace.
pub const IRS_PREFIX: &str = "irs";

/// Ordered prefix to namespace URI bindings. `None` is the default namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceBindings {
    bindings: Vec<(Option<String>, String)>,
}

impl NamespaceBindings {
    /// Bindings with a single prefix.
    pub fn single(prefix: &str, uri: impl Into<String>) -> Self {
        let mut bindings = Self::default();
        bindings.bind(Some(prefix.to_string()), uri.into());
        bindings
    }

    /// Bind a prefix, replacing an earlier binding of the same prefix in place.
    pub fn bind(&mut self, prefix: Option<String>, uri: String) {
        match self.bindings.iter_mut().find(|(p, _)| *p == prefix) {
            Some(entry) => entry.1 = uri,
            None => self.bindings.push((prefix, uri)),
        }
    }

    /// URI bound to a named prefix.
    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p.as_deref() == Some(prefix))
            .map(|(_, uri)| uri.as_str())
    }

    pub fn default_namespace(&self) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p.is_none())
            .map(|(_, uri)| uri.as_str())
    }

    /// Bound URIs in declaration order.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(_, uri)| uri.as_str())
    }

    /// Whether any bound URI contains `fragment`.
    pub fn any_contains(&self, fragment: &str) -> bool {
        self.uris().any(|uri| uri.contains(fragment))
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings used to evaluate extraction paths for a document.
    ///
    /// The `irs` prefix maps to the root's default namespace, else to the first
    /// namespace declared on the root, else to [`IRS_NAMESPACE`].
    pub fn for_extraction(tree: &ParsedTree) -> Self {
        let declared = tree.namespaces();
        let uri = declared
            .default_namespace()
            .or_else(|| declared.uris().next())
            .unwrap_or(IRS_NAMESPACE);
        Self::single(IRS_PREFIX, uri)
    }

    /// Bindings used by classifiers, always the canonical IRS namespace.
    pub fn canonical() -> Self {
        Self::single(IRS_PREFIX, IRS_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_prefers_default_namespace() {
        let tree = ParsedTree::parse(
            br#"<Return xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns="http://www.irs.gov/efile/2023"/>"#,
        )
        .unwrap();
        let bindings = NamespaceBindings::for_extraction(&tree);
        assert_eq!(bindings.resolve(IRS_PREFIX), Some("http://www.irs.gov/efile/2023"));
    }

    #[test]
    fn test_extraction_falls_back_to_first_declared() {
        let tree = ParsedTree::parse(
            br#"<efile:Return xmlns:efile="http://www.irs.gov/efile" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"/>"#,
        )
        .unwrap();
        let bindings = NamespaceBindings::for_extraction(&tree);
        assert_eq!(bindings.resolve(IRS_PREFIX), Some(IRS_NAMESPACE));

        let bare = ParsedTree::parse(b"<Return/>").unwrap();
        assert_eq!(
            NamespaceBindings::for_extraction(&bare).resolve(IRS_PREFIX),
            Some(IRS_NAMESPACE)
        );
    }

    #[test]
    fn test_any_contains_matches_substring() {
        let bindings = NamespaceBindings::single("a", "http://www.irs.gov/efile/2019v5.1");
        assert!(bindings.any_contains(IRS_NAMESPACE));
        assert!(!bindings.any_contains("http://example.com"));
    }
}
