//! Ordered-fallback field lookup.

use tracing::{debug, trace};

use crate::document::{FieldPath, NamespaceBindings, ParsedTree};

use super::rules::Coercion;

/// Finds logical fields in one document by trying candidate paths in order.
pub struct FieldLocator<'t> {
    tree: &'t ParsedTree,
    bindings: NamespaceBindings,
}

impl<'t> FieldLocator<'t> {
    /// Locator using the document's extraction bindings.
    pub fn new(tree: &'t ParsedTree) -> Self {
        Self::with_bindings(tree, NamespaceBindings::for_extraction(tree))
    }

    pub fn with_bindings(tree: &'t ParsedTree, bindings: NamespaceBindings) -> Self {
        Self { tree, bindings }
    }

    /// Trimmed text of the first match with non-empty text.
    ///
    /// Candidates are tried in order; matches of one candidate are visited in
    /// document order.
    pub fn locate(&self, candidates: &[FieldPath]) -> Option<&'t str> {
        let tree = self.tree;
        candidates.iter().find_map(|path| {
            tree.select(path, &self.bindings)
                .into_iter()
                .map(|id| tree.text(id).trim())
                .find(|text| !text.is_empty())
                .inspect(|_| trace!("Matched {}", path))
        })
    }

    /// Locate a field and coerce it.
    ///
    /// Text that fails coercion makes the field absent; later candidates are
    /// not consulted.
    pub fn locate_with<T>(
        &self,
        field: &str,
        candidates: &[FieldPath],
        coerce: Coercion<T>,
    ) -> Option<T> {
        let text = self.locate(candidates)?;
        let value = coerce(text);
        if value.is_none() {
            debug!("Could not coerce {} from {:?}, leaving it empty", field, text);
        }
        value
    }

    /// Locate a string field.
    pub fn text(&self, candidates: &[FieldPath]) -> Option<String> {
        self.locate(candidates).map(str::to_string)
    }

    /// Locate a string field, trying `fallback` only when `candidates` find nothing.
    pub fn text_or(&self, candidates: &[FieldPath], fallback: &[FieldPath]) -> Option<String> {
        self.text(candidates).or_else(|| self.text(fallback))
    }
}
