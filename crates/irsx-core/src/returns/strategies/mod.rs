//! One extraction strategy per supported return family.

mod irs990;
mod irs990ez;
mod irs990pf;

pub use irs990::Irs990Strategy;
pub use irs990ez::Irs990EzStrategy;
pub use irs990pf::Irs990PfStrategy;

use tracing::trace;

use crate::document::{NamespaceBindings, ParsedTree, IRS_NAMESPACE};
use crate::models::filing::{OrganizationFields, ReturnFields, SchemaVariant};

use super::paths::RETURN_TYPE_CODE;

/// Classification and extraction rules for one return family.
pub trait ReturnStrategy: Send + Sync {
    /// The family this strategy handles.
    fn variant(&self) -> SchemaVariant;

    /// Whether this strategy can handle the document. Never fails.
    fn classify(&self, tree: &ParsedTree) -> bool;

    /// Extract the normalized records. Missing or unreadable fields are left empty.
    fn extract(&self, tree: &ParsedTree) -> (OrganizationFields, ReturnFields);
}

/// Why a classifier turned a document down.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Rejection {
    MissingNamespace,
    RootTag(String),
    ReturnType,
}

/// The checks every IRS family shares: the e-file namespace is declared on the
/// root, the root tag carries one of `root_tokens`, and a header
/// `ReturnTypeCd` equals the variant's code ignoring case. Surrounding
/// whitespace is not stripped.
pub(crate) fn classify_irs_return(
    tree: &ParsedTree,
    variant: SchemaVariant,
    root_tokens: &[&str],
) -> bool {
    match check_irs_return(tree, variant, root_tokens) {
        Ok(()) => true,
        Err(rejection) => {
            trace!("{} cannot handle document: {:?}", variant, rejection);
            false
        }
    }
}

fn check_irs_return(
    tree: &ParsedTree,
    variant: SchemaVariant,
    root_tokens: &[&str],
) -> Result<(), Rejection> {
    if !tree.namespaces().any_contains(IRS_NAMESPACE) {
        return Err(Rejection::MissingNamespace);
    }

    let root_tag = tree.name(tree.root()).local.to_lowercase();
    if !root_tokens.iter().any(|token| root_tag.contains(token)) {
        return Err(Rejection::RootTag(root_tag));
    }

    let code = variant.return_type_code();
    let matches_code = tree
        .select(&RETURN_TYPE_CODE, &NamespaceBindings::canonical())
        .into_iter()
        .any(|id| tree.text(id).to_lowercase() == code);
    if !matches_code {
        return Err(Rejection::ReturnType);
    }

    Ok(())
}
