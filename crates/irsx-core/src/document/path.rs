//! Path expressions used to locate fields.
//!
//! Supported syntax is the subset the extraction tables need:
//! `.//prefix:First/prefix:Child/...`. The first step matches any descendant of
//! the root, each following step a direct child of the previous match.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::tree::ElementName;
use super::NamespaceBindings;

lazy_static! {
    static ref STEP: Regex = Regex::new(
        r"^(?:([A-Za-z_][A-Za-z0-9_.\-]*):)?([A-Za-z_][A-Za-z0-9_.\-]*)$"
    ).unwrap();
}

/// A path expression that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path must start with './/': {0}")]
    NotDescendant(String),

    #[error("invalid step '{step}' in path {path}")]
    InvalidStep { path: String, step: String },
}

/// One name test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    prefix: Option<String>,
    local: String,
}

impl Step {
    /// Whether an element satisfies this name test under the given bindings.
    ///
    /// An unprefixed step only matches un-namespaced elements, and a prefix
    /// missing from `bindings` matches nothing.
    pub fn matches(&self, name: &ElementName, bindings: &NamespaceBindings) -> bool {
        if name.local != self.local {
            return false;
        }
        match &self.prefix {
            Some(prefix) => match bindings.resolve(prefix) {
                Some(uri) => name.namespace.as_deref() == Some(uri),
                None => false,
            },
            None => name.namespace.is_none(),
        }
    }
}

/// A compiled path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    source: String,
    steps: Vec<Step>,
}

impl FieldPath {
    pub fn parse(source: &str) -> Result<Self, PathError> {
        let rest = source
            .strip_prefix(".//")
            .ok_or_else(|| PathError::NotDescendant(source.to_string()))?;

        let steps = rest
            .split('/')
            .map(|step| {
                let caps = STEP.captures(step).ok_or_else(|| PathError::InvalidStep {
                    path: source.to_string(),
                    step: step.to_string(),
                })?;
                Ok(Step {
                    prefix: caps.get(1).map(|m| m.as_str().to_string()),
                    local: caps[2].to_string(),
                })
            })
            .collect::<Result<Vec<_>, PathError>>()?;

        Ok(Self {
            source: source.to_string(),
            steps,
        })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
