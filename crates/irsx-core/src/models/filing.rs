//! Normalized records extracted from IRS e-file returns.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// A supported return schema family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchemaVariant {
    /// Form 990, the general exempt-organization return.
    #[serde(rename = "IRS990")]
    Irs990,
    /// Form 990-PF, the private-foundation return.
    #[serde(rename = "IRS990PF")]
    Irs990Pf,
    /// Form 990-EZ, the short-form return.
    #[serde(rename = "IRS990EZ")]
    Irs990Ez,
}

impl SchemaVariant {
    /// Stable display name used in logs, reports, and serialized outcomes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Irs990 => "IRS990",
            Self::Irs990Pf => "IRS990PF",
            Self::Irs990Ez => "IRS990EZ",
        }
    }

    /// The `ReturnTypeCd` value that identifies this variant, lower-cased.
    pub fn return_type_code(&self) -> &'static str {
        match self {
            Self::Irs990 => "990",
            Self::Irs990Pf => "990pf",
            Self::Irs990Ez => "990ez",
        }
    }
}

impl std::fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of the filing organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationFields {
    /// Legal name (first business name line).
    pub name: Option<String>,

    /// Website address as reported, or scheme-normalized depending on the variant.
    pub website_url: Option<String>,

    /// Mission or primary exempt purpose.
    pub mission_description: Option<String>,
}

/// Financial summary of one reporting period.
///
/// The shape is the union of every variant. Variants that report a single
/// point-in-time total store it in the end-of-year field and leave the rest empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnFields {
    pub filed_on: Option<NaiveDate>,
    pub tax_period_start: Option<NaiveDate>,
    pub tax_period_end: Option<NaiveDate>,
    pub employee_count: Option<i64>,
    pub total_revenue: Option<Decimal>,
    pub total_expenses: Option<Decimal>,
    pub total_assets_eoy: Option<Decimal>,
    pub total_assets_boy: Option<Decimal>,
    pub total_liabilities_eoy: Option<Decimal>,
    pub total_liabilities_boy: Option<Decimal>,
}

impl ReturnFields {
    /// The (start, end) pair that keys a return period, when both are known.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.tax_period_start?, self.tax_period_end?))
    }
}

/// A successfully extracted return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReturn {
    pub variant: SchemaVariant,
    pub organization: OrganizationFields,
    pub return_info: ReturnFields,
}

/// Everything the engine can say about one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionOutcome {
    /// A strategy accepted the document and extracted a record.
    Success {
        variant: SchemaVariant,
        organization: OrganizationFields,
        return_info: ReturnFields,
    },
    /// Well-formed, but no strategy accepted it.
    Unrecognized { attempted_variants: Vec<SchemaVariant> },
    /// Not well-formed XML.
    Malformed { detail: String },
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Short status label (`success`, `unrecognized`, `malformed`).
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Unrecognized { .. } => "unrecognized",
            Self::Malformed { .. } => "malformed",
        }
    }

    /// Convert into a `Result` for callers that propagate with `?`.
    pub fn into_result(self) -> Result<ParsedReturn, DocumentError> {
        match self {
            Self::Success {
                variant,
                organization,
                return_info,
            } => Ok(ParsedReturn {
                variant,
                organization,
                return_info,
            }),
            Self::Unrecognized { attempted_variants } => Err(DocumentError::Unrecognized {
                attempted: attempted_variants,
            }),
            Self::Malformed { detail } => Err(DocumentError::Malformed { detail }),
        }
    }
}

impl From<ParsedReturn> for ExtractionOutcome {
    fn from(parsed: ParsedReturn) -> Self {
        Self::Success {
            variant: parsed.variant,
            organization: parsed.organization,
            return_info: parsed.return_info,
        }
    }
}

impl From<DocumentError> for ExtractionOutcome {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Malformed { detail } => Self::Malformed { detail },
            DocumentError::Unrecognized { attempted } => Self::Unrecognized {
                attempted_variants: attempted,
            },
        }
    }
}
