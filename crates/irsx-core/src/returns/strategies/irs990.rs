//! Form 990, the general exempt-organization return.

use tracing::debug;

use crate::document::ParsedTree;
use crate::models::filing::{OrganizationFields, ReturnFields, SchemaVariant};
use crate::returns::locator::FieldLocator;
use crate::returns::paths::*;
use crate::returns::rules::{ensure_url_scheme, parse_date, parse_decimal, parse_integer_count};

use super::{classify_irs_return, ReturnStrategy};

/// Strategy for Form 990 returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Irs990Strategy;

impl Irs990Strategy {
    const ROOT_TOKENS: &'static [&'static str] = &["return", "irs990"];

    fn extract_organization(&self, locator: &FieldLocator<'_>) -> OrganizationFields {
        OrganizationFields {
            name: locator.text_or(&IRS990_NAME, &IRS990_NAME_FALLBACK),
            website_url: locator
                .locate(&IRS990_WEBSITE)
                .map(ensure_url_scheme),
            mission_description: locator.text(&IRS990_MISSION),
        }
    }

    fn extract_return(&self, locator: &FieldLocator<'_>) -> ReturnFields {
        ReturnFields {
            filed_on: locator.locate_with("filed_on", &IRS990_FILED_ON, parse_date),
            tax_period_start: locator.locate_with(
                "tax_period_start",
                &IRS990_PERIOD_START,
                parse_date,
            ),
            tax_period_end: locator.locate_with("tax_period_end", &IRS990_PERIOD_END, parse_date),
            employee_count: locator.locate_with(
                "employee_count",
                &IRS990_EMPLOYEES,
                parse_integer_count,
            ),
            total_revenue: locator.locate_with("total_revenue", &IRS990_REVENUE, parse_decimal),
            total_expenses: locator.locate_with(
                "total_expenses",
                &IRS990_EXPENSES,
                parse_decimal,
            ),
            total_assets_eoy: locator.locate_with("total_assets", &IRS990_ASSETS, parse_decimal),
            ..Default::default()
        }
    }
}

impl ReturnStrategy for Irs990Strategy {
    fn variant(&self) -> SchemaVariant {
        SchemaVariant::Irs990
    }

    fn classify(&self, tree: &ParsedTree) -> bool {
        classify_irs_return(tree, self.variant(), Self::ROOT_TOKENS)
    }

    fn extract(&self, tree: &ParsedTree) -> (OrganizationFields, ReturnFields) {
        let locator = FieldLocator::new(tree);
        let organization = self.extract_organization(&locator);
        let return_info = self.extract_return(&locator);

        debug!(
            "Extracted 990 return for {:?}",
            organization.name.as_deref().unwrap_or("<unnamed>")
        );

        (organization, return_info)
    }
}
