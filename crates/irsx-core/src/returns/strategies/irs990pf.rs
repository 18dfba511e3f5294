//! Form 990-PF, the private-foundation return.
//!
//! Differs from Form 990 in a few deliberate ways: the website is stored as
//! filed (scheme normalization happens at presentation time), the mission is
//! sentence-capitalized, header dates accept timestamps, there is no
//! organization-wide employee count, and the balance sheet is split into
//! beginning and end of year figures.

use tracing::debug;

use crate::document::ParsedTree;
use crate::models::filing::{OrganizationFields, ReturnFields, SchemaVariant};
use crate::returns::locator::FieldLocator;
use crate::returns::paths::*;
use crate::returns::rules::{capitalize_sentence, parse_date_or_timestamp, parse_decimal};

use super::{classify_irs_return, ReturnStrategy};

/// Strategy for Form 990-PF returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct Irs990PfStrategy;

impl Irs990PfStrategy {
    const ROOT_TOKENS: &'static [&'static str] = &["return", "irs990pf"];

    fn extract_organization(&self, locator: &FieldLocator<'_>) -> OrganizationFields {
        OrganizationFields {
            name: locator.text_or(&IRS990PF_NAME, &IRS990PF_NAME_FALLBACK),
            website_url: locator.text(&IRS990PF_WEBSITE),
            mission_description: locator.locate(&IRS990PF_MISSION).map(capitalize_sentence),
        }
    }

    fn extract_return(&self, locator: &FieldLocator<'_>) -> ReturnFields {
        ReturnFields {
            filed_on: locator.locate_with("filed_on", &IRS990PF_FILED_ON, parse_date_or_timestamp),
            tax_period_start: locator.locate_with(
                "tax_period_start",
                &IRS990PF_PERIOD_START,
                parse_date_or_timestamp,
            ),
            tax_period_end: locator.locate_with(
                "tax_period_end",
                &IRS990PF_PERIOD_END,
                parse_date_or_timestamp,
            ),
            // The 990-PF schema has no organization-wide head count.
            employee_count: None,
            total_revenue: locator.locate_with("total_revenue", &IRS990PF_REVENUE, parse_decimal),
            total_expenses: locator.locate_with(
                "total_expenses",
                &IRS990PF_EXPENSES,
                parse_decimal,
            ),
            total_assets_eoy: locator.locate_with(
                "total_assets_eoy",
                &IRS990PF_ASSETS_EOY,
                parse_decimal,
            ),
            total_assets_boy: locator.locate_with(
                "total_assets_boy",
                &IRS990PF_ASSETS_BOY,
                parse_decimal,
            ),
            total_liabilities_eoy: locator.locate_with(
                "total_liabilities_eoy",
                &IRS990PF_LIABILITIES_EOY,
                parse_decimal,
            ),
            total_liabilities_boy: locator.locate_with(
                "total_liabilities_boy",
                &IRS990PF_LIABILITIES_BOY,
                parse_decimal,
            ),
        }
    }
}

impl ReturnStrategy for Irs990PfStrategy {
    fn variant(&self) -> SchemaVariant {
        SchemaVariant::Irs990Pf
    }

    fn classify(&self, tree: &ParsedTree) -> bool {
        classify_irs_return(tree, self.variant(), Self::ROOT_TOKENS)
    }

    fn extract(&self, tree: &ParsedTree) -> (OrganizationFields, ReturnFields) {
        let locator = FieldLocator::new(tree);
        let organization = self.extract_organization(&locator);
        let return_info = self.extract_return(&locator);

        debug!(
            "Extracted 990-PF return for {:?}",
            organization.name.as_deref().unwrap_or("<unnamed>")
        );

        (organization, return_info)
    }
}
