//! Form 990-EZ, the short-form return.

use tracing::debug;

use crate::document::ParsedTree;
use crate::models::filing::{OrganizationFields, ReturnFields, SchemaVariant};
use crate::returns::locator::FieldLocator;
use crate::returns::paths::*;
use crate::returns::rules::{ensure_url_scheme, parse_date, parse_decimal, parse_integer_count};

use super::{classify_irs_return, ReturnStrategy};

/// Strategy for Form 990-EZ returns. Produces the same record shape as Form 990.
#[derive(Debug, Clone, Copy, Default)]
pub struct Irs990EzStrategy;

impl Irs990EzStrategy {
    const ROOT_TOKENS: &'static [&'static str] = &["return", "irs990ez"];
}

impl ReturnStrategy for Irs990EzStrategy {
    fn variant(&self) -> SchemaVariant {
        SchemaVariant::Irs990Ez
    }

    fn classify(&self, tree: &ParsedTree) -> bool {
        classify_irs_return(tree, self.variant(), Self::ROOT_TOKENS)
    }

    fn extract(&self, tree: &ParsedTree) -> (OrganizationFields, ReturnFields) {
        let locator = FieldLocator::new(tree);

        let organization = OrganizationFields {
            name: locator.text_or(&IRS990_NAME, &IRS990_NAME_FALLBACK),
            website_url: locator.locate(&IRS990_WEBSITE).map(ensure_url_scheme),
            mission_description: locator.text(&IRS990EZ_MISSION),
        };

        let return_info = ReturnFields {
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
            total_revenue: locator.locate_with("total_revenue", &IRS990EZ_REVENUE, parse_decimal),
            total_expenses: locator.locate_with(
                "total_expenses",
                &IRS990EZ_EXPENSES,
                parse_decimal,
            ),
            total_assets_eoy: locator.locate_with("total_assets", &IRS990EZ_ASSETS, parse_decimal),
            ..Default::default()
        };

        debug!(
            "Extracted 990-EZ return for {:?}",
            organization.name.as_deref().unwrap_or("<unnamed>")
        );

        (organization, return_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn tree(xml: &str) -> ParsedTree {
        ParsedTree::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_classify() {
        let strategy = Irs990EzStrategy;
        assert!(strategy.classify(&tree(IRS990EZ_FULL)));
        assert!(!strategy.classify(&tree(IRS990_FULL)));
        assert!(!strategy.classify(&tree(IRS990PF_FULL)));
    }

    #[test]
    fn test_extract() {
        let (organization, return_info) = Irs990EzStrategy.extract(&tree(IRS990EZ_FULL));

        assert_eq!(organization.name.as_deref(), Some("RIVERSIDE YOUTH SOCCER LEAGUE"));
        assert_eq!(
            organization.website_url.as_deref(),
            Some("https://riversidesoccer.org")
        );
        assert_eq!(
            organization.mission_description.as_deref(),
            Some("Youth recreational soccer")
        );

        assert_eq!(return_info.tax_period_start, NaiveDate::from_ymd_opt(2022, 1, 1));
        assert_eq!(return_info.tax_period_end, NaiveDate::from_ymd_opt(2022, 12, 31));
        assert_eq!(return_info.total_revenue, Some(Decimal::from(84120)));
        assert_eq!(return_info.total_expenses, Some(Decimal::new(7988040, 2)));
        assert_eq!(return_info.total_assets_eoy, Some(Decimal::from(24240)));
        assert_eq!(return_info.total_assets_boy, None);
        assert_eq!(return_info.employee_count, None);
    }
}
