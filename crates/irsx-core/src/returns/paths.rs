//! Candidate locations for every logical field, per return family.
//!
//! Each list runs from the current schema tag to the oldest one still seen in
//! filings. Reordering a list changes extraction output.

use lazy_static::lazy_static;

use crate::document::FieldPath;

fn compile(sources: &[&str]) -> Vec<FieldPath> {
    sources
        .iter()
        .map(|source| FieldPath::parse(source).unwrap())
        .collect()
}

lazy_static! {
    // Classification
    pub static ref RETURN_TYPE_CODE: FieldPath =
        FieldPath::parse(".//irs:ReturnHeader/irs:ReturnTypeCd").unwrap();

    // Form 990
    pub static ref IRS990_NAME: Vec<FieldPath> = compile(&[
        ".//irs:BusinessName/irs:BusinessNameLine1Txt",
        ".//irs:BusinessNameLine1Txt",
        ".//irs:NameBusiness/BusinessNameLine1Txt",
        ".//irs:OrganizationName/irs:BusinessNameLine1Txt",
    ]);
    pub static ref IRS990_NAME_FALLBACK: Vec<FieldPath> = compile(&[".//irs:BusinessName"]);
    pub static ref IRS990_WEBSITE: Vec<FieldPath> = compile(&[
        ".//irs:WebsiteAddressTxt",
        ".//irs:WebsiteAddress",
        ".//irs:WebSite",
    ]);
    pub static ref IRS990_MISSION: Vec<FieldPath> = compile(&[
        ".//irs:ActivityOrMissionDesc",
        ".//irs:MissionDesc",
        ".//irs:PrimaryExemptPurposeTxt",
    ]);
    pub static ref IRS990_PERIOD_START: Vec<FieldPath> = compile(&[
        ".//irs:TaxPeriodBeginDt",
        ".//irs:TaxPeriodStartDt",
        ".//irs:TaxYearBeginDt",
    ]);
    pub static ref IRS990_PERIOD_END: Vec<FieldPath> = compile(&[
        ".//irs:TaxPeriodEndDt",
        ".//irs:TaxYearEndDt",
    ]);
    pub static ref IRS990_FILED_ON: Vec<FieldPath> = compile(&[
        ".//irs:ReturnTs",
        ".//irs:DateOfFiling",
        ".//irs:FilingDate",
    ]);
    pub static ref IRS990_EMPLOYEES: Vec<FieldPath> = compile(&[
        ".//irs:TotalEmployeeCnt",
        ".//irs:EmployeeCnt",
        ".//irs:NumEmployees",
    ]);
    pub static ref IRS990_REVENUE: Vec<FieldPath> = compile(&[
        ".//irs:TotalRevenueColumnA",
        ".//irs:TotalRevenue",
        ".//irs:GrossReceipts",
        ".//irs:TotalGrossReceipts",
    ]);
    pub static ref IRS990_EXPENSES: Vec<FieldPath> = compile(&[
        ".//irs:TotalExpensesColumnA",
        ".//irs:TotalExpenses",
        ".//irs:TotalExpensesAmt",
    ]);
    pub static ref IRS990_ASSETS: Vec<FieldPath> = compile(&[
        ".//irs:TotalAssetsEOYAmt",
        ".//irs:TotalAssets",
        ".//irs:TotalAssetsEndOfYear",
    ]);

    // Form 990-PF
    pub static ref IRS990PF_NAME: Vec<FieldPath> = compile(&[
        ".//irs:Filer/irs:BusinessName/irs:BusinessNameLine1Txt",
        ".//irs:Filer/irs:BusinessName/irs:BusinessNameLine1",
        ".//irs:Filer/irs:Name/irs:BusinessNameLine1",
        ".//irs:BusinessName/irs:BusinessNameLine1Txt",
    ]);
    pub static ref IRS990PF_NAME_FALLBACK: Vec<FieldPath> = compile(&[".//irs:BusinessName"]);
    pub static ref IRS990PF_WEBSITE: Vec<FieldPath> = compile(&[
        ".//irs:WebsiteAddressTxt",
        ".//irs:WebsiteAddress",
    ]);
    pub static ref IRS990PF_MISSION: Vec<FieldPath> = compile(&[
        ".//irs:ActivityOrMissionDesc",
        ".//irs:MissionDesc",
    ]);
    pub static ref IRS990PF_PERIOD_START: Vec<FieldPath> = compile(&[
        ".//irs:ReturnHeader/irs:TaxPeriodBeginDt",
        ".//irs:ReturnHeader/irs:TaxPeriodBeginDate",
    ]);
    pub static ref IRS990PF_PERIOD_END: Vec<FieldPath> = compile(&[
        ".//irs:ReturnHeader/irs:TaxPeriodEndDt",
        ".//irs:ReturnHeader/irs:TaxPeriodEndDate",
    ]);
    pub static ref IRS990PF_FILED_ON: Vec<FieldPath> = compile(&[
        ".//irs:ReturnHeader/irs:ReturnTs",
        ".//irs:ReturnHeader/irs:Timestamp",
    ]);
    pub static ref IRS990PF_REVENUE: Vec<FieldPath> = compile(&[".//irs:TotalRevAndExpnssAmt"]);
    pub static ref IRS990PF_EXPENSES: Vec<FieldPath> =
        compile(&[".//irs:TotalExpensesRevAndExpnssAmt"]);
    pub static ref IRS990PF_ASSETS_EOY: Vec<FieldPath> = compile(&[".//irs:TotalAssetsEOYAmt"]);
    pub static ref IRS990PF_ASSETS_BOY: Vec<FieldPath> = compile(&[".//irs:TotalAssetsBOYAmt"]);
    pub static ref IRS990PF_LIABILITIES_EOY: Vec<FieldPath> =
        compile(&[".//irs:TotalLiabilitiesEOYAmt"]);
    pub static ref IRS990PF_LIABILITIES_BOY: Vec<FieldPath> =
        compile(&[".//irs:TotalLiabilitiesBOYAmt"]);

    // Form 990-EZ
    pub static ref IRS990EZ_MISSION: Vec<FieldPath> = compile(&[
        ".//irs:PrimaryExemptPurposeTxt",
        ".//irs:MissionDesc",
        ".//irs:ActivityOrMissionDesc",
    ]);
    pub static ref IRS990EZ_REVENUE: Vec<FieldPath> = compile(&[
        ".//irs:TotalRevenueAmt",
        ".//irs:TotalRevenue",
        ".//irs:GrossReceipts",
    ]);
    pub static ref IRS990EZ_EXPENSES: Vec<FieldPath> = compile(&[
        ".//irs:TotalExpensesAmt",
        ".//irs:TotalExpenses",
    ]);
    pub static ref IRS990EZ_ASSETS: Vec<FieldPath> = compile(&[
        ".//irs:Form990TotalAssetsGrp/irs:EOYAmt",
        ".//irs:TotalAssetsEOYAmt",
        ".//irs:TotalAssets",
    ]);
}
