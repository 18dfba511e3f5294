//! Sample e-file documents shared by unit tests.

/// Form 990 with every general field populated.
pub const IRS990_FULL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" returnVersion="2022v5.0">
  <ReturnHeader binaryAttachmentCnt="0">
    <ReturnTs>2023-05-15T10:20:30-05:00</ReturnTs>
    <TaxPeriodEndDt>2022-12-31</TaxPeriodEndDt>
    <ReturnTypeCd>990</ReturnTypeCd>
    <TaxPeriodBeginDt>2022-01-01</TaxPeriodBeginDt>
    <Filer>
      <EIN>123456789</EIN>
      <BusinessName>
        <BusinessNameLine1Txt>HARBOR LIGHT COMMUNITY SERVICES</BusinessNameLine1Txt>
      </BusinessName>
      <USAddress>
        <AddressLine1Txt>100 MAIN ST</AddressLine1Txt>
        <CityNm>PORTLAND</CityNm>
        <StateAbbreviationCd>ME</StateAbbreviationCd>
        <ZIPCd>04101</ZIPCd>
      </USAddress>
    </Filer>
    <PreparerFirmGrp>
      <PreparerFirmName>
        <BusinessNameLine1Txt>SMITH AND JONES CPA</BusinessNameLine1Txt>
      </PreparerFirmName>
    </PreparerFirmGrp>
  </ReturnHeader>
  <ReturnData documentCnt="1">
    <IRS990 documentId="IRS990-01">
      <WebsiteAddressTxt>www.harborlight.org</WebsiteAddressTxt>
      <ActivityOrMissionDesc>PROVIDING SHELTER AND MEALS TO FAMILIES IN NEED</ActivityOrMissionDesc>
      <TotalEmployeeCnt>42</TotalEmployeeCnt>
      <TotalRevenueColumnA>1,250,000.50</TotalRevenueColumnA>
      <TotalExpensesAmt>1,100,250</TotalExpensesAmt>
      <TotalAssetsEOYAmt>3,400,000</TotalAssetsEOYAmt>
    </IRS990>
  </ReturnData>
</Return>
"#;

/// Form 990 carrying only a name and a tax period.
pub const IRS990_MINIMAL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile">
  <ReturnHeader>
    <ReturnTypeCd>990</ReturnTypeCd>
    <TaxPeriodBeginDt>2021-07-01</TaxPeriodBeginDt>
    <TaxPeriodEndDt>2022-06-30</TaxPeriodEndDt>
    <Filer>
      <BusinessName>
        <BusinessNameLine1Txt>  Friends of the Library  </BusinessNameLine1Txt>
      </BusinessName>
    </Filer>
  </ReturnHeader>
</Return>
"#;

/// Form 990 written with legacy tag names only.
pub const IRS990_LEGACY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile">
  <ReturnHeader>
    <ReturnTypeCd>990</ReturnTypeCd>
    <TaxYearBeginDt>01/01/2012</TaxYearBeginDt>
    <TaxYearEndDt>20121231</TaxYearEndDt>
    <DateOfFiling>05/14/2013</DateOfFiling>
    <Filer>
      <BusinessName>Old Town Historical Society</BusinessName>
    </Filer>
  </ReturnHeader>
  <ReturnData>
    <IRS990>
      <WebSite>http://oldtown.example.org</WebSite>
      <PrimaryExemptPurposeTxt>Preserve local history</PrimaryExemptPurposeTxt>
      <NumEmployees>3.0</NumEmployees>
      <GrossReceipts>98,500</GrossReceipts>
      <TotalExpenses>87,250.75</TotalExpenses>
      <TotalAssetsEndOfYear>410,000</TotalAssetsEndOfYear>
    </IRS990>
  </ReturnData>
</Return>
"#;

/// Form 990-PF with balance sheet figures and no employee count.
pub const IRS990PF_FULL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" returnVersion="2022v5.0">
  <ReturnHeader binaryAttachmentCnt="0">
    <ReturnTs>2023-05-15T10:20:30-05:00</ReturnTs>
    <TaxPeriodEndDt>2022-12-31</TaxPeriodEndDt>
    <ReturnTypeCd>990PF</ReturnTypeCd>
    <TaxPeriodBeginDt>2022-01-01</TaxPeriodBeginDt>
    <Filer>
      <EIN>987654321</EIN>
      <BusinessName>
        <BusinessNameLine1Txt>THE MAPLE FAMILY FOUNDATION</BusinessNameLine1Txt>
      </BusinessName>
    </Filer>
    <PreparerFirmGrp>
      <PreparerFirmName>
        <BusinessNameLine1Txt>SMITH AND JONES CPA</BusinessNameLine1Txt>
      </PreparerFirmName>
    </PreparerFirmGrp>
  </ReturnHeader>
  <ReturnData documentCnt="1">
    <IRS990PF documentId="IRS990PF-01">
      <WebsiteAddressTxt>www.maplefoundation.org</WebsiteAddressTxt>
      <ActivityOrMissionDesc>GRANTS FOR RURAL EDUCATION</ActivityOrMissionDesc>
      <AnalysisOfRevenueAndExpenses>
        <TotalRevAndExpnssAmt>512,340.25</TotalRevAndExpnssAmt>
        <TotalExpensesRevAndExpnssAmt>401,000</TotalExpensesRevAndExpnssAmt>
      </AnalysisOfRevenueAndExpenses>
      <Form990PFBalanceSheetsGrp>
        <TotalAssetsBOYAmt>4,800,000</TotalAssetsBOYAmt>
        <TotalAssetsEOYAmt>5,010,250.10</TotalAssetsEOYAmt>
        <TotalLiabilitiesBOYAmt>12,000</TotalLiabilitiesBOYAmt>
        <TotalLiabilitiesEOYAmt>9,500</TotalLiabilitiesEOYAmt>
      </Form990PFBalanceSheetsGrp>
    </IRS990PF>
  </ReturnData>
</Return>
"#;

/// Form 990-EZ.
pub const IRS990EZ_FULL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile" returnVersion="2022v5.0">
  <ReturnHeader>
    <ReturnTs>2023-02-01T08:00:00-05:00</ReturnTs>
    <TaxPeriodEndDt>2022-12-31</TaxPeriodEndDt>
    <ReturnTypeCd>990EZ</ReturnTypeCd>
    <TaxPeriodBeginDt>2022-01-01</TaxPeriodBeginDt>
    <Filer>
      <BusinessName>
        <BusinessNameLine1Txt>RIVERSIDE YOUTH SOCCER LEAGUE</BusinessNameLine1Txt>
      </BusinessName>
    </Filer>
  </ReturnHeader>
  <ReturnData>
    <IRS990EZ>
      <WebsiteAddressTxt>riversidesoccer.org</WebsiteAddressTxt>
      <PrimaryExemptPurposeTxt>Youth recreational soccer</PrimaryExemptPurposeTxt>
      <TotalRevenueAmt>84,120</TotalRevenueAmt>
      <TotalExpensesAmt>79,880.40</TotalExpensesAmt>
      <Form990TotalAssetsGrp>
        <BOYAmt>20,000</BOYAmt>
        <EOYAmt>24,240</EOYAmt>
      </Form990TotalAssetsGrp>
    </IRS990EZ>
  </ReturnData>
</Return>
"#;

/// A return whose header lists both a 990-PF and a 990 type code.
pub const OVERLAPPING_TYPES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile">
  <ReturnHeader>
    <ReturnTypeCd>990PF</ReturnTypeCd>
    <TaxPeriodBeginDt>2022-01-01</TaxPeriodBeginDt>
    <TaxPeriodEndDt>2022-12-31</TaxPeriodEndDt>
  </ReturnHeader>
  <ReturnHeader>
    <ReturnTypeCd>990</ReturnTypeCd>
  </ReturnHeader>
  <ReturnData>
    <BusinessName>
      <BusinessNameLine1Txt>AMBIGUOUS TRUST</BusinessNameLine1Txt>
    </BusinessName>
  </ReturnData>
</Return>
"#;

/// An IRS return of a family without a strategy.
pub const IRS990T: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile">
  <ReturnHeader>
    <ReturnTypeCd>990T</ReturnTypeCd>
  </ReturnHeader>
</Return>
"#;

/// Well-formed XML unrelated to IRS filings.
pub const FOREIGN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Invoice xmlns="urn:example:invoice">
  <Number>FV/001/2024</Number>
</Invoice>
"#;

/// Truncated document.
pub const TRUNCATED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Return xmlns="http://www.irs.gov/efile">
  <ReturnHeader>
    <ReturnTypeCd>990</ReturnTypeCd>
"#;
