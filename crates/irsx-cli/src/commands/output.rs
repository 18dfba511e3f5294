//! Rendering of extraction outcomes.

use irsx_core::models::config::OutputFormat as ConfiguredFormat;
use irsx_core::ExtractionOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for per-document output files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

impl From<ConfiguredFormat> for OutputFormat {
    fn from(format: ConfiguredFormat) -> Self {
        match format {
            ConfiguredFormat::Json => Self::Json,
            ConfiguredFormat::Csv => Self::Csv,
            ConfiguredFormat::Text => Self::Text,
        }
    }
}

const CSV_HEADER: [&str; 16] = [
    "status",
    "variant",
    "name",
    "website_url",
    "mission_description",
    "filed_on",
    "tax_period_start",
    "tax_period_end",
    "employee_count",
    "total_revenue",
    "total_expenses",
    "total_assets_eoy",
    "total_assets_boy",
    "total_liabilities_eoy",
    "total_liabilities_boy",
    "detail",
];

pub fn format_outcome(
    outcome: &ExtractionOutcome,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(outcome)?),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
        OutputFormat::Csv => format_csv(outcome),
        OutputFormat::Text => Ok(format_text(outcome)),
    }
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn format_csv(outcome: &ExtractionOutcome) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    let row: Vec<String> = match outcome {
        ExtractionOutcome::Success {
            variant,
            organization,
            return_info,
        } => vec![
            outcome.status().to_string(),
            variant.to_string(),
            opt(&organization.name),
            opt(&organization.website_url),
            opt(&organization.mission_description),
            opt(&return_info.filed_on),
            opt(&return_info.tax_period_start),
            opt(&return_info.tax_period_end),
            opt(&return_info.employee_count),
            opt(&return_info.total_revenue),
            opt(&return_info.total_expenses),
            opt(&return_info.total_assets_eoy),
            opt(&return_info.total_assets_boy),
            opt(&return_info.total_liabilities_eoy),
            opt(&return_info.total_liabilities_boy),
            String::new(),
        ],
        other => {
            let mut row = vec![String::new(); CSV_HEADER.len()];
            row[0] = other.status().to_string();
            row[CSV_HEADER.len() - 1] = failure_detail(other);
            row
        }
    };
    wtr.write_record(&row)?;

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

/// One-line description of a non-success outcome.
pub fn failure_detail(outcome: &ExtractionOutcome) -> String {
    match outcome {
        ExtractionOutcome::Success { .. } => String::new(),
        ExtractionOutcome::Malformed { detail } => detail.clone(),
        ExtractionOutcome::Unrecognized { attempted_variants } => format!(
            "attempted {}",
            attempted_variants
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

fn format_text(outcome: &ExtractionOutcome) -> String {
    let ExtractionOutcome::Success {
        variant,
        organization,
        return_info,
    } = outcome
    else {
        return format!("Status: {}\n{}\n", outcome.status(), failure_detail(outcome));
    };

    let mut output = String::new();

    output.push_str(&format!("Return: {}\n", variant));
    output.push_str(&format!(
        "Organization: {}\n",
        organization.name.as_deref().unwrap_or("-")
    ));
    if let Some(url) = &organization.website_url {
        output.push_str(&format!("  Website: {}\n", url));
    }
    if let Some(mission) = &organization.mission_description {
        output.push_str(&format!("  Mission: {}\n", mission));
    }
    output.push('\n');

    if let Some((start, end)) = return_info.period() {
        output.push_str(&format!("Period: {} to {}\n", start, end));
    }
    if let Some(filed_on) = return_info.filed_on {
        output.push_str(&format!("Filed: {}\n", filed_on));
    }
    if let Some(employees) = return_info.employee_count {
        output.push_str(&format!("Employees: {}\n", employees));
    }

    output.push_str("Financials:\n");
    let amounts = [
        ("Revenue", &return_info.total_revenue),
        ("Expenses", &return_info.total_expenses),
        ("Assets (EOY)", &return_info.total_assets_eoy),
        ("Assets (BOY)", &return_info.total_assets_boy),
        ("Liabilities (EOY)", &return_info.total_liabilities_eoy),
        ("Liabilities (BOY)", &return_info.total_liabilities_boy),
    ];
    for (label, amount) in amounts {
        if let Some(amount) = amount {
            output.push_str(&format!("  {:<18} {}\n", format!("{}:", label), amount));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use irsx_core::{OrganizationFields, ReturnFields, SchemaVariant};

    fn success() -> ExtractionOutcome {
        ExtractionOutcome::Success {
            variant: SchemaVariant::Irs990Ez,
            organization: OrganizationFields {
                name: Some("RIVERSIDE, INC".to_string()),
                ..Default::default()
            },
            return_info: ReturnFields::default(),
        }
    }

    #[test]
    fn test_csv_quotes_fields() {
        let csv = format_outcome(&success(), OutputFormat::Csv, false).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("status,variant,name"));
        assert!(lines.next().unwrap().starts_with("success,IRS990EZ,\"RIVERSIDE, INC\""));
    }

    #[test]
    fn test_failure_rows_carry_detail() {
        let outcome = ExtractionOutcome::Unrecognized {
            attempted_variants: vec![SchemaVariant::Irs990, SchemaVariant::Irs990Pf],
        };
        let csv = format_outcome(&outcome, OutputFormat::Csv, false).unwrap();
        assert!(csv.contains("unrecognized,"));
        assert!(csv.contains("\"attempted IRS990, IRS990PF\""));

        let text = format_outcome(&outcome, OutputFormat::Text, false).unwrap();
        assert!(text.starts_with("Status: unrecognized"));
    }

    #[test]
    fn test_json_is_tagged() {
        let json = format_outcome(&success(), OutputFormat::Json, false).unwrap();
        assert!(json.starts_with("{\"status\":\"success\""));
    }
}
