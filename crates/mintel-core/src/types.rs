//! Core domain types

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of research requested from the analysis backend.
///
/// The serialized form is the wire value sent as `analysis_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    Competition,
    DueDiligence,
    MarketTrends,
    BnplMerchantRisk,
    PaymentProcessorComparison,
}

impl AnalysisType {
    /// Every variant, in dashboard order.
    pub const ALL: [AnalysisType; 5] = [
        AnalysisType::Competition,
        AnalysisType::DueDiligence,
        AnalysisType::MarketTrends,
        AnalysisType::BnplMerchantRisk,
        AnalysisType::PaymentProcessorComparison,
    ];

    /// Wire value used in requests and export file names
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Competition => "competition",
            AnalysisType::DueDiligence => "due_diligence",
            AnalysisType::MarketTrends => "market_trends",
            AnalysisType::BnplMerchantRisk => "bnpl_merchant_risk",
            AnalysisType::PaymentProcessorComparison => "payment_processor_comparison",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnalysisType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::unknown_analysis_type(s))
    }
}

/// A generated report with its cited sources.
///
/// Only ever built from a successful backend response; `company_name` is the
/// subject the user entered, not a value echoed by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Markdown body
    pub content: String,
    /// Source URLs in the order the backend returned them
    pub sources: Vec<String>,
    pub company_name: String,
    pub analysis_type: AnalysisType,
    pub generated_at: DateTime<Local>,
}

impl Report {
    pub fn new(
        content: impl Into<String>,
        sources: Vec<String>,
        company_name: impl Into<String>,
        analysis_type: AnalysisType,
    ) -> Self {
        Self {
            content: content.into(),
            sources,
            company_name: company_name.into(),
            analysis_type,
            generated_at: Local::now(),
        }
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }

    /// File name used when exporting this report
    pub fn export_file_name(&self) -> String {
        crate::export::report_file_name(&self.company_name, self.analysis_type)
    }

    /// Header line shown under the company name, e.g.
    /// "Generated Saturday, October 17, 2026"
    pub fn generated_label(&self) -> String {
        format!("Generated {}", self.generated_at.format("%A, %B %-d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_analysis_type_wire_values() {
        assert_eq!(AnalysisType::Competition.as_str(), "competition");
        assert_eq!(AnalysisType::DueDiligence.as_str(), "due_diligence");
        assert_eq!(AnalysisType::MarketTrends.as_str(), "market_trends");
        assert_eq!(
            AnalysisType::BnplMerchantRisk.as_str(),
            "bnpl_merchant_risk"
        );
        assert_eq!(
            AnalysisType::PaymentProcessorComparison.as_str(),
            "payment_processor_comparison"
        );
    }

    #[test]
    fn test_analysis_type_serde_matches_as_str() {
        for t in AnalysisType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_analysis_type_from_str() {
        assert_eq!(
            "due_diligence".parse::<AnalysisType>().unwrap(),
            AnalysisType::DueDiligence
        );
        assert!("Due Diligence".parse::<AnalysisType>().is_err());
        assert!("".parse::<AnalysisType>().is_err());
    }

    #[test]
    fn test_report_has_sources() {
        let report = Report::new("# Acme", vec![], "Acme", AnalysisType::Competition);
        assert!(!report.has_sources());

        let report = Report::new(
            "# Acme",
            vec!["https://example.com/a".to_string()],
            "Acme",
            AnalysisType::Competition,
        );
        assert!(report.has_sources());
    }

    #[test]
    fn test_report_export_file_name() {
        let report = Report::new("x", vec![], "Acme Corp", AnalysisType::DueDiligence);
        assert_eq!(report.export_file_name(), "acme-corp-due_diligence-report.md");
    }

    #[test]
    fn test_generated_label_format() {
        let mut report = Report::new("x", vec![], "Acme", AnalysisType::MarketTrends);
        report.generated_at = Local.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        assert_eq!(report.generated_label(), "Generated Saturday, October 17, 2026");
    }
}
