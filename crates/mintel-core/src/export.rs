//! Export file naming

use std::sync::LazyLock;

use regex::Regex;

use crate::types::AnalysisType;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercase `name` and replace every run of whitespace with a single `-`.
///
/// No other characters are touched, so punctuation survives as-is.
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// `<slugified-company-name>-<analysis_type>-report.md`
pub fn report_file_name(company_name: &str, analysis_type: AnalysisType) -> String {
    format!(
        "{}-{}-report.md",
        slugify(company_name),
        analysis_type.as_str()
    )
}
