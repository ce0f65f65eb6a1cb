//! Per-analysis presentation catalog
//!
//! Everything the dashboard, input form, loading screen and report header
//! need to know about an [`AnalysisType`] lives here, so the screens never
//! match on the type themselves.

use crate::types::AnalysisType;

/// Quick-fill subjects offered below the input field
pub const EXAMPLE_SUBJECTS: &[&str] = &["Klarna", "Stripe", "Adyen", "PayPal"];

/// Accent color family, resolved to concrete colors by the TUI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Amber,
    Emerald,
    Violet,
    Rose,
    Sky,
}

/// Icon slot, resolved to a glyph by the TUI icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    Swords,
    ShieldAlert,
    TrendingUp,
    CreditCard,
    Scale,
}

/// Static presentation data for one analysis type
#[derive(Debug, Clone, Copy)]
pub struct AnalysisProfile {
    pub analysis_type: AnalysisType,
    /// Dashboard card title
    pub card_title: &'static str,
    /// Dashboard card description
    pub card_description: &'static str,
    /// Input form heading
    pub title: &'static str,
    /// Input form sub-heading
    pub description: &'static str,
    pub placeholder: &'static str,
    /// Label shown above the company name in the report header
    pub report_label: &'static str,
    pub accent: Accent,
    pub icon: IconSlot,
    /// Status strings cycled by the loading screen, in order
    pub loading_messages: &'static [&'static str],
}

const COMPETITION: AnalysisProfile = AnalysisProfile {
    analysis_type: AnalysisType::Competition,
    card_title: "Analyze Competition",
    card_description: "Deep dive into strategies, pricing & market position",
    title: "Competitive Analysis",
    description: "Analyze market position, pricing strategies, and competitive landscape",
    placeholder: "Enter company name (e.g., Klarna, Stripe)",
    report_label: "Competitive Analysis",
    accent: Accent::Amber,
    icon: IconSlot::Swords,
    loading_messages: &[
        "Searching for competitor information...",
        "Analyzing market positioning...",
        "Comparing pricing strategies...",
        "Evaluating competitive advantages...",
        "Synthesizing intelligence report...",
    ],
};

const DUE_DILIGENCE: AnalysisProfile = AnalysisProfile {
    analysis_type: AnalysisType::DueDiligence,
    card_title: "Merchant Due Diligence",
    card_description: "Risk assessment, fraud checks & reputation analysis",
    title: "Due Diligence",
    description: "Assess risks, reputation, and business health",
    placeholder: "Enter company or merchant name",
    report_label: "Due Diligence Report",
    accent: Accent::Emerald,
    icon: IconSlot::ShieldAlert,
    loading_messages: &[
        "Gathering company background...",
        "Scanning for red flags...",
        "Analyzing reputation signals...",
        "Assessing business model risks...",
        "Compiling due diligence report...",
    ],
};

const MARKET_TRENDS: AnalysisProfile = AnalysisProfile {
    analysis_type: AnalysisType::MarketTrends,
    card_title: "Market Trends",
    card_description: "Macro trends, forecasts & regulatory landscape",
    title: "Market Trends",
    description: "Explore industry trends, forecasts, and market dynamics",
    placeholder: "Enter company or sector name",
    report_label: "Market Trends Analysis",
    accent: Accent::Violet,
    icon: IconSlot::TrendingUp,
    loading_messages: &[
        "Researching industry trends...",
        "Analyzing market dynamics...",
        "Reviewing regulatory landscape...",
        "Forecasting growth patterns...",
        "Preparing trends report...",
    ],
};

const BNPL_MERCHANT_RISK: AnalysisProfile = AnalysisProfile {
    analysis_type: AnalysisType::BnplMerchantRisk,
    card_title: "BNPL Merchant Risk",
    card_description: "Chargebacks, fraud indicators & buy-now-pay-later exposure",
    title: "BNPL Merchant Risk",
    description: "Assess a merchant's risk profile for buy-now-pay-later financing",
    placeholder: "Enter merchant name",
    report_label: "BNPL Merchant Risk Assessment",
    accent: Accent::Rose,
    icon: IconSlot::CreditCard,
    loading_messages: &[
        "Researching merchant background...",
        "Analyzing chargeback and return patterns...",
        "Scanning for fraud indicators...",
        "Reviewing customer complaints...",
        "Assessing BNPL-specific risks...",
        "Compiling risk assessment report...",
    ],
};

const PAYMENT_PROCESSOR_COMPARISON: AnalysisProfile = AnalysisProfile {
    analysis_type: AnalysisType::PaymentProcessorComparison,
    card_title: "Payment Processors",
    card_description: "Fees, integrations & fraud tooling side by side",
    title: "Payment Processor Comparison",
    description: "Compare pricing, integration options, and feature sets",
    placeholder: "Enter payment processor name",
    report_label: "Payment Processor Comparison",
    accent: Accent::Sky,
    icon: IconSlot::Scale,
    loading_messages: &[
        "Researching payment processors...",
        "Comparing pricing and fees...",
        "Analyzing integration options...",
        "Evaluating feature sets...",
        "Assessing fraud protection...",
        "Preparing comparison report...",
    ],
};

impl AnalysisProfile {
    /// Catalog entry for `analysis_type`
    pub fn of(analysis_type: AnalysisType) -> &'static AnalysisProfile {
        match analysis_type {
            AnalysisType::Competition => &COMPETITION,
            AnalysisType::DueDiligence => &DUE_DILIGENCE,
            AnalysisType::MarketTrends => &MARKET_TRENDS,
            AnalysisType::BnplMerchantRisk => &BNPL_MERCHANT_RISK,
            AnalysisType::PaymentProcessorComparison => &PAYMENT_PROCESSOR_COMPARISON,
        }
    }
}

impl AnalysisType {
    pub fn profile(&self) -> &'static AnalysisProfile {
        AnalysisProfile::of(*self)
    }
}
