//! Configuration types

use std::path::PathBuf;
use std::time::Duration;

use mintel_core::AnalysisType;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub loading: LoadingSettings,

    #[serde(default)]
    pub report: ReportSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// Analysis backend settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL the `/api/analyze` and `/health` paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Client-side request timeout in seconds (0 = none)
    #[serde(default)]
    pub timeout_secs: u64,
}

impl ServerSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Loading screen animation settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoadingSettings {
    /// Status message rotation period
    #[serde(default = "default_message_interval_ms")]
    pub message_interval_ms: u64,

    /// Ellipsis animation period
    #[serde(default = "default_dots_interval_ms")]
    pub dots_interval_ms: u64,
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            message_interval_ms: default_message_interval_ms(),
            dots_interval_ms: default_dots_interval_ms(),
        }
    }
}

fn default_message_interval_ms() -> u64 {
    3000
}

fn default_dots_interval_ms() -> u64 {
    500
}

/// Report viewer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportSettings {
    /// How long the "Copied" acknowledgment stays visible
    #[serde(default = "default_copied_ack_ms")]
    pub copied_ack_ms: u64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            copied_ack_ms: default_copied_ack_ms(),
        }
    }
}

fn default_copied_ack_ms() -> u64 {
    2000
}

/// Markdown export settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Directory exported reports are written to. Empty = current directory.
    #[serde(default)]
    pub directory: PathBuf,
}

impl ExportSettings {
    pub fn resolved_directory(&self) -> PathBuf {
        if self.directory.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            self.directory.clone()
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Browser used to open source links (empty = system default)
    #[serde(default)]
    pub browser: String,

    /// Command that receives the report on stdin for copying
    /// (empty = OSC 52 terminal escape sequence)
    #[serde(default)]
    pub clipboard_command: String,
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default, works in all
/// terminals) or Nerd Font glyphs (requires a Nerd Font).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,
}

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashboardSettings {
    /// Analysis types offered on the dashboard, in display order
    #[serde(default = "default_analysis_types")]
    pub analysis_types: Vec<AnalysisType>,
}

impl DashboardSettings {
    /// Configured types with duplicates removed. An empty list falls back to
    /// every type so the dashboard is never blank.
    pub fn effective_types(&self) -> Vec<AnalysisType> {
        let mut types: Vec<AnalysisType> = Vec::with_capacity(self.analysis_types.len());
        for t in &self.analysis_types {
            if !types.contains(t) {
                types.push(*t);
            }
        }
        if types.is_empty() {
            tracing::warn!("dashboard.analysis_types is empty, showing every analysis type");
            return default_analysis_types();
        }
        types
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            analysis_types: default_analysis_types(),
        }
    }
}

fn default_analysis_types() -> Vec<AnalysisType> {
    AnalysisType::ALL.to_vec()
}
