//! Settings loading and default config file creation

use std::path::{Path, PathBuf};

use mintel_core::prelude::*;

use super::types::Settings;

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "market-intel";
pub const CONFIG_FILENAME: &str = "config.toml";

/// `<config_dir>/market-intel/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file yields defaults. An unreadable or invalid file is logged
/// and also yields defaults, so a broken config never prevents startup.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

const DEFAULT_CONFIG: &str = r#"# Market Intel Configuration

[server]
base_url = "http://localhost:8000"
timeout_secs = 0        # 0 = no client-side timeout

[loading]
message_interval_ms = 3000
dots_interval_ms = 500

[report]
copied_ack_ms = 2000

[export]
directory = ""          # Empty = current directory

[behavior]
browser = ""            # Empty = system default
clipboard_command = ""  # Empty = OSC 52 terminal clipboard, e.g. "wl-copy" or "pbcopy"

[ui]
icons = "unicode"       # "unicode" or "nerd_fonts"

[dashboard]
analysis_types = [
    "competition",
    "due_diligence",
    "market_trends",
    "bnpl_merchant_risk",
    "payment_processor_comparison",
]
"#;

/// Write the default config file to `config_path`.
///
/// Returns `Ok(false)` without touching anything when the file already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config file already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}
