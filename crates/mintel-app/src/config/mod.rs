//! Configuration file parsing for Market Intel
//!
//! Supports `<config_dir>/market-intel/config.toml` (or a path given on the
//! command line). Every section is optional; missing keys fall back to the
//! defaults in [`types`].

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CONFIG_FILENAME};
pub use types::*;
