//! Centralized theme for the TUI.
//!
//! This module provides:
//! - `palette`: raw color constants and accent resolution
//! - `styles`: semantic style builder functions
//! - `icons`: Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
