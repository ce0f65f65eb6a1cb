//! # mintel-tui - Terminal UI for Market Intel
//!
//! Presentation layer built on ratatui. Owns the terminal, converts key
//! events into [`mintel_app::Message`]s and renders [`mintel_app::AppState`]
//! each frame.
//!
//! ## Public API
//!
//! - [`run()`] - Initialize the terminal and drive the event loop
//! - [`render::view()`] - View function (TEA), usable with any ratatui backend
//! - [`widgets::markdown::render_markdown()`] - Markdown to styled lines

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
mod signals;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
