//! # mintel-core - Core Domain Types
//!
//! Foundation crate for Market Intel. Provides domain types, the analysis
//! catalog, error handling, logging setup and export naming.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnalysisType`] - Kind of research requested from the backend
//! - [`Report`] - A generated markdown report with its cited sources
//!
//! ### Catalog (`catalog`)
//! - [`AnalysisProfile`] - Per-type titles, placeholders, labels and loading messages
//! - [`Accent`], [`IconSlot`] - Presentation hints resolved by the TUI theme
//! - [`EXAMPLE_SUBJECTS`] - Quick-fill values offered by the input form
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Export (`export`)
//! - [`slugify()`] - Lowercase a subject and collapse whitespace runs to `-`
//! - [`report_file_name()`] - `<slug>-<analysis_type>-report.md`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mintel_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Market Intel crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{Accent, AnalysisProfile, IconSlot, EXAMPLE_SUBJECTS};
pub use error::{Error, Result, ResultExt};
pub use export::{report_file_name, slugify};
pub use types::{AnalysisType, Report};
