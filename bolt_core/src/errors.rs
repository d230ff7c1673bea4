//! # Error Types
//!
//! Structured error types for bolt_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Selection failures (`NoSizeFitsLength`, `InsufficientDepth`) are
//! informational outcomes of a valid query, not fatal conditions; input
//! errors (`InvalidInput`, `UnknownTemperatureClass`) indicate the caller
//! handed the engine something it should have validated first.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::errors::{SelectError, SelectResult};
//!
//! fn validate_depth(depth_mm: f64) -> SelectResult<()> {
//!     if depth_mm < 0.0 {
//!         return Err(SelectError::invalid_input(
//!             "depth_mm",
//!             depth_mm.to_string(),
//!             "Depth must be non-negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bolt_core operations
pub type SelectResult<T> = Result<T, SelectError>;

/// Structured error type for fastener selection.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SelectError {
    /// An input value is invalid (negative thickness, depth, allowance, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Temperature class label not present in the derating table
    #[error("Unknown temperature class: {label}")]
    UnknownTemperatureClass { label: String },

    /// Through-hole mode: no catalog size's derated length meets the
    /// required threshold
    #[error("No catalog size meets the required length of {required_mm} mm")]
    NoSizeFitsLength { required_mm: f64 },

    /// Blind-hole mode: available depth is below every catalog size's
    /// minimum thread engagement
    #[error("Available depth {depth_available_mm} mm is below the smallest engagement of {min_engagement_mm} mm")]
    InsufficientDepth {
        depth_available_mm: f64,
        min_engagement_mm: f64,
    },
}

impl SelectError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SelectError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownTemperatureClass error
    pub fn unknown_temperature_class(label: impl Into<String>) -> Self {
        SelectError::UnknownTemperatureClass {
            label: label.into(),
        }
    }

    /// Check if this is a selection failure (a valid query with no
    /// satisfying catalog entry) rather than a caller input error
    pub fn is_selection_failure(&self) -> bool {
        matches!(
            self,
            SelectError::NoSizeFitsLength { .. } | SelectError::InsufficientDepth { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SelectError::InvalidInput { .. } => "INVALID_INPUT",
            SelectError::UnknownTemperatureClass { .. } => "UNKNOWN_TEMPERATURE_CLASS",
            SelectError::NoSizeFitsLength { .. } => "NO_SIZE_FITS_LENGTH",
            SelectError::InsufficientDepth { .. } => "INSUFFICIENT_DEPTH",
        }
    }
}
