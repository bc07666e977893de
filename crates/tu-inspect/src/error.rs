//! Typed error handling for tu-inspect.
//!
//! Everything here is a boundary failure: once a traversal has started over
//! a parsed unit it runs to completion, so no error is ever raised mid-report.

use thiserror::Error;

/// Main error type for tu-inspect operations.
#[derive(Error, Debug)]
pub enum InspectError {
    /// The compiler front-end could not be launched at all.
    #[error("failed to launch the compiler front-end: {0}")]
    Spawn(#[source] std::io::Error),

    /// The front-end ran but reported diagnostics or produced unusable
    /// output. The core never traverses a unit in this state.
    #[error("front-end error: {message}")]
    Frontend { message: String },

    /// The AST dump could not be deserialized.
    #[error("malformed AST dump from the front-end: {0}")]
    AstJson(#[from] serde_json::Error),

    /// Macro extraction was requested but the unit was parsed without the
    /// detailed preprocessing record. This is a configuration defect, not a
    /// data-dependent runtime error, and halts before any output.
    #[error("detailed preprocessing was not enabled for this unit; macro extraction requires it")]
    PreprocessingDisabled,
}

impl InspectError {
    /// Create a front-end failure with a message.
    pub fn frontend(message: impl Into<String>) -> Self {
        Self::Frontend {
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InspectError>;
