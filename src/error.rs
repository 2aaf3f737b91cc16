//! Unified error handling for the sazanami crate
//!
//! This module provides a unified error type that consolidates all
//! domain-specific errors into a single `Error` enum, while maintaining the
//! ability to use domain-specific errors when needed.
//!
//! # Architecture
//!
//! - [`SazanamiErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! Propagation policy: only load errors halt a batch. Row-level and model
//! failures are recoverable and degrade to defaults at the site where they
//! occur; they surface here only when a caller wants to inspect them.

use thiserror::Error;

/// Common trait for all sazanami error types
///
/// This trait provides a unified interface for error handling across
/// all modules, enabling consistent error processing strategies.
pub trait SazanamiErrorTrait: std::error::Error {
    /// Check if this error is recoverable (the batch can still proceed)
    fn is_recoverable(&self) -> bool;

    /// Get a description suitable for user-facing messages
    fn user_message(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Batch load errors (missing text column, malformed input)
    Load,
    /// Row-level parse failures (bad timestamp)
    Row,
    /// Sentiment/segmentation model failures
    Model,
    /// Configuration and validation errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Get a short description for the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Load => "load error",
            Self::Row => "row error",
            Self::Model => "model error",
            Self::Config => "configuration error",
            Self::Other => "other error",
        }
    }
}

/// Errors that can occur while loading a tabular batch
#[derive(Error, Debug)]
pub enum LoadError {
    /// None of the accepted text column aliases were present
    #[error("No text column found; accepted columns: {}", .tried.join(", "))]
    MissingTextColumn {
        /// The aliases that were checked, in priority order
        tried: Vec<String>,
    },

    /// The header row was empty
    #[error("Empty header row")]
    EmptyHeader,

    /// A timestamp value did not match any accepted shape
    ///
    /// Never fatal: the loader maps this to a missing timestamp and keeps
    /// the row. It exists so callers can count degraded rows.
    #[error("Unparseable timestamp: {0}")]
    BadTimestamp(String),
}

/// Errors raised by sentiment/segmentation model collaborators
#[derive(Error, Debug)]
pub enum ModelError {
    /// The model cannot handle the given input
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// The model failed internally
    #[error("Model failure: {0}")]
    Internal(String),
}

/// Unified error type for the sazanami crate
///
/// This enum wraps all domain-specific errors, providing a single error type
/// that can be used across module boundaries while preserving the detailed
/// error information.
#[derive(Error, Debug)]
pub enum Error {
    /// Batch loading errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Model collaborator errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SazanamiErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            // A missing text column aborts the load; a bad timestamp does not
            Self::Load(LoadError::BadTimestamp(_)) => true,
            Self::Load(_) => false,
            // Model failures degrade to a neutral score, never abort
            Self::Model(_) => true,
            Self::Json(_) => false,
            Self::Config(_) => false,
            Self::Other { .. } => false,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Load(e) => e.to_string(),
            Self::Model(e) => format!("analysis model failed: {e}"),
            Self::Json(e) => format!("serialization failed: {e}"),
            Self::Config(msg) => format!("invalid configuration: {msg}"),
            Self::Other { context, .. } => context.clone(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Load(LoadError::BadTimestamp(_)) => ErrorCategory::Row,
            Self::Load(_) => ErrorCategory::Load,
            Self::Model(_) => ErrorCategory::Model,
            Self::Json(_) => ErrorCategory::Other,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
