//! Error handling for blockdeps
//!
//! This module provides the typed error enum raised by the generation pipeline
//! and the user-facing error reporting used by the CLI. The error system follows
//! two principles:
//! 1. **Strongly-typed errors** for failures callers may want to match on
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`BlockdepsError`] - Enumerated error types for pipeline failures
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//!
//! Library internals mostly return [`anyhow::Result`] and attach context with
//! `.with_context(..)`. [`user_friendly_error`] walks an [`anyhow::Error`]
//! looking for a [`BlockdepsError`] (or a known foreign error) and produces an
//! [`ErrorContext`] suitable for the terminal.
//!
//! # Examples
//!
//! ```rust,no_run
//! use blockdeps_cli::core::{BlockdepsError, ErrorContext, user_friendly_error};
//!
//! let error = BlockdepsError::NoRoots;
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

use crate::core::file_error::FileOperationError;

/// The main error type for blockdeps operations
///
/// Every variant owns plain strings so that the error can be cloned into an
/// [`ErrorContext`] after being downcast out of an [`anyhow::Error`].
#[derive(Error, Debug, Clone)]
pub enum BlockdepsError {
    /// A scan root or one of its nested directories could not be read
    ///
    /// Scanning is all-or-nothing: a partially scanned tree would make the
    /// change classifier retract imports for components it simply did not see.
    #[error("Failed to scan component directory: {path}")]
    ScanFailed {
        /// Directory that could not be read
        path: String,
        /// Underlying reason reported by the walker
        reason: String,
    },

    /// The template parser rejected a component template
    #[error("Failed to parse template {path}")]
    TemplateParseFailed {
        /// Template file that failed to parse
        path: String,
        /// Reason reported by the parser
        reason: String,
    },

    /// The pipeline kept requesting repeat passes past the iteration guard
    ///
    /// Every repeat is triggered by a file being created or deleted, so a
    /// run that does not settle means two components keep undoing each
    /// other's files.
    #[error("Import generation did not reach a fixed point after {iterations} passes")]
    FixedPointNotReached {
        /// Number of passes executed before giving up
        iterations: usize,
    },

    /// File system error
    #[error("File system error: {operation}")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// Path where the file system error occurred
        path: String,
        /// Underlying error message
        reason: String,
    },

    /// No component roots were configured
    #[error("No component roots to scan")]
    NoRoots,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Path to the configuration file that failed to parse
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Other error
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl From<FileOperationError> for BlockdepsError {
    fn from(error: FileOperationError) -> Self {
        Self::FileSystemError {
            operation: error.operation.to_string(),
            path: error.path.display().to_string(),
            reason: error.source.to_string(),
        }
    }
}

/// Error wrapper carrying a suggestion and details for terminal display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: BlockdepsError,
    /// Actionable suggestion for the user
    pub suggestion: Option<String>,
    /// Additional explanation of the failure
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new context without suggestion or details.
    #[must_use]
    pub const fn new(error: BlockdepsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Attach a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`].
///
/// The whole error chain is searched, so a [`BlockdepsError`] wrapped in
/// `.with_context(..)` layers is still recognized.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(blockdeps_error) = cause.downcast_ref::<BlockdepsError>() {
            return create_error_context(blockdeps_error.clone());
        }

        if let Some(file_error) = cause.downcast_ref::<FileOperationError>() {
            return ErrorContext::new(BlockdepsError::FileSystemError {
                operation: file_error.operation.to_string(),
                path: file_error.path.display().to_string(),
                reason: file_error.source.to_string(),
            })
            .with_details(file_error.user_message());
        }

        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            if io_error.kind() == std::io::ErrorKind::PermissionDenied {
                return ErrorContext::new(BlockdepsError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                    reason: io_error.to_string(),
                })
                .with_suggestion("Check file ownership and permissions of the component tree")
                .with_details(chain_message(&error));
            }
        }

        if let Some(toml_error) = cause.downcast_ref::<toml::de::Error>() {
            return ErrorContext::new(BlockdepsError::ConfigParseError {
                file: crate::constants::CONFIG_FILE_NAME.to_string(),
                reason: toml_error.to_string(),
            })
            .with_suggestion("Check the TOML syntax in your blockdeps.toml file")
            .with_details(toml_error.to_string());
        }
    }

    ErrorContext::new(BlockdepsError::Other {
        message: chain_message(&error),
    })
}

/// Render an error and its causes as a single message.
fn chain_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: BlockdepsError) -> ErrorContext {
    match &error {
        BlockdepsError::ScanFailed { reason, .. } => {
            let reason = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check that every configured root exists and is readable")
                .with_details(reason)
        }
        BlockdepsError::TemplateParseFailed { reason, .. } => {
            let reason = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Fix the template syntax and run the generator again")
                .with_details(reason)
        }
        BlockdepsError::FixedPointNotReached { .. } => ErrorContext::new(error)
            .with_suggestion("Look for components whose generated files are created and deleted on every pass")
            .with_details("Each repeat pass is caused by a synthesized or deleted file; the iteration guard stopped the run"),
        BlockdepsError::FileSystemError { reason, .. } => {
            let reason = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check file permissions and available disk space")
                .with_details(reason)
        }
        BlockdepsError::NoRoots => ErrorContext::new(error)
            .with_suggestion("Pass --root <dir> or list roots in blockdeps.toml")
            .with_details("blockdeps needs at least one directory containing component folders"),
        BlockdepsError::ConfigError { .. } => ErrorContext::new(error)
            .with_suggestion("Check the values in blockdeps.toml"),
        BlockdepsError::ConfigParseError { reason, .. } => {
            let reason = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check the TOML syntax in your blockdeps.toml file")
                .with_details(reason)
        }
        BlockdepsError::Other { .. } => ErrorContext::new(error),
    }
}
