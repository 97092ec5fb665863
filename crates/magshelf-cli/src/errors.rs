//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use magshelf_core::CatalogError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (catalog database, record)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Integrity check reported a problem
    IntegrityFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::IntegrityFailed(message) => write!(f, "Integrity check failed: {}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::IntegrityFailed(_) => exit_codes::INTEGRITY_FAILED,
        }
    }
}

/// Exit code for any error surfaced by a handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<CatalogError>() {
        Some(CatalogError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(CatalogError::InvalidInput(_)) | Some(CatalogError::Format(_)) => {
            exit_codes::INVALID_INPUT
        }
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Record 4 not found", "Hint: Run `magshelf list`.");
        assert_eq!(err.to_string(), "Record 4 not found\nHint: Run `magshelf list`.");
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_exit_code_for_core_errors() {
        let not_found: anyhow::Error = CatalogError::NotFound(9).into();
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let format: anyhow::Error = CatalogError::Format("bad".into()).into();
        assert_eq!(exit_code_for(&format), exit_codes::INVALID_INPUT);

        let storage: anyhow::Error = CatalogError::Storage("disk".into()).into();
        assert_eq!(exit_code_for(&storage), exit_codes::FAILURE);

        let cli: anyhow::Error = CliError::invalid_input("nope").into();
        assert_eq!(exit_code_for(&cli), exit_codes::INVALID_INPUT);
    }
}
