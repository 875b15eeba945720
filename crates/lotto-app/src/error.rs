//! Lotto Picker — application error types.

use lotto_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the desktop application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The lottery preset failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] DomainError),

    /// The window or graphics backend failed.
    #[error("gui error: {0}")]
    Gui(#[from] eframe::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_converts_to_config() {
        let err: AppError = DomainError::InvalidConfiguration("count must be at least 1".into()).into();

        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            err.to_string(),
            "configuration error: invalid configuration: count must be at least 1"
        );
    }
}
