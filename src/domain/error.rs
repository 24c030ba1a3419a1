use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Already exists: {message}")]
    AlreadyExists { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid state: {message}")]
    InvalidState { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// The message without the kind prefix, as shown to console users
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::AlreadyExists { message }
            | Self::NotFound { message }
            | Self::InvalidState { message } => message,
        }
    }

    /// Stable snake_case tag for machine-readable output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::AlreadyExists { .. } => "already_exists",
            Self::NotFound { .. } => "not_found",
            Self::InvalidState { .. } => "invalid_state",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Driver Ivan01 could not be found.");
        assert_eq!(
            error.to_string(),
            "Not found: Driver Ivan01 could not be found."
        );
        assert_eq!(error.message(), "Driver Ivan01 could not be found.");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Car cannot be null.");
        assert_eq!(error.to_string(), "Validation error: Car cannot be null.");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(DomainError::validation("x").kind(), "validation");
        assert_eq!(DomainError::already_exists("x").kind(), "already_exists");
        assert_eq!(DomainError::not_found("x").kind(), "not_found");
        assert_eq!(DomainError::invalid_state("x").kind(), "invalid_state");
    }
}
