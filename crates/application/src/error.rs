//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (network, HTTP status, transport)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// No positioning capability is available on this host
    #[error("Geolocation is not supported")]
    GeolocationUnsupported,

    /// The positioning source failed
    #[error("Geolocation error: {0}")]
    Geolocation(String),

    /// Operation not valid in the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_unsupported_has_exact_message() {
        assert_eq!(
            ApplicationError::GeolocationUnsupported.to_string(),
            "Geolocation is not supported"
        );
    }

    #[test]
    fn geolocation_failure_carries_reason() {
        let err = ApplicationError::Geolocation("permission denied".to_string());
        assert_eq!(err.to_string(), "Geolocation error: permission denied");
    }

    #[test]
    fn domain_error_converts_transparently() {
        let err: ApplicationError = DomainError::InvalidCoordinates.into();
        assert!(err.to_string().contains("Invalid coordinates"));
    }
}
