//! Continuity planner error types
//!
//! Missing reference data never produces an error: unknown countries,
//! industries, sub-regions and locales degrade to empty contributions.
//! The variants below cover caller defects, bad configuration and
//! failures reported by a catalog back end.

use thiserror::Error;

/// Continuity planner error types
#[derive(Debug, Error)]
pub enum ContinuityError {
    /// Likelihood code not on the supported scale
    #[error("Invalid likelihood: {value}")]
    InvalidLikelihood {
        /// Value as supplied
        value: String,
    },

    /// Severity code not on the supported scale
    #[error("Invalid severity: {value}")]
    InvalidSeverity {
        /// Value as supplied
        value: String,
    },

    /// Risk level code not on the catalog scale
    #[error("Invalid risk level: {value}")]
    InvalidRiskLevel {
        /// Value as supplied
        value: String,
    },

    /// Risk matrix supplied by a caller has the wrong shape
    #[error("Malformed risk input: {details}")]
    MalformedRiskInput {
        /// What was wrong with the input
        details: String,
    },

    /// Catalog back end could not be queried
    #[error("Catalog {catalog} unavailable: {reason}")]
    CatalogUnavailable {
        /// Catalog name
        catalog: String,
        /// Back end failure
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// What is wrong
        message: String,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    IoError {
        /// Underlying error
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    JsonError {
        /// Underlying error
        #[from]
        source: serde_json::Error,
    },

    /// TOML configuration parse error
    #[error("TOML error: {source}")]
    TomlError {
        /// Underlying error
        #[from]
        source: toml::de::Error,
    },
}

/// Continuity planner result type
pub type ContinuityResult<T> = Result<T, ContinuityError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_invalid_likelihood_error() {
        let error = ContinuityError::InvalidLikelihood {
            value: "sometimes".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid likelihood: sometimes");
    }

    #[test]
    fn test_invalid_severity_error() {
        let error = ContinuityError::InvalidSeverity {
            value: "apocalyptic".to_string(),
        };
        assert!(error.to_string().contains("Invalid severity: apocalyptic"));
    }

    #[test]
    fn test_catalog_unavailable_error() {
        let error = ContinuityError::CatalogUnavailable {
            catalog: "hazards".to_string(),
            reason: "connection refused".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("Catalog hazards unavailable"));
        assert!(error_str.contains("connection refused"));
    }

    #[test]
    fn test_malformed_risk_input_error() {
        let error = ContinuityError::MalformedRiskInput {
            details: "expected an array".to_string(),
        };
        assert!(error.to_string().contains("Malformed risk input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "config missing");
        let error = ContinuityError::from(io_error);

        match error {
            ContinuityError::IoError { .. } => {
                assert!(error.to_string().contains("I/O error"));
            }
            _ => panic!("Expected IoError variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = ContinuityError::from(json_error);
        assert!(matches!(error, ContinuityError::JsonError { .. }));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let error = ContinuityError::from(toml_error);
        assert!(error.to_string().starts_with("TOML error"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let error = ContinuityError::IoError {
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());
    }

    #[test]
    fn test_send_sync_traits() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ContinuityError>();
        assert_sync::<ContinuityError>();
    }
}
