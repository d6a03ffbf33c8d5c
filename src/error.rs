//! Error types for the Recruiter Ranking Engine.
//!
//! The scoring and ranking functions are total and never fail. Errors only
//! arise at the boundary: loading configuration, and validating recruiter
//! aggregates or requisition rows before they reach the calculator.

use thiserror::Error;

/// The main error type for the Recruiter Ranking Engine.
///
/// # Example
///
/// ```
/// use ranking_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A recruiter aggregate carried a value outside its documented domain.
    #[error("Invalid aggregate for recruiter '{identifier}', field '{field}': {message}")]
    InvalidAggregate {
        /// The identifier of the offending recruiter.
        identifier: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A requisition row could not be aggregated.
    #[error("Invalid requisition '{requisition_id}': {message}")]
    InvalidRequisition {
        /// The ID of the invalid requisition.
        requisition_id: String,
        /// A description of what made the requisition invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/statuses.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/statuses.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_aggregate_displays_identifier_field_and_message() {
        let error = EngineError::InvalidAggregate {
            identifier: "rec_001".to_string(),
            field: "closed_count".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid aggregate for recruiter 'rec_001', field 'closed_count': must not be negative"
        );
    }

    #[test]
    fn test_invalid_requisition_displays_id_and_message() {
        let error = EngineError::InvalidRequisition {
            requisition_id: "req_042".to_string(),
            message: "close date precedes request date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid requisition 'req_042': close date precedes request date"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
