//! Error types for the savings-group engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine surfaces. Data-integrity gaps (a payment log
//! with no matching cycle, a rotation position nobody holds) are not errors;
//! the builders skip or default those rows instead.

use thiserror::Error;

/// The main error type for the savings-group engine.
///
/// # Example
///
/// ```
/// use susu_engine::error::EngineError;
///
/// let error = EngineError::GroupNotFound {
///     group_id: "grp_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Group not found: grp_001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration or dataset file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or dataset file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The requested group does not exist.
    #[error("Group not found: {group_id}")]
    GroupNotFound {
        /// The group that was requested.
        group_id: String,
    },

    /// The user has no membership in the requested group.
    #[error("Member not found for user '{user_id}' in group '{group_id}'")]
    MemberNotFound {
        /// The group that was searched.
        group_id: String,
        /// The user whose membership was requested.
        user_id: String,
    },

    /// The backing store failed to answer a query.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// A CSV export could not be produced.
    #[error("Export error: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true for the not-found family of errors.
    ///
    /// These are fatal for the current view and must not be retried.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EngineError::GroupNotFound { .. } | EngineError::MemberNotFound { .. }
        )
    }
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::Export {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/groups.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/groups.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/data/cycles.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/data/cycles.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_member_not_found_displays_group_and_user() {
        let error = EngineError::MemberNotFound {
            group_id: "grp_001".to_string(),
            user_id: "usr_404".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Member not found for user 'usr_404' in group 'grp_001'"
        );
    }

    #[test]
    fn test_store_error_displays_message() {
        let error = EngineError::Store {
            message: "connection reset".to_string(),
        };
        assert_eq!(error.to_string(), "Store error: connection reset");
    }

    #[test]
    fn test_not_found_family() {
        assert!(
            EngineError::GroupNotFound {
                group_id: "g".to_string()
            }
            .is_not_found()
        );
        assert!(
            EngineError::MemberNotFound {
                group_id: "g".to_string(),
                user_id: "u".to_string()
            }
            .is_not_found()
        );
        assert!(
            !EngineError::Store {
                message: "timeout".to_string()
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_group_not_found() -> EngineResult<()> {
            Err(EngineError::GroupNotFound {
                group_id: "grp_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_group_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
