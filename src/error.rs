use thiserror::Error;

/// Result alias for orgflow operations.
pub type Result<T> = std::result::Result<T, OrgflowError>;

#[derive(Debug, Error)]
pub enum OrgflowError {
    /// The requested status change is not in the transition table.
    /// Both values are kept exactly as the caller supplied them.
    #[error("Invalid transition: {from} → {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Unknown organization status: {0:?}")]
    UnknownStatus(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl OrgflowError {
    pub fn invalid_transition(from: impl Into<String>, to: impl Into<String>) -> Self {
        OrgflowError::InvalidTransition {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Stable code for logs and API payloads.
    pub fn code(&self) -> &'static str {
        match self {
            OrgflowError::InvalidTransition { .. } => "INVALID_TRANSITION",
            OrgflowError::UnknownStatus(_) => "UNKNOWN_STATUS",
            OrgflowError::Config(_) => "CONFIG_ERROR",
            OrgflowError::Io(_) => "IO_ERROR",
            OrgflowError::Json(_) => "JSON_ERROR",
            OrgflowError::Toml(_) => "TOML_ERROR",
        }
    }

    /// True when the error was caused by caller input (map to 400/409),
    /// false for local environment problems.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            OrgflowError::InvalidTransition { .. } | OrgflowError::UnknownStatus(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_display_names_both_ends() {
        let err = OrgflowError::invalid_transition("c_pending", "finalized");
        assert_eq!(err.to_string(), "Invalid transition: c_pending → finalized");
    }

    #[test]
    fn codes_and_client_classification() {
        let err = OrgflowError::invalid_transition("a", "b");
        assert_eq!(err.code(), "INVALID_TRANSITION");
        assert!(err.is_client_error());

        let err = OrgflowError::UnknownStatus("bogus".into());
        assert_eq!(err.code(), "UNKNOWN_STATUS");
        assert_eq!(err.to_string(), "Unknown organization status: \"bogus\"");
        assert!(err.is_client_error());

        let err = OrgflowError::Config("bad output format".into());
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(!err.is_client_error());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: OrgflowError = io.into();
        assert_eq!(err.code(), "IO_ERROR");
        assert!(err.to_string().contains("gone"));
    }
}
