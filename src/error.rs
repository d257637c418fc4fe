//! Error types
//!
//! The simulation itself has no failure modes; only loading configuration can fail.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config, reason='{0}'")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config, reason='{0}'")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
