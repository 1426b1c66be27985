//! Error type shared by the configuration and rule-table builders.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = EnhanceError> = std::result::Result<T, E>;

/// Failures raised while preparing enhancers. Runtime UI failures (invalid
/// fields, broken images) are never errors; they surface as UI state.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The embedded JSON configuration could not be parsed.
    #[error("invalid enhance config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// The configuration parsed but a value is out of range.
    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting {
        /// Offending configuration key.
        key: &'static str,
        /// Human readable reason.
        reason: &'static str,
    },

    /// A validation rule pattern failed to compile.
    #[error("invalid validation rule for `{field}`")]
    InvalidRule {
        /// Field name the rule belongs to.
        field: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}
