//! Navigation error types.

use thiserror::Error;

use super::HostError;

/// Reasons a typed destination could not be followed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum NavigationError {
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("invalid id segment {segment:?} in link")]
    InvalidSnowflake { segment: String },

    #[error(transparent)]
    Host(#[from] HostError),
}

impl NavigationError {
    /// Creates invalid URL error.
    #[must_use]
    pub fn invalid_url(input: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates invalid snowflake error.
    #[must_use]
    pub fn invalid_snowflake(segment: impl Into<String>) -> Self {
        Self::InvalidSnowflake {
            segment: segment.into(),
        }
    }

    /// Returns whether the error comes from what the user typed rather than the host.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. } | Self::InvalidSnowflake { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_classification() {
        assert!(NavigationError::invalid_url("nope", "relative URL without a base").is_user_error());
        assert!(NavigationError::invalid_snowflake("abc").is_user_error());
        assert!(!NavigationError::from(HostError::dispatch("gone")).is_user_error());
    }

    #[test]
    fn test_display_includes_input() {
        let err = NavigationError::invalid_url("not a url", "relative URL without a base");
        assert_eq!(
            err.to_string(),
            "invalid URL \"not a url\": relative URL without a base"
        );
    }
}
