//! Host collaborator error types.

use thiserror::Error;

/// Failures reported by the host client's stores and dispatchers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum HostError {
    #[error("host lookup failed: {message}")]
    LookupFailed { message: String },

    #[error("host could not dispatch navigation: {message}")]
    DispatchFailed { message: String },

    #[error("failed to open {url} externally: {message}")]
    OpenFailed { url: String, message: String },
}

impl HostError {
    /// Creates lookup failed error.
    #[must_use]
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::LookupFailed {
            message: message.into(),
        }
    }

    /// Creates dispatch failed error.
    #[must_use]
    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::DispatchFailed {
            message: message.into(),
        }
    }

    /// Creates open failed error.
    #[must_use]
    pub fn open(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OpenFailed {
            url: url.into(),
            message: message.into(),
        }
    }
}
