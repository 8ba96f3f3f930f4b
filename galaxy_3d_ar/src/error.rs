//! Error types for the Galaxy3D AR core
//!
//! This module defines the error types used throughout the crate,
//! including platform requests, configuration and scene management.

use std::fmt;

/// Result type for Galaxy3D AR operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D AR errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (OpenXR, WebXR, renderer, etc.)
    BackendError(String),

    /// Initialization failed (session, renderer, subsystems)
    InitializationFailed(String),

    /// Invalid resource (reference space, hit-test source, scene node, etc.)
    InvalidResource(String),

    /// Configuration rejected by validation
    InvalidConfig(String),

    /// The platform does not offer a required capability
    Unsupported(String),

    /// An asynchronous platform request was rejected
    RequestRejected(String),

    /// The session ended before the request completed
    SessionEnded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Unsupported(msg) => write!(f, "Unsupported: {}", msg),
            Error::RequestRejected(msg) => write!(f, "Request rejected: {}", msg),
            Error::SessionEnded => write!(f, "Session ended"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
