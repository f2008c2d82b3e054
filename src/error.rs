// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the dispatch hub.

use std::fmt;

use reqwest::StatusCode;

/// Result type alias for hub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level hub error types.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),
    /// Orchestrator error
    Orchestrator(OrchestratorError),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Orchestrator(e) => write!(f, "Orchestrator error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Orchestrator(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<OrchestratorError> for Error {
    fn from(e: OrchestratorError) -> Self {
        Error::Orchestrator(e)
    }
}

impl From<DispatchError> for Error {
    fn from(e: DispatchError) -> Self {
        Error::Orchestrator(OrchestratorError::Dispatch(e))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Errors raised by outbound dispatch calls.
#[derive(Debug, Clone)]
pub enum DispatchError {
    /// Network failure or timeout reaching the provider
    ProviderUnreachable(String),
    /// Provider rejected the credential (401/403-class)
    AuthRejected(String),
    /// Malformed or unexpected provider response
    BadResponse(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::ProviderUnreachable(msg) => {
                write!(f, "Provider unreachable: {}", msg)
            }
            DispatchError::AuthRejected(msg) => write!(f, "Authentication rejected: {}", msg),
            DispatchError::BadResponse(msg) => write!(f, "Bad provider response: {}", msg),
        }
    }
}

impl std::error::Error for DispatchError {}

/// Errors crossing the orchestrator boundary.
///
/// Every error the orchestrator returns is one of these typed values, so the
/// excluded HTTP-routing collaborator can translate it to a response status
/// via [`OrchestratorError::status_code`].
#[derive(Debug, Clone)]
pub enum OrchestratorError {
    /// Name did not resolve to a registered provider
    UnknownProvider(String),
    /// Resolved provider has no credential configured
    MissingCredential(String),
    /// Dispatch call failed
    Dispatch(DispatchError),
}

impl OrchestratorError {
    /// HTTP status code this error translates to at the hub's boundary.
    ///
    /// Local resolution failures are client errors; remote failures surface
    /// as gateway errors, except auth rejection which stays 4xx-class.
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrchestratorError::UnknownProvider(_) => StatusCode::NOT_FOUND,
            OrchestratorError::MissingCredential(_) => StatusCode::BAD_REQUEST,
            OrchestratorError::Dispatch(DispatchError::AuthRejected(_)) => {
                StatusCode::UNAUTHORIZED
            }
            OrchestratorError::Dispatch(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrchestratorError::UnknownProvider(name) => write!(f, "Unknown provider: {}", name),
            OrchestratorError::MissingCredential(name) => {
                write!(f, "No credential configured for provider: {}", name)
            }
            OrchestratorError::Dispatch(e) => write!(f, "Dispatch failed: {}", e),
        }
    }
}

impl std::error::Error for OrchestratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OrchestratorError::Dispatch(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DispatchError> for OrchestratorError {
    fn from(e: DispatchError) -> Self {
        OrchestratorError::Dispatch(e)
    }
}
