//! Error types
//!
//! Defines domain-specific error types for the provider boundary and the
//! wallet session. Every error is recovered inside the session and shown
//! to the user as a status message; none cross the session boundary.

use std::fmt;

/// Errors raised at the wallet provider boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// No injected wallet provider was detected
    Unavailable,
    /// The user denied a permission prompt (e.g. account access)
    UserRejected(String),
    /// The provider call threw or returned an error
    RequestFailed(String),
    /// The provider answered with a payload the session cannot decode
    MalformedResponse(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable => write!(f, "No Ethereum wallet detected"),
            ProviderError::UserRejected(r) => write!(f, "User rejected the request: {}", r),
            ProviderError::RequestFailed(r) => write!(f, "Provider request failed: {}", r),
            ProviderError::MalformedResponse(r) => {
                write!(f, "Malformed provider response: {}", r)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Wallet session errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Provider(ProviderError),
    /// The query address is not a valid Ethereum address
    InvalidAddress(String),
    /// A balance fetch was requested with no query address set
    EmptyQueryAddress,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Provider(e) => write!(f, "{}", e),
            SessionError::InvalidAddress(a) => write!(f, "Invalid Ethereum address: {}", a),
            SessionError::EmptyQueryAddress => write!(f, "Enter valid address"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<ProviderError> for SessionError {
    fn from(error: ProviderError) -> Self {
        SessionError::Provider(error)
    }
}
