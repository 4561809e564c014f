// src/errors.rs
// DOCUMENTATION: Custom error types for the harvest run
// PURPOSE: Centralized error handling; every variant is fatal for the run

use thiserror::Error;

/// Placeholder credential shipped in sample key files
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

/// Application-specific error types
/// DOCUMENTATION: None of these are recovered automatically, they are
/// surfaced to the operator by the binaries
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Places API returned status {status}: {message}")]
    ApiStatus { status: String, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid region {region}: {reason}")]
    InvalidRegion { region: String, reason: String },

    #[error("Input error: {0}")]
    Input(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for PlacesError {
    fn from(e: csv::Error) -> Self {
        PlacesError::Export(e.to_string())
    }
}

/// Check a credential before any client is built
/// DOCUMENTATION: Rejects empty keys and the placeholder value
pub fn check_credential(api_key: &str) -> Result<(), PlacesError> {
    let key = api_key.trim();
    if key.is_empty() {
        return Err(PlacesError::Credential(
            "the API key is missing".to_string(),
        ));
    }
    if key == PLACEHOLDER_API_KEY {
        return Err(PlacesError::Credential(
            "the API key is still the placeholder value".to_string(),
        ));
    }
    Ok(())
}
