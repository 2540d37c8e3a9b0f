use serde::Deserialize;
use thiserror::Error;

// Helper structs to parse the JSON error response from ORS
#[derive(Deserialize, Debug)]
pub struct OrsErrorDetail {
    pub code: u32,
    pub message: String,
}
#[derive(Deserialize, Debug)]
pub struct OrsErrorPayload {
    pub error: OrsErrorDetail,
}

/// Failures while obtaining the model-authored route. Any of these aborts
/// the whole planning call; the caller never receives a partial route.
#[derive(Error, Debug)]
pub enum RideError {
    #[error("Chat response envelope did not contain the expected content")]
    InvalidResponse,

    #[error("Route payload could not be decoded: {0}")]
    DecodeFailure(serde_json::Error),

    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Failures from the directions / points-of-interest provider. A failed
/// segment degrades to a gap in the merged path and a failed interest
/// lookup degrades to an empty result; neither aborts planning.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API Error (Code {code}): {message}")]
    Api { code: u32, message: String },

    // A fallback for when we get an error that isn't in the expected JSON format
    #[error("Unstructured API Error: {0}")]
    RawApi(String),

    #[error("No route found in success response")]
    NoRoute,

    #[error("Underlying request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}
