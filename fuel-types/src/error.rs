//! Error types for the fuel price service.

/// Failures talking to the upstream price provider.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Request to '{url}' failed with status code {status}. Response: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("Unexpected response from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl UpstreamError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            UpstreamError::Status { url, .. }
            | UpstreamError::Transport { url, .. }
            | UpstreamError::Decode { url, .. } => url,
        }
    }

    /// HTTP status, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by the price client.
#[derive(Debug, thiserror::Error)]
pub enum FuelError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Carries the code exactly as the caller supplied it.
    #[error("No province found for plate code {0}")]
    ProvinceNotFound(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),
}

impl From<FuelError> for AppError {
    fn from(err: FuelError) -> Self {
        match err {
            FuelError::ProvinceNotFound(_) => AppError::NotFound(err.to_string()),
            FuelError::Upstream(e) => AppError::BadGateway(e.to_string()),
        }
    }
}
