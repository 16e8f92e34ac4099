//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`GeoJsonError`] - Malformed boundary datasets
//! - [`SelectionError`] - Feature identifiers missing from the country catalog

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Whether repeating the same request could plausibly succeed.
    ///
    /// Client errors other than 408/429 and malformed payloads are final.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::NetworkError(_) | Self::Timeout | Self::ResponseReadFailed => true,
            Self::HttpError(status) => *status >= 500 || *status == 408 || *status == 429,
            Self::NoWindow
            | Self::RequestCreationFailed
            | Self::InvalidContent
            | Self::JsonParseError(_) => false,
        }
    }
}

/// Errors raised while interpreting a boundary dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonError {
    #[error("root object is not a FeatureCollection")]
    NotAFeatureCollection,
    #[error("feature {index}: {reason}")]
    InvalidFeature { index: usize, reason: String },
}

/// Failure to resolve a clicked feature to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no country with id '{0}' in the catalog")]
    NotFound(String),
}

/// Boundary dataset load failure (network or payload).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundaryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid boundary dataset: {0}")]
    Parse(#[from] GeoJsonError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::Timeout.is_transient());
        assert!(FetchError::NetworkError("offline".into()).is_transient());
        assert!(FetchError::HttpError(503).is_transient());
        assert!(FetchError::HttpError(429).is_transient());
        assert!(!FetchError::HttpError(404).is_transient());
        assert!(!FetchError::JsonParseError("eof".into()).is_transient());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(
            SelectionError::NotFound("-99".into()).to_string(),
            "no country with id '-99' in the catalog"
        );
        let err: BoundaryError = GeoJsonError::NotAFeatureCollection.into();
        assert_eq!(
            err.to_string(),
            "invalid boundary dataset: root object is not a FeatureCollection"
        );
    }
}
