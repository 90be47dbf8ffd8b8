use reqwest::StatusCode;
use thiserror::Error;

/// Advisory printed ahead of the fatal status line when the API is overloaded.
pub const SERVER_BUSY_ADVISORY: &str = "Server busy: the NWS API is temporarily overloaded, try again later.";

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures surfaced by the client and endpoint layers.
#[derive(Debug, Error)]
pub enum NwsError {
    #[error("invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("API returned: {status}")]
    Status { status: StatusCode },

    #[error("failed to decode {payload} response: {source}")]
    Decode {
        payload: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl NwsError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport { url: url.into(), source: source.into() }
    }

    /// True for `503 Service Unavailable`.
    pub fn is_server_busy(&self) -> bool {
        matches!(self, Self::Status { status } if *status == StatusCode::SERVICE_UNAVAILABLE)
    }

    /// Extra line to show the user before the error itself, if any.
    pub fn advisory(&self) -> Option<&'static str> {
        self.is_server_busy().then_some(SERVER_BUSY_ADVISORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_shows_full_status_line() {
        let err = NwsError::Status { status: StatusCode::NOT_FOUND };
        assert_eq!(err.to_string(), "API returned: 404 Not Found");
        assert!(err.advisory().is_none());
    }

    #[test]
    fn service_unavailable_carries_advisory() {
        let err = NwsError::Status { status: StatusCode::SERVICE_UNAVAILABLE };
        assert!(err.is_server_busy());
        assert_eq!(err.advisory(), Some(SERVER_BUSY_ADVISORY));
    }

    #[test]
    fn transport_error_is_not_busy() {
        let err = NwsError::transport("https://example.test/active", "connection refused");
        assert!(!err.is_server_busy());
        assert!(err.to_string().contains("connection refused"));
    }
}
