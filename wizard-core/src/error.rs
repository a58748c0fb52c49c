use thiserror::Error;

/// Outcome classification for a single weather lookup.
///
/// The upstream error signal is overloaded (`cod` carries HTTP-like codes as
/// either a string or a number), so classification happens once, here, and
/// callers only ever see these tags. Every error is terminal for its request;
/// there is no retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Upstream answered 404 for the queried location.
    #[error("{}", .message.as_deref().unwrap_or("city not found"))]
    NotFound { message: Option<String> },

    /// Upstream rejected the credential (401).
    #[error("{}", .message.as_deref().unwrap_or("invalid API key"))]
    InvalidCredential { message: Option<String> },

    /// No connectivity, or the request could not complete in time.
    #[error("network unreachable: {message}")]
    Unreachable { message: String },

    /// The response had an unexpected shape.
    #[error("malformed upstream response: {message}")]
    Malformed { message: String },
}

impl FetchError {
    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::Malformed { message: message.into() }
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        FetchError::Unreachable { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_prefers_upstream_message() {
        let err = FetchError::NotFound { message: Some("city not found".into()) };
        assert_eq!(err.to_string(), "city not found");

        let err = FetchError::NotFound { message: None };
        assert_eq!(err.to_string(), "city not found");
    }

    #[test]
    fn invalid_credential_display_has_fallback() {
        let err = FetchError::InvalidCredential { message: None };
        assert_eq!(err.to_string(), "invalid API key");
    }
}
