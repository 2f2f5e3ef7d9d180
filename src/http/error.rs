//! Classification of a failed JSON GET.

use reqwest::StatusCode;

/// Why a single request did not produce the expected JSON document.
#[derive(Debug)]
pub enum RequestError {
    /// The server answered, but not with 200 OK.
    Status(StatusCode),
    /// The request never produced a usable response (DNS, connect, TLS, reset,
    /// body read failure).
    Transport(reqwest::Error),
    /// The body arrived but was not the JSON shape we asked for.
    Decode(reqwest::Error),
}

impl RequestError {
    /// Sorts a reqwest error into transport or decode failure.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_decode() {
            RequestError::Decode(error)
        } else {
            RequestError::Transport(error)
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::Status(status) => match status.canonical_reason() {
                Some(reason) => write!(f, "HTTP Error {}: {}", status.as_u16(), reason),
                None => write!(f, "HTTP Error {}", status.as_u16()),
            },
            RequestError::Transport(e) => write!(f, "Request failed: {}", e),
            RequestError::Decode(e) => write!(f, "Failed to parse JSON response: {}", e),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Status(_) => None,
            RequestError::Transport(e) | RequestError::Decode(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_with_reason() {
        let err = RequestError::Status(StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "HTTP Error 403: Forbidden");
    }

    #[test]
    fn test_status_display_without_reason() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = RequestError::Status(status);
        assert_eq!(err.to_string(), "HTTP Error 599");
    }

    #[test]
    fn test_status_accessor() {
        let err = RequestError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(std::error::Error::source(&err).is_none());
    }
}
