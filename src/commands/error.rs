/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a response
    Transport(String),
    /// Response with a non-2xx status
    Status(u16),
    /// Response body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Status: {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_status_code() {
        let err = ApiError::Status(403);
        assert_eq!(err.to_string(), "Status: 403");
        assert_eq!(
            ApiError::Transport("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
