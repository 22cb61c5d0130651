//! Client Errors
//!
//! Every transport failure ends up as an `ApiError` whose `Display` output is
//! ready to show inline in the UI.

use thiserror::Error;

use crate::validation::ValidationError;

pub const NETWORK_ERROR: &str = "Network error. Please check your connection.";
pub const UNAUTHORIZED: &str = "Please sign in to continue.";
pub const FORBIDDEN: &str = "You do not have permission to perform this action.";
pub const NOT_FOUND: &str = "The requested resource was not found.";
pub const SERVER_ERROR: &str = "Something went wrong. Please try again later.";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("{}", NETWORK_ERROR)]
    Network,

    /// 401: bad credentials or an expired/invalid token
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    /// Any other non-2xx status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape
    #[error("{}", SERVER_ERROR)]
    Decode,

    /// Rejected client-side before dispatch
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Token could not be read from or written to local storage
    #[error("Could not access local storage: {0}")]
    Storage(String),
}

impl ApiError {
    /// Map a non-2xx status plus the optional server `detail` message
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => Self::Unauthorized(detail.unwrap_or_else(|| UNAUTHORIZED.to_string())),
            403 => Self::Forbidden(detail.unwrap_or_else(|| FORBIDDEN.to_string())),
            404 => Self::NotFound(detail.unwrap_or_else(|| NOT_FOUND.to_string())),
            _ => Self::Server {
                status,
                message: detail.unwrap_or_else(|| SERVER_ERROR.to_string()),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping_prefers_server_detail() {
        let err = ApiError::from_status(400, Some("Email already registered".into()));
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(
            err,
            ApiError::Server { status: 400, message: "Email already registered".into() }
        );
    }

    #[test]
    fn test_status_mapping_fallbacks() {
        assert_eq!(ApiError::from_status(401, None).to_string(), UNAUTHORIZED);
        assert!(ApiError::from_status(401, None).is_unauthorized());
        assert_eq!(ApiError::from_status(403, None).to_string(), FORBIDDEN);
        assert_eq!(ApiError::from_status(404, None).to_string(), NOT_FOUND);
        assert_eq!(ApiError::from_status(502, None).to_string(), SERVER_ERROR);
    }
}
