use thiserror::Error;

/// Every failure the client surfaces, already reduced to a user-facing message.
///
/// `Display` is the message shown to the user; nothing more structured
/// crosses into UI state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Network error. Please check your connection.")]
    NetworkUnreachable,

    #[error("{}", describe_status(.0))]
    HttpStatus(u16),

    #[error("An error occurred")]
    Unknown,
}

impl ApiError {
    /// HTTP status carried by this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus(code) => Some(*code),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Message for a non-2xx status.
pub fn status_message(status: u16) -> String {
    match status {
        400 => "Invalid request. Please check your input.".to_string(),
        401 => "Unauthorized. Please log in.".to_string(),
        403 => "Access forbidden.".to_string(),
        404 => "Resource not found.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        other => format!("Error: {}", other),
    }
}

fn describe_status(status: &u16) -> String {
    status_message(*status)
}

/// Failure reported by an HTTP transport before any status line was seen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request exceeded {0}ms")]
    TimedOut(u64),

    #[error("no response received: {0}")]
    NoResponse(String),

    #[error("transport failure: {0}")]
    Other(String),
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::TimedOut(_) => ApiError::Timeout,
            TransportError::NoResponse(_) => ApiError::NetworkUnreachable,
            TransportError::Other(_) => ApiError::Unknown,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(_: serde_json::Error) -> Self {
        ApiError::Unknown
    }
}
