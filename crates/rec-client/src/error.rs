use serde_json::Value;
use thiserror::Error;

/// Errors returned by the recommendation client.
///
/// The client never interprets a failure body; callers decide what to show.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure, or a 2xx body that did not decode.
    #[error("Request to recommendation service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Recommendation service responded with status {status}")]
    Status {
        status: u16,
        /// Response body, when it parsed as JSON
        body: Option<Value>,
    },
}

impl ClientError {
    /// HTTP status of the failure, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Parsed JSON body of a non-2xx response.
    pub fn body(&self) -> Option<&Value> {
        match self {
            ClientError::Status { body, .. } => body.as_ref(),
            ClientError::Request(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
