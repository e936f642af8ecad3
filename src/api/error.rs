use thiserror::Error;

/// Failure carried by the `*Err` phase of an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The server answered with a status other than the one the call expects.
    #[error("{status_text}")]
    Status { code: u16, status_text: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ActionError {
    pub fn status(code: u16, status_text: impl Into<String>) -> Self {
        Self::Status {
            code,
            status_text: status_text.into(),
        }
    }
}
