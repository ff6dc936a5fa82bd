use rootmail_core::error::{ContractError, MailError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("invalid event payload: {0}")]
    InvalidEvent(String),
    #[error("{0} must be configured")]
    MissingConfig(&'static str),
    #[error("invalid value for {name}: {message}")]
    InvalidConfig { name: &'static str, message: String },
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error(transparent)]
    Mail(#[from] MailError),
    #[error("{operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },
    #[error("{phase} not reached after {attempts} attempts")]
    PollExhausted { phase: &'static str, attempts: u32 },
    #[error("failed to deliver callback: {0}")]
    Callback(String),
}

impl HandlerError {
    pub fn service(operation: &'static str) -> impl FnOnce(String) -> Self {
        move |message| Self::Service { operation, message }
    }
}
