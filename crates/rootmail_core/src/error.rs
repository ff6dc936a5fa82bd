use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("resource property '{0}' is required")]
    MissingProperty(String),
}

/// Failures while turning a raw inbound message into an action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MailError {
    #[error("raw message could not be parsed as MIME")]
    Unparseable,
    #[error("message has neither a plain text nor an html body")]
    MissingBody,
    #[error("password reset message has no html body")]
    MissingHtmlBody,
    #[error("no password reset link found in message body")]
    MissingResetLink,
    #[error("recipient '{0}' does not follow the root+<id>@ convention")]
    MissingRootMarker(String),
    #[error("mail record '{0}' has no destination")]
    MissingDestination(String),
}
