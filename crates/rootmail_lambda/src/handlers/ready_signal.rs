use rootmail_core::contract::ReadySignal;
use tracing::info;

use crate::adapters::callback::CallbackSender;
use crate::error::HandlerError;

/// PUTs the completion payload once; the response is not inspected.
pub fn send_ready_signal(
    signal_url: &str,
    unique_id: &str,
    sender: &impl CallbackSender,
) -> Result<ReadySignal, HandlerError> {
    let signal = ReadySignal::completed(unique_id);
    let body = serde_json::to_vec(&signal)
        .map_err(|error| HandlerError::Callback(format!("failed to serialize signal: {error}")))?;
    sender
        .put_json(signal_url, &body)
        .map_err(HandlerError::Callback)?;
    info!(unique_id, "root mail ready signal sent");
    Ok(signal)
}
