use rootmail_core::contract::{CustomResourceData, CustomResourceRequest, CustomResourceResponse};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::adapters::callback::CallbackSender;
use crate::error::HandlerError;

/// Maps a handler outcome onto the callback protocol and delivers it.
///
/// Every request is answered exactly once: `Ok` becomes SUCCESS with the data,
/// `Err` becomes FAILED with an empty data map. Only a failure to deliver the
/// callback itself is returned as an error.
pub fn respond(
    request: &CustomResourceRequest,
    outcome: Result<CustomResourceData, HandlerError>,
    log_stream_name: &str,
    sender: &impl CallbackSender,
) -> Result<CustomResourceResponse, HandlerError> {
    let response = match outcome {
        Ok(data) => CustomResourceResponse::success(request, data, log_stream_name),
        Err(handler_error) => {
            error!(
                error = %handler_error,
                event = ?request,
                "custom resource handler failed"
            );
            CustomResourceResponse::failure(request, log_stream_name)
        }
    };

    let body = serde_json::to_vec(&response)
        .map_err(|error| HandlerError::Callback(format!("failed to serialize response: {error}")))?;
    sender
        .put_json(&request.response_url, &body)
        .map_err(HandlerError::Callback)?;

    info!(
        logical_resource_id = %request.logical_resource_id,
        request_type = request.request_type.as_str(),
        status = response.status.as_str(),
        "custom resource response sent"
    );
    Ok(response)
}

/// Decodes a raw provisioning event.
///
/// An event that does not decode is still answered with FAILED when it
/// carries a `ResponseURL`; the decode error is returned either way.
pub fn decode_request(
    event: Value,
    log_stream_name: &str,
    sender: &impl CallbackSender,
) -> Result<CustomResourceRequest, HandlerError> {
    let decode_error = match serde_json::from_value::<CustomResourceRequest>(event.clone()) {
        Ok(request) => return Ok(request),
        Err(error) => HandlerError::InvalidEvent(error.to_string()),
    };
    error!(error = %decode_error, event = %event, "custom resource event did not decode");

    let Some(response_url) = CustomResourceResponse::raw_response_url(&event) else {
        warn!("event carries no ResponseURL, no callback sent");
        return Err(decode_error);
    };
    let response = CustomResourceResponse::failure_for_raw_event(&event, log_stream_name);
    let body = serde_json::to_vec(&response)
        .map_err(|error| HandlerError::Callback(format!("failed to serialize response: {error}")))?;
    sender
        .put_json(response_url, &body)
        .map_err(HandlerError::Callback)?;
    info!(
        logical_resource_id = %response.logical_resource_id,
        status = response.status.as_str(),
        "custom resource response sent"
    );

    Err(decode_error)
}
