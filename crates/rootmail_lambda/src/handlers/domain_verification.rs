use rootmail_core::contract::{
    CustomResourceData, CustomResourceRequest, CustomResourceResponse, RequestType,
};
use serde_json::Value;
use tracing::info;

use crate::adapters::callback::CallbackSender;
use crate::adapters::identity::EmailIdentityService;
use crate::error::HandlerError;
use crate::handlers::custom_resource::respond;

pub const PROP_DOMAIN: &str = "Domain";
pub const ATTR_VERIFICATION_TOKEN: &str = "VerificationToken";
pub const ATTR_DKIM_TOKENS: &str = "DkimTokens";

/// Starts domain identity and DKIM verification on `Create`.
///
/// `Update` and `Delete` make no SES calls and answer with empty data; the
/// identity is left in place on delete.
pub fn verify_domain(
    request: &CustomResourceRequest,
    identity: &impl EmailIdentityService,
) -> Result<CustomResourceData, HandlerError> {
    let domain = request.property(PROP_DOMAIN)?;
    info!(
        request_type = request.request_type.as_str(),
        logical_resource_id = %request.logical_resource_id,
        physical_resource_id = ?request.physical_resource_id,
        domain,
        "domain verification request"
    );

    let mut data = CustomResourceData::new();
    if request.request_type != RequestType::Create {
        return Ok(data);
    }

    let verification_token = identity
        .verify_domain_identity(domain)
        .map_err(HandlerError::service("VerifyDomainIdentity"))?;
    info!(domain, %verification_token, "received verification token");

    let dkim_tokens = identity
        .verify_domain_dkim(domain)
        .map_err(HandlerError::service("VerifyDomainDkim"))?;
    info!(domain, dkim_tokens = ?dkim_tokens, "received DKIM tokens");

    data.insert(
        ATTR_VERIFICATION_TOKEN.to_string(),
        Value::from(verification_token),
    );
    data.insert(ATTR_DKIM_TOKENS.to_string(), Value::from(dkim_tokens));
    Ok(data)
}

pub fn handle_domain_verification_event(
    request: &CustomResourceRequest,
    log_stream_name: &str,
    identity: &impl EmailIdentityService,
    sender: &impl CallbackSender,
) -> Result<CustomResourceResponse, HandlerError> {
    respond(
        request,
        verify_domain(request, identity),
        log_stream_name,
        sender,
    )
}
