use rootmail_core::contract::{
    CustomResourceData, CustomResourceRequest, CustomResourceResponse, RequestType,
};
use rootmail_core::rule_set::{ReceiptRuleSpec, RULE_NAME, RULE_SET_NAME};
use tracing::info;

use crate::adapters::callback::CallbackSender;
use crate::adapters::receipt_rules::ReceiptRuleAdmin;
use crate::error::HandlerError;
use crate::handlers::custom_resource::respond;

pub const PROP_DOMAIN: &str = "Domain";
pub const PROP_SUBDOMAIN: &str = "Subdomain";
pub const PROP_EMAIL_BUCKET: &str = "EmailBucket";
pub const PROP_EMAIL_BUCKET_NAME: &str = "EmailBucketName";
pub const PROP_OPS_SANTA_FUNCTION_ARN: &str = "OpsSantaFunctionArn";

pub fn rule_spec_from_request(
    request: &CustomResourceRequest,
) -> Result<ReceiptRuleSpec, HandlerError> {
    Ok(ReceiptRuleSpec::for_rootmail(
        request.property(PROP_DOMAIN)?,
        request.property(PROP_SUBDOMAIN)?,
        request.property_any(&[PROP_EMAIL_BUCKET, PROP_EMAIL_BUCKET_NAME])?,
        request.property(PROP_OPS_SANTA_FUNCTION_ARN)?,
    ))
}

/// Creates and activates the rootmail rule set, or tears it down on `Delete`.
///
/// Steps run in order and stop at the first failure; earlier steps are not
/// rolled back.
pub fn apply_receipt_rule(
    request: &CustomResourceRequest,
    rules: &impl ReceiptRuleAdmin,
) -> Result<CustomResourceData, HandlerError> {
    let spec = rule_spec_from_request(request)?;
    info!(
        request_type = request.request_type.as_str(),
        logical_resource_id = %request.logical_resource_id,
        physical_resource_id = ?request.physical_resource_id,
        "receipt rule request"
    );

    match request.request_type {
        RequestType::Create | RequestType::Update => {
            rules
                .create_rule_set(&spec.rule_set_name)
                .map_err(HandlerError::service("CreateReceiptRuleSet"))?;
            rules
                .create_rule(&spec)
                .map_err(HandlerError::service("CreateReceiptRule"))?;

            info!(
                logical_resource_id = %request.logical_resource_id,
                rule_set = %spec.rule_set_name,
                recipient = %spec.recipient,
                "activating SES receipt rule set"
            );
            rules
                .set_active_rule_set(Some(&spec.rule_set_name))
                .map_err(HandlerError::service("SetActiveReceiptRuleSet"))?;
        }
        RequestType::Delete => {
            info!(
                logical_resource_id = %request.logical_resource_id,
                "deactivating SES receipt rule set"
            );
            rules
                .set_active_rule_set(None)
                .map_err(HandlerError::service("SetActiveReceiptRuleSet"))?;
            rules
                .delete_rule(RULE_SET_NAME, RULE_NAME)
                .map_err(HandlerError::service("DeleteReceiptRule"))?;
            rules
                .delete_rule_set(RULE_SET_NAME)
                .map_err(HandlerError::service("DeleteReceiptRuleSet"))?;
        }
    }

    Ok(CustomResourceData::new())
}

pub fn handle_receipt_rule_event(
    request: &CustomResourceRequest,
    log_stream_name: &str,
    rules: &impl ReceiptRuleAdmin,
    sender: &impl CallbackSender,
) -> Result<CustomResourceResponse, HandlerError> {
    respond(
        request,
        apply_receipt_rule(request, rules),
        log_stream_name,
        sender,
    )
}
