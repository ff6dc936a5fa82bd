use rootmail_core::contract::{CustomResourceRequest, IsCompleteResponse, RequestType};
use rootmail_core::rule_set::SETUP_NOTIFICATION_KEY;
use tracing::info;

use crate::adapters::object_store::MailObjectStore;
use crate::error::HandlerError;
use crate::handlers::receipt_rule_activation::{PROP_EMAIL_BUCKET, PROP_EMAIL_BUCKET_NAME};

/// Reports whether SES has delivered its setup notification into the mail bucket.
pub fn probe_setup_complete(
    request: &CustomResourceRequest,
    store: &impl MailObjectStore,
) -> Result<IsCompleteResponse, HandlerError> {
    if request.request_type != RequestType::Create {
        return Ok(IsCompleteResponse { is_complete: true });
    }

    let bucket = request.property_any(&[PROP_EMAIL_BUCKET_NAME, PROP_EMAIL_BUCKET])?;
    let is_complete = store
        .object_exists(bucket, SETUP_NOTIFICATION_KEY)
        .map_err(HandlerError::service("HeadObject"))?;
    info!(
        bucket,
        key = SETUP_NOTIFICATION_KEY,
        is_complete,
        "checked for SES setup notification"
    );

    Ok(IsCompleteResponse { is_complete })
}
