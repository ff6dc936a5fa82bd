use chrono::{DateTime, Utc};
use rootmail_core::error::MailError;
use rootmail_core::mail::{mail_object_key, parse_raw_mail, SesEvent, SesEventRecord};
use rootmail_core::ops_ticket::mail_object_arn;
use rootmail_core::triage::{triage_mail, MailDisposition};
use tracing::{debug, info, warn};

use crate::adapters::object_store::MailObjectStore;
use crate::adapters::ops_center::OpsTicketing;
use crate::adapters::parameter_store::ParameterStore;
use crate::config::MailProcessorConfig;
use crate::error::HandlerError;

/// What happened to one inbound record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailOutcome {
    VerdictFailed {
        message_id: String,
        verdict: &'static str,
        status: String,
    },
    ResetLinkStored {
        message_id: String,
        parameter_name: String,
    },
    Filtered {
        message_id: String,
        subject: String,
    },
    TicketCreated {
        message_id: String,
        ops_item_id: Option<String>,
    },
}

/// Processes every record in order. Any error aborts the invocation so the
/// runtime's redelivery policy applies.
///
/// A failed verdict skips only its own record; later records in the same
/// event are still processed instead of ending the invocation. This only
/// differs from stopping early for multi-record events, which SES does not send.
pub fn process_ses_event(
    event: &SesEvent,
    config: &MailProcessorConfig,
    store: &impl MailObjectStore,
    parameters: &impl ParameterStore,
    ops: &impl OpsTicketing,
    now: DateTime<Utc>,
) -> Result<Vec<MailOutcome>, HandlerError> {
    event
        .records
        .iter()
        .map(|record| process_record(record, config, store, parameters, ops, now))
        .collect()
}

pub fn process_record(
    record: &SesEventRecord,
    config: &MailProcessorConfig,
    store: &impl MailObjectStore,
    parameters: &impl ParameterStore,
    ops: &impl OpsTicketing,
    now: DateTime<Utc>,
) -> Result<MailOutcome, HandlerError> {
    let message_id = record.ses.mail.message_id.as_str();
    let key = mail_object_key(message_id);
    debug!(id = message_id, key = %key, "processing mail");

    if let Some((verdict, status)) = record.ses.receipt.first_failed_verdict() {
        warn!(
            class = verdict.as_str(),
            status,
            id = message_id,
            key = %key,
            "verdict failed - ops santa item skipped"
        );
        return Ok(MailOutcome::VerdictFailed {
            message_id: message_id.to_string(),
            verdict: verdict.as_str(),
            status: status.to_string(),
        });
    }

    let recipient = record
        .ses
        .mail
        .destination
        .first()
        .ok_or_else(|| MailError::MissingDestination(message_id.to_string()))?;

    let raw = store
        .fetch_object(&config.bucket, &key)
        .map_err(HandlerError::service("GetObject"))?;
    let mail = parse_raw_mail(&raw)?;
    let object_arn = mail_object_arn(&config.bucket_arn, &key);

    match triage_mail(&mail, message_id, recipient, &object_arn, now)? {
        MailDisposition::StoreResetLink(parameter) => {
            parameters
                .put_reset_parameter(&parameter)
                .map_err(HandlerError::service("PutParameter"))?;
            info!(id = message_id, name = %parameter.name, "stored password reset link");
            Ok(MailOutcome::ResetLinkStored {
                message_id: message_id.to_string(),
                parameter_name: parameter.name,
            })
        }
        MailDisposition::Filtered { subject } => {
            info!(title = %subject, "filtered email");
            Ok(MailOutcome::Filtered {
                message_id: message_id.to_string(),
                subject,
            })
        }
        MailDisposition::OpenTicket(ticket) => {
            let ops_item_id = ops
                .create_ops_item(&ticket)
                .map_err(HandlerError::service("CreateOpsItem"))?;
            info!(id = message_id, ops_item_id = ?ops_item_id, "created ops item");
            Ok(MailOutcome::TicketCreated {
                message_id: message_id.to_string(),
                ops_item_id,
            })
        }
    }
}
