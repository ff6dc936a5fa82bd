use chrono::{DateTime, Utc};

use crate::error::MailError;
use crate::mail::ParsedMail;
use crate::ops_ticket::OpsTicketDraft;
use crate::password_reset::{PasswordResetParameter, PASSWORD_RESET_SUBJECT};

/// Subjects of AWS onboarding mail that never warrant a ticket.
pub const FILTERED_SUBJECTS: [&str; 2] = [
    "Your AWS Account is Ready - Get Started Now",
    "Welcome to Amazon Web Services",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailDisposition {
    StoreResetLink(PasswordResetParameter),
    Filtered { subject: String },
    OpenTicket(OpsTicketDraft),
}

pub fn is_filtered_subject(subject: &str) -> bool {
    FILTERED_SUBJECTS.contains(&subject)
}

/// Decides what to do with a clean, parsed message.
pub fn triage_mail(
    mail: &ParsedMail,
    message_id: &str,
    recipient: &str,
    object_arn: &str,
    now: DateTime<Utc>,
) -> Result<MailDisposition, MailError> {
    if mail.subject == PASSWORD_RESET_SUBJECT {
        let html_body = mail.html_body.as_deref().ok_or(MailError::MissingHtmlBody)?;
        let parameter = PasswordResetParameter::from_mail(recipient, html_body, now)?;
        return Ok(MailDisposition::StoreResetLink(parameter));
    }

    if is_filtered_subject(&mail.subject) {
        return Ok(MailDisposition::Filtered {
            subject: mail.subject.clone(),
        });
    }

    let body = mail.preferred_body().ok_or(MailError::MissingBody)?;
    Ok(MailDisposition::OpenTicket(OpsTicketDraft::from_mail(
        message_id,
        object_arn,
        &mail.subject,
        body,
        recipient,
    )))
}
