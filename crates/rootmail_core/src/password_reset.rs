use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde_json::json;

use crate::error::MailError;

pub const PASSWORD_RESET_SUBJECT: &str = "Amazon Web Services Password Assistance";
pub const RESET_LINK_PREFIX: &str = "https://signin.aws.amazon.com/resetpassword";
pub const PARAMETER_NAME_PREFIX: &str = "/superwerker/rootmail/pw_reset_link";
pub const RECIPIENT_MARKER: &str = "root+";
pub const EXPIRATION_MINUTES: i64 = 10;
const EXPIRATION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Advanced-tier `String` parameter holding a reset link until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetParameter {
    pub name: String,
    pub value: String,
    pub policies: String,
    pub overwrite: bool,
}

impl PasswordResetParameter {
    pub fn from_mail(
        recipient: &str,
        html_body: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, MailError> {
        Ok(Self {
            name: reset_parameter_name(recipient)?,
            value: extract_reset_link(html_body)?,
            policies: expiration_policies(now),
            overwrite: true,
        })
    }
}

fn reset_link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!("({}.*?)<br>", regex::escape(RESET_LINK_PREFIX)))
            .expect("reset link pattern is a valid regex")
    })
}

/// Reset link from the prefix up to, not including, the next `<br>`.
pub fn extract_reset_link(html_body: &str) -> Result<String, MailError> {
    reset_link_pattern()
        .captures(html_body)
        .and_then(|captures| captures.get(1))
        .map(|link| link.as_str().to_string())
        .ok_or(MailError::MissingResetLink)
}

/// `root+<id>@domain` becomes `<prefix>/<id>`.
pub fn reset_parameter_name(recipient: &str) -> Result<String, MailError> {
    let local_part = recipient.split('@').next().unwrap_or_default();
    let suffix = local_part
        .split(RECIPIENT_MARKER)
        .nth(1)
        .ok_or_else(|| MailError::MissingRootMarker(recipient.to_string()))?;
    Ok(format!("{PARAMETER_NAME_PREFIX}/{suffix}"))
}

pub fn expiration_timestamp(now: DateTime<Utc>) -> String {
    (now + Duration::minutes(EXPIRATION_MINUTES))
        .format(EXPIRATION_TIMESTAMP_FORMAT)
        .to_string()
}

/// SSM parameter policy document with a single expiration policy.
pub fn expiration_policies(now: DateTime<Utc>) -> String {
    json!([
        {
            "Type": "Expiration",
            "Version": "1.0",
            "Attributes": {
                "Timestamp": expiration_timestamp(now),
            },
        }
    ])
    .to_string()
}
