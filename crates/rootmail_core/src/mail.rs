use mail_parser::{MessageParser, PartType};
use serde::{Deserialize, Serialize};

use crate::error::MailError;
use crate::rule_set::MAIL_OBJECT_PREFIX;

pub const VERDICT_PASS: &str = "PASS";

/// SES receipt notification as delivered by a receipt rule's Lambda action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SesEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SesEventRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SesEventRecord {
    pub ses: SesMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SesMessage {
    pub mail: SesMail,
    pub receipt: SesReceipt,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SesMail {
    pub message_id: String,
    #[serde(default)]
    pub destination: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SesReceipt {
    pub dkim_verdict: Verdict,
    pub spam_verdict: Verdict,
    pub spf_verdict: Verdict,
    pub virus_verdict: Verdict,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictKind {
    Dkim,
    Spam,
    Spf,
    Virus,
}

impl VerdictKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dkim => "dkim",
            Self::Spam => "spam",
            Self::Spf => "spf",
            Self::Virus => "virus",
        }
    }
}

impl SesReceipt {
    pub fn verdicts(&self) -> [(VerdictKind, &str); 4] {
        [
            (VerdictKind::Dkim, self.dkim_verdict.status.as_str()),
            (VerdictKind::Spam, self.spam_verdict.status.as_str()),
            (VerdictKind::Spf, self.spf_verdict.status.as_str()),
            (VerdictKind::Virus, self.virus_verdict.status.as_str()),
        ]
    }

    /// First verdict, in dkim/spam/spf/virus order, whose status is not `PASS`.
    pub fn first_failed_verdict(&self) -> Option<(VerdictKind, &str)> {
        self.verdicts()
            .into_iter()
            .find(|(_, status)| *status != VERDICT_PASS)
    }
}

/// Storage key under which the receipt rule's S3 action archives a message.
pub fn mail_object_key(message_id: &str) -> String {
    format!("{MAIL_OBJECT_PREFIX}/{message_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedMail {
    pub subject: String,
    pub plain_body: Option<String>,
    pub html_body: Option<String>,
}

impl ParsedMail {
    /// Plain text part when present, otherwise the html part.
    pub fn preferred_body(&self) -> Option<&str> {
        self.plain_body
            .as_deref()
            .or(self.html_body.as_deref())
    }
}

pub fn parse_raw_mail(raw: &[u8]) -> Result<ParsedMail, MailError> {
    let message = MessageParser::default()
        .parse(raw)
        .ok_or(MailError::Unparseable)?;

    let plain_body = message.text_bodies().find_map(|part| match &part.body {
        PartType::Text(text) => Some(text.to_string()),
        _ => None,
    });
    let html_body = message.html_bodies().find_map(|part| match &part.body {
        PartType::Html(html) => Some(html.to_string()),
        _ => None,
    });

    Ok(ParsedMail {
        subject: message.subject().unwrap_or_default().to_string(),
        plain_body,
        html_body,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record_json(spam: &str) -> serde_json::Value {
        json!({
            "Records": [{
                "eventSource": "aws:ses",
                "eventVersion": "1.0",
                "ses": {
                    "mail": {
                        "messageId": "o3vrnil0e2ic28trm7dfhrc2v0clambda4nbp0g1",
                        "source": "no-reply@amazon.com",
                        "destination": ["root+abc123@aws.example.com"]
                    },
                    "receipt": {
                        "dkimVerdict": {"status": "PASS"},
                        "spamVerdict": {"status": spam},
                        "spfVerdict": {"status": "PASS"},
                        "virusVerdict": {"status": "PASS"},
                        "dmarcVerdict": {"status": "PASS"}
                    }
                }
            }]
        })
    }

    #[test]
    fn parses_ses_notification_ignoring_unknown_fields() {
        let event: SesEvent = serde_json::from_value(record_json("PASS")).expect("event parses");

        let mail = &event.records[0].ses.mail;
        assert_eq!(mail.message_id, "o3vrnil0e2ic28trm7dfhrc2v0clambda4nbp0g1");
        assert_eq!(mail.destination, vec!["root+abc123@aws.example.com"]);
        assert!(event.records[0].ses.receipt.first_failed_verdict().is_none());
    }

    #[test]
    fn reports_first_non_passing_verdict() {
        let event: SesEvent = serde_json::from_value(record_json("FAIL")).expect("event parses");

        let failed = event.records[0].ses.receipt.first_failed_verdict();
        assert_eq!(failed, Some((VerdictKind::Spam, "FAIL")));
    }

    #[test]
    fn gray_verdict_is_not_a_pass() {
        let event: SesEvent = serde_json::from_value(record_json("GRAY")).expect("event parses");

        assert!(event.records[0].ses.receipt.first_failed_verdict().is_some());
    }

    #[test]
    fn builds_object_key_under_rootmail_prefix() {
        assert_eq!(mail_object_key("abc"), "RootMail/abc");
    }

    #[test]
    fn parses_multipart_message_and_prefers_plain_body() {
        let raw = concat!(
            "From: no-reply@amazon.com\r\n",
            "To: root+abc123@aws.example.com\r\n",
            "Subject: Your invoice is available\r\n",
            "MIME-Version: 1.0\r\n",
            "Content-Type: multipart/alternative; boundary=\"b1\"\r\n",
            "\r\n",
            "--b1\r\n",
            "Content-Type: text/plain; charset=utf-8\r\n",
            "\r\n",
            "Plain invoice text\r\n",
            "--b1\r\n",
            "Content-Type: text/html; charset=utf-8\r\n",
            "\r\n",
            "<p>Html invoice text</p>\r\n",
            "--b1--\r\n",
        );

        let parsed = parse_raw_mail(raw.as_bytes()).expect("message parses");

        assert_eq!(parsed.subject, "Your invoice is available");
        assert!(parsed
            .preferred_body()
            .expect("body present")
            .contains("Plain invoice text"));
        assert!(parsed
            .html_body
            .as_deref()
            .expect("html present")
            .contains("<p>Html invoice text</p>"));
    }

    #[test]
    fn falls_back_to_html_body() {
        let parsed = ParsedMail {
            subject: "s".to_string(),
            plain_body: None,
            html_body: Some("<b>only html</b>".to_string()),
        };

        assert_eq!(parsed.preferred_body(), Some("<b>only html</b>"));
    }
}
