#![allow(dead_code)]

use rootmail_core::contract::CustomResourceRequest;
use rootmail_core::mail::SesEvent;
use serde_json::{json, Value};

pub const RESPONSE_URL: &str = "https://cloudformation-custom-resource-response-euwest1.s3.amazonaws.com/signed";
pub const LOG_STREAM: &str = "2026/10/17/[$LATEST]0123456789abcdef";
pub const RECIPIENT: &str = "root+a1b2c3@aws.example.com";

/// Provisioning request with the given type and resource properties.
pub fn custom_resource_request(request_type: &str, properties: Value) -> CustomResourceRequest {
    serde_json::from_value(json!({
        "RequestType": request_type,
        "ResponseURL": RESPONSE_URL,
        "StackId": "arn:aws:cloudformation:eu-west-1:123456789012:stack/superwerker/1",
        "RequestId": "5d478078-1a6e-4a0f-9d1c-7f8f0e7bbf2a",
        "ResourceType": "Custom::RootMail",
        "LogicalResourceId": "RootMailResource",
        "ResourceProperties": properties
    }))
    .expect("request fixture parses")
}

pub fn receipt_rule_properties() -> Value {
    json!({
        "ServiceToken": "arn:aws:lambda:eu-west-1:123456789012:function:receipt-rule",
        "Domain": "example.com",
        "Subdomain": "aws",
        "EmailBucket": "rootmail-bucket",
        "OpsSantaFunctionArn": "arn:aws:lambda:eu-west-1:123456789012:function:ops-santa"
    })
}

pub struct RecordSpec<'a> {
    pub message_id: &'a str,
    pub recipient: &'a str,
    pub dkim: &'a str,
    pub spam: &'a str,
    pub spf: &'a str,
    pub virus: &'a str,
}

impl<'a> RecordSpec<'a> {
    pub fn clean(message_id: &'a str) -> Self {
        Self {
            message_id,
            recipient: RECIPIENT,
            dkim: "PASS",
            spam: "PASS",
            spf: "PASS",
            virus: "PASS",
        }
    }
}

pub fn ses_event(records: &[RecordSpec<'_>]) -> SesEvent {
    let records: Vec<Value> = records
        .iter()
        .map(|record| {
            json!({
                "eventSource": "aws:ses",
                "eventVersion": "1.0",
                "ses": {
                    "mail": {
                        "timestamp": "2026-10-17T08:00:00.000Z",
                        "source": "no-reply-aws@amazon.com",
                        "messageId": record.message_id,
                        "destination": [record.recipient]
                    },
                    "receipt": {
                        "recipients": [record.recipient],
                        "dkimVerdict": { "status": record.dkim },
                        "spamVerdict": { "status": record.spam },
                        "spfVerdict": { "status": record.spf },
                        "virusVerdict": { "status": record.virus }
                    }
                }
            })
        })
        .collect();
    serde_json::from_value(json!({ "Records": records })).expect("ses event fixture parses")
}

pub fn plain_mail(subject: &str, body: &str) -> Vec<u8> {
    format!(
        "From: AWS <no-reply-aws@amazon.com>\r\n\
         To: {RECIPIENT}\r\n\
         Subject: {subject}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         \r\n\
         {body}\r\n"
    )
    .into_bytes()
}

pub fn html_mail(subject: &str, html: &str) -> Vec<u8> {
    format!(
        "From: AWS <no-reply-aws@amazon.com>\r\n\
         To: {RECIPIENT}\r\n\
         Subject: {subject}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         \r\n\
         {html}\r\n"
    )
    .into_bytes()
}
