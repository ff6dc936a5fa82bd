use std::collections::BTreeMap;

use serde_json::json;

use crate::truncate::{truncate_with_marker, DESCRIPTION_LIMIT, SOURCE_LIMIT, TITLE_LIMIT};

pub const DEDUP_KEY: &str = "/aws/dedup";
pub const RESOURCES_KEY: &str = "/aws/resources";
pub const SEARCHABLE_STRING: &str = "SearchableString";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationalDataEntry {
    pub value: String,
    pub data_type: &'static str,
}

/// OpsItem request derived from one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpsTicketDraft {
    pub title: String,
    pub description: String,
    pub source: String,
    pub operational_data: BTreeMap<String, OperationalDataEntry>,
}

impl OpsTicketDraft {
    pub fn from_mail(
        message_id: &str,
        object_arn: &str,
        subject: &str,
        body: &str,
        recipient: &str,
    ) -> Self {
        let operational_data = BTreeMap::from([
            (
                DEDUP_KEY.to_string(),
                OperationalDataEntry {
                    value: json!({ "dedupString": message_id }).to_string(),
                    data_type: SEARCHABLE_STRING,
                },
            ),
            (
                RESOURCES_KEY.to_string(),
                OperationalDataEntry {
                    value: json!([{ "arn": object_arn }]).to_string(),
                    data_type: SEARCHABLE_STRING,
                },
            ),
        ]);

        Self {
            title: truncate_with_marker(subject, TITLE_LIMIT),
            description: truncate_with_marker(body, DESCRIPTION_LIMIT),
            source: truncate_with_marker(recipient, SOURCE_LIMIT),
            operational_data,
        }
    }
}

/// ARN of an archived message object, e.g. `arn:aws:s3:::bucket/RootMail/<id>`.
pub fn mail_object_arn(bucket_arn: &str, object_key: &str) -> String {
    format!("{bucket_arn}/{object_key}")
}
