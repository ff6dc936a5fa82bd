use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ContractError;

pub const READY_SIGNAL_REASON: &str = "RootMail Setup completed";
pub const READY_SIGNAL_DATA: &str = "RootMail Setup completed";
pub const CALLBACK_REASON_PREFIX: &str = "See the details in CloudWatch Log Stream: ";

/// Attribute map returned to the provisioning framework on success.
pub type CustomResourceData = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

/// CloudFormation custom-resource request, also used for provider-framework
/// is-complete probes (which carry no `ResponseURL`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceRequest {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL", default)]
    pub response_url: String,
    #[serde(default)]
    pub stack_id: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub resource_type: String,
    pub logical_resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
    #[serde(default)]
    pub resource_properties: BTreeMap<String, Value>,
}

impl CustomResourceRequest {
    /// Returns a required string property, failing when it is absent or not a string.
    pub fn property(&self, name: &str) -> Result<&str, ContractError> {
        self.resource_properties
            .get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| ContractError::MissingProperty(name.to_string()))
    }

    /// Returns the first present string property among `names`.
    pub fn property_any(&self, names: &[&str]) -> Result<&str, ContractError> {
        names
            .iter()
            .find_map(|name| self.resource_properties.get(*name).and_then(Value::as_str))
            .ok_or_else(|| ContractError::MissingProperty(names.join(" | ")))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResponseStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

impl ResponseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub no_echo: bool,
    pub data: CustomResourceData,
}

impl CustomResourceResponse {
    pub fn success(
        request: &CustomResourceRequest,
        data: CustomResourceData,
        log_stream_name: &str,
    ) -> Self {
        Self::build(request, ResponseStatus::Success, data, log_stream_name)
    }

    /// Failures never carry data.
    pub fn failure(request: &CustomResourceRequest, log_stream_name: &str) -> Self {
        Self::build(
            request,
            ResponseStatus::Failed,
            CustomResourceData::new(),
            log_stream_name,
        )
    }

    /// FAILED answer for an event that did not decode into a request. Only
    /// identifiers present as strings are echoed back.
    pub fn failure_for_raw_event(event: &Value, log_stream_name: &str) -> Self {
        let field = |name: &str| event.get(name).and_then(Value::as_str).map(str::to_string);
        let physical_resource_id = field("PhysicalResourceId")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| log_stream_name.to_string());

        Self {
            status: ResponseStatus::Failed,
            reason: format!("{CALLBACK_REASON_PREFIX}{log_stream_name}"),
            physical_resource_id,
            stack_id: field("StackId").unwrap_or_default(),
            request_id: field("RequestId").unwrap_or_default(),
            logical_resource_id: field("LogicalResourceId").unwrap_or_default(),
            no_echo: false,
            data: CustomResourceData::new(),
        }
    }

    /// `ResponseURL` of a raw event, when it carries a non-empty one.
    pub fn raw_response_url(event: &Value) -> Option<&str> {
        event
            .get("ResponseURL")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }

    fn build(
        request: &CustomResourceRequest,
        status: ResponseStatus,
        data: CustomResourceData,
        log_stream_name: &str,
    ) -> Self {
        let physical_resource_id = request
            .physical_resource_id
            .clone()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| log_stream_name.to_string());

        Self {
            status,
            reason: format!("{CALLBACK_REASON_PREFIX}{log_stream_name}"),
            physical_resource_id,
            stack_id: request.stack_id.clone(),
            request_id: request.request_id.clone(),
            logical_resource_id: request.logical_resource_id.clone(),
            no_echo: false,
            data,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IsCompleteResponse {
    #[serde(rename = "IsComplete")]
    pub is_complete: bool,
}

/// Body PUT to the wait-condition URL once the root mail setup is finished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ReadySignal {
    pub status: String,
    pub reason: String,
    pub unique_id: String,
    pub data: String,
}

impl ReadySignal {
    pub fn completed(unique_id: impl Into<String>) -> Self {
        Self {
            status: "SUCCESS".to_string(),
            reason: READY_SIGNAL_REASON.to_string(),
            unique_id: unique_id.into(),
            data: READY_SIGNAL_DATA.to_string(),
        }
    }
}
