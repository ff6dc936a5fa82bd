use aws_sdk_ssm::types::{OpsItemDataType, OpsItemDataValue, ParameterTier, ParameterType};
use rootmail_core::ops_ticket::OpsTicketDraft;
use rootmail_core::password_reset::PasswordResetParameter;

use crate::adapters::ops_center::OpsTicketing;
use crate::adapters::parameter_store::ParameterStore;

use super::block_on;

#[derive(Debug, Clone)]
pub struct SsmAdapter {
    client: aws_sdk_ssm::Client,
}

impl SsmAdapter {
    pub fn new(client: aws_sdk_ssm::Client) -> Self {
        Self { client }
    }
}

impl ParameterStore for SsmAdapter {
    fn put_reset_parameter(&self, parameter: &PasswordResetParameter) -> Result<(), String> {
        block_on(
            self.client
                .put_parameter()
                .name(&parameter.name)
                .value(&parameter.value)
                .overwrite(parameter.overwrite)
                .r#type(ParameterType::String)
                .tier(ParameterTier::Advanced)
                .policies(&parameter.policies)
                .send(),
        )
        .map(|_| ())
        .map_err(|error| format!("{error:?}"))
    }
}

impl OpsTicketing for SsmAdapter {
    fn create_ops_item(&self, ticket: &OpsTicketDraft) -> Result<Option<String>, String> {
        let mut request = self
            .client
            .create_ops_item()
            .title(&ticket.title)
            .description(&ticket.description)
            .source(&ticket.source);
        for (key, entry) in &ticket.operational_data {
            request = request.operational_data(
                key,
                OpsItemDataValue::builder()
                    .value(&entry.value)
                    .r#type(OpsItemDataType::from(entry.data_type))
                    .build(),
            );
        }

        block_on(request.send())
            .map(|output| output.ops_item_id().map(str::to_string))
            .map_err(|error| format!("{error:?}"))
    }
}
