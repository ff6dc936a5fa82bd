use crate::adapters::log_groups::{LogGroupAdmin, LogGroupPage};

use super::block_on;

#[derive(Debug, Clone)]
pub struct CloudWatchLogsAdapter {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogsAdapter {
    pub fn new(client: aws_sdk_cloudwatchlogs::Client) -> Self {
        Self { client }
    }
}

impl LogGroupAdmin for CloudWatchLogsAdapter {
    fn list_log_groups(&self, next_token: Option<&str>) -> Result<LogGroupPage, String> {
        let output = block_on(
            self.client
                .describe_log_groups()
                .set_next_token(next_token.map(str::to_string))
                .send(),
        )
        .map_err(|error| format!("failed to describe log groups: {error:?}"))?;

        Ok(LogGroupPage {
            names: output
                .log_groups()
                .iter()
                .filter_map(|group| group.log_group_name().map(str::to_string))
                .collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }

    fn delete_log_group(&self, name: &str) -> Result<(), String> {
        block_on(self.client.delete_log_group().log_group_name(name).send())
            .map(|_| ())
            .map_err(|error| format!("failed to delete log group: {error:?}"))
    }
}
