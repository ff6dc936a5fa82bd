use aws_sdk_ses::types::{LambdaAction, ReceiptAction, ReceiptRule, S3Action, TlsPolicy};
use rootmail_core::rule_set::ReceiptRuleSpec;

use crate::adapters::identity::EmailIdentityService;
use crate::adapters::receipt_rules::ReceiptRuleAdmin;

use super::block_on;

#[derive(Debug, Clone)]
pub struct SesAdapter {
    client: aws_sdk_ses::Client,
}

impl SesAdapter {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }
}

fn build_receipt_rule(spec: &ReceiptRuleSpec) -> Result<ReceiptRule, String> {
    let s3_action = S3Action::builder()
        .bucket_name(&spec.bucket_name)
        .object_key_prefix(&spec.object_key_prefix)
        .build()
        .map_err(|error| format!("invalid S3 action: {error}"))?;
    let lambda_action = LambdaAction::builder()
        .function_arn(&spec.function_arn)
        .build()
        .map_err(|error| format!("invalid Lambda action: {error}"))?;

    ReceiptRule::builder()
        .name(&spec.rule_name)
        .enabled(true)
        .tls_policy(TlsPolicy::Require)
        .scan_enabled(true)
        .recipients(&spec.recipient)
        .actions(ReceiptAction::builder().s3_action(s3_action).build())
        .actions(ReceiptAction::builder().lambda_action(lambda_action).build())
        .build()
        .map_err(|error| format!("invalid receipt rule: {error}"))
}

impl EmailIdentityService for SesAdapter {
    fn verify_domain_identity(&self, domain: &str) -> Result<String, String> {
        block_on(
            self.client
                .verify_domain_identity()
                .domain(domain)
                .send(),
        )
        .map(|output| output.verification_token().to_string())
        .map_err(|error| format!("{error:?}"))
    }

    fn verify_domain_dkim(&self, domain: &str) -> Result<Vec<String>, String> {
        block_on(self.client.verify_domain_dkim().domain(domain).send())
            .map(|output| output.dkim_tokens().to_vec())
            .map_err(|error| format!("{error:?}"))
    }

    fn account_sending_enabled(&self) -> Result<bool, String> {
        block_on(self.client.get_account_sending_enabled().send())
            .map(|output| output.enabled())
            .map_err(|error| format!("{error:?}"))
    }

    fn identity_verification_status(&self, identity: &str) -> Result<Option<String>, String> {
        block_on(
            self.client
                .get_identity_verification_attributes()
                .identities(identity)
                .send(),
        )
        .map(|output| {
            output
                .verification_attributes()
                .get(identity)
                .map(|attributes| attributes.verification_status().as_str().to_string())
        })
        .map_err(|error| format!("{error:?}"))
    }

    fn identity_dkim_status(&self, identity: &str) -> Result<Option<String>, String> {
        block_on(
            self.client
                .get_identity_dkim_attributes()
                .identities(identity)
                .send(),
        )
        .map(|output| {
            output
                .dkim_attributes()
                .get(identity)
                .map(|attributes| attributes.dkim_verification_status().as_str().to_string())
        })
        .map_err(|error| format!("{error:?}"))
    }

    fn identity_forwarding_enabled(&self, identity: &str) -> Result<Option<bool>, String> {
        block_on(
            self.client
                .get_identity_notification_attributes()
                .identities(identity)
                .send(),
        )
        .map(|output| {
            output
                .notification_attributes()
                .get(identity)
                .map(|attributes| attributes.forwarding_enabled())
        })
        .map_err(|error| format!("{error:?}"))
    }
}

impl ReceiptRuleAdmin for SesAdapter {
    fn create_rule_set(&self, rule_set_name: &str) -> Result<(), String> {
        block_on(
            self.client
                .create_receipt_rule_set()
                .rule_set_name(rule_set_name)
                .send(),
        )
        .map(|_| ())
        .map_err(|error| format!("{error:?}"))
    }

    fn create_rule(&self, spec: &ReceiptRuleSpec) -> Result<(), String> {
        let rule = build_receipt_rule(spec)?;
        block_on(
            self.client
                .create_receipt_rule()
                .rule_set_name(&spec.rule_set_name)
                .rule(rule)
                .send(),
        )
        .map(|_| ())
        .map_err(|error| format!("{error:?}"))
    }

    fn set_active_rule_set(&self, rule_set_name: Option<&str>) -> Result<(), String> {
        block_on(
            self.client
                .set_active_receipt_rule_set()
                .set_rule_set_name(rule_set_name.map(str::to_string))
                .send(),
        )
        .map(|_| ())
        .map_err(|error| format!("{error:?}"))
    }

    fn delete_rule(&self, rule_set_name: &str, rule_name: &str) -> Result<(), String> {
        block_on(
            self.client
                .delete_receipt_rule()
                .rule_set_name(rule_set_name)
                .rule_name(rule_name)
                .send(),
        )
        .map(|_| ())
        .map_err(|error| format!("{error:?}"))
    }

    fn delete_rule_set(&self, rule_set_name: &str) -> Result<(), String> {
        block_on(
            self.client
                .delete_receipt_rule_set()
                .rule_set_name(rule_set_name)
                .send(),
        )
        .map(|_| ())
        .map_err(|error| format!("{error:?}"))
    }
}
