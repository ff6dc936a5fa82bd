pub const RULE_SET_NAME: &str = "RootMail";
pub const RULE_NAME: &str = "Receive";
pub const MAIL_OBJECT_PREFIX: &str = "RootMail";
/// Object SES writes into the bucket once a new receipt rule's S3 action works.
pub const SETUP_NOTIFICATION_KEY: &str = "RootMail/AMAZON_SES_SETUP_NOTIFICATION";

/// The single receipt rule routing root mail to storage and to the mail processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRuleSpec {
    pub rule_set_name: String,
    pub rule_name: String,
    pub recipient: String,
    pub bucket_name: String,
    pub object_key_prefix: String,
    pub function_arn: String,
}

impl ReceiptRuleSpec {
    pub fn for_rootmail(domain: &str, subdomain: &str, bucket_name: &str, function_arn: &str) -> Self {
        Self {
            rule_set_name: RULE_SET_NAME.to_string(),
            rule_name: RULE_NAME.to_string(),
            recipient: rootmail_recipient(subdomain, domain),
            bucket_name: bucket_name.to_string(),
            object_key_prefix: MAIL_OBJECT_PREFIX.to_string(),
            function_arn: function_arn.to_string(),
        }
    }
}

/// Address the receipt rule matches; plus-addressed variants land on the same rule.
pub fn rootmail_recipient(subdomain: &str, domain: &str) -> String {
    format!("root@{subdomain}.{domain}")
}
