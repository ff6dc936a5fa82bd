pub mod custom_resource;
pub mod domain_verification;
pub mod mail_processor;
pub mod readiness;
pub mod ready_signal;
pub mod receipt_rule_activation;
pub mod receipt_rule_probe;
