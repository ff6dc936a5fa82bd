#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use rootmail_core::ops_ticket::OpsTicketDraft;
use rootmail_core::password_reset::PasswordResetParameter;
use rootmail_core::rule_set::ReceiptRuleSpec;
use rootmail_lambda::adapters::callback::CallbackSender;
use rootmail_lambda::adapters::identity::EmailIdentityService;
use rootmail_lambda::adapters::object_store::MailObjectStore;
use rootmail_lambda::adapters::ops_center::OpsTicketing;
use rootmail_lambda::adapters::parameter_store::ParameterStore;
use rootmail_lambda::adapters::receipt_rules::ReceiptRuleAdmin;
use rootmail_lambda::adapters::sleeper::Sleeper;
use serde_json::Value;

/// Bucket contents keyed by `(bucket, key)`; every read is recorded.
#[derive(Default)]
pub struct RecordingStore {
    objects: HashMap<(String, String), Vec<u8>>,
    pub reads: Mutex<Vec<(String, String)>>,
}

impl RecordingStore {
    pub fn with_object(mut self, bucket: &str, key: &str, body: Vec<u8>) -> Self {
        self.objects
            .insert((bucket.to_string(), key.to_string()), body);
        self
    }

    pub fn reads(&self) -> Vec<(String, String)> {
        self.reads.lock().expect("poisoned mutex").clone()
    }
}

impl MailObjectStore for RecordingStore {
    fn fetch_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, String> {
        self.reads
            .lock()
            .expect("poisoned mutex")
            .push((bucket.to_string(), key.to_string()));
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| format!("NoSuchKey: {key}"))
    }

    fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, String> {
        self.reads
            .lock()
            .expect("poisoned mutex")
            .push((bucket.to_string(), key.to_string()));
        Ok(self
            .objects
            .contains_key(&(bucket.to_string(), key.to_string())))
    }
}

/// Fails every request; useful where storage must not be touched.
pub struct UnreachableStore;

impl MailObjectStore for UnreachableStore {
    fn fetch_object(&self, _bucket: &str, _key: &str) -> Result<Vec<u8>, String> {
        Err("AccessDenied".to_string())
    }

    fn object_exists(&self, _bucket: &str, _key: &str) -> Result<bool, String> {
        Err("AccessDenied".to_string())
    }
}

#[derive(Default)]
pub struct RecordingParameters {
    pub written: Mutex<Vec<PasswordResetParameter>>,
}

impl RecordingParameters {
    pub fn written(&self) -> Vec<PasswordResetParameter> {
        self.written.lock().expect("poisoned mutex").clone()
    }
}

impl ParameterStore for RecordingParameters {
    fn put_reset_parameter(&self, parameter: &PasswordResetParameter) -> Result<(), String> {
        self.written
            .lock()
            .expect("poisoned mutex")
            .push(parameter.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingOps {
    pub created: Mutex<Vec<OpsTicketDraft>>,
}

impl RecordingOps {
    pub fn created(&self) -> Vec<OpsTicketDraft> {
        self.created.lock().expect("poisoned mutex").clone()
    }
}

impl OpsTicketing for RecordingOps {
    fn create_ops_item(&self, ticket: &OpsTicketDraft) -> Result<Option<String>, String> {
        let mut created = self.created.lock().expect("poisoned mutex");
        created.push(ticket.clone());
        Ok(Some(format!("oi-{:04}", created.len())))
    }
}

/// Captures callback bodies as JSON.
#[derive(Default)]
pub struct RecordingSender {
    pub calls: Mutex<Vec<(String, Value)>>,
}

impl RecordingSender {
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().expect("poisoned mutex").clone()
    }
}

impl CallbackSender for RecordingSender {
    fn put_json(&self, url: &str, body: &[u8]) -> Result<(), String> {
        let value = serde_json::from_slice(body).map_err(|error| error.to_string())?;
        self.calls
            .lock()
            .expect("poisoned mutex")
            .push((url.to_string(), value));
        Ok(())
    }
}

/// Records receipt-rule calls in order and fails the named operation.
#[derive(Default)]
pub struct RecordingRules {
    pub calls: Mutex<Vec<String>>,
    pub created_rules: Mutex<Vec<ReceiptRuleSpec>>,
    fail_on: Option<&'static str>,
}

impl RecordingRules {
    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            fail_on: Some(operation),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("poisoned mutex").clone()
    }

    fn record(&self, operation: &'static str, call: String) -> Result<(), String> {
        self.calls.lock().expect("poisoned mutex").push(call);
        if self.fail_on == Some(operation) {
            return Err(format!("{operation} rejected"));
        }
        Ok(())
    }
}

impl ReceiptRuleAdmin for RecordingRules {
    fn create_rule_set(&self, rule_set_name: &str) -> Result<(), String> {
        self.record("create_rule_set", format!("create_rule_set {rule_set_name}"))
    }

    fn create_rule(&self, spec: &ReceiptRuleSpec) -> Result<(), String> {
        self.created_rules
            .lock()
            .expect("poisoned mutex")
            .push(spec.clone());
        self.record(
            "create_rule",
            format!("create_rule {}/{}", spec.rule_set_name, spec.rule_name),
        )
    }

    fn set_active_rule_set(&self, rule_set_name: Option<&str>) -> Result<(), String> {
        self.record(
            "set_active_rule_set",
            format!("set_active_rule_set {}", rule_set_name.unwrap_or("<none>")),
        )
    }

    fn delete_rule(&self, rule_set_name: &str, rule_name: &str) -> Result<(), String> {
        self.record(
            "delete_rule",
            format!("delete_rule {rule_set_name}/{rule_name}"),
        )
    }

    fn delete_rule_set(&self, rule_set_name: &str) -> Result<(), String> {
        self.record("delete_rule_set", format!("delete_rule_set {rule_set_name}"))
    }
}

/// Scripted SES identity service. Each readiness getter pops its next answer;
/// an exhausted script keeps answering "ready".
#[derive(Default)]
pub struct ScriptedIdentity {
    pub verification_token: Option<String>,
    pub dkim_tokens: Vec<String>,
    pub fail_dkim: bool,
    pub sending: Mutex<VecDeque<bool>>,
    pub verification: Mutex<VecDeque<Option<String>>>,
    pub dkim: Mutex<VecDeque<Option<String>>>,
    pub forwarding: Mutex<VecDeque<Option<bool>>>,
    pub calls: Mutex<Vec<&'static str>>,
    pub domains: Mutex<HashSet<String>>,
}

impl ScriptedIdentity {
    pub fn issuing_tokens(verification_token: &str, dkim_tokens: &[&str]) -> Self {
        Self {
            verification_token: Some(verification_token.to_string()),
            dkim_tokens: dkim_tokens.iter().map(|token| token.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("poisoned mutex").clone()
    }

    fn record(&self, call: &'static str, domain: Option<&str>) {
        self.calls.lock().expect("poisoned mutex").push(call);
        if let Some(domain) = domain {
            self.domains
                .lock()
                .expect("poisoned mutex")
                .insert(domain.to_string());
        }
    }
}

impl EmailIdentityService for ScriptedIdentity {
    fn verify_domain_identity(&self, domain: &str) -> Result<String, String> {
        self.record("verify_domain_identity", Some(domain));
        self.verification_token
            .clone()
            .ok_or_else(|| "VerifyDomainIdentity throttled".to_string())
    }

    fn verify_domain_dkim(&self, domain: &str) -> Result<Vec<String>, String> {
        self.record("verify_domain_dkim", Some(domain));
        if self.fail_dkim {
            return Err("VerifyDomainDkim throttled".to_string());
        }
        Ok(self.dkim_tokens.clone())
    }

    fn account_sending_enabled(&self) -> Result<bool, String> {
        self.record("account_sending_enabled", None);
        Ok(self
            .sending
            .lock()
            .expect("poisoned mutex")
            .pop_front()
            .unwrap_or(true))
    }

    fn identity_verification_status(&self, identity: &str) -> Result<Option<String>, String> {
        self.record("identity_verification_status", Some(identity));
        Ok(self
            .verification
            .lock()
            .expect("poisoned mutex")
            .pop_front()
            .unwrap_or_else(|| Some("Success".to_string())))
    }

    fn identity_dkim_status(&self, identity: &str) -> Result<Option<String>, String> {
        self.record("identity_dkim_status", Some(identity));
        Ok(self
            .dkim
            .lock()
            .expect("poisoned mutex")
            .pop_front()
            .unwrap_or_else(|| Some("Success".to_string())))
    }

    fn identity_forwarding_enabled(&self, identity: &str) -> Result<Option<bool>, String> {
        self.record("identity_forwarding_enabled", Some(identity));
        Ok(self
            .forwarding
            .lock()
            .expect("poisoned mutex")
            .pop_front()
            .unwrap_or(Some(true)))
    }
}

#[derive(Default)]
pub struct RecordingSleeper {
    pub sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().expect("poisoned mutex").clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().expect("poisoned mutex").push(duration);
    }
}
