mod support;

use std::collections::VecDeque;
use std::sync::Mutex;

use rootmail_lambda::error::HandlerError;
use rootmail_lambda::handlers::readiness::check_ready;
use serde_json::json;
use support::events::custom_resource_request;
use support::fakes::ScriptedIdentity;

fn domain_properties() -> serde_json::Value {
    json!({ "Domain": "aws.example.com" })
}

#[test]
fn create_is_complete_when_every_check_passes() {
    let request = custom_resource_request("Create", domain_properties());
    let identity = ScriptedIdentity::default();

    let response = check_ready(&request, &identity).expect("check runs");

    assert!(response.is_complete);
    assert_eq!(
        identity.calls(),
        vec![
            "account_sending_enabled",
            "identity_verification_status",
            "identity_dkim_status",
            "identity_forwarding_enabled",
        ]
    );
}

#[test]
fn create_stops_at_first_pending_check() {
    let request = custom_resource_request("Create", domain_properties());
    let identity = ScriptedIdentity {
        dkim: Mutex::new(VecDeque::from([Some("Pending".to_string())])),
        ..ScriptedIdentity::default()
    };

    let response = check_ready(&request, &identity).expect("check runs");

    assert!(!response.is_complete);
    assert_eq!(
        identity.calls(),
        vec![
            "account_sending_enabled",
            "identity_verification_status",
            "identity_dkim_status",
        ]
    );
}

#[test]
fn disabled_sending_is_not_complete() {
    let request = custom_resource_request("Create", domain_properties());
    let identity = ScriptedIdentity {
        sending: Mutex::new(VecDeque::from([false])),
        ..ScriptedIdentity::default()
    };

    let response = check_ready(&request, &identity).expect("check runs");

    assert!(!response.is_complete);
    assert_eq!(identity.calls(), vec!["account_sending_enabled"]);
}

#[test]
fn update_and_delete_are_complete_without_calls() {
    for request_type in ["Update", "Delete"] {
        let request = custom_resource_request(request_type, domain_properties());
        let identity = ScriptedIdentity::default();

        let response = check_ready(&request, &identity).expect("no calls needed");

        assert!(response.is_complete, "{request_type}");
        assert!(identity.calls().is_empty(), "{request_type}");
    }
}

#[test]
fn create_without_domain_is_an_error() {
    let request = custom_resource_request("Create", json!({}));

    let error = check_ready(&request, &ScriptedIdentity::default()).expect_err("domain missing");

    assert!(matches!(error, HandlerError::Contract(_)));
}
