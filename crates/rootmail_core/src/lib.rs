//! Shared rootmail domain primitives.
//!
//! This crate owns the wire contracts (custom-resource requests and responses,
//! SES receipt notifications, the completion signal) and the deterministic mail
//! triage rules. It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod backoff;
pub mod contract;
pub mod error;
pub mod mail;
pub mod ops_ticket;
pub mod password_reset;
pub mod regions;
pub mod rule_set;
pub mod triage;
pub mod truncate;
