//! Environment configuration, resolved once per process before the runtime loop starts.

use std::time::Duration;

use rootmail_core::backoff::{BackoffStrategy, RetryPolicy};

use crate::error::HandlerError;
use crate::handlers::readiness::ReadinessPhase;

pub const DOMAIN_VAR: &str = "DOMAIN";
pub const SUB_DOMAIN_VAR: &str = "SUB_DOMAIN";
pub const MAX_ATTEMPTS_VAR: &str = "READINESS_MAX_ATTEMPTS";
pub const BACKOFF_VAR: &str = "READINESS_BACKOFF";
pub const BACKOFF_UNIT_VAR: &str = "READINESS_BACKOFF_UNIT_SECS";
pub const EMAIL_BUCKET_VAR: &str = "EMAIL_BUCKET";
pub const EMAIL_BUCKET_ARN_VAR: &str = "EMAIL_BUCKET_ARN";
pub const SIGNAL_URL_VAR: &str = "SIGNAL_URL";

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, HandlerError> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(HandlerError::MissingConfig(name))
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64(value: &str, name: &'static str) -> Result<u64, HandlerError> {
    value.parse().map_err(|error| HandlerError::InvalidConfig {
        name,
        message: format!("{error}"),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessConfig {
    /// Fully qualified mail domain, `<SUB_DOMAIN>.<DOMAIN>`.
    pub domain: String,
    pub policy: RetryPolicy,
}

impl ReadinessConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        let domain = required(&lookup, DOMAIN_VAR)?;
        let sub_domain = required(&lookup, SUB_DOMAIN_VAR)?;

        let mut policy = RetryPolicy::default();
        if let Some(value) = optional(&lookup, MAX_ATTEMPTS_VAR) {
            let max_attempts = parse_u64(&value, MAX_ATTEMPTS_VAR)?;
            if max_attempts == 0 {
                return Err(HandlerError::InvalidConfig {
                    name: MAX_ATTEMPTS_VAR,
                    message: "must be a positive integer".to_string(),
                });
            }
            policy.max_attempts = u32::try_from(max_attempts).unwrap_or(u32::MAX);
        }
        if let Some(value) = optional(&lookup, BACKOFF_VAR) {
            policy.strategy = value
                .parse::<BackoffStrategy>()
                .map_err(|message| HandlerError::InvalidConfig {
                    name: BACKOFF_VAR,
                    message,
                })?;
        }
        if let Some(value) = optional(&lookup, BACKOFF_UNIT_VAR) {
            policy.unit = Duration::from_secs(parse_u64(&value, BACKOFF_UNIT_VAR)?);
        }

        Ok(Self {
            domain: format!("{sub_domain}.{domain}"),
            policy,
        })
    }

    /// Total sleep when every phase uses up its attempts.
    pub fn worst_case_sleep(&self) -> Duration {
        let phases = ReadinessPhase::ALL.len() as u32;
        self.policy.max_total_sleep().saturating_mul(phases)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailProcessorConfig {
    pub bucket: String,
    pub bucket_arn: String,
}

impl MailProcessorConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        let bucket = required(&lookup, EMAIL_BUCKET_VAR)?;
        let bucket_arn = optional(&lookup, EMAIL_BUCKET_ARN_VAR)
            .unwrap_or_else(|| format!("arn:aws:s3:::{bucket}"));
        Ok(Self { bucket, bucket_arn })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadySignalConfig {
    pub signal_url: String,
}

impl ReadySignalConfig {
    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HandlerError> {
        Ok(Self {
            signal_url: required(&lookup, SIGNAL_URL_VAR)?,
        })
    }
}
