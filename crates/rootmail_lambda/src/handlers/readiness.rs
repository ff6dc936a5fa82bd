use rootmail_core::backoff::RetryPolicy;
use rootmail_core::contract::{CustomResourceRequest, IsCompleteResponse, RequestType};
use tracing::{debug, info};

use crate::adapters::identity::EmailIdentityService;
use crate::adapters::sleeper::Sleeper;
use crate::error::HandlerError;

const VERIFICATION_SUCCESS: &str = "Success";
pub const PROP_DOMAIN: &str = "Domain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessPhase {
    SendingEnabled,
    DomainVerified,
    DkimVerified,
    ForwardingEnabled,
}

impl ReadinessPhase {
    pub const ALL: [Self; 4] = [
        Self::SendingEnabled,
        Self::DomainVerified,
        Self::DkimVerified,
        Self::ForwardingEnabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendingEnabled => "sending_enabled",
            Self::DomainVerified => "domain_verified",
            Self::DkimVerified => "dkim_verified",
            Self::ForwardingEnabled => "forwarding_enabled",
        }
    }

    fn waiting_message(self) -> &'static str {
        match self {
            Self::SendingEnabled => "sending not yet enabled",
            Self::DomainVerified => "verification not yet successful",
            Self::DkimVerified => "DKIM verification not yet successful",
            Self::ForwardingEnabled => "forwarding not yet enabled",
        }
    }
}

struct Observation {
    ready: bool,
    observed: String,
}

fn observe(
    phase: ReadinessPhase,
    domain: &str,
    identity: &impl EmailIdentityService,
) -> Result<Observation, HandlerError> {
    let observation = match phase {
        ReadinessPhase::SendingEnabled => {
            let enabled = identity
                .account_sending_enabled()
                .map_err(HandlerError::service("GetAccountSendingEnabled"))?;
            Observation {
                ready: enabled,
                observed: format!("enabled={enabled}"),
            }
        }
        ReadinessPhase::DomainVerified => {
            let status = identity
                .identity_verification_status(domain)
                .map_err(HandlerError::service("GetIdentityVerificationAttributes"))?;
            Observation {
                ready: status.as_deref() == Some(VERIFICATION_SUCCESS),
                observed: format!("verification_status={status:?}"),
            }
        }
        ReadinessPhase::DkimVerified => {
            let status = identity
                .identity_dkim_status(domain)
                .map_err(HandlerError::service("GetIdentityDkimAttributes"))?;
            Observation {
                ready: status.as_deref() == Some(VERIFICATION_SUCCESS),
                observed: format!("dkim_verification_status={status:?}"),
            }
        }
        ReadinessPhase::ForwardingEnabled => {
            let enabled = identity
                .identity_forwarding_enabled(domain)
                .map_err(HandlerError::service("GetIdentityNotificationAttributes"))?;
            Observation {
                ready: enabled == Some(true),
                observed: format!("forwarding_enabled={enabled:?}"),
            }
        }
    };
    Ok(observation)
}

/// Polls one phase until ready; returns the number of polls it took.
pub fn wait_for_phase(
    phase: ReadinessPhase,
    domain: &str,
    policy: &RetryPolicy,
    identity: &impl EmailIdentityService,
    sleeper: &impl Sleeper,
) -> Result<u32, HandlerError> {
    for attempt in 1..=policy.max_attempts {
        let observation = observe(phase, domain, identity)?;
        if observation.ready {
            info!(phase = phase.as_str(), domain, attempts = attempt, "phase ready");
            return Ok(attempt);
        }
        if attempt == policy.max_attempts {
            break;
        }

        let delay = policy.delay_for_attempt(attempt);
        info!(
            phase = phase.as_str(),
            res = %observation.observed,
            round = attempt,
            waiting_in_seconds = delay.as_secs(),
            "{}",
            phase.waiting_message()
        );
        sleeper.sleep(delay);
    }

    Err(HandlerError::PollExhausted {
        phase: phase.as_str(),
        attempts: policy.max_attempts,
    })
}

/// Waits, in order, for sending, domain verification, DKIM and forwarding.
pub fn wait_until_ready(
    domain: &str,
    policy: &RetryPolicy,
    identity: &impl EmailIdentityService,
    sleeper: &impl Sleeper,
) -> Result<(), HandlerError> {
    for phase in ReadinessPhase::ALL {
        wait_for_phase(phase, domain, policy, identity, sleeper)?;
    }
    info!(domain, "root mail domain is ready");
    Ok(())
}

/// Single pass over the readiness phases for the provider framework's
/// is-complete hook. Stops at the first phase that is not ready yet.
pub fn check_ready(
    request: &CustomResourceRequest,
    identity: &impl EmailIdentityService,
) -> Result<IsCompleteResponse, HandlerError> {
    if request.request_type != RequestType::Create {
        return Ok(IsCompleteResponse { is_complete: true });
    }

    let domain = request.property(PROP_DOMAIN)?;
    for phase in ReadinessPhase::ALL {
        let observation = observe(phase, domain, identity)?;
        if !observation.ready {
            info!(
                phase = phase.as_str(),
                domain,
                res = %observation.observed,
                "{}",
                phase.waiting_message()
            );
            return Ok(IsCompleteResponse { is_complete: false });
        }
        debug!(phase = phase.as_str(), domain, "phase ready");
    }

    info!(domain, "root mail domain is ready");
    Ok(IsCompleteResponse { is_complete: true })
}
