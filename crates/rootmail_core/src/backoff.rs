use std::str::FromStr;
use std::time::Duration;

/// Linear waits of 1..14 seconds add up to 105s per phase, so all four
/// readiness phases fit well inside one invocation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 15;
pub const DEFAULT_DELAY_UNIT: Duration = Duration::from_secs(1);
/// Hard cap on a single Lambda invocation.
pub const LAMBDA_TIME_LIMIT: Duration = Duration::from_secs(900);
const MAX_EXPONENT: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackoffStrategy {
    /// Sleeps `attempt * unit`; matches the historical poller.
    #[default]
    Linear,
    /// Sleeps `2^attempt * unit`, with the exponent capped.
    Exponential,
}

impl FromStr for BackoffStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "exponential" => Ok(Self::Exponential),
            other => Err(format!(
                "unknown backoff strategy '{other}' (expected linear or exponential)"
            )),
        }
    }
}

/// Bounded retry schedule for status polling. Attempts are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub strategy: BackoffStrategy,
    pub unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            strategy: BackoffStrategy::Linear,
            unit: DEFAULT_DELAY_UNIT,
        }
    }
}

impl RetryPolicy {
    /// Delay applied after the `attempt`-th unsuccessful poll.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = match self.strategy {
            BackoffStrategy::Linear => attempt,
            BackoffStrategy::Exponential => 2u32.saturating_pow(attempt.min(MAX_EXPONENT)),
        };
        self.unit.saturating_mul(factor)
    }

    /// Longest time one phase can spend sleeping before it gives up.
    pub fn max_total_sleep(&self) -> Duration {
        (1..self.max_attempts)
            .map(|attempt| self.delay_for_attempt(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}
