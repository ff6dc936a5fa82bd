use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use rootmail_core::backoff::LAMBDA_TIME_LIMIT;
use rootmail_lambda::adapters::sleeper::BlockingSleeper;
use rootmail_lambda::aws::ses::SesAdapter;
use rootmail_lambda::config::ReadinessConfig;
use rootmail_lambda::handlers::readiness::wait_until_ready;
use rootmail_lambda::logging::{init_logging, warn_if_not_receiving_region};
use serde_json::Value;

async fn handle_request(
    _event: LambdaEvent<Value>,
    config: &ReadinessConfig,
    ses: &SesAdapter,
) -> Result<(), Error> {
    wait_until_ready(&config.domain, &config.policy, ses, &BlockingSleeper).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    let config = ReadinessConfig::from_env()?;
    if config.worst_case_sleep() > LAMBDA_TIME_LIMIT {
        tracing::warn!(
            worst_case_sleep_secs = config.worst_case_sleep().as_secs(),
            limit_secs = LAMBDA_TIME_LIMIT.as_secs(),
            "readiness retry policy outlasts the Lambda time limit"
        );
    }

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    warn_if_not_receiving_region(aws_config.region().map(|region| region.as_ref()));
    let ses = SesAdapter::new(aws_sdk_ses::Client::new(&aws_config));

    let (config, ses) = (&config, &ses);
    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, config, ses).await
    }))
    .await
}
