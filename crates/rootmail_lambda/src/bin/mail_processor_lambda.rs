use aws_config::BehaviorVersion;
use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use rootmail_core::mail::SesEvent;
use rootmail_lambda::aws::s3::S3Adapter;
use rootmail_lambda::aws::ssm::SsmAdapter;
use rootmail_lambda::config::MailProcessorConfig;
use rootmail_lambda::handlers::mail_processor::process_ses_event;
use rootmail_lambda::logging::{init_logging, warn_if_not_receiving_region};
use serde_json::Value;

struct Services {
    config: MailProcessorConfig,
    s3: S3Adapter,
    ssm: SsmAdapter,
}

async fn handle_request(event: LambdaEvent<Value>, services: &Services) -> Result<(), Error> {
    let ses_event: SesEvent = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid SES event: {error}")))?;

    let outcomes = process_ses_event(
        &ses_event,
        &services.config,
        &services.s3,
        &services.ssm,
        &services.ssm,
        Utc::now(),
    )?;
    tracing::debug!(records = outcomes.len(), "processed SES event");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    let config = MailProcessorConfig::from_env()?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    warn_if_not_receiving_region(aws_config.region().map(|region| region.as_ref()));

    let services = Services {
        config,
        s3: S3Adapter::new(aws_sdk_s3::Client::new(&aws_config)),
        ssm: SsmAdapter::new(aws_sdk_ssm::Client::new(&aws_config)),
    };
    let services = &services;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, services).await
    }))
    .await
}
