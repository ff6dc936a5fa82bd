use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use rootmail_core::contract::{CustomResourceRequest, IsCompleteResponse};
use rootmail_lambda::aws::s3::S3Adapter;
use rootmail_lambda::handlers::receipt_rule_probe::probe_setup_complete;
use rootmail_lambda::logging::init_logging;
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    store: &S3Adapter,
) -> Result<IsCompleteResponse, Error> {
    let request: CustomResourceRequest = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid is-complete event: {error}")))?;

    probe_setup_complete(&request, store).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = S3Adapter::new(aws_sdk_s3::Client::new(&aws_config));
    let store = &store;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, store).await
    }))
    .await
}
