use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use rootmail_core::contract::{CustomResourceRequest, IsCompleteResponse};
use rootmail_lambda::aws::ses::SesAdapter;
use rootmail_lambda::handlers::readiness::check_ready;
use rootmail_lambda::logging::{init_logging, warn_if_not_receiving_region};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    ses: &SesAdapter,
) -> Result<IsCompleteResponse, Error> {
    let request: CustomResourceRequest = serde_json::from_value(event.payload)
        .map_err(|error| Error::from(format!("invalid is-complete event: {error}")))?;

    check_ready(&request, ses).map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    warn_if_not_receiving_region(aws_config.region().map(|region| region.as_ref()));
    let ses = SesAdapter::new(aws_sdk_ses::Client::new(&aws_config));
    let ses = &ses;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, ses).await
    }))
    .await
}
