use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use rootmail_core::contract::CustomResourceResponse;
use rootmail_lambda::aws::http::HttpCallbackSender;
use rootmail_lambda::aws::ses::SesAdapter;
use rootmail_lambda::handlers::custom_resource::decode_request;
use rootmail_lambda::handlers::receipt_rule_activation::handle_receipt_rule_event;
use rootmail_lambda::logging::{init_logging, warn_if_not_receiving_region};
use serde_json::Value;

struct Services {
    ses: SesAdapter,
    callbacks: HttpCallbackSender,
}

async fn handle_request(
    event: LambdaEvent<Value>,
    services: &Services,
) -> Result<CustomResourceResponse, Error> {
    let log_stream_name = &event.context.env_config.log_stream;
    let request = decode_request(event.payload, log_stream_name, &services.callbacks)?;

    handle_receipt_rule_event(
        &request,
        log_stream_name,
        &services.ses,
        &services.callbacks,
    )
    .map_err(Error::from)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    warn_if_not_receiving_region(aws_config.region().map(|region| region.as_ref()));

    let services = Services {
        ses: SesAdapter::new(aws_sdk_ses::Client::new(&aws_config)),
        callbacks: HttpCallbackSender::new(reqwest::Client::new()),
    };
    let services = &services;

    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, services).await
    }))
    .await
}
