use lambda_runtime::{service_fn, Error, LambdaEvent};
use rootmail_lambda::aws::http::HttpCallbackSender;
use rootmail_lambda::config::ReadySignalConfig;
use rootmail_lambda::handlers::ready_signal::send_ready_signal;
use rootmail_lambda::logging::init_logging;
use serde_json::Value;
use uuid::Uuid;

async fn handle_request(
    _event: LambdaEvent<Value>,
    config: &ReadySignalConfig,
    sender: &HttpCallbackSender,
) -> Result<(), Error> {
    let unique_id = Uuid::new_v4().to_string();
    send_ready_signal(&config.signal_url, &unique_id, sender)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();
    let config = ReadySignalConfig::from_env()?;
    let sender = HttpCallbackSender::new(reqwest::Client::new());

    let (config, sender) = (&config, &sender);
    lambda_runtime::run(service_fn(move |event| async move {
        handle_request(event, config, sender).await
    }))
    .await
}
