use crate::adapters::callback::CallbackSender;

use super::block_on;

/// PUTs JSON bodies with an empty content type, as pre-signed callback URLs expect.
#[derive(Debug, Clone, Default)]
pub struct HttpCallbackSender {
    client: reqwest::Client,
}

impl HttpCallbackSender {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl CallbackSender for HttpCallbackSender {
    fn put_json(&self, url: &str, body: &[u8]) -> Result<(), String> {
        let request = self
            .client
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, "")
            .body(body.to_vec());

        block_on(async move {
            let response = request
                .send()
                .await
                .map_err(|error| format!("callback request failed: {error}"))?;
            tracing::info!(status = response.status().as_u16(), "callback delivered");
            Ok(())
        })
    }
}
