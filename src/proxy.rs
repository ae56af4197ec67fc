use crate::config::Config;
use crate::models::{DateSelection, GeneratedImage, HistoricalEvent};
use crate::prompt::{event_prompt, image_prompt};
use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Why a proxy call produced nothing usable. Only logged; every variant
/// leads to the same retry state.
#[derive(Debug, thiserror::Error)]
pub enum RemoteCallFailure {
    #[error("request to model proxy failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("model proxy answered with status {0}")]
    Status(StatusCode),
    #[error("model proxy body was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("model proxy response had no output")]
    MissingOutput,
}

#[derive(Debug, Serialize)]
struct ProxyRequest<'a> {
    model: &'a str,
    input: ProxyInput<'a>,
}

#[derive(Debug, Serialize)]
struct ProxyInput<'a> {
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProxyResponse {
    #[serde(default)]
    output: Option<Value>,
}

/// Client for the model-hosting proxy. One endpoint serves both models.
#[derive(Clone)]
pub struct ModelProxy {
    client: Client,
    endpoint: String,
    auth_token: String,
    event_model: String,
    image_model: String,
}

impl ModelProxy {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.proxy_url.clone(),
            auth_token: config.auth_token.clone(),
            event_model: config.event_model.clone(),
            image_model: config.image_model.clone(),
        })
    }

    pub async fn lookup_event(
        &self,
        selection: &DateSelection,
    ) -> Result<HistoricalEvent, RemoteCallFailure> {
        let prompt = event_prompt(selection);
        let title = self.call(&self.event_model, &prompt).await?;
        info!(%title, "historical event found");
        Ok(HistoricalEvent { title })
    }

    pub async fn generate_image(
        &self,
        event: &HistoricalEvent,
        year: &str,
    ) -> Result<GeneratedImage, RemoteCallFailure> {
        let prompt = image_prompt(event, year);
        let url = self.call(&self.image_model, &prompt).await?;
        info!(%url, "image generated");
        Ok(GeneratedImage { url, prompt })
    }

    /// POST `{model, input: {prompt}}` and return the non-empty `output`.
    pub async fn call(&self, model: &str, prompt: &str) -> Result<String, RemoteCallFailure> {
        let body = ProxyRequest {
            model,
            input: ProxyInput { prompt },
        };
        info!(model, prompt, "sending model proxy request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", self.auth_token))
            .json(&body)
            .send()
            .await
            .map_err(RemoteCallFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteCallFailure::Status(status));
        }

        let parsed: ProxyResponse = response.json().await.map_err(RemoteCallFailure::Decode)?;
        parsed
            .output
            .as_ref()
            .and_then(output_text)
            .ok_or(RemoteCallFailure::MissingOutput)
    }
}

// Streamed model output arrives as an array of string fragments.
fn output_text(output: &Value) -> Option<String> {
    let text = match output {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts.iter().filter_map(Value::as_str).collect(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}
