use super::error::{ApiError, ApiResult};
use super::query::LogQuery;
use crate::config::ApiConfig;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use url::Url;

// ============================================
// Wire Types
// ============================================

#[derive(Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Parsed body of `POST /ask`. `answer` is `None` when the service sent no
/// usable answer (missing, `null`, `false`, `0` or an empty string).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AskReply {
    pub answer: Option<String>,
}

impl AskReply {
    pub fn from_body(body: &str) -> ApiResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_null() {
            return Err(ApiError::NullBody);
        }
        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> Self {
        let answer = match value.get("answer") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(text)) if text.is_empty() => None,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        };
        Self { answer }
    }
}

// ============================================
// Backend Seam
// ============================================

/// The two calls the views make against the assistant service.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MedicalBackend {
    /// `POST /ask` with `{ "question": ... }`. The HTTP status is not
    /// inspected; a body that is not JSON is an error.
    async fn ask(&self, question: &str) -> ApiResult<AskReply>;

    /// `GET /logs` with the query's filters. The body is returned verbatim
    /// whatever the status code.
    async fn fetch_logs(&self, query: &LogQuery) -> ApiResult<String>;

    /// Address the browser should open to download the filtered logs.
    fn download_url(&self, query: &LogQuery) -> Url;
}

/// reqwest-backed client for the assistant service
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Uses a preconfigured client (proxy, TLS or timeout settings).
    pub fn with_client(config: ApiConfig, client: reqwest::Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MedicalBackend for HttpBackend {
    async fn ask(&self, question: &str) -> ApiResult<AskReply> {
        let url = self.config.ask_url().clone();
        tracing::debug!(%url, "posting question");
        let response = self
            .client
            .post(url)
            .json(&AskRequest { question })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "ask settled");
        AskReply::from_body(&body)
    }

    async fn fetch_logs(&self, query: &LogQuery) -> ApiResult<String> {
        let url = query.fetch_url(self.config.logs_url());
        tracing::debug!(%url, "fetching logs");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "logs settled");
        Ok(body)
    }

    fn download_url(&self, query: &LogQuery) -> Url {
        query.download_url(self.config.logs_url())
    }
}
