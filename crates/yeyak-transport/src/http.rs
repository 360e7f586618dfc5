//! reqwest implementation of the booking transport.

use crate::config::ServerConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use yeyak_core::error::Result;
use yeyak_core::transport::BookingTransport;
use yeyak_core::YeyakError;

/// Session creation is a bookkeeping call on the backend.
const SESSION_TIMEOUT: Duration = Duration::from_secs(30);
/// Greeting/chat replies go through the agent and can be slow.
const REPLY_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Serialize)]
struct GreetRequest<'a> {
    session_id: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    session_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateSessionResponse {
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct AgentReplyResponse {
    text: String,
}

/// HTTP client for the reservation agent backend.
#[derive(Clone)]
pub struct HttpBookingTransport {
    client: Client,
    base_url: String,
}

impl HttpBookingTransport {
    /// Creates a transport for the given server address.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url(),
        }
    }

    /// Sends a JSON POST and deserializes the response body, folding
    /// non-success statuses and connection errors into transport errors.
    async fn post_json<Req, Resp>(&self, path: &str, body: &Req, timeout: Duration) -> Result<Resp>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                YeyakError::transport(
                    e.status().map(|s| s.as_u16()),
                    format!("request to {url} failed: {e}"),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(YeyakError::transport(
                Some(status.as_u16()),
                format!("server error from {url}: {error_text}"),
            ));
        }

        response.json::<Resp>().await.map_err(|e| {
            YeyakError::transport(None, format!("failed to parse response from {url}: {e}"))
        })
    }
}

#[async_trait]
impl BookingTransport for HttpBookingTransport {
    async fn create_session(&self) -> Result<String> {
        // Body is an empty JSON object; the backend mints the id.
        let response: CreateSessionResponse = self
            .post_json("/session", &serde_json::json!({}), SESSION_TIMEOUT)
            .await?;

        if response.session_id.is_empty() {
            return Err(YeyakError::transport(
                None,
                "server returned an empty session id",
            ));
        }

        tracing::debug!(
            "[HttpBookingTransport] session created: {}",
            response.session_id
        );
        Ok(response.session_id)
    }

    async fn greet(&self, session_id: &str) -> Result<String> {
        let response: AgentReplyResponse = self
            .post_json("/greetings", &GreetRequest { session_id }, REPLY_TIMEOUT)
            .await?;
        Ok(response.text)
    }

    async fn send(&self, session_id: &str, text: &str) -> Result<String> {
        let response: AgentReplyResponse = self
            .post_json("/chat", &ChatRequest { session_id, text }, REPLY_TIMEOUT)
            .await?;
        Ok(response.text)
    }
}
