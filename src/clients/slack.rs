use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    dispatch::ChatSender,
    models::{
        error::SendFailure,
        slack::{ChatReceipt, DeleteMessageRequest, PostMessageRequest, SlackApiResponse},
    },
};

/// Slack Web API client (`chat.postMessage` / `chat.delete`).
#[derive(Clone)]
pub struct SlackClient {
    http_client: Client,
    base_url: String,
    bot_token: String,
}

impl SlackClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.slack_api_url, "Slack client initialized");

        Ok(Self {
            http_client,
            base_url: config.slack_api_url.clone(),
            bot_token: config.bot_oauth_token.clone(),
        })
    }

    pub async fn post_message(&self, channel: &str, text: &str) -> Result<ChatReceipt, SendFailure> {
        debug!(channel, "Posting Slack message");

        let url = format!("{}/chat.postMessage", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.bot_token)
            .json(&PostMessageRequest { channel, text })
            .send()
            .await
            .map_err(|e| SendFailure::chat(channel, e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(SendFailure::chat(channel, format!("slack returned status {status}")));
        }

        let body: SlackApiResponse = response
            .json()
            .await
            .map_err(|e| SendFailure::chat(channel, format!("invalid slack response: {e}")))?;

        if !body.ok {
            let reason = body.error.unwrap_or_else(|| "unknown slack error".to_string());
            return Err(SendFailure::chat(channel, reason));
        }

        let ts = body.ts.unwrap_or_default();

        info!(channel, ts = %ts, "Slack message sent successfully");

        Ok(ChatReceipt { ok: body.ok, ts })
    }

    pub async fn delete_message(&self, channel: &str, ts: &str) -> Result<(), SendFailure> {
        let url = format!("{}/chat.delete", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.bot_token)
            .json(&DeleteMessageRequest { channel, ts })
            .send()
            .await
            .map_err(|e| SendFailure::chat(channel, e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            return Err(SendFailure::chat(channel, format!("slack returned status {status}")));
        }

        let body: SlackApiResponse = response
            .json()
            .await
            .map_err(|e| SendFailure::chat(channel, format!("invalid slack response: {e}")))?;

        if !body.ok {
            let reason = body.error.unwrap_or_else(|| "unknown slack error".to_string());
            return Err(SendFailure::chat(channel, reason));
        }

        info!(channel, ts, "Slack message deleted successfully");

        Ok(())
    }
}

impl ChatSender for SlackClient {
    async fn post(&self, channel: &str, text: &str) -> Result<ChatReceipt, SendFailure> {
        self.post_message(channel, text).await
    }
}
