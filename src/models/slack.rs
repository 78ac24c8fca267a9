use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteMessageRequest<'a> {
    pub channel: &'a str,
    pub ts: &'a str,
}

/// Raw Slack Web API envelope. Slack reports most failures with HTTP 200
/// and `ok: false`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlackApiResponse {
    pub ok: bool,

    #[serde(default)]
    pub ts: Option<String>,

    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatReceipt {
    pub ok: bool,
    pub ts: String,
}
