use reqwest::StatusCode;
use thiserror::Error;

/// Roster fetch failure. Aborts the whole batch before any dispatch;
/// no partial roster is ever observable.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("sheets request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("sheets returned status {status} for range {range}")]
    Status { range: String, status: StatusCode },
}

/// Quote provider failure. Non-fatal: the affected recipient falls back
/// to a default quote line and the batch continues.
#[derive(Debug, Error)]
pub enum QuoteFetchError {
    #[error("quote request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("quote provider returned status {0}")]
    Status(StatusCode),

    #[error("quote provider returned no quotes")]
    Empty,
}

/// A single mail or chat send failing for one recipient. Recorded in the
/// batch report; never stops remaining recipients or the other channel.
#[derive(Debug, Error)]
pub enum SendFailure {
    #[error("mail send to {recipient} failed: {reason}")]
    Mail { recipient: String, reason: String },

    #[error("slack post to {channel} failed: {reason}")]
    Chat { channel: String, reason: String },

    #[error("template {path} could not be rendered: {reason}")]
    Template { path: String, reason: String },
}

impl SendFailure {
    pub fn mail(recipient: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Mail {
            recipient: recipient.into(),
            reason: reason.into(),
        }
    }

    pub fn chat(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Chat {
            channel: channel.into(),
            reason: reason.into(),
        }
    }

    pub fn template(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Template {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
