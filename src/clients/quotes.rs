use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    dispatch::QuoteSource,
    models::{
        error::QuoteFetchError,
        quote::{NinjaQuote, QodResponse, Quote},
    },
};

/// Client for the two quote providers: api-ninjas for category-filtered
/// quotes and quotes.rest for the single daily quote. Both are keyed by an
/// API secret passed as a header.
pub struct QuoteClient {
    http_client: Client,
    ninja_base_url: String,
    ninja_api_key: String,
    qod_base_url: String,
    qod_api_key: String,
}

impl QuoteClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(base_url = %config.ninja_api_url, "Quote client initialized");

        Ok(Self {
            http_client,
            ninja_base_url: config.ninja_api_url.clone(),
            ninja_api_key: config.ninja_api_key.clone(),
            qod_base_url: config.qod_api_url.clone(),
            qod_api_key: config.quote_api_key.clone(),
        })
    }

    /// Fetches up to `limit` quotes from the given category.
    pub async fn fetch_category(
        &self,
        category: &str,
        limit: u8,
    ) -> Result<Vec<Quote>, QuoteFetchError> {
        debug!(category, limit, "Fetching category quotes");

        let url = format!("{}/v1/quotes", self.ninja_base_url);
        let limit = limit.to_string();

        let response = self
            .http_client
            .get(&url)
            .query(&[("category", category), ("limit", limit.as_str())])
            .header("X-Api-Key", &self.ninja_api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(QuoteFetchError::Status(status));
        }

        let quotes: Vec<NinjaQuote> = response.json().await?;

        Ok(quotes
            .into_iter()
            .map(|q| Quote {
                quote: q.quote,
                author: q.author,
            })
            .collect())
    }

    pub async fn fetch_quote_of_the_day(&self) -> Result<Quote, QuoteFetchError> {
        debug!("Fetching quote of the day");

        let url = format!("{}/qod", self.qod_base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("language", "en"), ("category", "inspire")])
            .header("X-TheySaidSo-Api-Secret", &self.qod_api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(QuoteFetchError::Status(status));
        }

        let body: QodResponse = response.json().await?;

        body.contents
            .quotes
            .into_iter()
            .next()
            .map(|q| Quote {
                quote: q.quote,
                author: q.author.unwrap_or_default(),
            })
            .ok_or(QuoteFetchError::Empty)
    }
}

impl QuoteSource for QuoteClient {
    async fn by_category(&self, category: &str) -> Result<Quote, QuoteFetchError> {
        self.fetch_category(category, 1)
            .await?
            .into_iter()
            .next()
            .ok_or(QuoteFetchError::Empty)
    }

    async fn quote_of_the_day(&self) -> Result<Quote, QuoteFetchError> {
        self.fetch_quote_of_the_day().await
    }
}
