use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info};

use crate::{
    config::Config,
    dispatch::RosterSource,
    models::{error::DataSourceError, roster::Roster, sheets::ValueRange},
};

/// Read-only client for the Google Sheets `values.get` endpoint.
pub struct SheetsClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    spreadsheet_id: String,
    sheet_name: String,
}

impl SheetsClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(spreadsheet_id = %config.spreadsheet_id, "Sheets client initialized");

        Ok(Self {
            http_client,
            base_url: config.sheets_api_url.clone(),
            api_key: config.sheets_api_key.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            sheet_name: config.sheet_name.clone(),
        })
    }

    /// Reads the six roster columns concurrently and joins them. Any
    /// single column failure aborts the whole fetch; no partial roster is
    /// returned. Shorter columns are left unpadded.
    pub async fn fetch_roster(&self) -> Result<Roster, DataSourceError> {
        let (employee_id, full_name, email, date_of_birth, date_of_joining, title) = tokio::try_join!(
            self.read_column("A"),
            self.read_column("B"),
            self.read_column("C"),
            self.read_column("D"),
            self.read_column("E"),
            self.read_column("F"),
        )?;

        let roster = Roster::new(employee_id, full_name, email, date_of_birth, date_of_joining, title);

        info!(rows = roster.len(), "Roster fetched");

        Ok(roster)
    }

    async fn read_column(&self, column: &str) -> Result<Vec<String>, DataSourceError> {
        let range = format!("{}!{column}:{column}", self.sheet_name);
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, self.spreadsheet_id, range
        );

        debug!(range = %range, "Reading sheet column");

        let response = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(DataSourceError::Status { range, status });
        }

        let body: ValueRange = response.json().await?;

        Ok(body.into_column())
    }
}

impl RosterSource for SheetsClient {
    async fn fetch_roster(&self) -> Result<Roster, DataSourceError> {
        SheetsClient::fetch_roster(self).await
    }
}
