use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::dispatch::DispatchOptions;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub spreadsheet_id: String,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    #[serde(default = "default_sheets_api_url")]
    pub sheets_api_url: String,
    pub sheets_api_key: String,

    pub smtp_server: String,
    pub smtp_user: String,
    pub smtp_password: String,

    pub bot_oauth_token: String,
    #[serde(default = "default_slack_api_url")]
    pub slack_api_url: String,
    pub general_channel_id: String,
    pub random_channel_id: String,

    pub ninja_api_key: String,
    #[serde(default = "default_ninja_api_url")]
    pub ninja_api_url: String,
    pub quote_api_key: String,
    #[serde(default = "default_qod_api_url")]
    pub qod_api_url: String,

    #[serde(default = "default_company_name")]
    pub company_name: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,

    #[serde(default = "default_qod_cron")]
    pub qod_cron: String,
    #[serde(default = "default_roster_cron")]
    pub roster_cron: String,
    #[serde(default = "default_birthday_send_delay_seconds")]
    pub birthday_send_delay_seconds: u64,

    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|_| anyhow!("Invalid or missing environmental variable"))?;
        Ok(config)
    }

    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            general_channel_id: self.general_channel_id.clone(),
            birthday_send_delay: std::time::Duration::from_secs(self.birthday_send_delay_seconds),
        }
    }
}

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

fn default_sheets_api_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_slack_api_url() -> String {
    "https://slack.com/api".to_string()
}

fn default_ninja_api_url() -> String {
    "https://api.api-ninjas.com".to_string()
}

fn default_qod_api_url() -> String {
    "https://quotes.rest".to_string()
}

fn default_company_name() -> String {
    "Rapid Innovation".to_string()
}

fn default_templates_dir() -> String {
    "./templates".to_string()
}

// 08:45 IST expressed in UTC
fn default_qod_cron() -> String {
    "0 15 3 * * *".to_string()
}

// 09:00 IST expressed in UTC
fn default_roster_cron() -> String {
    "0 30 3 * * *".to_string()
}

fn default_birthday_send_delay_seconds() -> u64 {
    1
}

fn default_server_port() -> u16 {
    8000
}
