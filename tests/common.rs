use celebrate_bot::config::Config;

/// Config with every external endpoint stubbed out. Tests that talk to a
/// wiremock server overwrite the relevant base URL.
pub fn test_config() -> Config {
    Config {
        spreadsheet_id: "sheet-1".to_string(),
        sheet_name: "Sheet1".to_string(),
        sheets_api_url: "http://127.0.0.1:0".to_string(),
        sheets_api_key: "test-key".to_string(),
        smtp_server: "smtp.example.com".to_string(),
        smtp_user: "bot@example.com".to_string(),
        smtp_password: "secret".to_string(),
        bot_oauth_token: "xoxb-test".to_string(),
        slack_api_url: "http://127.0.0.1:0".to_string(),
        general_channel_id: "C0GENERAL".to_string(),
        random_channel_id: "C0RANDOM".to_string(),
        ninja_api_key: "ninja-key".to_string(),
        ninja_api_url: "http://127.0.0.1:0".to_string(),
        quote_api_key: "qod-key".to_string(),
        qod_api_url: "http://127.0.0.1:0".to_string(),
        company_name: "Acme Corp".to_string(),
        templates_dir: "./templates".to_string(),
        qod_cron: "0 15 3 * * *".to_string(),
        roster_cron: "0 30 3 * * *".to_string(),
        birthday_send_delay_seconds: 0,
        server_port: 0,
    }
}
