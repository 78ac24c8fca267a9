use celebrate_bot::{clients::sheets::SheetsClient, models::error::DataSourceError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::common::test_config;

async fn mount_column(server: &MockServer, column: &str, cells: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/v4/spreadsheets/sheet-1/values/Sheet1!{column}:{column}")))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": format!("Sheet1!{column}1:{column}3"),
            "majorDimension": "ROWS",
            "values": cells,
        })))
        .mount(server)
        .await;
}

/// Test: Six column reads are flattened into an index-aligned roster
#[tokio::test]
async fn test_fetch_roster_flattens_columns() {
    let server = MockServer::start().await;

    mount_column(&server, "A", json!([["E001"], ["E002"]])).await;
    mount_column(&server, "B", json!([["Alice Smith"], ["Bob Jones"]])).await;
    mount_column(&server, "C", json!([["alice@acme.test"], ["bob@acme.test"]])).await;
    mount_column(&server, "D", json!([["14-Feb"], ["01-Jan"]])).await;
    mount_column(&server, "E", json!([["15-Jun-2020"], ["01-Mar-2019"]])).await;
    mount_column(&server, "F", json!([["Engineer"], ["Designer"]])).await;

    let mut config = test_config();
    config.sheets_api_url = server.uri();

    let client = SheetsClient::new(&config).unwrap();
    let roster = client.fetch_roster().await.unwrap();

    assert_eq!(roster.len(), 2);
    assert_eq!(roster.employee_id, vec!["E001", "E002"]);
    assert_eq!(roster.full_name, vec!["Alice Smith", "Bob Jones"]);
    assert_eq!(roster.email, vec!["alice@acme.test", "bob@acme.test"]);
    assert_eq!(roster.date_of_birth, vec!["14-Feb", "01-Jan"]);
    assert_eq!(roster.date_of_joining, vec!["15-Jun-2020", "01-Mar-2019"]);
    assert_eq!(roster.title, vec!["Engineer", "Designer"]);
}

/// Test: One failing column aborts the fetch with no partial roster
#[tokio::test]
async fn test_single_column_failure_aborts_fetch() {
    let server = MockServer::start().await;

    mount_column(&server, "A", json!([["E001"]])).await;
    mount_column(&server, "B", json!([["Alice Smith"]])).await;
    mount_column(&server, "C", json!([["alice@acme.test"]])).await;
    mount_column(&server, "D", json!([["14-Feb"]])).await;
    mount_column(&server, "E", json!([["15-Jun-2020"]])).await;

    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/sheet-1/values/Sheet1!F:F"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = test_config();
    config.sheets_api_url = server.uri();

    let client = SheetsClient::new(&config).unwrap();
    let result = client.fetch_roster().await;

    match result {
        Err(DataSourceError::Status { range, status }) => {
            assert_eq!(range, "Sheet1!F:F");
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

/// Test: A column with no populated cells flattens to an empty sequence
#[tokio::test]
async fn test_empty_column_is_not_padded() {
    let server = MockServer::start().await;

    mount_column(&server, "A", json!([["E001"], ["E002"]])).await;
    mount_column(&server, "B", json!([["Alice Smith"], ["Bob Jones"]])).await;
    mount_column(&server, "C", json!([["alice@acme.test"], ["bob@acme.test"]])).await;
    mount_column(&server, "D", json!([["14-Feb"], ["01-Jan"]])).await;
    mount_column(&server, "E", json!([["15-Jun-2020"], ["01-Mar-2019"]])).await;

    // No `values` key at all: Sheets omits it for an unpopulated range.
    Mock::given(method("GET"))
        .and(path("/v4/spreadsheets/sheet-1/values/Sheet1!F:F"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Sheet1!F1:F3",
            "majorDimension": "ROWS",
        })))
        .mount(&server)
        .await;

    let mut config = test_config();
    config.sheets_api_url = server.uri();

    let client = SheetsClient::new(&config).unwrap();
    let roster = client.fetch_roster().await.unwrap();

    assert_eq!(roster.len(), 2);
    assert!(roster.title.is_empty(), "short column must stay unpadded");
}
