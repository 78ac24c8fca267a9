use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::{clients::slack::SlackClient, config::Config, models::response::ApiResponse};

pub struct AppState {
    pub slack: SlackClient,
    pub random_channel_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SlashCommandPayload {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub text: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/slack/command", get(handle_slash_command))
        .route("/api/v1/test", post(echo_test))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(
    config: &Config,
    slack: SlackClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        slack,
        random_channel_id: config.random_channel_id.clone(),
    });

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "API server started");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Upper-cases the slash-command text and echoes it into the random
/// channel.
async fn handle_slash_command(
    State(state): State<Arc<AppState>>,
    Query(payload): Query<SlashCommandPayload>,
) -> impl IntoResponse {
    let response_text = payload.text.to_uppercase();

    match state
        .slack
        .post_message(&state.random_channel_id, &response_text)
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                response_text,
                "Slash command processed".to_string(),
            )),
        ),
        Err(e) => {
            error!(error = %e, "Failed to echo slash command to Slack");

            (
                StatusCode::BAD_GATEWAY,
                Json(ApiResponse::error(
                    e.to_string(),
                    "Failed to post response to Slack".to_string(),
                )),
            )
        }
    }
}

async fn echo_test(Json(body): Json<EchoRequest>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(
            body.text.to_uppercase(),
            "success".to_string(),
        )),
    )
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<String>::error(
            format!("Can't find {uri} on this server"),
            "Resource not found".to_string(),
        )),
    )
}
