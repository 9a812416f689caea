//! Paddle catalog handlers

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use paddlex_core::model::{CreatedPaddle, Paddle, PaddleSubmission, PaddleSummary};
use paddlex_core::rules::validation::validate_paddle_id;

use crate::error::ApiError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/paddles", get(list_paddles).post(create_paddle))
        .route("/api/paddles/", get(missing_paddle_id))
        .route("/api/paddles/:id", get(get_paddle))
        .route("/test", get(health))
}

async fn health() -> &'static str {
    "Server is working!"
}

async fn list_paddles(State(state): State<AppState>) -> Result<Json<Vec<PaddleSummary>>, ApiError> {
    let paddles = state
        .run("list_paddles", |store| store.list_all())
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve paddles data"))?;

    Ok(Json(paddles))
}

async fn get_paddle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Paddle>, ApiError> {
    validate_paddle_id(&id).map_err(|e| ApiError::bad_request(format!("Invalid paddle ID: {e}")))?;

    let paddle = state
        .run("get_paddle", move |store| store.get_by_id(&id))
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve paddle data"))?;

    Ok(Json(paddle))
}

async fn missing_paddle_id() -> ApiError {
    ApiError::bad_request("Invalid paddle ID: paddle ID is required")
}

/// The body is decoded here rather than through `Json` so that every decode
/// failure is a 400 with the decoder's message.
async fn create_paddle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedPaddle>), ApiError> {
    let submission: PaddleSubmission = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {e}")))?;

    let paddle = submission
        .into_paddle()
        .map_err(|e| ApiError::bad_request(format!("Validation error: {e}")))?;

    let to_store = paddle.clone();
    let db_id = state
        .run_until("create_paddle", move |store, deadline| {
            store.create_until(&to_store, deadline)
        })
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to save paddle data"))?;

    tracing::info!(paddle_id = %paddle.id, db_id, "paddle created");
    Ok((StatusCode::CREATED, Json(CreatedPaddle::new(db_id, paddle))))
}
