//! Axum route handlers for the person store HTTP API.

use crate::store::{RecordStore, StoreError};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use person_store_types::*;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    pub store: Arc<RecordStore>,
    pub start_time: Instant,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/", get(index))
        .route("/no_content", get(no_content))
        .route("/exp", get(index_explicit))
        .route("/data", get(data_summary))
        .route("/count", get(count))
        .route("/name_search", get(name_search))
        .route(
            "/person/:id",
            get(find_person)
                .delete(delete_person)
                .post(add_person)
                .put(update_person),
        )
        .route("/status", get(status))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match self {
            StoreError::InvalidArgument => StatusCode::UNPROCESSABLE_ENTITY,
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::AlreadyExists => StatusCode::BAD_REQUEST,
        };
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

/// Any body that is not a well-formed partial person counts as invalid input.
fn patch_from(payload: Result<Json<PersonPatch>, JsonRejection>) -> Result<PersonPatch, StoreError> {
    payload.map(|Json(patch)| patch).map_err(|e| {
        log::debug!("Rejected person payload: {}", e);
        StoreError::InvalidArgument
    })
}

// =====================================================
// Plain Endpoints
// =====================================================

// GET /
pub async fn index() -> &'static str {
    "hello world"
}

// GET /no_content
pub async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

// GET /exp
pub async fn index_explicit() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Hello World!")
}

// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Page not found")),
    )
}

// =====================================================
// Collection Endpoints
// =====================================================

// GET /data
pub async fn data_summary(State(state): State<Arc<AppState>>) -> Json<MessageResponse> {
    let count = state.store.count();
    let message = if count > 0 {
        format!("Data of length {} found", count)
    } else {
        "Data is empty".to_string()
    };
    Json(MessageResponse::new(message))
}

// GET /count
pub async fn count(State(state): State<Arc<AppState>>) -> Json<CountResponse> {
    Json(CountResponse {
        data_count: state.store.count(),
    })
}

#[derive(Debug, Deserialize)]
pub struct NameSearchParams {
    pub q: Option<String>,
}

// GET /name_search?q=...
pub async fn name_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NameSearchParams>,
) -> Result<Json<Person>, StoreError> {
    let q = params.q.unwrap_or_default();
    state.store.search_by_first_name(&q).map(Json)
}

// =====================================================
// Person Endpoints
// =====================================================

// GET /person/:id
pub async fn find_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Person>, StoreError> {
    state.store.find_by_id(&id).map(Json)
}

// DELETE /person/:id
pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, StoreError> {
    let removed = state.store.delete(&id)?;
    log::info!("Deleted person {}", removed);
    // Message text kept byte-for-byte for existing clients.
    Ok(Json(MessageResponse::new(format!(
        "User with id: {} sucessfully deleted.",
        removed
    ))))
}

// POST /person/:id
pub async fn add_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<PersonPatch>, JsonRejection>,
) -> Result<Json<MessageResponse>, StoreError> {
    let patch = patch_from(payload)?;
    if let Err(e) = state.store.insert(&id, patch) {
        log::warn!("Failed to add person {}: {}", id, e);
        return Err(e);
    }
    log::info!("Added person {}", id);
    Ok(Json(MessageResponse::new("Person added")))
}

// PUT /person/:id
pub async fn update_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<PersonPatch>, JsonRejection>,
) -> Result<Json<MessageResponse>, StoreError> {
    let patch = patch_from(payload)?;
    if let Err(e) = state.store.update(&id, patch) {
        log::warn!("Failed to update person {}: {}", id, e);
        return Err(e);
    }
    log::info!("Updated person {}", id);
    Ok(Json(MessageResponse::new("Person updated")))
}

// =====================================================
// Service
// =====================================================

// GET /status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
        record_count: state.store.count(),
    })
}
