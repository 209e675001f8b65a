use crate::envelope::{OperationCode, SuccessEnvelope};
use crate::error::ApiError;
use crate::identity::Identity;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::http::{Method, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, MethodRouter};
use axum::{Json, Router};
use classifier::{classify, tokens_from_payload};
use futures::FutureExt;
use serde_json::{json, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Shared, read-only request state
#[derive(Debug, Clone)]
pub struct AppState {
    identity: Arc<Identity>,
}

impl AppState {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

/// Build the application router.
///
/// - `POST /bfhl` classifies `{ "data": [...] }`
/// - `GET /bfhl` returns the operation code
/// - `GET /health` liveness probe
///
/// `/bfhl/` is served like `/bfhl`. Unknown routes get a 404 failure
/// envelope, unsupported methods a 405 one, panics a 500 one.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/bfhl", bfhl_routes())
        .route("/bfhl/", bfhl_routes())
        .route("/health", get(health).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .layer(middleware::from_fn(catch_panic))
        .with_state(state)
}

fn bfhl_routes() -> MethodRouter<AppState> {
    post(process_data)
        .get(operation_code)
        .fallback(method_not_allowed)
}

async fn process_data(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SuccessEnvelope>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        ApiError::invalid_input(format!("Invalid input: {}", rejection.body_text()))
    })?;

    let tokens = tokens_from_payload(&body)?;
    let classification = classify(&tokens);

    debug!(
        tokens = tokens.len(),
        even = classification.even_numbers.len(),
        odd = classification.odd_numbers.len(),
        alphabets = classification.alphabets.len(),
        special = classification.special_characters.len(),
        "Classified request"
    );

    Ok(Json(SuccessEnvelope::new(state.identity(), classification)))
}

async fn operation_code() -> Json<OperationCode> {
    Json(OperationCode { operation_code: 1 })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    debug!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}

/// Turn a panicking handler into a 500 failure envelope
pub(crate) async fn catch_panic(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => ApiError::internal(panic_message(payload.as_ref())).into_response(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}
