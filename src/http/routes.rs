use crate::error::{TokenError, TOKEN_MISSING_FIELDS};
use crate::http::AppState;
use crate::jwt::{AdminTokenBuilder, ADMIN_V5_AUDIENCE};
use crate::metrics;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub const GHOST_TOKEN_ROUTE: &str = "/ghost-token";
pub const GET_TOKEN_ROUTE: &str = "/get-token";

/// Error message for an incomplete `/get-token` body.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing admin_api_key or url";

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /get-token`.
#[derive(Debug, Default, Deserialize)]
pub struct GetTokenRequest {
    pub admin_api_key: Option<String>,
    pub url: Option<String>,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(GHOST_TOKEN_ROUTE, get(ghost_token))
        .route(GET_TOKEN_ROUTE, post(get_token))
        .route("/health", get(health))
        .route("/metrics", get(metrics_text))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `GET /ghost-token`: token for the configured admin key.
pub async fn ghost_token(State(state): State<AppState>) -> Response {
    let raw_key = state.key_source.admin_key().unwrap_or_default();
    issue(GHOST_TOKEN_ROUTE, &AdminTokenBuilder::new(), &raw_key)
}

/// `POST /get-token`: token for a caller-supplied key, audience `/v5/admin/`.
pub async fn get_token(body: Result<Json<GetTokenRequest>, JsonRejection>) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(route = GET_TOKEN_ROUTE, error = %rejection, "Rejected token request body");
            GetTokenRequest::default()
        }
    };

    let (raw_key, url) = match (request.admin_api_key, request.url) {
        (Some(key), Some(url)) if !key.is_empty() && !url.is_empty() => (key, url),
        _ => {
            metrics::record_token_failure(GET_TOKEN_ROUTE, TOKEN_MISSING_FIELDS);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: MISSING_FIELDS_MESSAGE.to_string(),
                }),
            )
                .into_response();
        }
    };

    info!(route = GET_TOKEN_ROUTE, target_url = %url, "Token requested");
    let builder = AdminTokenBuilder::new().audience(ADMIN_V5_AUDIENCE);
    issue(GET_TOKEN_ROUTE, &builder, &raw_key)
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Prometheus text exposition.
pub async fn metrics_text() -> Response {
    match metrics::gather() {
        Ok(text) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn issue(route: &'static str, builder: &AdminTokenBuilder, raw_key: &str) -> Response {
    let started = Instant::now();
    let result = builder.build(raw_key, Utc::now());
    metrics::record_build_latency(route, started.elapsed().as_secs_f64());

    match result {
        Ok(token) => {
            metrics::record_token_issued(route);
            let key_id = raw_key.split_once(':').map_or("", |(id, _)| id);
            info!(route, key_id, "Issued admin token");
            Json(TokenResponse { token }).into_response()
        }
        Err(err) => log_failure(route, err).into_response(),
    }
}

fn log_failure(route: &'static str, err: TokenError) -> TokenError {
    metrics::record_token_failure(route, err.code());
    if err.is_client_error() {
        warn!(route, code = err.code(), "Token request rejected");
    } else {
        error!(route, code = err.code(), error = %err, "Token build failed");
    }
    err
}
