// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, submissions},
    middleware::rate_limit::submission_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router knobs that come from configuration.
#[derive(Clone, Debug, Default)]
pub struct RouterSettings {
    /// Rate-limit submissions per client. Requires the server to be run with
    /// connect info when no forwarding headers are present.
    pub rate_limit: bool,
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
    pub public_base_url: Option<String>,
}

impl RouterSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            rate_limit: config.rate_limit_enabled(),
            allowed_origins: config.allowed_origins().to_vec(),
            public_base_url: config.public_base_url().map(str::to_owned),
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, settings: &RouterSettings) -> Router {
    let submit = if settings.rate_limit {
        post(submissions::submit).layer(submission_rate_limit_layer())
    } else {
        post(submissions::submit)
    };

    Router::new()
        .merge(openapi::docs_router(settings.public_base_url.as_deref()))
        .route("/health", get(health))
        .route(
            "/api/v1/submissions",
            submit.get(submissions::list_submissions),
        )
        .route(
            "/api/v1/submissions/{id}",
            axum::routing::delete(submissions::reject_submission),
        )
        .route(
            "/api/v1/submissions/{id}/approve",
            put(submissions::approve_submission),
        )
        .route("/api/v1/articles", get(articles::list_articles))
        .route(
            "/api/v1/articles/{slug}",
            get(articles::get_article).delete(articles::delete_article),
        )
        .route("/news/{slug}", get(articles::read_news_page))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse::new("ok"))
}
