// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::submissions::submit,
        crate::presentation::http::controllers::submissions::list_submissions,
        crate::presentation::http::controllers::submissions::approve_submission,
        crate::presentation::http::controllers::submissions::reject_submission,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::read_news_page,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::submissions::SubmitRequest,
            crate::application::dto::SubmissionDto,
            crate::application::dto::ApprovalDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::ArticleDto
        )
    ),
    tags(
        (name = "Submissions", description = "Community submissions and moderation"),
        (name = "Articles", description = "Published article management"),
        (name = "News", description = "Rendered article pages"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Newsroom API",
        description = "Community news submission, moderation and publishing",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// The API document, listing `public_base_url` as the server when given.
pub fn api_document(public_base_url: Option<&str>) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    if let Some(url) = public_base_url
        .map(|u| u.trim().trim_end_matches('/'))
        .filter(|u| !u.is_empty())
    {
        openapi.servers = Some(vec![Server::new(url)]);
    }
    openapi
}

pub fn docs_router(public_base_url: Option<&str>) -> Router {
    let openapi = api_document(public_base_url);
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::temporary("/docs") }))
}

pub fn write_openapi_snapshot(path: &Path, public_base_url: Option<&str>) -> std::io::Result<()> {
    let spec = api_document(public_base_url);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = api_document(None);
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/v1/submissions",
            "/api/v1/submissions/{id}/approve",
            "/api/v1/submissions/{id}",
            "/api/v1/articles",
            "/api/v1/articles/{slug}",
            "/news/{slug}",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn public_base_url_becomes_the_server() {
        let doc = api_document(Some("https://news.example/"));
        let servers = doc.servers.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].url, "https://news.example");
    }

    #[test]
    fn snapshot_is_written_as_json() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("spec/openapi.json");
        write_openapi_snapshot(&path, None).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["info"]["title"], "Newsroom API");
    }
}
