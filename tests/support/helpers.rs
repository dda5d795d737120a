// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use newsroom_core::application::ports::{render::ArticleRenderer, time::Clock};
use newsroom_core::application::services::ApplicationServices;
use newsroom_core::domain::submission::PublicationRepository;
use newsroom_core::infrastructure::{
    render::HtmlArticleRenderer, repositories::FileStore, storage::StorageAdapters,
    util::TitleSlugGenerator,
};
use newsroom_core::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

/// A pipeline wired to a file store in a temporary directory.
pub struct TestApp {
    pub dir: TempDir,
    pub store: Arc<FileStore>,
    pub storage: StorageAdapters,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &RouterSettings::default())
    }
}

pub struct TestAppBuilder {
    clock: Arc<dyn Clock>,
    renderer: Arc<dyn ArticleRenderer>,
    publish_failures: usize,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            clock: Arc::new(mocks::FixedClock),
            renderer: Arc::new(HtmlArticleRenderer::default()),
            publish_failures: 0,
        }
    }
}

impl TestAppBuilder {
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn ArticleRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// 最初の `times` 回の公開処理を失敗させる
    pub fn failing_publisher(mut self, times: usize) -> Self {
        self.publish_failures = times;
        self
    }

    pub async fn build(self) -> TestApp {
        let dir = TempDir::new().expect("tempdir");
        let store = Arc::new(FileStore::open(dir.path()).await.expect("open file store"));
        let mut storage = StorageAdapters::files(Arc::clone(&store));
        if self.publish_failures > 0 {
            let publisher: Arc<dyn PublicationRepository> = Arc::new(mocks::FailingPublisher::new(
                Arc::clone(&storage.publications),
                self.publish_failures,
            ));
            storage.publications = publisher;
        }

        let services = Arc::new(ApplicationServices::new(
            Arc::clone(&storage.submissions),
            Arc::clone(&storage.publications),
            Arc::clone(&storage.article_writes),
            Arc::clone(&storage.article_reads),
            self.renderer,
            self.clock,
            Arc::new(TitleSlugGenerator),
        ));

        TestApp {
            dir,
            store,
            storage,
            services,
        }
    }
}

pub async fn test_app() -> TestApp {
    TestAppBuilder::default().build().await
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let text = body_text(resp).await;
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("invalid JSON ({e}): {text}"))
}

/// Assert the status and the `{error, message}` error body.
pub async fn assert_error_response(resp: Response, status: StatusCode) -> Value {
    assert_eq!(resp.status(), status);
    let json = body_json(resp).await;
    assert_eq!(
        json["error"].as_str(),
        status.canonical_reason(),
        "unexpected error body: {json}"
    );
    assert!(json["message"].is_string(), "missing message: {json}");
    json
}
