// tests/rate_limit.rs
use axum::http::StatusCode;
use newsroom_core::presentation::http::{
    routes::{RouterSettings, build_router},
    state::HttpState,
};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt as _;

mod support;
use support::{json_request, test_app};

/// 同一クライアントからの連続投稿はバースト上限を超えると 429 になる
#[tokio::test]
async fn submissions_are_rate_limited_per_client() {
    let app = test_app().await;
    let router = build_router(
        HttpState {
            services: Arc::clone(&app.services),
        },
        &RouterSettings {
            rate_limit: true,
            ..RouterSettings::default()
        },
    );

    let body = json!({ "title": "t", "author": "a", "content": "c" });
    let mut statuses = Vec::new();
    for _ in 0..6 {
        let mut req = json_request("POST", "/api/v1/submissions", &body);
        req.headers_mut()
            .insert("x-forwarded-for", "203.0.113.7".parse().unwrap());
        let resp = router.clone().oneshot(req).await.unwrap();
        statuses.push(resp.status());
    }

    assert!(statuses[..5].iter().all(|s| *s == StatusCode::CREATED), "{statuses:?}");
    assert_eq!(statuses[5], StatusCode::TOO_MANY_REQUESTS);

    // Listing is not limited.
    let mut req = support::empty_request("GET", "/api/v1/submissions");
    req.headers_mut()
        .insert("x-forwarded-for", "203.0.113.7".parse().unwrap());
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
