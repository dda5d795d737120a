// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::DeleteArticleCommand,
    dto::{ArticleDto, ArticleSummaryDto},
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, response::Html};

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    responses(
        (status = 200, description = "Published articles, newest first.", body = [ArticleSummaryDto]),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article with its rendered document.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 404, description = "No such article.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { slug })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}

#[utoipa::path(
    get,
    path = "/news/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The published page.", content_type = "text/html", body = String),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "News"
)]
pub async fn read_news_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Html<String>> {
    let slug = slug.strip_suffix(".html").map(str::to_owned).unwrap_or(slug);
    let article = state
        .services
        .article_queries
        .get_article_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()?;
    Ok(Html(article.content))
}
