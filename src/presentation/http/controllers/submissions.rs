// src/presentation/http/controllers/submissions.rs
use crate::application::{
    commands::submissions::{ApproveSubmissionCommand, RejectSubmissionCommand, SubmitCommand},
    dto::{ApprovalDto, SubmissionDto},
    error::ApplicationError,
    queries::submissions::ListPendingQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ApiJson;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Missing fields deserialize as empty so they surface as validation errors.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRequest {
    #[serde(default)]
    pub title: String,
    /// Also accepted as `xUsername`.
    #[serde(default, alias = "xUsername")]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn parse_id(raw: &str) -> HttpResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        HttpError::from_error(ApplicationError::not_found(format!("submission {raw}")))
    })
}

#[utoipa::path(
    post,
    path = "/api/v1/submissions",
    request_body = SubmitRequest,
    responses(
        (status = 201, description = "Submission stored for moderation.", body = SubmissionDto),
        (status = 400, description = "Missing or invalid field.", body = ErrorResponse),
        (status = 429, description = "Too many submissions from this client."),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn submit(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<SubmitRequest>,
) -> HttpResult<(StatusCode, Json<SubmissionDto>)> {
    let command = SubmitCommand {
        title: payload.title,
        author: payload.author,
        content: payload.content,
        description: payload.description,
        category: payload.category,
    };

    let dto = state
        .services
        .submission_commands
        .submit(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/submissions",
    responses(
        (status = 200, description = "Pending submissions, newest first.", body = [SubmissionDto]),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn list_submissions(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SubmissionDto>>> {
    state
        .services
        .submission_queries
        .list_pending(ListPendingQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/submissions/{id}/approve",
    params(("id" = i64, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Article published.", body = ApprovalDto),
        (status = 404, description = "No such submission.", body = ErrorResponse),
        (status = 500, description = "Rendering or storage failure.", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn approve_submission(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ApprovalDto>> {
    let id = parse_id(&id)?;
    state
        .services
        .submission_commands
        .approve(ApproveSubmissionCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/submissions/{id}",
    params(("id" = i64, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission rejected.", body = StatusResponse),
        (status = 404, description = "No such submission.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn reject_submission(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    let id = parse_id(&id)?;
    state
        .services
        .submission_commands
        .reject(RejectSubmissionCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse::new("deleted")))
}
