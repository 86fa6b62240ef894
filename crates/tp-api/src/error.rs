use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::{borrow::Cow, future::Future};
use thiserror::Error;
use tracing::error;

use tp_common::db::{
    MatchFetchError, PersonnelStorageError, ProjectStorageError, SkillStorageError,
};

tokio::task_local! {
    static REQUEST_ID: String;
}

pub async fn with_request_id<Fut, T>(request_id: Option<String>, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    if let Some(request_id) = request_id {
        REQUEST_ID.scope(request_id, fut).await
    } else {
        fut.await
    }
}

pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|value| value.clone()).ok()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("database error: {0}")]
    Database(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
    request_id: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let code = self.code();
        let request_id = current_request_id();

        error!(
            code,
            status = %status,
            request_id = request_id.as_deref().unwrap_or(""),
            error = %self,
            "api_error"
        );

        let body = Json(ErrorResponse {
            code,
            message: self.public_message().into_owned(),
            request_id,
        });

        (status, body).into_response()
    }
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::NotFound(_) => "not_found",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::Database(_) => "database_error",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn public_message(&self) -> Cow<'static, str> {
        match self {
            // Bad-request and not-found messages are static or id-only;
            // storage details never reach clients.
            ApiError::BadRequest(msg) => Cow::Owned(msg.clone()),
            ApiError::NotFound(msg) => Cow::Owned(msg.clone()),
            ApiError::Unauthorized(_) => Cow::Borrowed("unauthorized"),
            ApiError::ServiceUnavailable(_) => Cow::Borrowed("service unavailable"),
            ApiError::Database(_) | ApiError::Internal(_) => Cow::Borrowed("internal server error"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MatchFetchError> for ApiError {
    fn from(value: MatchFetchError) -> Self {
        ApiError::Database(value.to_string())
    }
}

impl From<SkillStorageError> for ApiError {
    fn from(value: SkillStorageError) -> Self {
        ApiError::Database(value.to_string())
    }
}

impl From<PersonnelStorageError> for ApiError {
    fn from(value: PersonnelStorageError) -> Self {
        match value {
            PersonnelStorageError::UnknownReference => {
                ApiError::NotFound("personnel or skill not found".into())
            }
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl From<ProjectStorageError> for ApiError {
    fn from(value: ProjectStorageError) -> Self {
        match value {
            ProjectStorageError::ProjectNotFound(id) => {
                ApiError::NotFound(format!("project not found: {id}"))
            }
            ProjectStorageError::SkillNotFound(id) => {
                ApiError::NotFound(format!("skill not found: {id}"))
            }
            other => ApiError::Database(other.to_string()),
        }
    }
}
