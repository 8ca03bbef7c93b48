use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::utils::notice::{Flash, Notice};

#[derive(Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorBody,
}

pub fn success<T>(data: T, message: impl Into<String>) -> impl IntoResponse
where
    T: Serialize,
{
    let body = ApiResponse {
        success: true,
        data: Some(data),
        message: Some(message.into()),
        notice: None,
    };
    (StatusCode::OK, Json(body))
}

/// A page that may show the notice queued by a previous redirect.
pub fn page<T>(data: T, message: impl Into<String>, flash: Flash) -> Response
where
    T: Serialize,
{
    let body = ApiResponse {
        success: true,
        data: Some(data),
        message: Some(message.into()),
        notice: flash.0.clone(),
    };
    flash.consume((StatusCode::OK, Json(body)))
}

/// Reports the outcome of a write as a banner. A failed write still answers
/// `200 OK`; `success` tells the two apart.
pub fn outcome<T>(data: Option<T>, notice: Notice) -> Response
where
    T: Serialize,
{
    let body = ApiResponse {
        success: !notice.is_error(),
        data,
        message: Some(notice.message.clone()),
        notice: Some(notice),
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn error(
    code: &str,
    message: impl Into<String>,
    details: Option<Value>,
    status: StatusCode,
) -> Response {
    let body = ApiErrorResponse {
        success: false,
        error: ApiErrorBody {
            code: code.to_string(),
            message: message.into(),
            details,
        },
    };

    (status, Json(body)).into_response()
}
