//! # API 统一错误处理
//!
//! 将领域层各类错误统一映射到 HTTP 状态码与 JSON 响应体。

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fxbook_core::journal::error::{JournalError, ValidationError};
use fxbook_core::suggest::error::SuggestError;
use thiserror::Error;

use crate::types::ApiErrorResponse;

/// API 层统一错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 资源未找到 (404)
    #[error("资源未找到: {0}")]
    NotFound(String),

    /// 请求参数错误或表单校验失败 (400)
    #[error("请求参数错误: {0}")]
    BadRequest(String),

    /// 外部建议服务失败 (502)
    #[error("建议服务错误: {0}")]
    Suggestion(#[from] SuggestError),
}

/// 将 `ApiError` 转换为 axum 的 HTTP 响应
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Suggestion(err) => {
                // 外部服务错误只记录日志，不向客户端透传细节
                tracing::error!("Error calling suggestion service: {}", err);
                (StatusCode::BAD_GATEWAY, err.user_message().to_string())
            }
        };

        let body = Json(ApiErrorResponse::from_msg(message));
        (status, body).into_response()
    }
}

/// 从 `ValidationError` 转换
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// 从 `JournalError` 转换
impl From<JournalError> for ApiError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

/// 请求体无法解析 (非 JSON、字段缺失、枚举值非法)
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection);
        ApiError::BadRequest(rejection.body_text())
    }
}

/// 查询参数无法解析 (如 `confirm=yes`)
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection);
        ApiError::BadRequest(rejection.body_text())
    }
}
