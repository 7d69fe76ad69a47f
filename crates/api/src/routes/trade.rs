//! # 交易记录路由
//!
//! 日志的增删改查。表单在此处完成校验，只有合法的 `TradeInput` 才会进入 `JournalPort`。

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use fxbook_core::journal::draft::TradeDraft;
use fxbook_core::journal::entity::{TradeId, TradeRecord};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::server::AppState;
use crate::types::{ApiResponse, ClearResponse, ConfirmQuery, DeleteResponse};

const CONFIRMATION_REQUIRED: &str = "This action cannot be undone. Pass confirm=true to proceed.";

/// 获取全部交易记录 (最新在前)
#[utoipa::path(
    get,
    path = "/api/v1/trades",
    tag = "交易日志 (Trades)",
    responses(
        (status = 200, description = "全部交易记录", body = ApiResponse<Vec<TradeRecord>>)
    )
)]
pub async fn list_trades(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TradeRecord>>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.journal.list().await)))
}

/// 获取单条交易记录
#[utoipa::path(
    get,
    path = "/api/v1/trades/{id}",
    tag = "交易日志 (Trades)",
    params(("id" = String, Path, description = "交易记录 ID")),
    responses(
        (status = 200, description = "交易记录", body = ApiResponse<TradeRecord>),
        (status = 404, description = "记录不存在", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn get_trade(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TradeRecord>>, ApiError> {
    let record = state
        .journal
        .get(&TradeId(id.clone()))
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Trade not found: {}", id)))?;
    Ok(Json(ApiResponse::ok(record)))
}

/// 获取编辑表单的回填数据
///
/// 非预设策略会回填为 "Other" 加自定义文本。
#[utoipa::path(
    get,
    path = "/api/v1/trades/{id}/draft",
    tag = "交易日志 (Trades)",
    params(("id" = String, Path, description = "交易记录 ID")),
    responses(
        (status = 200, description = "编辑表单草稿", body = ApiResponse<TradeDraft>),
        (status = 404, description = "记录不存在", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn get_trade_draft(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<TradeDraft>>, ApiError> {
    let record = state
        .journal
        .get(&TradeId(id.clone()))
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Trade not found: {}", id)))?;
    Ok(Json(ApiResponse::ok(TradeDraft::from_record(&record))))
}

/// 记录一笔新交易
#[utoipa::path(
    post,
    path = "/api/v1/trades",
    tag = "交易日志 (Trades)",
    request_body = TradeDraft,
    responses(
        (status = 201, description = "新建的交易记录", body = ApiResponse<TradeRecord>),
        (status = 400, description = "表单校验失败", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn create_trade(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<TradeDraft>,
) -> Result<(StatusCode, Json<ApiResponse<TradeRecord>>), ApiError> {
    let input = draft.validate()?;
    let record = state.journal.add(input).await;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record))))
}

/// 用表单整体替换一笔交易
#[utoipa::path(
    put,
    path = "/api/v1/trades/{id}",
    tag = "交易日志 (Trades)",
    params(("id" = String, Path, description = "交易记录 ID")),
    request_body = TradeDraft,
    responses(
        (status = 200, description = "更新后的交易记录", body = ApiResponse<TradeRecord>),
        (status = 400, description = "表单校验失败", body = crate::types::ApiErrorResponse),
        (status = 404, description = "记录不存在", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn update_trade(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<TradeDraft>,
) -> Result<Json<ApiResponse<TradeRecord>>, ApiError> {
    let input = draft.validate()?;
    let record = state.journal.update(&TradeId(id), input).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// 删除单笔交易 (需 `confirm=true`)
#[utoipa::path(
    delete,
    path = "/api/v1/trades/{id}",
    tag = "交易日志 (Trades)",
    params(
        ("id" = String, Path, description = "交易记录 ID"),
        ConfirmQuery
    ),
    responses(
        (status = 200, description = "删除结果，ID 不存在时 deleted 为 false", body = ApiResponse<DeleteResponse>),
        (status = 400, description = "未确认", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn delete_trade(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiQuery(query): ApiQuery<ConfirmQuery>,
) -> Result<Json<ApiResponse<DeleteResponse>>, ApiError> {
    if !query.confirm {
        return Err(ApiError::BadRequest(CONFIRMATION_REQUIRED.to_string()));
    }
    let deleted = state.journal.delete(&TradeId(id.clone())).await;
    Ok(Json(ApiResponse::ok(DeleteResponse { id, deleted })))
}

/// 清空整个日志 (需 `confirm=true`)
#[utoipa::path(
    delete,
    path = "/api/v1/trades",
    tag = "交易日志 (Trades)",
    params(ConfirmQuery),
    responses(
        (status = 200, description = "被移除的记录数", body = ApiResponse<ClearResponse>),
        (status = 400, description = "未确认", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn clear_trades(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ConfirmQuery>,
) -> Result<Json<ApiResponse<ClearResponse>>, ApiError> {
    if !query.confirm {
        return Err(ApiError::BadRequest(CONFIRMATION_REQUIRED.to_string()));
    }
    let removed = state.journal.clear_all().await;
    tracing::warn!("Trade journal cleared via API ({} trades removed)", removed);
    Ok(Json(ApiResponse::ok(ClearResponse { removed })))
}
