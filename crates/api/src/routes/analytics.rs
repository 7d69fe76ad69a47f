use axum::Json;
use axum::extract::State;
use fxbook_core::analytics::Analytics;
use fxbook_core::journal::draft::{OTHER_STRATEGY, STRATEGY_PRESETS};

use crate::error::ApiError;
use crate::server::AppState;
use crate::types::{ApiResponse, StrategyOptionsResponse};

/// 看板统计：胜率、总点数、分时段点数、分策略胜场与最近交易
#[utoipa::path(
    get,
    path = "/api/v1/analytics",
    tag = "统计 (Analytics)",
    responses(
        (status = 200, description = "基于当前日志实时计算的统计", body = ApiResponse<Analytics>)
    )
)]
pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Analytics>>, ApiError> {
    Ok(Json(ApiResponse::ok(state.journal.analytics().await)))
}

/// 表单下拉框的策略选项
#[utoipa::path(
    get,
    path = "/api/v1/strategies",
    tag = "统计 (Analytics)",
    responses(
        (status = 200, description = "预设策略列表", body = ApiResponse<StrategyOptionsResponse>)
    )
)]
pub async fn list_strategy_options() -> Result<Json<ApiResponse<StrategyOptionsResponse>>, ApiError>
{
    Ok(Json(ApiResponse::ok(StrategyOptionsResponse {
        presets: STRATEGY_PRESETS.iter().map(|s| s.to_string()).collect(),
        other: OTHER_STRATEGY.to_string(),
    })))
}
