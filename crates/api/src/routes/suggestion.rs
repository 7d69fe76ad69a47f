use axum::Json;
use axum::extract::State;
use fxbook_core::journal::draft::TradeDraft;
use fxbook_core::suggest::port::TradeContext;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::server::AppState;
use crate::types::{ApiResponse, SuggestionResponse};

/// 根据当前表单请求一条 AI 复盘建议
///
/// 不写入日志，客户端自行决定是否把建议填入表单。
#[utoipa::path(
    post,
    path = "/api/v1/suggestions",
    tag = "AI 建议 (Suggestions)",
    request_body = TradeDraft,
    responses(
        (status = 200, description = "建议文本", body = ApiResponse<SuggestionResponse>),
        (status = 400, description = "缺少复盘原因或策略", body = crate::types::ApiErrorResponse),
        (status = 502, description = "建议服务不可用", body = crate::types::ApiErrorResponse)
    )
)]
pub async fn request_suggestion(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<TradeDraft>,
) -> Result<Json<ApiResponse<SuggestionResponse>>, ApiError> {
    let context = TradeContext::from_draft(&draft)?;
    tracing::info!(
        "Requesting suggestion for {} {} ({})",
        context.currency_pair,
        context.strategy,
        context.result
    );
    let suggestion = state.suggester.suggest(&context).await?;
    Ok(Json(ApiResponse::ok(SuggestionResponse { suggestion })))
}
