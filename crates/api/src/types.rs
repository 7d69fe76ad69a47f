//! # DTO (Data Transfer Object) 层
//!
//! 交易记录、表单草稿与统计结果直接复用领域类型 (已派生 `ToSchema`)，
//! 本模块只补充 HTTP 层特有的包装与查询参数。

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ============================================================
//  响应包装
// ============================================================

/// 统一成功响应包装
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T: Serialize + ToSchema> {
    /// 请求是否成功
    pub success: bool,
    /// 响应数据
    pub data: Option<T>,
    /// 错误信息 (成功时为 null)
    pub error: Option<String>,
}

impl<T: Serialize + ToSchema> ApiResponse<T> {
    /// 构造成功响应
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// 统一错误响应包装
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 固定为 false
    pub success: bool,
    /// 面向用户的错误描述
    #[schema(example = "Currency pair is required.")]
    pub error: String,
}

impl ApiErrorResponse {
    pub fn from_msg(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: msg.into(),
        }
    }
}

// ============================================================
//  交易日志相关 DTO
// ============================================================

/// 破坏性操作的确认参数
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfirmQuery {
    /// 必须为 true 才会执行删除
    #[serde(default)]
    pub confirm: bool,
}

/// 单条删除结果
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    /// 被删除的记录 ID
    #[schema(example = "1760605200000-4f1c2a9b8e7d4c3b")]
    pub id: String,
    /// 是否真的删除了记录 (ID 不存在时为 false)
    pub deleted: bool,
}

/// 清空日志结果
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearResponse {
    /// 被移除的记录数
    pub removed: usize,
}

/// AI 建议结果
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    /// 建议文本，可直接填入表单的 suggestion 字段
    #[schema(example = "Great patience waiting for the retest. Keep journaling your calm entries.")]
    pub suggestion: String,
}

/// 策略选项
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrategyOptionsResponse {
    /// 预设策略名，末项为自定义入口 "Other"
    pub presets: Vec<String>,
    /// 自定义策略的标记值
    #[schema(example = "Other")]
    pub other: String,
}
