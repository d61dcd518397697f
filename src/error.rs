use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::IndentedJson;

/// 对外返回的固定错误信息
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id";

/// 小票处理错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    /// 小票格式非法 (JSON 解析失败或任一校验规则未通过)
    #[error("invalid receipt: {reason}")]
    InvalidReceipt { reason: String },

    /// 未找到对应 id 的积分记录
    #[error("no receipt found for id {0}")]
    NotFound(String),
}

impl ReceiptError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidReceipt {
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        // 具体原因只写日志，响应体保持固定文案
        match self {
            ReceiptError::InvalidReceipt { .. } => {
                (StatusCode::BAD_REQUEST, IndentedJson(INVALID_RECEIPT_MESSAGE)).into_response()
            }
            ReceiptError::NotFound(_) => {
                (StatusCode::NOT_FOUND, IndentedJson(NOT_FOUND_MESSAGE)).into_response()
            }
        }
    }
}

pub type ReceiptResult<T> = Result<T, ReceiptError>;
