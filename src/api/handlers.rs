use crate::error::ReceiptError;
use crate::models::{PointsResponse, ProcessResponse, ReceiptRequest};
use crate::service::ReceiptService;
use crate::store::ReceiptId;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::IndentedJson;

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 提交小票
pub async fn process_receipt(
    State(service): State<Arc<ReceiptService>>,
    body: Bytes,
) -> Response {
    // 不校验 Content-Type；请求体无法解析同样按非法小票处理
    let req: ReceiptRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            tracing::warn!("Rejected receipt body: {}", e);
            return ReceiptError::invalid(e.to_string()).into_response();
        }
    };

    match service.process(req) {
        Ok(id) => {
            let response = ProcessResponse { id: id.to_string() };
            (StatusCode::OK, IndentedJson(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// 查询积分
pub async fn get_points(
    State(service): State<Arc<ReceiptService>>,
    Path(id): Path<String>,
) -> Response {
    match service.points(&ReceiptId::from(id)) {
        Ok(points) => (StatusCode::OK, IndentedJson(PointsResponse { points })).into_response(),
        Err(e) => e.into_response(),
    }
}
