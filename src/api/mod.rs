pub mod handlers;
pub mod response;

pub use handlers::{get_points, health_check, process_receipt};
pub use response::IndentedJson;

use crate::service::ReceiptService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建应用路由
pub fn router(service: Arc<ReceiptService>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(service)
}
