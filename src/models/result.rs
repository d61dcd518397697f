use serde::{Deserialize, Serialize};

/// 提交成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// 积分查询响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}
