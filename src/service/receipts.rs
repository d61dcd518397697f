use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{Receipt, ReceiptRequest};
use crate::service::scoring;
use crate::store::{ReceiptId, ReceiptStore};

/// 小票积分服务：校验 -> 计分 -> 生成 id -> 入库，以及按 id 查询
#[derive(Debug, Default)]
pub struct ReceiptService {
    store: ReceiptStore,
}

impl ReceiptService {
    pub fn new(store: ReceiptStore) -> Self {
        Self { store }
    }

    /// 处理一张提交的小票，返回新 id
    pub fn process(&self, req: ReceiptRequest) -> ReceiptResult<ReceiptId> {
        let receipt = Receipt::try_from(req).inspect_err(|e| {
            tracing::warn!("Rejected receipt: {}", e);
        })?;

        let points = scoring::breakdown(&receipt)
            .and_then(|breakdown| {
                tracing::debug!("Retailer {:?} breakdown: {:?}", receipt.retailer, breakdown);
                breakdown.total()
            })
            .inspect_err(|e| {
                tracing::warn!("Scoring failed for retailer {:?}: {}", receipt.retailer, e);
            })?;

        let id = ReceiptId::issue();
        self.store.put(id.clone(), points);

        tracing::info!(
            "Processed receipt {}: retailer={:?}, items={}, points={}",
            id,
            receipt.retailer,
            receipt.items.len(),
            points
        );
        Ok(id)
    }

    /// 按 id 查询积分
    pub fn points(&self, id: &ReceiptId) -> ReceiptResult<i64> {
        self.store.get(id).ok_or_else(|| {
            tracing::info!("No receipt found for id {}", id);
            ReceiptError::NotFound(id.to_string())
        })
    }

    #[cfg(test)]
    fn store(&self) -> &ReceiptStore {
        &self.store
    }
}
