use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use crate::error::{ReceiptError, ReceiptResult};

/// 提交的小票 (请求体原样结构)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ItemRequest>,
    pub total: String,
}

/// 小票明细行 (请求体原样结构)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub short_description: String,
    pub price: String,
}

/// 校验通过的小票
#[derive(Debug, Clone)]
pub struct Receipt {
    /// 未 trim 的原始商户名 (字母数字规则按原文计数)
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Amount,
}

/// 校验通过的明细行
#[derive(Debug, Clone)]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

impl Item {
    /// 去掉首尾空格后的描述
    pub fn trimmed_description(&self) -> &str {
        trim_spaces(&self.short_description)
    }
}

/// 只去掉首尾的 ASCII 空格，制表符等保持不变
pub fn trim_spaces(raw: &str) -> &str {
    raw.trim_matches(' ')
}

impl TryFrom<ReceiptRequest> for Receipt {
    type Error = ReceiptError;

    /// 按固定顺序校验，遇到第一条失败即返回
    fn try_from(req: ReceiptRequest) -> ReceiptResult<Self> {
        // 1. 必填项
        if trim_spaces(&req.retailer).is_empty() {
            return Err(ReceiptError::invalid("retailer is empty"));
        }
        if req.items.is_empty() {
            return Err(ReceiptError::invalid("receipt has no items"));
        }

        // 2. 日期
        let purchase_date = parse_purchase_date(&req.purchase_date)?;

        // 3. 时间
        let purchase_time = parse_purchase_time(&req.purchase_time)?;

        // 4. 总额
        let total = Amount::parse(&req.total)
            .ok_or_else(|| ReceiptError::invalid(format!("total {:?} is malformed", req.total)))?;

        // 5. 明细
        let items = req
            .items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| -> ReceiptResult<Item> {
                let price = Amount::parse(&item.price).ok_or_else(|| {
                    ReceiptError::invalid(format!("item {} price {:?} is malformed", idx, item.price))
                })?;
                if trim_spaces(&item.short_description).is_empty() {
                    return Err(ReceiptError::invalid(format!("item {} has no description", idx)));
                }
                Ok(Item {
                    short_description: item.short_description,
                    price,
                })
            })
            .collect::<ReceiptResult<Vec<_>>>()?;

        Ok(Receipt {
            retailer: req.retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

/// `YYYY-MM-DD`，位数固定，且必须是真实存在的日期
pub fn parse_purchase_date(raw: &str) -> ReceiptResult<NaiveDate> {
    let invalid = || ReceiptError::invalid(format!("purchaseDate {:?} is not YYYY-MM-DD", raw));
    if !matches_shape(raw, "dddd-dd-dd") {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

/// `HH:MM` (24 小时制)，位数固定
///
/// 一位小时 (如 `"9:30"`) 不接受，必须写成 `"09:30"`。
pub fn parse_purchase_time(raw: &str) -> ReceiptResult<NaiveTime> {
    let invalid = || ReceiptError::invalid(format!("purchaseTime {:?} is not HH:MM", raw));
    if !matches_shape(raw, "dd:dd") {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| invalid())
}

/// `d` 匹配一位 ASCII 数字，其余字符按字面匹配
fn matches_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'd' => c.is_ascii_digit(),
            _ => c == s,
        })
}
