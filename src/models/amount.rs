use bigdecimal::BigDecimal;
use std::fmt;
use std::str::FromStr;

use crate::error::{ReceiptError, ReceiptResult};

/// 金额字符串 (`^\d+\.\d{2}$`)
///
/// 保留原始文本：积分规则只关心小数部分的两位数字，
/// 只有描述长度规则才需要真正的数值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount(String);

impl Amount {
    /// 按金额语法校验并构造；不符合语法返回 `None`
    pub fn parse(raw: &str) -> Option<Self> {
        is_amount(raw).then(|| Self(raw.to_string()))
    }

    /// 小数点后的两位数字，如 `"10.25"` -> `"25"`
    pub fn cents(&self) -> &str {
        self.0.split_once('.').map(|(_, cents)| cents).unwrap_or("")
    }

    /// 精确十进制数值
    pub fn to_decimal(&self) -> ReceiptResult<BigDecimal> {
        BigDecimal::from_str(&self.0)
            .map_err(|e| ReceiptError::invalid(format!("amount {:?} is not a number: {}", self.0, e)))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一位以上 ASCII 数字 + `.` + 恰好两位 ASCII 数字
///
/// 不接受符号、指数、千分位，也不接受 `"10.5"` / `"10.500"`。
pub fn is_amount(raw: &str) -> bool {
    let Some((whole, cents)) = raw.split_once('.') else {
        return false;
    };
    !whole.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && cents.len() == 2
        && cents.bytes().all(|b| b.is_ascii_digit())
}
