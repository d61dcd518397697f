use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{Amount, Item, Receipt};

pub const ROUND_TOTAL_POINTS: i64 = 75;
pub const QUARTER_TOTAL_POINTS: i64 = 25;
pub const ITEM_PAIR_POINTS: i64 = 5;
pub const ODD_DAY_POINTS: i64 = 6;
pub const AFTERNOON_POINTS: i64 = 10;

/// 下午时段 (开区间，单位: 当日秒数)
const AFTERNOON_START_SECS: u32 = 14 * 3600;
const AFTERNOON_END_SECS: u32 = 16 * 3600;

/// 各规则得分明细
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub retailer: i64,
    pub round_total: i64,
    pub quarter_total: i64,
    pub item_pairs: i64,
    pub descriptions: i64,
    pub odd_day: i64,
    pub afternoon: i64,
}

impl ScoreBreakdown {
    /// 各项求和，溢出视为非法小票
    pub fn total(&self) -> ReceiptResult<i64> {
        [
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(self.retailer, checked_sum)
    }
}

/// 计算小票积分 (前置条件: 小票已通过校验)
pub fn score(receipt: &Receipt) -> ReceiptResult<i64> {
    breakdown(receipt)?.total()
}

/// 逐条规则计分，规则之间相互独立、结果累加
pub fn breakdown(receipt: &Receipt) -> ReceiptResult<ScoreBreakdown> {
    let mut descriptions = 0;
    for item in &receipt.items {
        descriptions = checked_sum(descriptions, description_points(item)?)?;
    }

    Ok(ScoreBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: round_total_points(&receipt.total),
        quarter_total: quarter_total_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions,
        odd_day: odd_day_points(receipt.purchase_date),
        afternoon: afternoon_points(receipt.purchase_time),
    })
}

/// 商户名中每个字母 (L*) 或十进制数字 (Nd) 记 1 分，按未 trim 的原文计数
///
/// 上标数字、罗马数字、组合附标等不计分。
pub fn retailer_points(retailer: &str) -> i64 {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as i64
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// 整数金额 (`.00`)
pub fn round_total_points(total: &Amount) -> i64 {
    if total.cents() == "00" {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// 0.25 的倍数；`.00` 不在此列，只拿整数金额的分
pub fn quarter_total_points(total: &Amount) -> i64 {
    match total.cents() {
        "25" | "50" | "75" => QUARTER_TOTAL_POINTS,
        _ => 0,
    }
}

/// 每两个明细 5 分
pub fn item_pair_points(item_count: usize) -> i64 {
    (item_count / 2) as i64 * ITEM_PAIR_POINTS
}

/// trim 后描述长度 (字节) 是 3 的倍数时，得 `ceil(price * 0.2)` 分
///
/// 只有命中的明细才解析价格。
pub fn description_points(item: &Item) -> ReceiptResult<i64> {
    let len = item.trimmed_description().len();
    if len == 0 || len % 3 != 0 {
        return Ok(0);
    }

    let price = item.price.to_decimal()?;
    let rate = BigDecimal::new(2.into(), 1);
    ceil_to_points(&(price * rate))
}

/// 购买日为奇数
pub fn odd_day_points(date: NaiveDate) -> i64 {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// 14:00 之后、16:00 之前 (两端都不含)
pub fn afternoon_points(time: NaiveTime) -> i64 {
    let secs = time.num_seconds_from_midnight();
    if secs > AFTERNOON_START_SECS && secs < AFTERNOON_END_SECS {
        AFTERNOON_POINTS
    } else {
        0
    }
}

fn checked_sum(acc: i64, points: i64) -> ReceiptResult<i64> {
    acc.checked_add(points)
        .ok_or_else(|| ReceiptError::invalid("receipt points overflow"))
}

/// 向上取整到整数分 (输入非负)
fn ceil_to_points(value: &BigDecimal) -> ReceiptResult<i64> {
    let floor = value.with_scale(0);
    let ceil = if &floor < value {
        floor + BigDecimal::from(1_i64)
    } else {
        floor
    };
    ceil.to_i64()
        .ok_or_else(|| ReceiptError::invalid(format!("description points {} out of range", value)))
}
