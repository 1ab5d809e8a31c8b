//! CSV 报表生成。
//!
//! 表头 + 每条记录一行, 逗号分隔, 每行以 `\n` 结尾。
//! 数值为纯十进制 (无货币符号、无千分位), 日期为 `YYYY-MM-DD`。
//! 含逗号、引号或换行的字段按 RFC 4180 加引号。

use crate::error::Result;
use crate::models::{Buyer, Invoice};
use crate::service::utilization::{round_one_decimal, utilization_percent};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

pub const OVERDUE_HEADER: [&str; 6] = [
    "Invoice ID",
    "Buyer Name",
    "Amount",
    "Due Date",
    "Days Overdue",
    "Insurance Status",
];

pub const AGING_HEADER: [&str; 7] = [
    "Invoice ID",
    "Buyer Name",
    "Amount",
    "Due Date",
    "Status",
    "Days Overdue",
    "Insurance Status",
];

pub const EXPOSURE_HEADER: [&str; 8] = [
    "Buyer Name",
    "Country",
    "Credit Limit",
    "Current Exposure",
    "Available Credit",
    "Utilization %",
    "Insurance Status",
    "Risk Rating",
];

/// 利用率无法计算 (授信额度为 0) 时的占位值
pub const UNDEFINED_UTILIZATION: &str = "N/A";

pub fn insurance_label(is_insured: bool) -> &'static str {
    if is_insured {
        "Insured"
    } else {
        "Uninsured"
    }
}

fn new_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// 逾期发票报表
pub fn overdue_csv<'a>(invoices: impl IntoIterator<Item = &'a Invoice>) -> Result<String> {
    let mut writer = new_writer();
    writer.write_record(OVERDUE_HEADER)?;

    for inv in invoices {
        writer.write_record([
            inv.id.clone(),
            inv.buyer_name.clone(),
            inv.amount.to_string(),
            inv.due_date.format("%Y-%m-%d").to_string(),
            inv.days_overdue.to_string(),
            insurance_label(inv.is_insured).to_string(),
        ])?;
    }

    finish(writer)
}

/// 账龄报表 (全部发票)
pub fn aging_csv<'a>(invoices: impl IntoIterator<Item = &'a Invoice>) -> Result<String> {
    let mut writer = new_writer();
    writer.write_record(AGING_HEADER)?;

    for inv in invoices {
        writer.write_record([
            inv.id.clone(),
            inv.buyer_name.clone(),
            inv.amount.to_string(),
            inv.due_date.format("%Y-%m-%d").to_string(),
            inv.status.to_string(),
            inv.days_overdue.to_string(),
            insurance_label(inv.is_insured).to_string(),
        ])?;
    }

    finish(writer)
}

/// 授信敞口报表
pub fn exposure_csv<'a>(buyers: impl IntoIterator<Item = &'a Buyer>) -> Result<String> {
    let mut writer = new_writer();
    writer.write_record(EXPOSURE_HEADER)?;

    for buyer in buyers {
        let utilization = utilization_percent(buyer)
            .as_ref()
            .map(|p| round_one_decimal(p).to_string())
            .unwrap_or_else(|| UNDEFINED_UTILIZATION.to_string());

        writer.write_record([
            buyer.name.clone(),
            buyer.country.clone(),
            buyer.credit_limit.to_string(),
            buyer.current_exposure.to_string(),
            buyer.available_credit().to_string(),
            utilization,
            insurance_label(buyer.is_insured).to_string(),
            buyer.risk_rating.to_string(),
        ])?;
    }

    finish(writer)
}
