//! 示例数据集: 5 个买方、8 张发票、1 份保单。
//!
//! 每次调用都构造新的 `Portfolio`, 不存在全局共享状态。

use crate::models::{Buyer, Invoice, InvoiceStatus, Policy, Portfolio, RiskRating};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn buyer(
    id: &str,
    name: &str,
    credit_limit: i64,
    current_exposure: i64,
    is_insured: bool,
    risk_rating: RiskRating,
    country: &str,
) -> Buyer {
    Buyer {
        id: id.to_string(),
        name: name.to_string(),
        credit_limit: BigDecimal::from(credit_limit),
        current_exposure: BigDecimal::from(current_exposure),
        is_insured,
        risk_rating,
        country: country.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn invoice(
    id: &str,
    buyer_id: &str,
    buyer_name: &str,
    amount: i64,
    due_date: NaiveDate,
    status: InvoiceStatus,
    days_overdue: u32,
    is_insured: bool,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        buyer_id: buyer_id.to_string(),
        buyer_name: buyer_name.to_string(),
        amount: BigDecimal::from(amount),
        due_date,
        status,
        days_overdue,
        is_insured,
    }
}

pub fn sample_buyers() -> Vec<Buyer> {
    vec![
        buyer("1", "Acme Manufacturing Corp", 500000, 425000, true, RiskRating::Low, "USA"),
        buyer("2", "Global Distributors Inc", 300000, 285000, true, RiskRating::Medium, "Canada"),
        buyer("3", "European Trading Co", 250000, 180000, true, RiskRating::Low, "Germany"),
        buyer("4", "Pacific Imports LLC", 150000, 165000, false, RiskRating::High, "USA"),
        buyer("5", "Continental Supplies", 400000, 320000, true, RiskRating::Medium, "France"),
    ]
}

pub fn sample_invoices() -> Vec<Invoice> {
    use InvoiceStatus::{Overdue, Pending};

    vec![
        invoice("INV-001", "1", "Acme Manufacturing Corp", 85000, date(2025, 11, 5), Overdue, 5, true),
        invoice("INV-002", "2", "Global Distributors Inc", 125000, date(2025, 11, 15), Pending, 0, true),
        invoice("INV-003", "4", "Pacific Imports LLC", 45000, date(2025, 10, 20), Overdue, 21, false),
        invoice("INV-004", "1", "Acme Manufacturing Corp", 95000, date(2025, 11, 20), Pending, 0, true),
        invoice("INV-005", "3", "European Trading Co", 67000, date(2025, 10, 28), Overdue, 13, true),
        invoice("INV-006", "5", "Continental Supplies", 110000, date(2025, 11, 12), Pending, 0, true),
        invoice("INV-007", "2", "Global Distributors Inc", 75000, date(2025, 11, 18), Pending, 0, true),
        invoice("INV-008", "4", "Pacific Imports LLC", 38000, date(2025, 11, 8), Pending, 0, false),
    ]
}

pub fn sample_policy() -> Policy {
    Policy {
        id: "1".to_string(),
        insurer_name: "Allianz Trade".to_string(),
        policy_number: "ALZ-2025-12345".to_string(),
        overdue_threshold: 90,
        coverage_percentage: BigDecimal::from(90),
        effective_date: date(2025, 1, 1),
        expiry_date: date(2025, 12, 31),
    }
}

pub fn sample_portfolio() -> Portfolio {
    Portfolio::new(sample_buyers(), sample_invoices(), sample_policy())
}
