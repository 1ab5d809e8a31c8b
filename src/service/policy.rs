use crate::error::{PolicyViolation, Result};
use crate::models::Policy;
use bigdecimal::{BigDecimal, Zero};
use chrono::Datelike;

/// 常用保险人 (编辑保单时快速选择)
pub const COMMON_INSURERS: [&str; 3] = ["Allianz Trade", "Coface", "Atradius"];

/// 保单更新命令: 校验通过后返回新的保单记录, 原记录不变
pub fn update_policy(current: &Policy, proposed: Policy) -> Result<Policy> {
    validate_update(current, &proposed)?;

    if current.overdue_threshold != proposed.overdue_threshold {
        tracing::info!(
            "Policy {}: 逾期阈值 {} -> {} 天",
            proposed.policy_number,
            current.overdue_threshold,
            proposed.overdue_threshold
        );
    }
    if current.insurer_name != proposed.insurer_name {
        tracing::info!(
            "Policy {}: 保险人 {} -> {}",
            proposed.policy_number,
            current.insurer_name,
            proposed.insurer_name
        );
    }

    Ok(proposed)
}

/// 按保险人生成待提交的保单: 保单号为 `<名称前三字母大写>-<生效年份>-<序号>`
pub fn select_insurer(current: &Policy, insurer: &str, serial: u32) -> Policy {
    let prefix = insurer.trim().chars().take(3).collect::<String>().to_uppercase();
    Policy {
        insurer_name: insurer.to_string(),
        policy_number: format!("{}-{}-{:05}", prefix, current.effective_date.year(), serial),
        ..current.clone()
    }
}

fn validate_update(current: &Policy, proposed: &Policy) -> std::result::Result<(), PolicyViolation> {
    if current.id != proposed.id {
        return Err(PolicyViolation::IdChanged {
            from: current.id.clone(),
            to: proposed.id.clone(),
        });
    }
    validate_policy(proposed)
}

/// 单独校验一份保单
pub fn validate_policy(policy: &Policy) -> std::result::Result<(), PolicyViolation> {
    if policy.insurer_name.trim().is_empty() {
        return Err(PolicyViolation::BlankField("insurer name"));
    }
    if policy.policy_number.trim().is_empty() {
        return Err(PolicyViolation::BlankField("policy number"));
    }
    if policy.overdue_threshold == 0 {
        return Err(PolicyViolation::ZeroOverdueThreshold);
    }
    if policy.coverage_percentage < BigDecimal::zero()
        || policy.coverage_percentage > BigDecimal::from(100)
    {
        return Err(PolicyViolation::CoverageOutOfRange(
            policy.coverage_percentage.to_string(),
        ));
    }
    if policy.expiry_date <= policy.effective_date {
        return Err(PolicyViolation::ExpiryNotAfterEffective {
            effective: policy.effective_date.to_string(),
            expiry: policy.expiry_date.to_string(),
        });
    }
    Ok(())
}
