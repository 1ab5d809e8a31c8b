use crate::config::Thresholds;
use crate::models::{Invoice, Portfolio};
use crate::service::utilization::{round_one_decimal, BuyerUtilization, UtilizationBand};
use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;
use serde::Serialize;

/// 合规聚合服务
/// 无状态: 每次调用都基于借用的数据集重新计算
pub struct ComplianceAnalyzer<'a> {
    portfolio: &'a Portfolio,
    thresholds: &'a Thresholds,
}

/// 仪表盘汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_receivables: BigDecimal,
    pub total_overdue: BigDecimal,
    pub overdue_count: usize,
    pub insured_exposure: BigDecimal,
    pub uninsured_exposure: BigDecimal,
    pub insured_share_pct: Option<BigDecimal>,
    pub critical_alerts: usize,
    pub warning_alerts: usize,
    pub average_utilization_pct: Option<BigDecimal>,
    pub total_buyers: usize,
    pub insured_buyers: usize,
    pub high_utilization_buyers: usize,
    pub over_limit_buyers: Vec<String>,
    pub total_credit_limit: BigDecimal,
    pub outstanding_by_buyer: IndexMap<String, BigDecimal>,
}

fn sum_amounts<'b>(invoices: impl Iterator<Item = &'b Invoice>) -> BigDecimal {
    invoices.fold(BigDecimal::zero(), |acc, inv| acc + &inv.amount)
}

impl<'a> ComplianceAnalyzer<'a> {
    pub fn new(portfolio: &'a Portfolio, thresholds: &'a Thresholds) -> Self {
        Self {
            portfolio,
            thresholds,
        }
    }

    pub fn portfolio(&self) -> &'a Portfolio {
        self.portfolio
    }

    /// 应收总额
    pub fn total_receivables(&self) -> BigDecimal {
        sum_amounts(self.portfolio.invoices.iter())
    }

    /// 逾期发票 (保持原顺序)
    pub fn overdue_invoices(&self) -> Vec<&'a Invoice> {
        self.portfolio
            .invoices
            .iter()
            .filter(|inv| inv.is_overdue())
            .collect()
    }

    pub fn total_overdue(&self) -> BigDecimal {
        sum_amounts(self.portfolio.invoices.iter().filter(|inv| inv.is_overdue()))
    }

    pub fn insured_exposure(&self) -> BigDecimal {
        sum_amounts(self.portfolio.invoices.iter().filter(|inv| inv.is_insured))
    }

    pub fn uninsured_exposure(&self) -> BigDecimal {
        sum_amounts(self.portfolio.invoices.iter().filter(|inv| !inv.is_insured))
    }

    /// 逾期天数超过保单阈值, 必须上报保险人
    fn is_critical(&self, inv: &Invoice) -> bool {
        inv.is_overdue() && inv.days_overdue > self.portfolio.policy.overdue_threshold
    }

    /// 逾期天数落在 [阈值 x warning_ratio, 阈值] 区间
    fn is_warning(&self, inv: &Invoice) -> bool {
        let threshold = self.portfolio.policy.overdue_threshold;
        if !inv.is_overdue() || inv.days_overdue > threshold {
            return false;
        }
        let floor = BigDecimal::from(threshold) * &self.thresholds.warning_ratio;
        BigDecimal::from(inv.days_overdue) >= floor
    }

    pub fn critical_invoices(&self) -> Vec<&'a Invoice> {
        self.portfolio
            .invoices
            .iter()
            .filter(|inv| self.is_critical(inv))
            .collect()
    }

    pub fn critical_alert_count(&self) -> usize {
        self.portfolio
            .invoices
            .iter()
            .filter(|inv| self.is_critical(inv))
            .count()
    }

    pub fn warning_alert_count(&self) -> usize {
        self.portfolio
            .invoices
            .iter()
            .filter(|inv| self.is_warning(inv))
            .count()
    }

    pub fn buyer_utilizations(&self) -> Vec<BuyerUtilization> {
        self.portfolio
            .buyers
            .iter()
            .map(|b| BuyerUtilization::for_buyer(b, self.thresholds))
            .collect()
    }

    /// 平均利用率 (忽略无授信额度的买方)
    pub fn average_utilization(&self) -> Option<BigDecimal> {
        let percents: Vec<BigDecimal> = self
            .buyer_utilizations()
            .into_iter()
            .filter_map(|u| u.percent)
            .collect();
        if percents.is_empty() {
            return None;
        }
        let count = BigDecimal::from(percents.len() as u64);
        let total = percents
            .into_iter()
            .fold(BigDecimal::zero(), |acc, p| acc + p);
        Some(total / count)
    }

    /// 已投保金额占应收总额的百分比
    pub fn insured_share(&self) -> Option<BigDecimal> {
        let total = self.total_receivables();
        if total.is_zero() {
            return None;
        }
        Some(self.insured_exposure() * BigDecimal::from(100) / total)
    }

    pub fn insured_buyer_count(&self) -> usize {
        self.portfolio.buyers.iter().filter(|b| b.is_insured).count()
    }

    pub fn total_credit_limit(&self) -> BigDecimal {
        self.portfolio
            .buyers
            .iter()
            .fold(BigDecimal::zero(), |acc, b| acc + &b.credit_limit)
    }

    pub fn high_utilization_buyer_count(&self) -> usize {
        self.buyer_utilizations()
            .iter()
            .filter(|u| u.band == UtilizationBand::High)
            .count()
    }

    /// 按买方汇总未结清金额, 保持首次出现顺序
    pub fn outstanding_by_buyer(&self) -> IndexMap<String, BigDecimal> {
        let mut grouped: IndexMap<String, BigDecimal> = IndexMap::new();
        for inv in self.portfolio.invoices.iter().filter(|inv| inv.is_outstanding()) {
            let entry = grouped
                .entry(inv.buyer_id.clone())
                .or_insert_with(BigDecimal::zero);
            *entry = &*entry + &inv.amount;
        }
        grouped
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        let utilizations = self.buyer_utilizations();
        let over_limit_buyers: Vec<String> = utilizations
            .iter()
            .filter(|u| u.over_limit)
            .map(|u| u.buyer_name.clone())
            .collect();

        let summary = DashboardSummary {
            total_receivables: self.total_receivables(),
            total_overdue: self.total_overdue(),
            overdue_count: self.overdue_invoices().len(),
            insured_exposure: self.insured_exposure(),
            uninsured_exposure: self.uninsured_exposure(),
            insured_share_pct: self.insured_share().as_ref().map(round_one_decimal),
            critical_alerts: self.critical_alert_count(),
            warning_alerts: self.warning_alert_count(),
            average_utilization_pct: self.average_utilization().as_ref().map(round_one_decimal),
            total_buyers: self.portfolio.buyers.len(),
            insured_buyers: self.insured_buyer_count(),
            high_utilization_buyers: utilizations
                .iter()
                .filter(|u| u.band == UtilizationBand::High)
                .count(),
            over_limit_buyers,
            total_credit_limit: self.total_credit_limit(),
            outstanding_by_buyer: self.outstanding_by_buyer(),
        };

        tracing::debug!(
            "仪表盘汇总: 应收 {}, 逾期 {} ({} 张), 严重预警 {}, 一般预警 {}",
            summary.total_receivables,
            summary.total_overdue,
            summary.overdue_count,
            summary.critical_alerts,
            summary.warning_alerts
        );

        summary
    }
}
