use chrono::Local;
use credit_compliance::{fixtures, report, AppConfig, ComplianceAnalyzer};
use tracing::{info, warn};
use tracing_subscriber::fmt::time::ChronoLocal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env()?;
    info!("Starting with config: {:?}", config);

    // 构建示例数据集
    let portfolio = fixtures::sample_portfolio();
    let analyzer = ComplianceAnalyzer::new(&portfolio, &config.thresholds);

    let today = Local::now().date_naive();
    if !portfolio.policy.is_active_on(today) {
        warn!(
            "Policy {} 不在有效期内 ({} ~ {})",
            portfolio.policy.policy_number,
            portfolio.policy.effective_date,
            portfolio.policy.expiry_date
        );
    }

    let summary = analyzer.dashboard_summary();
    info!("Dashboard summary:\n{}", serde_json::to_string_pretty(&summary)?);

    for inv in analyzer.critical_invoices() {
        warn!(
            "{} ({}) 逾期 {} 天, 超过保单阈值 {} 天, 需上报 {}",
            inv.id,
            inv.buyer_name,
            inv.days_overdue,
            portfolio.policy.overdue_threshold,
            portfolio.policy.insurer_name
        );
    }

    for entry in report::catalog(&analyzer) {
        let exported = report::export(entry.kind, &analyzer, today)?;
        let path = exported.write_to_dir(&config.report.output_dir)?;
        info!(
            "{}: {} 条记录 -> {} (for {})",
            entry.title,
            entry.record_count,
            path.display(),
            entry.insurer
        );
    }

    Ok(())
}
