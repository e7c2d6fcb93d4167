// ==========================================
// VMQ 生产看板 - 引擎层
// ==========================================
// 职责: 派生分析 + 导入编排
// 红线: 引擎不直接改动集合，仓储变更只经 DomainStore 的方法
// ==========================================

pub mod analytics;
pub mod import_orchestrator;

// 重导出核心引擎
pub use analytics::{
    expiration_status, AnalyticsEngine, DailyProduction, DashboardKpis, ExpirationOverview,
    MaterialUsage, MonthlyTotal, WasteTypeTotal, EFFICIENCY_FALLBACK, WASTE_FALLBACK,
};
pub use import_orchestrator::{failure_message, write_store, ImportOrchestrator, ImportSummary};
