// ==========================================
// VMQ 生产看板 - 应用层
// ==========================================
// 职责: 按配置装配仓储、引擎与 API 实例
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
