// ==========================================
// VMQ 生产看板 - API 层
// ==========================================
// 职责: 面向界面的薄门面（看板查询 / 导入导出 / 会话）
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod import_api;
pub mod session_api;

pub use dashboard_api::{DashboardApi, InventoryStatusView, StoreStatus};
pub use error::{ApiError, ApiResult};
pub use import_api::ImportApi;
pub use session_api::SessionApi;
