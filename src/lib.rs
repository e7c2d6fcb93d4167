// ==========================================
// VMQ 生产看板 - 核心库
// ==========================================
// 职责: 混炼胶生产数据的内存仓储、表格导入与派生分析
// 系统定位: 看板界面背后的数据层（界面与图表不在本库）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "cs");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 表格归一化
pub mod importer;

// 数据仓储层 - 内存集合
pub mod repository;

// 引擎层 - 派生分析与导入编排
pub mod engine;

// 导出层 - 工作簿导出
pub mod exporter;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 界面门面
pub mod api;

// 应用层 - 装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ExpirationStatus, MaterialStatus, MixtureType, MonthLocale, MutationPolicy, ViewType,
    WasteType,
};

// 领域实体
pub use domain::{
    DataSnapshot, DevelopmentRecord, InventoryRecord, Material, ProductionRecord,
    RequirementRecord, WasteRecord,
};

// 仓储与引擎
pub use engine::{AnalyticsEngine, ImportOrchestrator, ImportSummary};
pub use repository::{DomainStore, SharedStore};

// API
pub use api::{DashboardApi, ImportApi, SessionApi};
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "VMQ Dashboard";
