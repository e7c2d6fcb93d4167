// ==========================================
// VMQ 生产看板 - 配置层
// ==========================================
// 职责: 系统配置管理（JSON 文件 + VMQ_* 环境变量覆写）
// ==========================================

pub mod config_manager;
pub mod import_config_trait;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, default_config_path, ConfigError, ConfigManager, ConfigResult,
};
pub use import_config_trait::ImportConfigReader;
