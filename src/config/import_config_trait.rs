// ==========================================
// VMQ 生产看板 - 导入配置读取 Trait
// ==========================================
// 职责: 定义导入/仓储/分析所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::config_manager::ConfigResult;
use crate::domain::types::{MonthLocale, MutationPolicy};
use async_trait::async_trait;
use std::path::PathBuf;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// 用途: AppState 装配时读取的配置视图
// 实现者: ConfigManager（测试中可替换为 mock）
#[async_trait]
pub trait ImportConfigReader: Send + Sync {
    // ===== 数据文件 =====

    /// 固定数据文件所在目录
    ///
    /// # 默认值
    /// - public
    async fn get_data_dir(&self) -> ConfigResult<PathBuf>;

    /// 损耗工作簿文件名（含 M_Data / Extruze / Vývoje / Zápis odpadů）
    ///
    /// # 默认值
    /// - VMQ_Ztráty_Extruze_2025.xls
    async fn get_losses_workbook(&self) -> ConfigResult<String>;

    /// 库存工作簿文件名（含 VMQ sklad směsí）
    ///
    /// # 默认值
    /// - VMQ_Sklad_materiálu_2025.xls
    async fn get_stock_workbook(&self) -> ConfigResult<String>;

    /// 读取两个工作簿的超时时间（秒）
    ///
    /// # 默认值
    /// - 30
    async fn get_fetch_timeout_secs(&self) -> ConfigResult<u64>;

    // ===== 归一化 =====

    /// 月份名称语言
    ///
    /// # 默认值
    /// - cs
    async fn get_month_locale(&self) -> ConfigResult<MonthLocale>;

    /// 每张工作表最多读取的数据行（None = 不限）
    async fn get_import_row_limit(&self) -> ConfigResult<Option<usize>>;

    /// 记录 ID 生成策略名称（row_index / sequential / content_hash）
    ///
    /// # 默认值
    /// - row_index
    async fn get_id_strategy(&self) -> ConfigResult<String>;

    // ===== 仓储与分析 =====

    /// 未知 ID 的处理策略
    ///
    /// # 默认值
    /// - lenient
    async fn get_mutation_policy(&self) -> ConfigResult<MutationPolicy>;

    /// 临期预警天数
    ///
    /// # 默认值
    /// - 7
    async fn get_expiration_warning_days(&self) -> ConfigResult<i64>;

    /// 常用配方排行条数
    ///
    /// # 默认值
    /// - 10
    async fn get_top_materials_limit(&self) -> ConfigResult<usize>;

    // ===== 界面 =====

    /// 用户提示语言（cs / en）
    async fn get_locale(&self) -> ConfigResult<String>;
}
