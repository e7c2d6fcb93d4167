// ==========================================
// VMQ 生产看板 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 仓储由 AppState 持有并显式传递，没有全局单例
// ==========================================

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::api::{DashboardApi, ImportApi, SessionApi};
use crate::config::{ConfigResult, ImportConfigReader};
use crate::domain::clock::{system_clock, SharedClock};
use crate::engine::analytics::AnalyticsEngine;
use crate::engine::import_orchestrator::ImportOrchestrator;
use crate::importer::file_parser::ExcelParser;
use crate::importer::id_strategy::id_strategy_from_name;
use crate::importer::importer_trait::{WorkbookParser, WorkbookSource};
use crate::importer::workbook_normalizer::WorkbookNormalizer;
use crate::importer::workbook_source::FsWorkbookSource;
use crate::repository::domain_store::{DomainStore, SharedStore};

/// 应用状态
///
/// 包含共享仓储和所有API实例
pub struct AppState {
    /// 领域仓储
    pub store: SharedStore,

    /// 当前时间来源
    pub clock: SharedClock,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,

    /// 导入导出API
    pub import_api: Arc<ImportApi>,

    /// 会话API
    pub session_api: Arc<SessionApi>,
}

impl AppState {
    /// 按配置创建（数据文件从 data_dir 读取，系统时钟）
    pub async fn new(config: &dyn ImportConfigReader) -> ConfigResult<Self> {
        let data_dir = config.get_data_dir().await?;
        info!(data_dir = %data_dir.display(), "初始化AppState");
        Self::with_source(config, Arc::new(FsWorkbookSource::new(data_dir)), system_clock()).await
    }

    /// 指定数据源与时钟创建（测试使用内存数据源与固定时钟）
    pub async fn with_source(
        config: &dyn ImportConfigReader,
        source: Arc<dyn WorkbookSource>,
        clock: SharedClock,
    ) -> ConfigResult<Self> {
        // ===== 读取配置 =====
        let policy = config.get_mutation_policy().await?;
        let months = config.get_month_locale().await?;
        let row_limit = config.get_import_row_limit().await?;
        let ids = id_strategy_from_name(&config.get_id_strategy().await?);
        let warning_days = config.get_expiration_warning_days().await?;
        let top_limit = config.get_top_materials_limit().await?;
        let timeout = Duration::from_secs(config.get_fetch_timeout_secs().await?);
        let losses = config.get_losses_workbook().await?;
        let stock = config.get_stock_workbook().await?;

        // ===== 仓储与引擎 =====
        let store = DomainStore::new(policy, clock.clone()).into_shared();
        let parser: Arc<dyn WorkbookParser> = Arc::new(ExcelParser);
        let normalizer = Arc::new(
            WorkbookNormalizer::new(ids, months, clock.clone()).with_row_limit(row_limit),
        );
        let analytics = Arc::new(AnalyticsEngine::new(months, warning_days, top_limit));
        let orchestrator = Arc::new(ImportOrchestrator::new(
            source,
            parser.clone(),
            normalizer.clone(),
            losses,
            stock,
            timeout,
        ));

        // ===== API =====
        let dashboard_api = Arc::new(DashboardApi::new(
            store.clone(),
            analytics,
            clock.clone(),
        ));
        let import_api = Arc::new(ImportApi::new(
            store.clone(),
            orchestrator,
            parser,
            normalizer,
            clock.clone(),
        ));
        let session_api = Arc::new(SessionApi::new(store.clone()));

        info!(policy = ?policy, months = ?months, "AppState 初始化完成");

        Ok(Self {
            store,
            clock,
            dashboard_api,
            import_api,
            session_api,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{config_keys, ConfigManager};
    use crate::domain::types::MutationPolicy;
    use crate::importer::workbook_source::MemoryWorkbookSource;

    #[tokio::test]
    async fn test_state_follows_config() {
        let config = ConfigManager::from_values([(config_keys::MUTATION_POLICY, "strict")]);
        let state = AppState::with_source(
            &config,
            Arc::new(MemoryWorkbookSource::new()),
            system_clock(),
        )
        .await
        .unwrap();

        assert_eq!(state.store.read().unwrap().policy(), MutationPolicy::Strict);
        assert!(!state.dashboard_api.get_status().unwrap().is_loading);
    }

    #[tokio::test]
    async fn test_invalid_config_value_fails() {
        let config = ConfigManager::from_values([(config_keys::TOP_MATERIALS_LIMIT, "many")]);
        let result = AppState::with_source(
            &config,
            Arc::new(MemoryWorkbookSource::new()),
            system_clock(),
        )
        .await;
        assert!(result.is_err());
    }
}
