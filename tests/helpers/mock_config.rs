// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use std::path::PathBuf;
use vmq_dashboard::config::{ConfigResult, ImportConfigReader};
use vmq_dashboard::domain::types::{MonthLocale, MutationPolicy};

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub data_dir: PathBuf,
    pub losses_workbook: String,
    pub stock_workbook: String,
    pub fetch_timeout_secs: u64,
    pub month_locale: MonthLocale,
    pub import_row_limit: Option<usize>,
    pub id_strategy: String,
    pub mutation_policy: MutationPolicy,
    pub expiration_warning_days: i64,
    pub top_materials_limit: usize,
    pub locale: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("public"),
            losses_workbook: "VMQ_Ztráty_Extruze_2025.xls".to_string(),
            stock_workbook: "VMQ_Sklad_materiálu_2025.xls".to_string(),
            fetch_timeout_secs: 5,
            month_locale: MonthLocale::Cs,
            import_row_limit: None,
            id_strategy: "row_index".to_string(),
            mutation_policy: MutationPolicy::Lenient,
            expiration_warning_days: 7,
            top_materials_limit: 10,
            locale: "cs".to_string(),
        }
    }
}

impl MockConfig {
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_month_locale(mut self, locale: MonthLocale) -> Self {
        self.month_locale = locale;
        self
    }

    pub fn with_policy(mut self, policy: MutationPolicy) -> Self {
        self.mutation_policy = policy;
        self
    }
}

#[async_trait]
impl ImportConfigReader for MockConfig {
    async fn get_data_dir(&self) -> ConfigResult<PathBuf> {
        Ok(self.data_dir.clone())
    }

    async fn get_losses_workbook(&self) -> ConfigResult<String> {
        Ok(self.losses_workbook.clone())
    }

    async fn get_stock_workbook(&self) -> ConfigResult<String> {
        Ok(self.stock_workbook.clone())
    }

    async fn get_fetch_timeout_secs(&self) -> ConfigResult<u64> {
        Ok(self.fetch_timeout_secs)
    }

    async fn get_month_locale(&self) -> ConfigResult<MonthLocale> {
        Ok(self.month_locale)
    }

    async fn get_import_row_limit(&self) -> ConfigResult<Option<usize>> {
        Ok(self.import_row_limit)
    }

    async fn get_id_strategy(&self) -> ConfigResult<String> {
        Ok(self.id_strategy.clone())
    }

    async fn get_mutation_policy(&self) -> ConfigResult<MutationPolicy> {
        Ok(self.mutation_policy)
    }

    async fn get_expiration_warning_days(&self) -> ConfigResult<i64> {
        Ok(self.expiration_warning_days)
    }

    async fn get_top_materials_limit(&self) -> ConfigResult<usize> {
        Ok(self.top_materials_limit)
    }

    async fn get_locale(&self) -> ConfigResult<String> {
        Ok(self.locale.clone())
    }
}
