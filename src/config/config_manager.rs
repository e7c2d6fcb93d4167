// ==========================================
// VMQ 生产看板 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 来源优先级: VMQ_* 环境变量 > JSON 配置文件 > 内置默认值
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::domain::types::{MonthLocale, MutationPolicy};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// 环境变量前缀（VMQ_DATA_DIR → data_dir）
pub const ENV_PREFIX: &str = "VMQ_";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("配置文件顶层必须是 JSON 对象")]
    NotAnObject,

    #[error("配置项 {key} 的值无效: {value}")]
    InvalidValue { key: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 默认配置文件路径: <系统配置目录>/vmq-dashboard/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vmq-dashboard").join("config.json"))
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 仅使用内置默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 从显式键值创建（测试与嵌入场景）
    pub fn from_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径；None 时尝试默认路径，文件不存在则忽略
    ///
    /// # 说明
    /// 显式传入的路径必须存在，默认路径可以缺失
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut manager = Self::new();

        match path {
            Some(p) => manager.merge_file(p)?,
            None => {
                if let Some(p) = default_config_path().filter(|p| p.exists()) {
                    manager.merge_file(&p)?;
                }
            }
        }

        manager.merge_env(std::env::vars());
        info!(entries = manager.values.len(), "配置加载完成");
        Ok(manager)
    }

    /// 合并 JSON 配置文件（标量值转为字符串，null 忽略）
    pub fn merge_file(&mut self, path: &Path) -> ConfigResult<()> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        self.merge_json(&raw)?;
        debug!(path = %path.display(), "已合并配置文件");
        Ok(())
    }

    pub fn merge_json(&mut self, raw: &str) -> ConfigResult<()> {
        let Value::Object(map) = serde_json::from_str::<Value>(raw)? else {
            return Err(ConfigError::NotAnObject);
        };

        for (key, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(s) => s,
                other => other.to_string(),
            };
            self.values.insert(key, text);
        }
        Ok(())
    }

    /// 合并 VMQ_* 环境变量（键名转小写）
    pub fn merge_env<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            if let Some(key) = name.strip_prefix(ENV_PREFIX) {
                self.values.insert(key.to_lowercase(), value);
            }
        }
    }

    /// 覆写单个配置项
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// 读取配置值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_or_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// 数值配置：无法解析时报错（配置错误不静默吞掉）
    fn get_parsed<T: std::str::FromStr>(&self, key: &str, default: T) -> ConfigResult<T> {
        match self.get(key).map(str::trim).filter(|v| !v.is_empty()) {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    /// 当前配置快照（JSON）
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        let mut entries: Vec<(&String, &String)> = self.values.iter().collect();
        entries.sort();
        let map: serde_json::Map<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Ok(serde_json::to_string(&map)?)
    }
}

// ==========================================
// ImportConfigReader Trait 实现
// ==========================================
#[async_trait]
impl ImportConfigReader for ConfigManager {
    // ===== 数据文件 =====

    async fn get_data_dir(&self) -> ConfigResult<PathBuf> {
        Ok(PathBuf::from(
            self.get_or_default(config_keys::DATA_DIR, defaults::DATA_DIR),
        ))
    }

    async fn get_losses_workbook(&self) -> ConfigResult<String> {
        Ok(self.get_or_default(config_keys::LOSSES_WORKBOOK, defaults::LOSSES_WORKBOOK))
    }

    async fn get_stock_workbook(&self) -> ConfigResult<String> {
        Ok(self.get_or_default(config_keys::STOCK_WORKBOOK, defaults::STOCK_WORKBOOK))
    }

    async fn get_fetch_timeout_secs(&self) -> ConfigResult<u64> {
        self.get_parsed(config_keys::FETCH_TIMEOUT_SECS, defaults::FETCH_TIMEOUT_SECS)
    }

    // ===== 归一化 =====

    async fn get_month_locale(&self) -> ConfigResult<MonthLocale> {
        Ok(MonthLocale::from_code(
            &self.get_or_default(config_keys::MONTH_LOCALE, "cs"),
        ))
    }

    async fn get_import_row_limit(&self) -> ConfigResult<Option<usize>> {
        match self.get(config_keys::IMPORT_ROW_LIMIT).map(str::trim) {
            None | Some("") => Ok(None),
            Some(_) => self.get_parsed(config_keys::IMPORT_ROW_LIMIT, 0).map(Some),
        }
    }

    async fn get_id_strategy(&self) -> ConfigResult<String> {
        Ok(self.get_or_default(config_keys::ID_STRATEGY, defaults::ID_STRATEGY))
    }

    // ===== 仓储与分析 =====

    async fn get_mutation_policy(&self) -> ConfigResult<MutationPolicy> {
        let value = self.get_or_default(config_keys::MUTATION_POLICY, "lenient");
        match value.trim().to_lowercase().as_str() {
            "lenient" | "strict" => Ok(MutationPolicy::from_name(&value)),
            _ => {
                warn!(raw_value = %value, "未知的变更策略，使用 lenient");
                Ok(MutationPolicy::Lenient)
            }
        }
    }

    async fn get_expiration_warning_days(&self) -> ConfigResult<i64> {
        let days = self.get_parsed(
            config_keys::EXPIRATION_WARNING_DAYS,
            defaults::EXPIRATION_WARNING_DAYS,
        )?;
        if !(0..=defaults::MAX_EXPIRATION_WARNING_DAYS).contains(&days) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::EXPIRATION_WARNING_DAYS.to_string(),
                value: days.to_string(),
            });
        }
        Ok(days)
    }

    async fn get_top_materials_limit(&self) -> ConfigResult<usize> {
        self.get_parsed(config_keys::TOP_MATERIALS_LIMIT, defaults::TOP_MATERIALS_LIMIT)
    }

    // ===== 界面 =====

    async fn get_locale(&self) -> ConfigResult<String> {
        Ok(self.get_or_default(config_keys::LOCALE, defaults::LOCALE))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 数据文件
    pub const DATA_DIR: &str = "data_dir";
    pub const LOSSES_WORKBOOK: &str = "losses_workbook";
    pub const STOCK_WORKBOOK: &str = "stock_workbook";
    pub const FETCH_TIMEOUT_SECS: &str = "fetch_timeout_secs";

    // 归一化
    pub const MONTH_LOCALE: &str = "month_locale";
    pub const IMPORT_ROW_LIMIT: &str = "import_row_limit";
    pub const ID_STRATEGY: &str = "id_strategy";

    // 仓储与分析
    pub const MUTATION_POLICY: &str = "mutation_policy";
    pub const EXPIRATION_WARNING_DAYS: &str = "expiration_warning_days";
    pub const TOP_MATERIALS_LIMIT: &str = "top_materials_limit";

    // 界面语言
    pub const LOCALE: &str = "locale";
}

mod defaults {
    pub const DATA_DIR: &str = "public";
    pub const LOSSES_WORKBOOK: &str = "VMQ_Ztráty_Extruze_2025.xls";
    pub const STOCK_WORKBOOK: &str = "VMQ_Sklad_materiálu_2025.xls";
    pub const FETCH_TIMEOUT_SECS: u64 = 30;
    pub const ID_STRATEGY: &str = "row_index";
    pub const EXPIRATION_WARNING_DAYS: i64 = 7;
    pub const MAX_EXPIRATION_WARNING_DAYS: i64 = 3650;
    pub const TOP_MATERIALS_LIMIT: usize = 10;
    pub const LOCALE: &str = "cs";
}
