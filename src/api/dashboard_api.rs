// ==========================================
// VMQ 生产看板 - 看板 API
// ==========================================
// 职责: 读取仓储快照，交给 AnalyticsEngine 计算看板指标
// 约定: 所有方法只读，持读锁的时间只覆盖一次计算
// ==========================================

use std::sync::{Arc, RwLockReadGuard};

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::clock::SharedClock;
use crate::domain::types::{ExpirationStatus, ViewType};
use crate::domain::{CollectionCounts, InventoryRecord};
use crate::engine::analytics::{
    AnalyticsEngine, DailyProduction, DashboardKpis, ExpirationOverview, MaterialUsage,
    MonthlyTotal, WasteTypeTotal,
};
use crate::repository::domain_store::{DomainStore, SharedStore};

/// 带有效期状态的库存行
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStatusView {
    #[serde(flatten)]
    pub record: InventoryRecord,
    pub status: ExpirationStatus,
    pub remaining_quantity: f64,
}

/// 仓储的界面状态
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStatus {
    pub is_loading: bool,
    pub error: Option<String>,
    pub current_view: ViewType,
    pub is_authenticated: bool,
    pub counts: CollectionCounts,
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    store: SharedStore,
    analytics: Arc<AnalyticsEngine>,
    clock: SharedClock,
}

impl DashboardApi {
    pub fn new(store: SharedStore, analytics: Arc<AnalyticsEngine>, clock: SharedClock) -> Self {
        Self {
            store,
            analytics,
            clock,
        }
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, DomainStore>> {
        self.store
            .read()
            .map_err(|e| ApiError::StoreError(e.to_string()))
    }

    // ==========================================
    // 指标
    // ==========================================

    /// 看板顶部指标（效率 / 废料率 / 周转 / 有效期分布）
    pub fn get_kpis(&self) -> ApiResult<DashboardKpis> {
        let store = self.read()?;
        Ok(self
            .analytics
            .dashboard_kpis(store.production(), store.inventory(), self.clock.now()))
    }

    pub fn get_monthly_production(&self) -> ApiResult<Vec<MonthlyTotal>> {
        let store = self.read()?;
        Ok(self.analytics.monthly_production(store.production()))
    }

    /// 常用配方排行
    ///
    /// # 参数
    /// - limit: 条数；None 时使用配置的默认值，0 视为无效输入
    pub fn get_top_materials(&self, limit: Option<usize>) -> ApiResult<Vec<MaterialUsage>> {
        let limit = limit.unwrap_or_else(|| self.analytics.top_materials_limit());
        if limit == 0 {
            return Err(ApiError::InvalidInput("limit 必须大于 0".to_string()));
        }
        let store = self.read()?;
        Ok(self.analytics.top_materials(store.production(), limit))
    }

    /// 单日产量；day 为空时取当天
    pub fn get_daily_production(&self, day: Option<NaiveDate>) -> ApiResult<DailyProduction> {
        let day = day.unwrap_or_else(|| self.clock.now().date());
        let store = self.read()?;
        Ok(self.analytics.daily_production(store.production(), day))
    }

    pub fn get_waste_by_type(&self) -> ApiResult<Vec<WasteTypeTotal>> {
        let store = self.read()?;
        Ok(self.analytics.waste_by_type(store.waste()))
    }

    // ==========================================
    // 库存有效期
    // ==========================================

    pub fn get_expiration_overview(&self) -> ApiResult<ExpirationOverview> {
        let store = self.read()?;
        Ok(self
            .analytics
            .expiration_overview(store.inventory(), self.clock.now()))
    }

    /// 库存列表（默认不含已归档批次）
    pub fn list_inventory_with_status(
        &self,
        include_archived: bool,
    ) -> ApiResult<Vec<InventoryStatusView>> {
        let now = self.clock.now();
        let store = self.read()?;
        Ok(store
            .inventory()
            .iter()
            .filter(|r| include_archived || !r.is_archived)
            .map(|r| InventoryStatusView {
                status: self.analytics.expiration_status(r.expiration_date, now),
                remaining_quantity: r.remaining_quantity(),
                record: r.clone(),
            })
            .collect())
    }

    // ==========================================
    // 界面状态
    // ==========================================

    pub fn get_status(&self) -> ApiResult<StoreStatus> {
        let store = self.read()?;
        Ok(StoreStatus {
            is_loading: store.is_loading(),
            error: store.error().map(str::to_string),
            current_view: store.current_view(),
            is_authenticated: store.is_authenticated(),
            counts: store.snapshot().counts(),
        })
    }
}
