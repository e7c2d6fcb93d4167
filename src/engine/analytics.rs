// ==========================================
// VMQ 生产看板 - 派生分析引擎
// ==========================================
// 职责: 看板指标（效率 / 废品率 / 周转 / 月度 / 物料排行 / 有效期）
// 输入: 领域集合切片（调用方持有读锁或快照）
// 输出: 纯计算结果，每次调用重新计算
// ==========================================

use crate::domain::types::{ExpirationStatus, MonthLocale, WasteType};
use crate::domain::{InventoryRecord, ProductionRecord, WasteRecord};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;

// ===== 空数据时的展示兜底值 =====
pub const EFFICIENCY_FALLBACK: f64 = 85.5;
pub const WASTE_FALLBACK: f64 = 4.2;

pub const DEFAULT_WARNING_DAYS: i64 = 7;
/// 预警窗口上限（天），超出部分截断
pub const MAX_WARNING_DAYS: i64 = 36_500;
pub const DEFAULT_TOP_MATERIALS: usize = 10;

// ==========================================
// 输出结构
// ==========================================

/// 月度产量（按月份名聚合，不区分年份）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotal {
    pub month: String,
    pub total_production_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialUsage {
    pub material_name: String,
    pub total_production_weight: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationOverview {
    pub ok: usize,
    pub warning: usize,
    pub expired: usize,
}

/// 单日产量
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyProduction {
    pub day: NaiveDate,
    pub records: usize,
    pub product_weight_real: f64,
    pub product_weight_calc: f64,
    pub efficiency: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteTypeTotal {
    pub waste_type: WasteType,
    pub weight: f64,
}

/// 看板顶部指标
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub production_efficiency: f64,
    pub waste_percentage: f64,
    pub inventory_turnover: f64,
    pub total_production_weight: f64,
    pub active_batches: usize,
    pub expiration: ExpirationOverview,
}

// ==========================================
// AnalyticsEngine
// ==========================================
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    months: MonthLocale,
    warning_window: Duration,
    top_materials_limit: usize,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new(MonthLocale::default(), DEFAULT_WARNING_DAYS, DEFAULT_TOP_MATERIALS)
    }
}

impl AnalyticsEngine {
    pub fn new(months: MonthLocale, warning_days: i64, top_materials_limit: usize) -> Self {
        Self {
            months,
            warning_window: Duration::days(warning_days.clamp(0, MAX_WARNING_DAYS)),
            top_materials_limit,
        }
    }

    pub fn top_materials_limit(&self) -> usize {
        self.top_materials_limit
    }

    // ==========================================
    // 生产指标
    // ==========================================

    /// 生产效率（%）= Σ实际产品重量 / Σ核算产品重量 * 100
    ///
    /// 无记录或核算重量合计为 0 时返回 EFFICIENCY_FALLBACK
    pub fn production_efficiency(&self, production: &[ProductionRecord]) -> f64 {
        let real: f64 = production.iter().map(|r| r.product_weight_real).sum();
        let calc: f64 = production.iter().map(|r| r.product_weight_calc).sum();
        if production.is_empty() || calc == 0.0 {
            EFFICIENCY_FALLBACK
        } else {
            real / calc * 100.0
        }
    }

    /// 废品率（%）= 废料 / (生产总重 + 废料) * 100
    ///
    /// 废料取 硫化 + 未硫化 之和，不读冻结的 total_waste
    pub fn waste_percentage(&self, production: &[ProductionRecord]) -> f64 {
        let waste: f64 = production.iter().map(|r| r.waste_sum()).sum();
        let produced: f64 = production.iter().map(|r| r.total_production_weight).sum();
        let denominator = produced + waste;
        if production.is_empty() || denominator == 0.0 {
            WASTE_FALLBACK
        } else {
            waste / denominator * 100.0
        }
    }

    /// 库存周转 = Σ生产总重 / Σ入库量（含已归档批次）
    pub fn inventory_turnover(
        &self,
        production: &[ProductionRecord],
        inventory: &[InventoryRecord],
    ) -> f64 {
        let stored: f64 = inventory.iter().map(|r| r.quantity).sum();
        if inventory.is_empty() || stored <= 0.0 {
            return 0.0;
        }
        let produced: f64 = production.iter().map(|r| r.total_production_weight).sum();
        produced / stored
    }

    /// 月度产量
    ///
    /// 只按月份名分组: 2024 年 1 月与 2025 年 1 月落入同一桶。
    /// 结果按首次出现顺序排列。
    pub fn monthly_production(&self, production: &[ProductionRecord]) -> Vec<MonthlyTotal> {
        let mut totals: Vec<MonthlyTotal> = Vec::new();
        let mut index: HashMap<&'static str, usize> = HashMap::new();

        for record in production {
            let month = self.months.month_name(record.date.month());
            match index.get(month) {
                Some(&i) => totals[i].total_production_weight += record.total_production_weight,
                None => {
                    index.insert(month, totals.len());
                    totals.push(MonthlyTotal {
                        month: month.to_string(),
                        total_production_weight: record.total_production_weight,
                    });
                }
            }
        }
        totals
    }

    /// 物料用量排行（降序，同值保持首次出现顺序）
    pub fn top_materials(
        &self,
        production: &[ProductionRecord],
        limit: usize,
    ) -> Vec<MaterialUsage> {
        let mut usage: Vec<MaterialUsage> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in production {
            match index.get(record.material_name.as_str()) {
                Some(&i) => usage[i].total_production_weight += record.total_production_weight,
                None => {
                    index.insert(record.material_name.as_str(), usage.len());
                    usage.push(MaterialUsage {
                        material_name: record.material_name.clone(),
                        total_production_weight: record.total_production_weight,
                    });
                }
            }
        }

        usage.sort_by(|a, b| b.total_production_weight.total_cmp(&a.total_production_weight));
        usage.truncate(limit);
        usage
    }

    /// 单日产量与效率
    pub fn daily_production(
        &self,
        production: &[ProductionRecord],
        day: NaiveDate,
    ) -> DailyProduction {
        let records: Vec<&ProductionRecord> =
            production.iter().filter(|r| r.date.date() == day).collect();
        let real: f64 = records.iter().map(|r| r.product_weight_real).sum();
        let calc: f64 = records.iter().map(|r| r.product_weight_calc).sum();

        DailyProduction {
            day,
            records: records.len(),
            product_weight_real: real,
            product_weight_calc: calc,
            efficiency: (calc > 0.0).then(|| real / calc * 100.0),
        }
    }

    // ==========================================
    // 库存有效期
    // ==========================================

    /// 有效期三段分类
    ///
    /// - expiration < now → Expired
    /// - now <= expiration < now + 窗口 → Warning
    /// - 其余 → Ok
    pub fn expiration_status(
        &self,
        expiration: NaiveDateTime,
        now: NaiveDateTime,
    ) -> ExpirationStatus {
        // 窗口终点越过日期上限时，未过期批次一律视为预警
        let within_window = match now.checked_add_signed(self.warning_window) {
            Some(limit) => expiration < limit,
            None => true,
        };
        if expiration < now {
            ExpirationStatus::Expired
        } else if within_window {
            ExpirationStatus::Warning
        } else {
            ExpirationStatus::Ok
        }
    }

    /// 未归档批次的有效期分布
    pub fn expiration_overview(
        &self,
        inventory: &[InventoryRecord],
        now: NaiveDateTime,
    ) -> ExpirationOverview {
        inventory
            .iter()
            .filter(|r| !r.is_archived)
            .fold(ExpirationOverview::default(), |mut acc, r| {
                match self.expiration_status(r.expiration_date, now) {
                    ExpirationStatus::Ok => acc.ok += 1,
                    ExpirationStatus::Warning => acc.warning += 1,
                    ExpirationStatus::Expired => acc.expired += 1,
                }
                acc
            })
    }

    // ==========================================
    // 废料
    // ==========================================

    /// 各废料类型合计（四类全部列出，无记录的为 0）
    pub fn waste_by_type(&self, waste: &[WasteRecord]) -> Vec<WasteTypeTotal> {
        WasteType::ALL
            .iter()
            .map(|&waste_type| WasteTypeTotal {
                waste_type,
                weight: waste
                    .iter()
                    .filter(|r| r.waste_type == waste_type)
                    .map(|r| r.weight)
                    .sum(),
            })
            .collect()
    }

    // ==========================================
    // 汇总
    // ==========================================

    pub fn dashboard_kpis(
        &self,
        production: &[ProductionRecord],
        inventory: &[InventoryRecord],
        now: NaiveDateTime,
    ) -> DashboardKpis {
        DashboardKpis {
            production_efficiency: self.production_efficiency(production),
            waste_percentage: self.waste_percentage(production),
            inventory_turnover: self.inventory_turnover(production, inventory),
            total_production_weight: production.iter().map(|r| r.total_production_weight).sum(),
            active_batches: inventory.iter().filter(|r| !r.is_archived).count(),
            expiration: self.expiration_overview(inventory, now),
        }
    }
}

/// 默认 7 天窗口的有效期分类
pub fn expiration_status(expiration: NaiveDateTime, now: NaiveDateTime) -> ExpirationStatus {
    AnalyticsEngine::default().expiration_status(expiration, now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn production(id: &str, material: &str, date: NaiveDateTime, weight: f64) -> ProductionRecord {
        let mut record = ProductionRecord::blank(id, material, date);
        record.total_production_weight = weight;
        record
    }

    #[test]
    fn test_empty_production_uses_fallbacks() {
        let engine = AnalyticsEngine::default();
        assert_eq!(engine.production_efficiency(&[]), EFFICIENCY_FALLBACK);
        assert_eq!(engine.waste_percentage(&[]), WASTE_FALLBACK);
        assert_eq!(engine.inventory_turnover(&[], &[]), 0.0);
    }

    #[test]
    fn test_efficiency_and_waste() {
        let engine = AnalyticsEngine::default();
        let mut a = production("prod_1", "A", at(2025, 1, 5), 90.0);
        a.product_weight_real = 90.0;
        a.product_weight_calc = 100.0;
        a.waste_vulcanized = 6.0;
        a.waste_non_vulcanized = 4.0;
        let mut b = production("prod_2", "B", at(2025, 1, 6), 100.0);
        b.product_weight_real = 110.0;
        b.product_weight_calc = 100.0;

        let records = vec![a, b];
        assert!((engine.production_efficiency(&records) - 100.0).abs() < 1e-9);
        // 10 / (190 + 10) = 5%
        assert!((engine.waste_percentage(&records) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_production_groups_by_month_name_only() {
        let engine = AnalyticsEngine::new(MonthLocale::En, 7, 10);
        let records = vec![
            production("prod_1", "A", at(2024, 1, 10), 10.0),
            production("prod_2", "A", at(2025, 2, 10), 5.0),
            production("prod_3", "B", at(2025, 1, 15), 20.0),
        ];

        let monthly = engine.monthly_production(&records);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month, "January");
        assert_eq!(monthly[0].total_production_weight, 30.0);
        assert_eq!(monthly[1].month, "February");
    }

    #[test]
    fn test_top_materials_sorted_and_truncated() {
        let engine = AnalyticsEngine::default();
        let records = vec![
            production("p1", "A", at(2025, 1, 1), 10.0),
            production("p2", "B", at(2025, 1, 1), 30.0),
            production("p3", "C", at(2025, 1, 1), 20.0),
            production("p4", "A", at(2025, 1, 2), 25.0),
        ];

        let top = engine.top_materials(&records, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].material_name, "A");
        assert_eq!(top[0].total_production_weight, 35.0);
        assert_eq!(top[1].material_name, "B");
    }

    #[test]
    fn test_expiration_status_partitions() {
        let now = at(2025, 6, 1);
        assert_eq!(expiration_status(now - Duration::seconds(1), now), ExpirationStatus::Expired);
        assert_eq!(expiration_status(now, now), ExpirationStatus::Warning);
        assert_eq!(
            expiration_status(now + Duration::days(7) - Duration::seconds(1), now),
            ExpirationStatus::Warning
        );
        assert_eq!(expiration_status(now + Duration::days(7), now), ExpirationStatus::Ok);
    }

    #[test]
    fn test_expiration_overview_skips_archived() {
        let engine = AnalyticsEngine::default();
        let now = at(2025, 6, 1);
        let mut archived = InventoryRecord::new("inv_1", "A", 1.0, at(2025, 5, 1), now);
        archived.is_archived = true;
        let inventory = vec![
            archived,
            InventoryRecord::new("inv_2", "A", 1.0, at(2025, 5, 1), now),
            InventoryRecord::new("inv_3", "A", 1.0, at(2025, 6, 3), now),
            InventoryRecord::new("inv_4", "A", 1.0, at(2025, 9, 1), now),
        ];

        let overview = engine.expiration_overview(&inventory, now);
        assert_eq!(overview, ExpirationOverview { ok: 1, warning: 1, expired: 1 });
    }

    #[test]
    fn test_daily_production_and_waste_by_type() {
        let engine = AnalyticsEngine::default();
        let mut record = production("p1", "A", at(2025, 3, 4), 50.0);
        record.product_weight_real = 40.0;
        record.product_weight_calc = 50.0;

        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let daily = engine.daily_production(&[record], day);
        assert_eq!(daily.records, 1);
        assert!((daily.efficiency.unwrap() - 80.0).abs() < 1e-9);

        let empty_day = engine.daily_production(&[], NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(empty_day.efficiency, None);

        let waste = vec![WasteRecord {
            id: "waste_1".to_string(),
            record_number: 1,
            export_date: at(2025, 3, 4),
            month: "březen".to_string(),
            waste_type: WasteType::VulcanizedConfection,
            weight: 7.5,
            recorded_by: "Admin".to_string(),
            notes: String::new(),
        }];
        let totals = engine.waste_by_type(&waste);
        assert_eq!(totals.len(), 4);
        let confection = totals
            .iter()
            .find(|t| t.waste_type == WasteType::VulcanizedConfection)
            .unwrap();
        assert_eq!(confection.weight, 7.5);
    }
}
