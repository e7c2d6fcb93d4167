// ==========================================
// VMQ 生产看板 - 字段派生服务实现
// ==========================================
// 职责: month / total_waste / total_weight / 每小时速度 / 开发工时 / 材料 ID
// 说明: 派生值在导入时冻结，之后的部分更新不会重新计算
// ==========================================

use crate::domain::types::MonthLocale;
use crate::importer::importer_trait::DerivationService as DerivationServiceTrait;
use chrono::{Datelike, NaiveDateTime};

pub struct DerivationService;

impl DerivationServiceTrait for DerivationService {
    fn derive_month(&self, sheet_month: &str, date: NaiveDateTime, locale: MonthLocale) -> String {
        if sheet_month.is_empty() {
            locale.month_name(date.month()).to_string()
        } else {
            sheet_month.to_string()
        }
    }

    /// # 规则
    /// - total_waste = 硫化废料 + 未硫化废料
    /// - total_weight = 生产总重 + total_waste
    fn derive_waste_totals(
        &self,
        vulcanized_waste: f64,
        non_vulcanized_waste: f64,
        total_production_weight: f64,
    ) -> (f64, f64) {
        let total_waste = vulcanized_waste + non_vulcanized_waste;
        (total_waste, total_production_weight + total_waste)
    }

    fn derive_per_hour(&self, per_minute: f64) -> f64 {
        per_minute * 60.0
    }

    fn derive_total_hours(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        sheet_total_hours: f64,
    ) -> f64 {
        match (start, end) {
            (Some(start), Some(end)) if end > start => {
                (end - start).num_seconds() as f64 / 3600.0
            }
            _ => sheet_total_hours,
        }
    }

    fn derive_material_id(&self, material_name: &str) -> String {
        format!("mat_{}", material_name)
    }
}
