// ==========================================
// VMQ 生产看板 - 生产记录
// ==========================================
// 来源: Extruze 表（一次挤出生产）
// 不变量: total_waste = waste_vulcanized + waste_non_vulcanized
//        total_weight = total_production_weight + total_waste
// 两者在解析时计算并冻结，导入后修改基础字段不会重算
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductionRecord - 生产记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionRecord {
    // ===== 标识 =====
    pub id: String,
    pub record_number: String,  // 序号
    pub article_number: String, // 产品号
    pub dimensions: String,     // 规格

    // ===== 时间 =====
    pub date: NaiveDateTime,
    pub month: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub actual_time: f64,             // 实际用时
    pub calculated_time: f64,         // 核算用时
    pub actual_time_display: String,  // 表格中的用时显示文本

    // ===== 材料关联 =====
    pub material_id: String, // 查找键（mat_<配方名>），不是强制外键
    pub material_name: String,
    pub supplier_code: String,
    pub lot_number: String,

    // ===== 人员 =====
    pub customer: String,
    pub supervisor: String, // 班长
    pub operator: String,   // 操作工

    // ===== 产量与线速 =====
    pub production_quantity: f64,      // 产量（m）
    pub line_speed_real: f64,          // m/min 实际
    pub line_speed_calc: f64,          // m/min 核算
    pub line_speed_real_per_hour: f64, // m/h 实际
    pub line_speed_calc_per_hour: f64, // m/h 核算

    // ===== 产品重量 =====
    pub product_weight_real: f64,
    pub product_weight_calc: f64,

    // ===== 废料 =====
    pub waste_vulcanized: f64,
    pub waste_vulcanized_calc: f64,
    pub waste_vulcanized_percentage: f64,
    pub waste_non_vulcanized: f64,
    pub waste_non_vulcanized_calc: f64,
    pub waste_non_vulcanized_percentage: f64,
    pub total_waste: f64,
    pub total_waste_calc: f64,
    pub total_waste_percentage: f64,

    // ===== 汇总重量 =====
    pub total_production_weight: f64,
    pub total_production_weight_real: f64,
    pub total_weight: f64,

    // ===== 绩效评价 =====
    pub performance_eval_kg: f64,
    pub performance_eval_time: f64,

    pub notes: String,
}

impl ProductionRecord {
    /// 创建空白记录（手工录入与测试用，数值全部为 0）
    pub fn blank(
        id: impl Into<String>,
        material_name: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        let material_name = material_name.into();
        Self {
            id: id.into(),
            record_number: String::new(),
            article_number: String::new(),
            dimensions: String::new(),
            date,
            month: String::new(),
            start_time: date,
            end_time: date,
            actual_time: 0.0,
            calculated_time: 0.0,
            actual_time_display: String::new(),
            material_id: format!("mat_{}", material_name),
            material_name,
            supplier_code: String::new(),
            lot_number: String::new(),
            customer: String::new(),
            supervisor: String::new(),
            operator: String::new(),
            production_quantity: 0.0,
            line_speed_real: 0.0,
            line_speed_calc: 0.0,
            line_speed_real_per_hour: 0.0,
            line_speed_calc_per_hour: 0.0,
            product_weight_real: 0.0,
            product_weight_calc: 0.0,
            waste_vulcanized: 0.0,
            waste_vulcanized_calc: 0.0,
            waste_vulcanized_percentage: 0.0,
            waste_non_vulcanized: 0.0,
            waste_non_vulcanized_calc: 0.0,
            waste_non_vulcanized_percentage: 0.0,
            total_waste: 0.0,
            total_waste_calc: 0.0,
            total_waste_percentage: 0.0,
            total_production_weight: 0.0,
            total_production_weight_real: 0.0,
            total_weight: 0.0,
            performance_eval_kg: 0.0,
            performance_eval_time: 0.0,
            notes: String::new(),
        }
    }

    /// 重量效率（%）：实际产品重量 / 核算产品重量 * 100
    ///
    /// 派生值，不存储；核算重量 <= 0 时无意义，返回 None
    pub fn efficiency(&self) -> Option<f64> {
        if self.product_weight_calc > 0.0 {
            Some(self.product_weight_real / self.product_weight_calc * 100.0)
        } else {
            None
        }
    }

    /// 硫化 + 未硫化废料
    pub fn waste_sum(&self) -> f64 {
        self.waste_vulcanized + self.waste_non_vulcanized
    }
}

record_patch! {
    /// ProductionRecord 部分更新
    ProductionPatch for ProductionRecord {
        record_number: String,
        article_number: String,
        dimensions: String,
        date: NaiveDateTime,
        month: String,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        actual_time: f64,
        calculated_time: f64,
        actual_time_display: String,
        material_id: String,
        material_name: String,
        supplier_code: String,
        lot_number: String,
        customer: String,
        supervisor: String,
        operator: String,
        production_quantity: f64,
        line_speed_real: f64,
        line_speed_calc: f64,
        line_speed_real_per_hour: f64,
        line_speed_calc_per_hour: f64,
        product_weight_real: f64,
        product_weight_calc: f64,
        waste_vulcanized: f64,
        waste_vulcanized_calc: f64,
        waste_vulcanized_percentage: f64,
        waste_non_vulcanized: f64,
        waste_non_vulcanized_calc: f64,
        waste_non_vulcanized_percentage: f64,
        total_waste: f64,
        total_waste_calc: f64,
        total_waste_percentage: f64,
        total_production_weight: f64,
        total_production_weight_real: f64,
        total_weight: f64,
        performance_eval_kg: f64,
        performance_eval_time: f64,
        notes: String,
    }
}

impl_record!(ProductionRecord, ProductionPatch, "ProductionRecord");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_efficiency_is_reproducible() {
        let mut record = ProductionRecord::blank("prod_1", "VMQ 60", day());
        record.product_weight_real = 90.0;
        record.product_weight_calc = 100.0;

        assert_eq!(record.efficiency(), Some(90.0));
        assert_eq!(record.efficiency(), record.efficiency());
    }

    #[test]
    fn test_efficiency_without_calc_weight() {
        let mut record = ProductionRecord::blank("prod_1", "VMQ 60", day());
        record.product_weight_real = 90.0;
        assert_eq!(record.efficiency(), None);
    }

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut record = ProductionRecord::blank("prod_1", "VMQ 60", day());
        record.operator = "Novák".to_string();

        let patch = ProductionPatch {
            lot_number: Some("LOT-9".to_string()),
            product_weight_real: Some(12.5),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut record);

        assert_eq!(record.lot_number, "LOT-9");
        assert_eq!(record.product_weight_real, 12.5);
        assert_eq!(record.operator, "Novák");
        assert_eq!(record.id, "prod_1");
    }

    #[test]
    fn test_patch_does_not_recompute_frozen_totals() {
        let mut record = ProductionRecord::blank("prod_1", "VMQ 60", day());
        record.waste_vulcanized = 1.0;
        record.total_waste = 1.0;

        ProductionPatch {
            waste_vulcanized: Some(5.0),
            ..Default::default()
        }
        .apply_to(&mut record);

        assert_eq!(record.waste_vulcanized, 5.0);
        assert_eq!(record.total_waste, 1.0);
    }
}
