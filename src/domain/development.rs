// ==========================================
// VMQ 生产看板 - 开发（试制）记录
// ==========================================
// 来源: Vývoje 表
// 与生产记录结构类似，但只有单一的开发总重量
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentRecord {
    pub id: String,
    pub record_number: String,
    pub article_number: String,
    pub dimensions: String,
    pub hubice_number: String, // 口型抽屉编号

    pub date: NaiveDateTime,
    pub month: String,

    pub material_id: String, // 查找键，不是强制外键
    pub material_name: String,
    pub supplier_code: String,
    pub lot_number: String,

    pub customer: String,
    pub supervisor: String,
    pub operator: String,

    pub production_quantity: f64,
    pub line_speed_real: f64,
    pub line_speed_calc: f64,
    pub line_speed_real_per_hour: f64, // 解析时 = m/min * 60
    pub line_speed_calc_per_hour: f64, // 解析时 = m/min * 60
    pub product_weight_real: f64,
    pub product_weight_calc: f64,
    pub waste_vulcanized: f64,
    pub waste_non_vulcanized: f64,
    pub total_development_weight: f64,

    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub real_time: f64,
    pub calc_time: f64,
    pub total_time: f64, // 小时

    pub notes: String,
}

impl DevelopmentRecord {
    /// 创建空白记录（手工录入与测试用）
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
            hubice_number: String::new(),
            date,
            month: String::new(),
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
            waste_non_vulcanized: 0.0,
            total_development_weight: 0.0,
            start_time: date,
            end_time: date,
            real_time: 0.0,
            calc_time: 0.0,
            total_time: 0.0,
            notes: String::new(),
        }
    }

    /// 重量效率（%），核算重量 <= 0 时为 None
    pub fn efficiency(&self) -> Option<f64> {
        if self.product_weight_calc > 0.0 {
            Some(self.product_weight_real / self.product_weight_calc * 100.0)
        } else {
            None
        }
    }
}

record_patch! {
    /// DevelopmentRecord 部分更新
    DevelopmentPatch for DevelopmentRecord {
        record_number: String,
        article_number: String,
        dimensions: String,
        hubice_number: String,
        date: NaiveDateTime,
        month: String,
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
        waste_non_vulcanized: f64,
        total_development_weight: f64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        real_time: f64,
        calc_time: f64,
        total_time: f64,
        notes: String,
    }
}

impl_record!(DevelopmentRecord, DevelopmentPatch, "DevelopmentRecord");
