// ==========================================
// VMQ 生产看板 - 汇总/管理类记录
// ==========================================
// 来源: 表格中的汇总页签
// 这些记录不由本系统计算，只做导入→展示→导出的往返
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// RequirementRecord - 产线需求登记
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementRecord {
    pub id: String,
    pub record_number: u32,
    pub entry_date: NaiveDateTime,
    pub year: i32,
    pub requirement: String,
    pub entered_by: String,
    pub completion_percent: f64,
    pub notes: String,
}

record_patch! {
    /// RequirementRecord 部分更新
    RequirementPatch for RequirementRecord {
        record_number: u32,
        entry_date: NaiveDateTime,
        year: i32,
        requirement: String,
        entered_by: String,
        completion_percent: f64,
        notes: String,
    }
}

impl_record!(RequirementRecord, RequirementPatch, "RequirementRecord");

// ==========================================
// ProductionAnalysis - 生产损耗月度分析
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionAnalysis {
    pub month: String,
    pub total_products_weight_calc: f64,
    pub total_products_weight_real: f64,
    pub product_weight_difference: f64,
    pub total_waste_weight_calc: f64,
    pub total_waste_weight_real: f64,
    pub waste_weight_difference: f64,
    pub real_time: String,
    pub calculated_time: String,
    pub weight_efficiency_percent: f64,
    pub time_efficiency_percent: f64,
}

// ==========================================
// InventoryAnalysis - 库存月度分析
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAnalysis {
    pub month: String,
    pub extrusion_mixtures_stored: f64,
    pub pressing_mixtures_stored: f64,
    pub written_off: f64,
}

// ==========================================
// WasteAnalysis - 废料月度分析
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteAnalysis {
    pub month: String,
    pub non_vulcanized_extrusion: f64,
    pub vulcanized_extrusion: f64,
    pub non_vulcanized_expired: f64,
    pub non_vulcanized_confection: f64,
    pub vulcanized_confection: f64,
    pub total: f64,
}
