// ==========================================
// VMQ 生产看板 - 废料处置记录
// ==========================================
// 来源: Zápis odpadů 表（一次外运处置）
// ==========================================

use crate::domain::types::WasteType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteRecord {
    pub id: String,
    pub record_number: u32,
    pub export_date: NaiveDateTime, // 外运日期
    pub month: String,
    pub waste_type: WasteType,
    pub weight: f64,
    pub recorded_by: String,
    pub notes: String,
}

record_patch! {
    /// WasteRecord 部分更新
    WastePatch for WasteRecord {
        record_number: u32,
        export_date: NaiveDateTime,
        month: String,
        waste_type: WasteType,
        weight: f64,
        recorded_by: String,
        notes: String,
    }
}

impl_record!(WasteRecord, WastePatch, "WasteRecord");
