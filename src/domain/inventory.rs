// ==========================================
// VMQ 生产看板 - 库存批次
// ==========================================
// 来源: VMQ sklad směsí 表
// 生命周期: 入库创建 → 核销 (written_off) → 归档（软删除，保留审计信息）
// 有效期状态是当前时间的纯函数，不持久化
// ==========================================

use crate::domain::types::MixtureType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: String,
    pub record_number: String,
    pub mixture_type: MixtureType,

    pub material_id: String, // 查找键，不是强制外键
    pub material_name: String,
    pub supplier_code: String,
    pub lot_number: String,

    pub storage_month: String,
    pub production_date: NaiveDateTime,
    pub expiration_date: NaiveDateTime,
    pub storage_date: NaiveDateTime,
    pub extension_date: Option<NaiveDateTime>, // 延期日期

    pub quantity: f64,
    pub stored_by: String,

    // ===== 核销 =====
    pub written_off: f64,
    pub written_off_by: String,
    pub write_off_reason: String,

    pub notes: String,

    // ===== 归档 =====
    pub is_archived: bool,
    pub archived_date: Option<NaiveDateTime>,
    pub archived_by: Option<String>,
    pub archive_reason: Option<String>,
}

impl InventoryRecord {
    /// 创建新入库批次（未核销、未归档）
    pub fn new(
        id: impl Into<String>,
        material_name: impl Into<String>,
        quantity: f64,
        expiration_date: NaiveDateTime,
        storage_date: NaiveDateTime,
    ) -> Self {
        let material_name = material_name.into();
        Self {
            id: id.into(),
            record_number: String::new(),
            mixture_type: MixtureType::Extrusion,
            material_id: format!("mat_{}", material_name),
            material_name,
            supplier_code: String::new(),
            lot_number: String::new(),
            storage_month: String::new(),
            production_date: storage_date,
            expiration_date,
            storage_date,
            extension_date: None,
            quantity,
            stored_by: String::new(),
            written_off: 0.0,
            written_off_by: String::new(),
            write_off_reason: String::new(),
            notes: String::new(),
            is_archived: false,
            archived_date: None,
            archived_by: None,
            archive_reason: None,
        }
    }

    /// 剩余可用量 = 入库量 - 核销量
    ///
    /// 源数据不校验核销量上限，结果可能为负
    pub fn remaining_quantity(&self) -> f64 {
        self.quantity - self.written_off
    }

    /// 核销量超过入库量
    pub fn is_overdrawn(&self) -> bool {
        self.written_off > self.quantity
    }
}

record_patch! {
    /// InventoryRecord 部分更新
    InventoryPatch for InventoryRecord {
        record_number: String,
        mixture_type: MixtureType,
        material_id: String,
        material_name: String,
        supplier_code: String,
        lot_number: String,
        storage_month: String,
        production_date: NaiveDateTime,
        expiration_date: NaiveDateTime,
        storage_date: NaiveDateTime,
        extension_date: Option<NaiveDateTime>,
        quantity: f64,
        stored_by: String,
        written_off: f64,
        written_off_by: String,
        write_off_reason: String,
        notes: String,
        is_archived: bool,
        archived_date: Option<NaiveDateTime>,
        archived_by: Option<String>,
        archive_reason: Option<String>,
    }
}

impl_record!(InventoryRecord, InventoryPatch, "InventoryRecord");
