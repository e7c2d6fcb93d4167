// ==========================================
// VMQ 生产看板 - 材料（混炼胶配方）
// ==========================================

use crate::domain::types::MaterialStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// Material - 材料主数据
// ==========================================
// 来源: M_Data 表 或 手工录入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,             // 导入时为合成 id（mat_<行号> 等）
    pub name: String,           // 配方名
    pub supplier: String,       // 供应商
    pub status: MaterialStatus, // 状态
}

record_patch! {
    /// Material 部分更新
    MaterialPatch for Material {
        name: String,
        supplier: String,
        status: MaterialStatus,
    }
}

impl_record!(Material, MaterialPatch, "Material");
