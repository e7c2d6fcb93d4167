// ==========================================
// VMQ 生产看板 - 数据快照
// ==========================================
// 用途: 导入结果 / 批量替换 / 导出输入
// ==========================================

use crate::domain::analysis::{
    InventoryAnalysis, ProductionAnalysis, RequirementRecord, WasteAnalysis,
};
use crate::domain::development::DevelopmentRecord;
use crate::domain::inventory::InventoryRecord;
use crate::domain::material::Material;
use crate::domain::production::ProductionRecord;
use crate::domain::waste::WasteRecord;
use serde::{Deserialize, Serialize};

/// 全部领域集合的快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSnapshot {
    pub materials: Vec<Material>,
    pub production: Vec<ProductionRecord>,
    pub development: Vec<DevelopmentRecord>,
    pub inventory: Vec<InventoryRecord>,
    pub waste: Vec<WasteRecord>,
    pub requirements: Vec<RequirementRecord>,
    pub production_analysis: Vec<ProductionAnalysis>,
    pub inventory_analysis: Vec<InventoryAnalysis>,
    pub waste_analysis: Vec<WasteAnalysis>,
}

/// 各集合记录数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub materials: usize,
    pub production: usize,
    pub development: usize,
    pub inventory: usize,
    pub waste: usize,
    pub requirements: usize,
    pub production_analysis: usize,
    pub inventory_analysis: usize,
    pub waste_analysis: usize,
}

impl DataSnapshot {
    pub fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            materials: self.materials.len(),
            production: self.production.len(),
            development: self.development.len(),
            inventory: self.inventory.len(),
            waste: self.waste.len(),
            requirements: self.requirements.len(),
            production_analysis: self.production_analysis.len(),
            inventory_analysis: self.inventory_analysis.len(),
            waste_analysis: self.waste_analysis.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts() == CollectionCounts::default()
    }
}
