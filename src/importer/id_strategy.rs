// ==========================================
// VMQ 生产看板 - 记录 ID 策略
// ==========================================
// 职责: 为导入记录生成批次内唯一的 ID
// 策略:
//   - row_index:    <前缀>_<行号>（默认，行号为工作表绝对行号）
//   - sequential:   <前缀>_<全局递增序号>
//   - content_hash: <前缀>_<行内容 SHA-256 前 12 位>
// ==========================================

use crate::importer::grid::CellValue;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ===== 实体前缀 =====
pub const MATERIAL_PREFIX: &str = "mat";
pub const PRODUCTION_PREFIX: &str = "prod";
pub const DEVELOPMENT_PREFIX: &str = "dev";
pub const INVENTORY_PREFIX: &str = "inv";
pub const WASTE_PREFIX: &str = "waste";
pub const REQUIREMENT_PREFIX: &str = "req";

/// ID 生成策略
pub trait IdStrategy: Send + Sync {
    fn record_id(&self, prefix: &str, row_index: usize, cells: &[CellValue]) -> String;
}

#[derive(Debug, Default)]
pub struct RowIndexIds;

impl IdStrategy for RowIndexIds {
    fn record_id(&self, prefix: &str, row_index: usize, _cells: &[CellValue]) -> String {
        format!("{}_{}", prefix, row_index)
    }
}

/// 跨批次不回绕，重复导入也不会复用旧 ID
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicUsize,
}

impl IdStrategy for SequentialIds {
    fn record_id(&self, prefix: &str, _row_index: usize, _cells: &[CellValue]) -> String {
        let seq = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}_{}", prefix, seq)
    }
}

/// 同内容的行在不同批次中得到相同 ID
#[derive(Debug, Default)]
pub struct ContentHashIds;

impl IdStrategy for ContentHashIds {
    fn record_id(&self, prefix: &str, _row_index: usize, cells: &[CellValue]) -> String {
        let mut hasher = Sha256::new();
        for cell in cells {
            hasher.update(cell.to_string().as_bytes());
            hasher.update([0x1f]);
        }
        let digest = hex::encode(hasher.finalize());
        format!("{}_{}", prefix, &digest[..12])
    }
}

/// 按配置名创建策略，未知名称退回 row_index
pub fn id_strategy_from_name(name: &str) -> Arc<dyn IdStrategy> {
    match name.trim().to_lowercase().as_str() {
        "sequential" => Arc::new(SequentialIds::default()),
        "content_hash" => Arc::new(ContentHashIds),
        _ => Arc::new(RowIndexIds),
    }
}
