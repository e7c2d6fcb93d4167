// ==========================================
// VMQ 生产看板 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、部分更新结构
// 红线: 不含数据访问逻辑，不含分析逻辑
// ==========================================

#[macro_use]
mod patch;
#[macro_use]
pub mod record;

pub mod analysis;
pub mod clock;
pub mod development;
pub mod inventory;
pub mod material;
pub mod production;
pub mod session;
pub mod snapshot;
pub mod types;
pub mod waste;

// 重导出核心类型
pub use analysis::{
    InventoryAnalysis, ProductionAnalysis, RequirementPatch, RequirementRecord, WasteAnalysis,
};
pub use clock::{Clock, FixedClock, SharedClock, SystemClock};
pub use development::{DevelopmentPatch, DevelopmentRecord};
pub use inventory::{InventoryPatch, InventoryRecord};
pub use material::{Material, MaterialPatch};
pub use production::{ProductionPatch, ProductionRecord};
pub use record::Record;
pub use session::User;
pub use snapshot::{CollectionCounts, DataSnapshot};
pub use types::{
    ExpirationStatus, MaterialStatus, MixtureType, MonthLocale, MutationPolicy, UserRole, ViewType,
    WasteType,
};
pub use waste::{WastePatch, WasteRecord};
