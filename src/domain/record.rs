// ==========================================
// VMQ 生产看板 - 记录抽象
// ==========================================
// 职责: 领域仓储统一的 增/改/删 依赖的最小接口
// ==========================================

/// 可由领域仓储按 id 管理的记录
pub trait Record: Clone {
    /// 实体名（日志与 NotFound 错误中使用）
    const ENTITY: &'static str;

    /// 部分更新结构体
    type Patch;

    /// 记录标识
    fn id(&self) -> &str;

    /// 重设标识（导入批次内去重）
    fn set_id(&mut self, id: String);

    /// 合并部分更新
    fn apply(&mut self, patch: Self::Patch);
}

/// 为实体实现 Record（id 字段统一为 `id: String`）
macro_rules! impl_record {
    ($record:ty, $patch:ty, $entity:literal) => {
        impl $crate::domain::record::Record for $record {
            const ENTITY: &'static str = $entity;
            type Patch = $patch;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn apply(&mut self, patch: Self::Patch) {
                patch.apply_to(self);
            }
        }
    };
}
