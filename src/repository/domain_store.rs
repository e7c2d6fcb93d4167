// ==========================================
// VMQ 生产看板 - 领域仓储
// ==========================================
// 职责: 九个集合的唯一数据源 + UI 状态（视图 / 加载 / 错误 / 会话）
// 约定:
//   - 增: 原样追加，不生成 ID
//   - 改/删: 按 ID 匹配；未知 ID 的处理由 MutationPolicy 决定
//   - set_all_data: 整体覆盖，不做合并
// 并发: 异步导入通过 SharedStore（Arc<RwLock<_>>）共享
// ==========================================

use crate::domain::clock::{system_clock, SharedClock};
use crate::domain::record::Record;
use crate::domain::types::{MutationPolicy, ViewType};
use crate::domain::{
    DataSnapshot, DevelopmentPatch, DevelopmentRecord, InventoryAnalysis, InventoryPatch,
    InventoryRecord, Material, MaterialPatch, ProductionAnalysis, ProductionPatch,
    ProductionRecord, RequirementPatch, RequirementRecord, User, WasteAnalysis, WastePatch,
    WasteRecord,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, instrument, warn};

// 占位登录凭据（不是安全边界）
pub const LOGIN_USERNAME: &str = "Silikon";
pub const LOGIN_PASSWORD: &str = "Silikon";

/// 异步编排共享的仓储句柄
pub type SharedStore = Arc<RwLock<DomainStore>>;

pub struct DomainStore {
    policy: MutationPolicy,
    clock: SharedClock,

    // ===== UI 状态 =====
    user: Option<User>,
    current_view: ViewType,
    is_loading: bool,
    error: Option<String>,

    // ===== 核心集合 =====
    materials: Vec<Material>,
    production: Vec<ProductionRecord>,
    development: Vec<DevelopmentRecord>,
    inventory: Vec<InventoryRecord>,
    waste: Vec<WasteRecord>,

    // ===== 需求与分析镜像 =====
    requirements: Vec<RequirementRecord>,
    production_analysis: Vec<ProductionAnalysis>,
    inventory_analysis: Vec<InventoryAnalysis>,
    waste_analysis: Vec<WasteAnalysis>,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new(MutationPolicy::Lenient, system_clock())
    }
}

impl DomainStore {
    pub fn new(policy: MutationPolicy, clock: SharedClock) -> Self {
        Self {
            policy,
            clock,
            user: None,
            current_view: ViewType::default(),
            is_loading: false,
            error: None,
            materials: Vec::new(),
            production: Vec::new(),
            development: Vec::new(),
            inventory: Vec::new(),
            waste: Vec::new(),
            requirements: Vec::new(),
            production_analysis: Vec::new(),
            inventory_analysis: Vec::new(),
            waste_analysis: Vec::new(),
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn policy(&self) -> MutationPolicy {
        self.policy
    }

    // ==========================================
    // 集合读取
    // ==========================================

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn production(&self) -> &[ProductionRecord] {
        &self.production
    }

    pub fn development(&self) -> &[DevelopmentRecord] {
        &self.development
    }

    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }

    /// 未归档的库存批次
    pub fn active_inventory(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.inventory.iter().filter(|r| !r.is_archived)
    }

    pub fn waste(&self) -> &[WasteRecord] {
        &self.waste
    }

    pub fn requirements(&self) -> &[RequirementRecord] {
        &self.requirements
    }

    pub fn production_analysis(&self) -> &[ProductionAnalysis] {
        &self.production_analysis
    }

    pub fn inventory_analysis(&self) -> &[InventoryAnalysis] {
        &self.inventory_analysis
    }

    pub fn waste_analysis(&self) -> &[WasteAnalysis] {
        &self.waste_analysis
    }

    /// 全部集合的拷贝（导出与分析使用）
    pub fn snapshot(&self) -> DataSnapshot {
        DataSnapshot {
            materials: self.materials.clone(),
            production: self.production.clone(),
            development: self.development.clone(),
            inventory: self.inventory.clone(),
            waste: self.waste.clone(),
            requirements: self.requirements.clone(),
            production_analysis: self.production_analysis.clone(),
            inventory_analysis: self.inventory_analysis.clone(),
            waste_analysis: self.waste_analysis.clone(),
        }
    }

    // ==========================================
    // 材料
    // ==========================================

    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    pub fn update_material(&mut self, id: &str, patch: MaterialPatch) -> RepositoryResult<()> {
        update_record(self.policy, &mut self.materials, id, patch)
    }

    pub fn delete_material(&mut self, id: &str) -> RepositoryResult<()> {
        delete_record(self.policy, &mut self.materials, id)
    }

    // ==========================================
    // 生产记录
    // ==========================================

    pub fn add_production_record(&mut self, record: ProductionRecord) {
        self.production.push(record);
    }

    /// 只合并给出的字段，total_waste / total_weight 不会重算
    pub fn update_production_record(
        &mut self,
        id: &str,
        patch: ProductionPatch,
    ) -> RepositoryResult<()> {
        update_record(self.policy, &mut self.production, id, patch)
    }

    pub fn delete_production_record(&mut self, id: &str) -> RepositoryResult<()> {
        delete_record(self.policy, &mut self.production, id)
    }

    // ==========================================
    // 开发记录
    // ==========================================

    pub fn add_development_record(&mut self, record: DevelopmentRecord) {
        self.development.push(record);
    }

    pub fn update_development_record(
        &mut self,
        id: &str,
        patch: DevelopmentPatch,
    ) -> RepositoryResult<()> {
        update_record(self.policy, &mut self.development, id, patch)
    }

    pub fn delete_development_record(&mut self, id: &str) -> RepositoryResult<()> {
        delete_record(self.policy, &mut self.development, id)
    }

    // ==========================================
    // 库存
    // ==========================================

    pub fn add_inventory_record(&mut self, record: InventoryRecord) {
        self.inventory.push(record);
    }

    pub fn update_inventory_record(
        &mut self,
        id: &str,
        patch: InventoryPatch,
    ) -> RepositoryResult<()> {
        update_record(self.policy, &mut self.inventory, id, patch)
    }

    pub fn delete_inventory_record(&mut self, id: &str) -> RepositoryResult<()> {
        delete_record(self.policy, &mut self.inventory, id)
    }

    /// 归档库存批次（软删除）
    ///
    /// # 规则
    /// - is_archived = true，archived_date = 当前时间
    /// - 重复归档覆盖上一次的归档信息
    /// - Strict 策略下原因与操作人不能为空
    #[instrument(skip(self))]
    pub fn archive_inventory_record(
        &mut self,
        id: &str,
        reason: &str,
        archived_by: &str,
    ) -> RepositoryResult<()> {
        if self.policy == MutationPolicy::Strict
            && (reason.trim().is_empty() || archived_by.trim().is_empty())
        {
            return Err(RepositoryError::ValidationError(
                "归档原因与操作人不能为空".to_string(),
            ));
        }

        let now = self.clock.now();
        let patch = InventoryPatch {
            is_archived: Some(true),
            archived_date: Some(Some(now)),
            archived_by: Some(Some(archived_by.to_string())),
            archive_reason: Some(Some(reason.to_string())),
            ..InventoryPatch::default()
        };
        update_record(self.policy, &mut self.inventory, id, patch)
    }

    // ==========================================
    // 废料
    // ==========================================

    pub fn add_waste_record(&mut self, record: WasteRecord) {
        self.waste.push(record);
    }

    pub fn update_waste_record(&mut self, id: &str, patch: WastePatch) -> RepositoryResult<()> {
        update_record(self.policy, &mut self.waste, id, patch)
    }

    pub fn delete_waste_record(&mut self, id: &str) -> RepositoryResult<()> {
        delete_record(self.policy, &mut self.waste, id)
    }

    // ==========================================
    // 需求
    // ==========================================

    pub fn add_requirement(&mut self, record: RequirementRecord) {
        self.requirements.push(record);
    }

    pub fn update_requirement(
        &mut self,
        id: &str,
        patch: RequirementPatch,
    ) -> RepositoryResult<()> {
        update_record(self.policy, &mut self.requirements, id, patch)
    }

    pub fn delete_requirement(&mut self, id: &str) -> RepositoryResult<()> {
        delete_record(self.policy, &mut self.requirements, id)
    }

    // ==========================================
    // 批量替换与加载状态
    // ==========================================

    /// 整体覆盖全部集合并清除错误
    pub fn set_all_data(&mut self, snapshot: DataSnapshot) {
        let DataSnapshot {
            materials,
            production,
            development,
            inventory,
            waste,
            requirements,
            production_analysis,
            inventory_analysis,
            waste_analysis,
        } = snapshot;

        self.materials = materials;
        self.production = production;
        self.development = development;
        self.inventory = inventory;
        self.waste = waste;
        self.requirements = requirements;
        self.production_analysis = production_analysis;
        self.inventory_analysis = inventory_analysis;
        self.waste_analysis = waste_analysis;
        self.error = None;

        info!(
            materials = self.materials.len(),
            production = self.production.len(),
            inventory = self.inventory.len(),
            "仓储数据已整体替换"
        );
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// 开始导入: 进入加载状态，清除上次错误
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// 导入成功: 覆盖数据并退出加载状态
    pub fn finish_loading(&mut self, snapshot: DataSnapshot) {
        self.set_all_data(snapshot);
        self.is_loading = false;
    }

    /// 导入失败: 集合保持不变，只记录错误
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }

    // ==========================================
    // 视图与会话
    // ==========================================

    pub fn current_view(&self) -> ViewType {
        self.current_view
    }

    pub fn set_current_view(&mut self, view: ViewType) {
        self.current_view = view;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_authenticated)
    }

    /// 单一硬编码凭据；失败时会话保持不变
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username == LOGIN_USERNAME && password == LOGIN_PASSWORD {
            self.user = Some(User::admin(username));
            info!(username = username, "登录成功");
            true
        } else {
            warn!(username = username, "登录失败");
            false
        }
    }

    pub fn logout(&mut self) {
        self.user = None;
    }
}

// ==========================================
// 通用增改删
// ==========================================

/// 合并部分更新到所有匹配 ID 的记录
fn update_record<T: Record>(
    policy: MutationPolicy,
    records: &mut [T],
    id: &str,
    patch: T::Patch,
) -> RepositoryResult<()>
where
    T::Patch: Clone,
{
    let mut matched = false;
    for record in records.iter_mut().filter(|r| r.id() == id) {
        record.apply(patch.clone());
        matched = true;
    }
    if matched {
        Ok(())
    } else {
        missing::<T>(policy, id)
    }
}

fn delete_record<T: Record>(
    policy: MutationPolicy,
    records: &mut Vec<T>,
    id: &str,
) -> RepositoryResult<()> {
    let before = records.len();
    records.retain(|r| r.id() != id);
    if records.len() < before {
        Ok(())
    } else {
        missing::<T>(policy, id)
    }
}

fn missing<T: Record>(policy: MutationPolicy, id: &str) -> RepositoryResult<()> {
    match policy {
        MutationPolicy::Lenient => {
            debug!(entity = T::ENTITY, id = id, "未找到记录，忽略本次变更");
            Ok(())
        }
        MutationPolicy::Strict => Err(RepositoryError::NotFound {
            entity: T::ENTITY.to_string(),
            id: id.to_string(),
        }),
    }
}
