// ==========================================
// VMQ 生产看板 - 数据仓储层
// ==========================================
// 红线: Repository 不含分析逻辑
// ==========================================
// 职责: 内存中的领域集合 + 增改删 + 加载状态 + 会话
// ==========================================

pub mod domain_store;
pub mod error;

// 重导出核心仓储
pub use domain_store::{DomainStore, SharedStore, LOGIN_PASSWORD, LOGIN_USERNAME};
pub use error::{RepositoryError, RepositoryResult};
