// ==========================================
// VMQ 生产看板 - 会话用户
// ==========================================
// 仅存在于会话内，不持久化
// ==========================================

use crate::domain::types::UserRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub is_authenticated: bool,
    pub role: UserRole,
}

impl User {
    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            is_authenticated: true,
            role: UserRole::Admin,
        }
    }
}
