// ==========================================
// VMQ 生产看板 - 会话 API
// ==========================================
// 职责: 登录 / 登出 / 视图切换
// 说明: 单一占位凭据，不是安全边界
// ==========================================

use std::sync::RwLockWriteGuard;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::types::ViewType;
use crate::domain::User;
use crate::i18n;
use crate::repository::domain_store::{DomainStore, SharedStore};

pub struct SessionApi {
    store: SharedStore,
}

impl SessionApi {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, DomainStore>> {
        self.store
            .write()
            .map_err(|e| ApiError::StoreError(e.to_string()))
    }

    /// 登录；失败时返回本地化的通用提示，会话保持不变
    pub fn login(&self, username: &str, password: &str) -> ApiResult<User> {
        let mut store = self.write()?;
        if !store.login(username, password) {
            return Err(ApiError::Unauthorized(i18n::t("login.failed")));
        }
        store
            .user()
            .cloned()
            .ok_or_else(|| ApiError::InternalError("登录后会话为空".to_string()))
    }

    pub fn logout(&self) -> ApiResult<()> {
        self.write()?.logout();
        Ok(())
    }

    pub fn current_user(&self) -> ApiResult<Option<User>> {
        let store = self
            .store
            .read()
            .map_err(|e| ApiError::StoreError(e.to_string()))?;
        Ok(store.user().cloned())
    }

    pub fn set_current_view(&self, view: ViewType) -> ApiResult<()> {
        self.write()?.set_current_view(view);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::UserRole;

    fn api() -> SessionApi {
        SessionApi::new(DomainStore::default().into_shared())
    }

    #[test]
    fn test_login_success_creates_admin_session() {
        let api = api();
        let user = api.login("Silikon", "Silikon").unwrap();
        assert_eq!(user.username, "Silikon");
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_authenticated);
    }

    #[test]
    fn test_failed_login_keeps_session() {
        let api = api();
        api.login("Silikon", "Silikon").unwrap();

        let err = api.login("Silikon", "wrong").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert!(api.current_user().unwrap().is_some());

        api.logout().unwrap();
        assert!(api.current_user().unwrap().is_none());
    }
}
