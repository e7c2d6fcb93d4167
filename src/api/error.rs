// ==========================================
// VMQ 生产看板 - API层错误类型
// ==========================================
// 职责: 把导入/仓储/导出的技术错误归并为界面可展示的类别
// ==========================================

use crate::exporter::error::ExportError;
use crate::i18n;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入与查找 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("未授权: {0}")]
    Unauthorized(String),

    // ===== 导入导出 =====
    #[error("导入失败: {0}")]
    ImportFailed(String),

    #[error("导入进行中: {0}")]
    ImportBusy(String),

    #[error("导出失败: {0}")]
    ExportFailed(String),

    // ===== 仓储 =====
    #[error("数据仓储不可用: {0}")]
    StoreError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 RepositoryError 转换
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})", entity, id))
            }
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::UnsupportedFormat(msg) => ApiError::InvalidInput(msg),
            ImportError::ImportInProgress => ApiError::ImportBusy(err.to_string()),
            ImportError::StoreUnavailable(msg) => ApiError::StoreError(msg),
            other => ApiError::ImportFailed(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::ExportFailed(i18n::t_with_args(
            "export.failed",
            &[("reason", &err.to_string())],
        ))
    }
}

/// API层Result类型别名
pub type ApiResult<T> = Result<T, ApiError>;
