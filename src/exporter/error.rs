// ==========================================
// VMQ 生产看板 - 导出模块错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("没有可导出的数据")]
    NothingToExport,

    #[error("Excel 写入失败: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("文件写入失败: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
