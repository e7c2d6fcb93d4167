// ==========================================
// VMQ 生产看板 - 导出层
// ==========================================
// 职责: 领域快照 → .xlsx（与上传导入的位置契约一致）
// ==========================================

pub mod error;
pub mod workbook_exporter;

pub use error::{ExportError, ExportResult};
pub use workbook_exporter::{
    export_file_name, unimportable_rows, ExportedWorkbook, WorkbookExporter,
};
