// ==========================================
// VMQ 生产看板 - 导入层（表格归一化）
// ==========================================
// 职责: 工作簿字节 → 领域记录快照
// 支持: .xlsx / .xls / .xlsm / .ods
// 管道: WorkbookSource → WorkbookParser → FieldMapper(DataCleaner + DerivationService)
//       → WorkbookNormalizer
// ==========================================

// 模块声明
pub mod columns;
pub mod data_cleaner;
pub mod derivation;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod grid;
pub mod id_strategy;
pub mod importer_trait;
pub mod workbook_normalizer;
pub mod workbook_source;

// 重导出核心类型
pub use data_cleaner::{excel_serial_to_datetime, DataCleaner as DataCleanerImpl};
pub use derivation::DerivationService as DerivationServiceImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{CoercionIssue, FieldMapper};
pub use file_parser::{check_extension, ExcelParser};
pub use grid::{CellValue, SheetGrid, WorkbookGrid};
pub use id_strategy::{
    id_strategy_from_name, ContentHashIds, IdStrategy, RowIndexIds, SequentialIds,
};
pub use workbook_normalizer::{NormalizeReport, NormalizerProfile, WorkbookNormalizer};
pub use workbook_source::{FsWorkbookSource, MemoryWorkbookSource};

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, DerivationService, WorkbookParser, WorkbookSource};
