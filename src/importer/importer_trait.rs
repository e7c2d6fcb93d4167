// ==========================================
// VMQ 生产看板 - 导入管道 Trait
// ==========================================
// 职责: 定义导入各阶段接口（不包含实现）
// 阶段: 数据源读取 → 工作簿解析 → 单元格清洗 → 字段派生 → 字段映射
// ==========================================

use crate::domain::types::MonthLocale;
use crate::importer::error::ImportResult;
use crate::importer::grid::{CellValue, WorkbookGrid};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::Path;

// ==========================================
// WorkbookSource Trait
// ==========================================
// 用途: 按文件名取回工作簿原始字节（阶段 0）
// 实现者: FsWorkbookSource, MemoryWorkbookSource
#[async_trait]
pub trait WorkbookSource: Send + Sync {
    /// 读取指定工作簿
    ///
    /// # 返回
    /// - Ok(Vec<u8>): 文件原始字节
    /// - Err(SourceUnavailable / FileNotFound): 数据源不可达
    async fn fetch(&self, name: &str) -> ImportResult<Vec<u8>>;
}

// ==========================================
// WorkbookParser Trait
// ==========================================
// 用途: 字节 → 表格网格（阶段 1）
// 实现者: ExcelParser
pub trait WorkbookParser: Send + Sync {
    /// 解析内存中的工作簿（格式自动识别）
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<WorkbookGrid>;

    /// 解析磁盘文件（先校验存在性与扩展名）
    fn parse_file(&self, path: &Path) -> ImportResult<WorkbookGrid>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格值强制转换（阶段 2）
// 约定: 无法识别时返回 None，由调用方决定默认值并记录问题
pub trait DataCleaner: Send + Sync {
    /// 文本清洗
    ///
    /// # 规则
    /// - TRIM
    /// - 全部由 '-' 组成的文本视为空
    /// - 整数值不带 ".0"，日期格式化为 YYYY-MM-DD
    fn clean_text(&self, cell: &CellValue) -> String;

    /// 数值解析（支持小数逗号，布尔按 1/0）
    fn parse_number(&self, cell: &CellValue) -> Option<f64>;

    /// 日期解析（原生日期 / Excel 序列号 / 常见文本格式）
    fn parse_date(&self, cell: &CellValue) -> Option<NaiveDateTime>;

    /// 时间解析，仅含时刻的值锚定到记录日期
    fn parse_time(&self, cell: &CellValue, anchor: NaiveDate) -> Option<NaiveDateTime>;
}

// ==========================================
// DerivationService Trait
// ==========================================
// 用途: 导入时冻结的派生字段（阶段 3）
pub trait DerivationService: Send + Sync {
    /// 月份: 表格月份列非空时原样保留，否则取日期的月份名
    fn derive_month(&self, sheet_month: &str, date: NaiveDateTime, locale: MonthLocale) -> String;

    /// 废料合计与总重
    ///
    /// # 返回
    /// - (total_waste, total_weight)
    fn derive_waste_totals(
        &self,
        vulcanized_waste: f64,
        non_vulcanized_waste: f64,
        total_production_weight: f64,
    ) -> (f64, f64);

    /// 每分钟速度 → 每小时速度
    fn derive_per_hour(&self, per_minute: f64) -> f64;

    /// 开发记录总工时（小时）
    ///
    /// # 规则
    /// - 开始/结束都存在且结束晚于开始 → 两者之差
    /// - 否则 → 表格中的合计工时
    fn derive_total_hours(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
        sheet_total_hours: f64,
    ) -> f64;

    /// 材料 ID: "mat_" + 名称
    fn derive_material_id(&self, material_name: &str) -> String;
}
