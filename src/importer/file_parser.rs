// ==========================================
// VMQ 生产看板 - 工作簿解析器实现
// ==========================================
// 职责: Excel / ODS 字节 → WorkbookGrid（读取全部工作表）
// 支持: .xlsx / .xls / .xlsm / .ods（calamine 自动识别格式）
// ==========================================

use crate::importer::data_cleaner::excel_serial_to_datetime;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::grid::{CellValue, SheetGrid, WorkbookGrid};
use crate::importer::importer_trait::WorkbookParser;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "ods"];

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl WorkbookParser for ExcelParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<WorkbookGrid> {
        let cursor = Cursor::new(bytes.to_vec());
        let mut workbook = open_workbook_auto_from_rs(cursor)?;
        read_all_sheets(&mut workbook)
    }

    fn parse_file(&self, path: &Path) -> ImportResult<WorkbookGrid> {
        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        check_extension(&path.display().to_string())?;

        let bytes = std::fs::read(path)?;
        self.parse_bytes(&bytes)
    }
}

/// 按文件名校验扩展名（上传文件只有名字没有路径）
pub fn check_extension(file_name: &str) -> ImportResult<()> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFormat(file_name.to_string()))
    }
}

fn read_all_sheets<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> ImportResult<WorkbookGrid> {
    let sheet_names = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(ImportError::ExcelParseError("工作簿中没有工作表".to_string()));
    }

    let mut grid = WorkbookGrid::new();
    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        let sheet = range_to_sheet(&range);
        debug!(sheet = %name, rows = sheet.row_count(), "工作表解析完成");
        grid.insert(name, sheet);
    }
    Ok(grid)
}

/// 区域不从 A1 开始时补齐前导行列，保证列号是绝对位置
fn range_to_sheet(range: &Range<Data>) -> SheetGrid {
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<CellValue>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![CellValue::Empty; col_offset];
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }
    SheetGrid::new(rows)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            excel_serial_to_datetime(serial)
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Number(serial))
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
