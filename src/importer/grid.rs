// ==========================================
// VMQ 生产看板 - 表格网格
// ==========================================
// 职责: 工作簿的中立表示（表名 → 二维单元格）
// 坐标: 行列均从 A1 = (0, 0) 起算，列号即位置契约
// ==========================================

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::fmt;

/// 单元格值
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

static EMPTY_CELL: CellValue = CellValue::Empty;

impl CellValue {
    /// 空单元格或仅含空白的文本
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

// ==========================================
// SheetGrid - 单个工作表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(|r| r.as_slice())
    }

    /// 越界位置视为空单元格
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }
}

// ==========================================
// WorkbookGrid - 工作簿
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct WorkbookGrid {
    sheets: HashMap<String, SheetGrid>,
    order: Vec<String>,
}

impl WorkbookGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名工作表会被覆盖
    pub fn insert(&mut self, name: impl Into<String>, sheet: SheetGrid) {
        let name = name.into();
        if !self.sheets.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.sheets.insert(name, sheet);
    }

    pub fn with_sheet(mut self, name: impl Into<String>, sheet: SheetGrid) -> Self {
        self.insert(name, sheet);
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetGrid> {
        self.sheets.get(name)
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.order
    }

    /// 合并另一工作簿（用于两份源文件一起归一化）
    pub fn merge(&mut self, other: WorkbookGrid) {
        let WorkbookGrid { mut sheets, order } = other;
        for name in order {
            if let Some(sheet) = sheets.remove(&name) {
                self.insert(name, sheet);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_cells_are_empty() {
        let sheet = SheetGrid::new(vec![vec!["a".into(), 1.0.into()]]);
        assert_eq!(sheet.cell(0, 1), &CellValue::Number(1.0));
        assert_eq!(sheet.cell(0, 9), &CellValue::Empty);
        assert_eq!(sheet.cell(5, 0), &CellValue::Empty);
    }

    #[test]
    fn test_blank_text_is_empty() {
        assert!(CellValue::Text("   ".to_string()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_merge_keeps_sheet_order() {
        let mut first = WorkbookGrid::new().with_sheet("M_Data", SheetGrid::default());
        let second = WorkbookGrid::new()
            .with_sheet("Zápis odpadů", SheetGrid::default())
            .with_sheet("VMQ sklad směsí", SheetGrid::default());
        first.merge(second);

        assert_eq!(
            first.sheet_names(),
            &["M_Data".to_string(), "Zápis odpadů".to_string(), "VMQ sklad směsí".to_string()]
        );
        assert!(first.sheet("VMQ sklad směsí").is_some());
    }
}
