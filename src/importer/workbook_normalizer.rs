// ==========================================
// VMQ 生产看板 - 工作簿归一化
// ==========================================
// 职责: WorkbookGrid → DataSnapshot + NormalizeReport
// 规则:
//   - 缺失工作表: 记录警告，对应集合为空
//   - 行级问题只记录，不中断
//   - 批次内 ID 重复时追加 "-2"、"-3" 后缀
// ==========================================

use crate::domain::clock::SharedClock;
use crate::domain::record::Record;
use crate::domain::types::MonthLocale;
use crate::domain::DataSnapshot;
use crate::importer::columns::{self, SheetLayout};
use crate::importer::field_mapper::{CoercionIssue, FieldMapper};
use crate::importer::grid::{CellValue, WorkbookGrid};
use crate::importer::id_strategy::IdStrategy;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// ==========================================
// NormalizerProfile - 读取哪些工作表
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizerProfile {
    /// 固定数据文件: 材料 / 生产 / 开发 / 库存 / 废料
    RealData,
    /// 手工上传: 全部九张工作表
    Upload,
}

impl NormalizerProfile {
    fn includes_extended_sheets(&self) -> bool {
        matches!(self, NormalizerProfile::Upload)
    }
}

// ==========================================
// NormalizeReport - 归一化报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeReport {
    pub missing_sheets: Vec<String>,
    pub skipped_rows: usize,
    pub issues: Vec<CoercionIssue>,
    pub overdrawn_inventory: Vec<String>, // 核销量超过入库量的记录 ID
}

// ==========================================
// WorkbookNormalizer
// ==========================================
pub struct WorkbookNormalizer {
    mapper: FieldMapper,
    clock: SharedClock,
    row_limit: Option<usize>,
}

impl WorkbookNormalizer {
    pub fn new(ids: Arc<dyn IdStrategy>, months: MonthLocale, clock: SharedClock) -> Self {
        Self {
            mapper: FieldMapper::new(ids, months),
            clock,
            row_limit: None,
        }
    }

    /// 每张表最多读取的数据行数（None = 不限）
    pub fn with_row_limit(mut self, row_limit: Option<usize>) -> Self {
        self.row_limit = row_limit;
        self
    }

    #[instrument(skip(self, grid), fields(sheets = grid.sheet_names().len()))]
    pub fn normalize(
        &self,
        grid: &WorkbookGrid,
        profile: NormalizerProfile,
    ) -> (DataSnapshot, NormalizeReport) {
        let now = self.clock.now();
        let mut report = NormalizeReport::default();
        let mapper = &self.mapper;

        let mut snapshot = DataSnapshot::default();
        let r = &mut report;

        snapshot.materials =
            self.read_sheet(grid, columns::material::LAYOUT, now, r, |i, c, n, is| {
                mapper.map_material(i, c, n, is)
            });
        snapshot.production =
            self.read_sheet(grid, columns::production::LAYOUT, now, r, |i, c, n, is| {
                mapper.map_production(i, c, n, is)
            });
        snapshot.development =
            self.read_sheet(grid, columns::development::LAYOUT, now, r, |i, c, n, is| {
                mapper.map_development(i, c, n, is)
            });
        snapshot.inventory =
            self.read_sheet(grid, columns::inventory::LAYOUT, now, r, |i, c, n, is| {
                mapper.map_inventory(i, c, n, is)
            });
        snapshot.waste =
            self.read_sheet(grid, columns::waste::LAYOUT, now, r, |i, c, n, is| {
                mapper.map_waste(i, c, n, is)
            });

        if profile.includes_extended_sheets() {
            snapshot.requirements =
                self.read_sheet(grid, columns::requirement::LAYOUT, now, r, |i, c, n, is| {
                    mapper.map_requirement(i, c, n, is)
                });
            snapshot.production_analysis =
                self.read_sheet(grid, columns::production_analysis::LAYOUT, now, r, |i, c, n, is| {
                    mapper.map_production_analysis(i, c, n, is)
                });
            snapshot.inventory_analysis =
                self.read_sheet(grid, columns::inventory_analysis::LAYOUT, now, r, |i, c, n, is| {
                    mapper.map_inventory_analysis(i, c, n, is)
                });
            snapshot.waste_analysis =
                self.read_sheet(grid, columns::waste_analysis::LAYOUT, now, r, |i, c, n, is| {
                    mapper.map_waste_analysis(i, c, n, is)
                });
        }

        ensure_unique_ids(&mut snapshot.materials);
        ensure_unique_ids(&mut snapshot.production);
        ensure_unique_ids(&mut snapshot.development);
        ensure_unique_ids(&mut snapshot.inventory);
        ensure_unique_ids(&mut snapshot.waste);
        ensure_unique_ids(&mut snapshot.requirements);

        for record in snapshot.inventory.iter().filter(|r| r.is_overdrawn()) {
            warn!(
                id = %record.id,
                quantity = record.quantity,
                written_off = record.written_off,
                "核销量超过入库量"
            );
            report.overdrawn_inventory.push(record.id.clone());
        }

        for issue in &report.issues {
            debug!(
                sheet = %issue.sheet,
                row = issue.row,
                column = issue.column,
                field = %issue.field,
                raw = %issue.raw,
                "单元格无法解析，已使用默认值"
            );
        }

        let counts = snapshot.counts();
        info!(
            materials = counts.materials,
            production = counts.production,
            development = counts.development,
            inventory = counts.inventory,
            waste = counts.waste,
            skipped_rows = report.skipped_rows,
            issues = report.issues.len(),
            "工作簿归一化完成"
        );

        (snapshot, report)
    }

    fn read_sheet<T, F>(
        &self,
        grid: &WorkbookGrid,
        layout: SheetLayout,
        now: NaiveDateTime,
        report: &mut NormalizeReport,
        map_row: F,
    ) -> Vec<T>
    where
        F: Fn(usize, &[CellValue], NaiveDateTime, &mut Vec<CoercionIssue>) -> Option<T>,
    {
        let Some(sheet) = grid.sheet(layout.sheet_name) else {
            warn!(sheet = layout.sheet_name, "工作表不存在，按空集合处理");
            report.missing_sheets.push(layout.sheet_name.to_string());
            return Vec::new();
        };

        let last_row = match self.row_limit {
            Some(limit) => sheet.row_count().min(layout.first_data_row.saturating_add(limit)),
            None => sheet.row_count(),
        };

        let mut records = Vec::new();
        for row_index in layout.first_data_row..last_row {
            let cells = sheet.row(row_index).unwrap_or(&[]);
            match map_row(row_index, cells, now, &mut report.issues) {
                Some(record) => records.push(record),
                None => report.skipped_rows += 1,
            }
        }

        debug!(
            sheet = layout.sheet_name,
            rows = records.len(),
            "工作表读取完成"
        );
        records
    }
}

/// 批次内重复 ID 追加序号后缀
fn ensure_unique_ids<T: Record>(records: &mut [T]) {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    for record in records.iter_mut() {
        if seen.insert(record.id().to_string()) {
            continue;
        }
        let base = record.id().to_string();
        let mut suffix = 2;
        let mut candidate = format!("{}-{}", base, suffix);
        while seen.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}-{}", base, suffix);
        }
        seen.insert(candidate.clone());
        record.set_id(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::importer::grid::SheetGrid;
    use crate::importer::id_strategy::{ContentHashIds, RowIndexIds};
    use chrono::NaiveDate;

    fn normalizer(ids: Arc<dyn IdStrategy>) -> WorkbookNormalizer {
        let now = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        WorkbookNormalizer::new(ids, MonthLocale::Cs, Arc::new(FixedClock(now)))
    }

    fn material_sheet(names: &[&str]) -> SheetGrid {
        let mut rows = vec![vec![CellValue::from("Dodavatel"), CellValue::from("Název")]];
        for name in names {
            rows.push(vec![CellValue::from("Wacker"), CellValue::from(*name)]);
        }
        SheetGrid::new(rows)
    }

    #[test]
    fn test_missing_sheets_yield_empty_collections() {
        let grid = WorkbookGrid::new().with_sheet("M_Data", material_sheet(&["VMQ 70", "-"]));
        let (snapshot, report) =
            normalizer(Arc::new(RowIndexIds)).normalize(&grid, NormalizerProfile::RealData);

        assert_eq!(snapshot.materials.len(), 1);
        assert_eq!(snapshot.materials[0].id, "mat_1");
        assert!(snapshot.production.is_empty());
        assert_eq!(report.skipped_rows, 1);
        assert_eq!(
            report.missing_sheets,
            vec!["Extruze", "Vývoje", "VMQ sklad směsí", "Zápis odpadů"]
        );
    }

    #[test]
    fn test_upload_profile_reports_extended_sheets() {
        let grid = WorkbookGrid::new().with_sheet("M_Data", material_sheet(&["VMQ 70"]));
        let (_, report) =
            normalizer(Arc::new(RowIndexIds)).normalize(&grid, NormalizerProfile::Upload);
        assert_eq!(report.missing_sheets.len(), 8);
        assert!(report.missing_sheets.contains(&"Analýza odpadů".to_string()));
    }

    #[test]
    fn test_row_limit_caps_data_rows() {
        let grid = WorkbookGrid::new().with_sheet("M_Data", material_sheet(&["A", "B", "C", "D"]));
        let (snapshot, _) = normalizer(Arc::new(RowIndexIds))
            .with_row_limit(Some(2))
            .normalize(&grid, NormalizerProfile::RealData);
        assert_eq!(snapshot.materials.len(), 2);
    }

    #[test]
    fn test_huge_row_limit_reads_every_row() {
        let grid = WorkbookGrid::new().with_sheet("M_Data", material_sheet(&["A", "B", "C"]));
        let (snapshot, _) = normalizer(Arc::new(RowIndexIds))
            .with_row_limit(Some(usize::MAX))
            .normalize(&grid, NormalizerProfile::RealData);
        assert_eq!(snapshot.materials.len(), 3);
    }

    #[test]
    fn test_content_hash_duplicates_are_disambiguated() {
        let grid = WorkbookGrid::new().with_sheet("M_Data", material_sheet(&["VMQ 70", "VMQ 70"]));
        let (snapshot, _) =
            normalizer(Arc::new(ContentHashIds)).normalize(&grid, NormalizerProfile::RealData);

        assert_eq!(snapshot.materials.len(), 2);
        let first = &snapshot.materials[0].id;
        assert_eq!(snapshot.materials[1].id, format!("{}-2", first));
    }
}
