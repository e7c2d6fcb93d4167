// ==========================================
// 导入管道集成测试
// ==========================================
// 覆盖: 工作簿解析 → 合并 → 归一化 → 快照与报告
// ==========================================

mod test_helpers;

use std::sync::Arc;

use test_helpers::*;
use vmq_dashboard::domain::types::{MaterialStatus, MixtureType, MonthLocale, WasteType};
use vmq_dashboard::importer::{
    ContentHashIds, ExcelParser, NormalizerProfile, RowIndexIds, WorkbookGrid, WorkbookNormalizer,
    WorkbookParser,
};

fn merged_grid() -> WorkbookGrid {
    let parser = ExcelParser;
    let mut grid = parser.parse_bytes(&losses_workbook()).unwrap();
    grid.merge(parser.parse_bytes(&stock_workbook()).unwrap());
    grid
}

fn normalizer() -> WorkbookNormalizer {
    WorkbookNormalizer::new(Arc::new(RowIndexIds), MonthLocale::Cs, test_clock())
}

#[test]
fn test_real_data_materials_skip_placeholder_rows() {
    let (snapshot, _) = normalizer().normalize(&merged_grid(), NormalizerProfile::RealData);

    let ids: Vec<&str> = snapshot.materials.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["mat_1", "mat_4"]);
    assert_eq!(snapshot.materials[0].name, "VMQ 70");
    assert_eq!(snapshot.materials[0].status, MaterialStatus::Production);
    assert_eq!(snapshot.materials[1].supplier, "Momentive");
}

#[test]
fn test_real_data_production_derivations() {
    let (snapshot, _) = normalizer().normalize(&merged_grid(), NormalizerProfile::RealData);
    assert_eq!(snapshot.production.len(), 2);

    let first = &snapshot.production[0];
    assert_eq!(first.id, "prod_2");
    assert_eq!(first.record_number, "1");
    assert_eq!(first.date, datetime(2025, 1, 15, 0, 0));
    assert_eq!(first.month, "leden");
    assert_eq!(first.material_id, "mat_VMQ 70");
    assert_eq!(first.supplier_code, "L100");
    assert_eq!(first.customer, "Nezadáno");
    assert_eq!(first.total_waste, 5.0);
    assert_eq!(first.total_weight, 505.0);
    assert_eq!(first.start_time, datetime(2025, 1, 15, 6, 0));
    assert_eq!(first.end_time, datetime(2025, 1, 15, 14, 0));

    // Excel 序列号日期，缺少时刻时取当天零点
    let second = &snapshot.production[1];
    assert_eq!(second.id, "prod_4");
    assert_eq!(second.date, datetime(2025, 2, 1, 0, 0));
    assert_eq!(second.month, "únor");
    assert_eq!(second.supervisor, "Novák");
    assert_eq!(second.start_time, datetime(2025, 2, 1, 0, 0));
    assert_eq!(second.total_weight, 304.0);
}

#[test]
fn test_real_data_development_hours() {
    let (snapshot, _) = normalizer().normalize(&merged_grid(), NormalizerProfile::RealData);
    assert_eq!(snapshot.development.len(), 1);

    let dev = &snapshot.development[0];
    assert_eq!(dev.hubice_number, "H-7");
    assert_eq!(dev.customer, "Vývoj");
    assert_eq!(dev.month, "březen");
    assert_eq!(dev.total_time, 4.5);
    assert_eq!(dev.real_time, 4.5);
    assert!((dev.calc_time - 4.05).abs() < 1e-9);
    assert_eq!(dev.line_speed_real_per_hour, 300.0);
}

#[test]
fn test_real_data_inventory_and_waste() {
    let (snapshot, report) = normalizer().normalize(&merged_grid(), NormalizerProfile::RealData);

    assert_eq!(snapshot.inventory.len(), 2);
    let pressed = &snapshot.inventory[0];
    assert_eq!(pressed.id, "inv_2");
    assert_eq!(pressed.mixture_type, MixtureType::Pressing);
    assert_eq!(pressed.storage_month, "leden");
    assert_eq!(pressed.write_off_reason, "Žádný");
    assert_eq!(pressed.remaining_quantity(), 200.0);

    let overdrawn = &snapshot.inventory[1];
    assert_eq!(overdrawn.id, "inv_4");
    assert_eq!(overdrawn.mixture_type, MixtureType::Extrusion);
    assert_eq!(overdrawn.remaining_quantity(), -20.0);
    assert_eq!(report.overdrawn_inventory, vec!["inv_4".to_string()]);

    assert_eq!(snapshot.waste.len(), 2);
    assert_eq!(snapshot.waste[0].waste_type, WasteType::NonVulcanizedExtrusion);
    assert_eq!(snapshot.waste[0].weight, 12.5);
    assert_eq!(snapshot.waste[0].month, "leden");
    assert_eq!(snapshot.waste[1].waste_type, WasteType::VulcanizedExtrusion);
    assert_eq!(snapshot.waste[1].record_number, 4);
}

#[test]
fn test_real_data_report_counts_skipped_rows() {
    let (snapshot, report) = normalizer().normalize(&merged_grid(), NormalizerProfile::RealData);

    assert!(report.missing_sheets.is_empty());
    assert_eq!(report.skipped_rows, 6);
    // RealData 不读取扩展工作表
    assert!(snapshot.requirements.is_empty());
    assert!(snapshot.production_analysis.is_empty());
}

#[test]
fn test_upload_profile_reports_missing_extended_sheets() {
    let (snapshot, report) = normalizer().normalize(&merged_grid(), NormalizerProfile::Upload);

    assert_eq!(snapshot.production.len(), 2);
    assert_eq!(report.missing_sheets.len(), 4);
    assert!(report
        .missing_sheets
        .contains(&"Zápis požadavků VMQ linky".to_string()));
}

#[test]
fn test_row_limit_caps_each_sheet() {
    let (snapshot, _) = normalizer()
        .with_row_limit(Some(1))
        .normalize(&merged_grid(), NormalizerProfile::RealData);

    assert_eq!(snapshot.materials.len(), 1);
    assert_eq!(snapshot.production.len(), 1);
    assert_eq!(snapshot.inventory.len(), 1);
}

#[test]
fn test_content_hash_ids_are_stable_across_imports() {
    let normalizer =
        WorkbookNormalizer::new(Arc::new(ContentHashIds), MonthLocale::Cs, test_clock());
    let (first, _) = normalizer.normalize(&merged_grid(), NormalizerProfile::RealData);
    let (second, _) = normalizer.normalize(&merged_grid(), NormalizerProfile::RealData);

    assert_eq!(first.production[0].id, second.production[0].id);
    assert!(first.production[0].id.starts_with("prod_"));
    assert_ne!(first.production[0].id, first.production[1].id);
}
