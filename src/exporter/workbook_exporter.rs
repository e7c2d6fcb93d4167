// ==========================================
// VMQ 生产看板 - 工作簿导出器
// ==========================================
// 职责: DataSnapshot → .xlsx 字节
// 规则:
//   - 每个非空集合一张工作表，表名与列位置沿用导入契约
//   - 第 0 行为捷克语表头，数据从契约的首个数据行开始
//   - 日期写为 dd.mm.yyyy 文本，时间写为 HH:MM 文本
//   - 导入过滤会丢弃的记录照常写出，数量记入 unimportable_rows
// ==========================================

use crate::domain::DataSnapshot;
use crate::exporter::error::{ExportError, ExportResult};
use crate::importer::columns::{self, SheetLayout};
use crate::importer::data_cleaner::is_placeholder;
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::Serialize;
use std::path::Path;
use tracing::{info, instrument, warn};

const DATE_FORMAT: &str = "%d.%m.%Y";
const TIME_FORMAT: &str = "%H:%M";

/// 导出文件名: <base>_<YYYY-MM-DD>.xlsx
pub fn export_file_name(base: &str, today: NaiveDate) -> String {
    format!("{}_{}.xlsx", base, today.format("%Y-%m-%d"))
}

/// 导出结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedWorkbook {
    pub file_name: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub sheets: Vec<String>,
    /// 再次上传时会被导入过滤丢弃的记录数
    pub unimportable_rows: usize,
}

/// 统计再次导入时会被丢弃的记录
///
/// 与上传映射的过滤条件一致：空物料名、数量/重量 <= 0 的库存与废料。
pub fn unimportable_rows(snapshot: &DataSnapshot) -> usize {
    let blank = |name: &str| is_placeholder(name.trim());

    let materials = snapshot.materials.iter().filter(|m| blank(&m.name)).count();
    let production = snapshot
        .production
        .iter()
        .filter(|r| blank(&r.material_name))
        .count();
    let development = snapshot
        .development
        .iter()
        .filter(|r| blank(&r.material_name))
        .count();
    let inventory = snapshot
        .inventory
        .iter()
        .filter(|r| blank(&r.material_name) || r.quantity <= 0.0 || r.quantity.is_nan())
        .count();
    let waste = snapshot
        .waste
        .iter()
        .filter(|r| r.weight <= 0.0 || r.weight.is_nan())
        .count();

    materials + production + development + inventory + waste
}

// ==========================================
// 内部表示
// ==========================================
enum ExportCell {
    Text(String),
    Number(f64),
}

impl From<&str> for ExportCell {
    fn from(value: &str) -> Self {
        ExportCell::Text(value.to_string())
    }
}

impl From<String> for ExportCell {
    fn from(value: String) -> Self {
        ExportCell::Text(value)
    }
}

impl From<f64> for ExportCell {
    fn from(value: f64) -> Self {
        ExportCell::Number(value)
    }
}

fn date(value: NaiveDateTime) -> ExportCell {
    ExportCell::Text(value.format(DATE_FORMAT).to_string())
}

fn time(value: NaiveDateTime) -> ExportCell {
    ExportCell::Text(value.format(TIME_FORMAT).to_string())
}

type ExportRow = Vec<(usize, ExportCell)>;

struct SheetData {
    layout: SheetLayout,
    headers: &'static [(usize, &'static str)],
    rows: Vec<ExportRow>,
}

// ==========================================
// WorkbookExporter
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkbookExporter;

impl WorkbookExporter {
    pub fn new() -> Self {
        Self
    }

    /// 导出到内存
    #[instrument(skip(self, snapshot))]
    pub fn export_to_buffer(
        &self,
        snapshot: &DataSnapshot,
    ) -> ExportResult<(Vec<u8>, Vec<String>)> {
        let sheets: Vec<SheetData> = build_sheets(snapshot)
            .into_iter()
            .filter(|s| !s.rows.is_empty())
            .collect();
        if sheets.is_empty() {
            return Err(ExportError::NothingToExport);
        }

        let header_format = Format::new().set_bold();
        let mut workbook = Workbook::new();
        let mut names = Vec::with_capacity(sheets.len());

        for sheet in &sheets {
            let worksheet = write_sheet(sheet, &header_format)?;
            workbook.push_worksheet(worksheet);
            names.push(sheet.layout.sheet_name.to_string());
        }

        let bytes = workbook.save_to_buffer()?;
        info!(sheets = names.len(), bytes = bytes.len(), "工作簿导出完成");
        Ok((bytes, names))
    }

    /// 导出并命名
    pub fn export(
        &self,
        snapshot: &DataSnapshot,
        base_name: &str,
        today: NaiveDate,
    ) -> ExportResult<ExportedWorkbook> {
        let (bytes, sheets) = self.export_to_buffer(snapshot)?;
        let unimportable_rows = unimportable_rows(snapshot);
        if unimportable_rows > 0 {
            warn!(unimportable_rows, "部分记录再次上传时会被过滤");
        }
        Ok(ExportedWorkbook {
            file_name: export_file_name(base_name, today),
            bytes,
            sheets,
            unimportable_rows,
        })
    }

    /// 导出到磁盘文件
    pub fn export_to_path(&self, snapshot: &DataSnapshot, path: &Path) -> ExportResult<()> {
        let (bytes, _) = self.export_to_buffer(snapshot)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn write_sheet(sheet: &SheetData, header_format: &Format) -> ExportResult<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(sheet.layout.sheet_name)?;

    for (col, label) in sheet.headers {
        worksheet.write_string_with_format(0, *col as u16, *label, header_format)?;
    }

    for (offset, row) in sheet.rows.iter().enumerate() {
        let row_num = (sheet.layout.first_data_row + offset) as u32;
        for (col, cell) in row {
            match cell {
                ExportCell::Text(text) if text.is_empty() => {}
                ExportCell::Text(text) => {
                    worksheet.write_string(row_num, *col as u16, text)?;
                }
                ExportCell::Number(n) => {
                    worksheet.write_number(row_num, *col as u16, *n)?;
                }
            }
        }
    }
    Ok(worksheet)
}

// ==========================================
// 各实体的行构造
// ==========================================

fn build_sheets(snapshot: &DataSnapshot) -> Vec<SheetData> {
    vec![
        material_sheet(snapshot),
        production_sheet(snapshot),
        development_sheet(snapshot),
        inventory_sheet(snapshot),
        waste_sheet(snapshot),
        requirement_sheet(snapshot),
        production_analysis_sheet(snapshot),
        inventory_analysis_sheet(snapshot),
        waste_analysis_sheet(snapshot),
    ]
}

fn material_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::material as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::SUPPLIER, "Dodavatel"),
            (col::NAME, "Název směsi"),
            (col::STATUS, "Stav"),
        ],
        rows: snapshot
            .materials
            .iter()
            .map(|m| {
                vec![
                    (col::SUPPLIER, m.supplier.as_str().into()),
                    (col::NAME, m.name.as_str().into()),
                    (col::STATUS, m.status.label().into()),
                ]
            })
            .collect(),
    }
}

fn production_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::production as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::RECORD_NUMBER, "P. č."),
            (col::ARTICLE_NUMBER, "Číslo artiklu"),
            (col::DIMENSIONS, "Rozměr"),
            (col::DATE, "Datum"),
            (col::MATERIAL_NAME, "Směs"),
            (col::MATERIAL_ALT, "Kód dodavatele"),
            (col::LOT_NUMBER, "LOT"),
            (col::CUSTOMER, "Zákazník"),
            (col::MONTH, "Měsíc"),
            (col::SUPERVISOR, "Vedoucí směny"),
            (col::OPERATOR, "Operátor"),
            (col::PRODUCTION_QUANTITY, "Množství [m]"),
            (col::LINE_SPEED_REAL, "Rychlost linky real [m/min]"),
            (col::LINE_SPEED_CALC, "Rychlost linky kalk [m/min]"),
            (col::LINE_SPEED_REAL_PER_HOUR, "Rychlost linky real [m/h]"),
            (col::LINE_SPEED_CALC_PER_HOUR, "Rychlost linky kalk [m/h]"),
            (col::PRODUCT_WEIGHT_REAL, "Hmotnost výrobku real [kg]"),
            (col::PRODUCT_WEIGHT_CALC, "Hmotnost výrobku kalk [kg]"),
            (col::WASTE_VULCANIZED, "Vulk. odpad [kg]"),
            (col::WASTE_VULCANIZED_CALC, "Vulk. odpad kalk [kg]"),
            (col::WASTE_VULCANIZED_PERCENTAGE, "Vulk. odpad [%]"),
            (col::WASTE_NON_VULCANIZED, "Nevulk. odpad [kg]"),
            (col::WASTE_NON_VULCANIZED_CALC, "Nevulk. odpad kalk [kg]"),
            (col::WASTE_NON_VULCANIZED_PERCENTAGE, "Nevulk. odpad [%]"),
            (col::TOTAL_WASTE_CALC, "Celkový odpad kalk [kg]"),
            (col::TOTAL_WASTE_PERCENTAGE, "Celkový odpad [%]"),
            (col::TOTAL_PRODUCTION_WEIGHT, "Celková hmotnost výroby [kg]"),
            (col::TOTAL_PRODUCTION_WEIGHT_REAL, "Celková hmotnost výroby real [kg]"),
            (col::START_TIME, "Začátek"),
            (col::END_TIME, "Konec"),
            (col::ACTUAL_TIME_DISPLAY, "Čas"),
            (col::ACTUAL_TIME, "Skutečný čas"),
            (col::CALCULATED_TIME, "Kalkulovaný čas"),
            (col::PERFORMANCE_EVAL_KG, "Hodnocení [kg]"),
            (col::PERFORMANCE_EVAL_TIME, "Hodnocení [čas]"),
            (col::NOTES, "Poznámka"),
        ],
        rows: snapshot
            .production
            .iter()
            .map(|r| {
                vec![
                    (col::RECORD_NUMBER, r.record_number.as_str().into()),
                    (col::ARTICLE_NUMBER, r.article_number.as_str().into()),
                    (col::DIMENSIONS, r.dimensions.as_str().into()),
                    (col::DATE, date(r.date)),
                    (col::MATERIAL_NAME, r.material_name.as_str().into()),
                    (col::MATERIAL_ALT, r.supplier_code.as_str().into()),
                    (col::LOT_NUMBER, r.lot_number.as_str().into()),
                    (col::CUSTOMER, r.customer.as_str().into()),
                    (col::MONTH, r.month.as_str().into()),
                    (col::SUPERVISOR, r.supervisor.as_str().into()),
                    (col::OPERATOR, r.operator.as_str().into()),
                    (col::PRODUCTION_QUANTITY, r.production_quantity.into()),
                    (col::LINE_SPEED_REAL, r.line_speed_real.into()),
                    (col::LINE_SPEED_CALC, r.line_speed_calc.into()),
                    (col::LINE_SPEED_REAL_PER_HOUR, r.line_speed_real_per_hour.into()),
                    (col::LINE_SPEED_CALC_PER_HOUR, r.line_speed_calc_per_hour.into()),
                    (col::PRODUCT_WEIGHT_REAL, r.product_weight_real.into()),
                    (col::PRODUCT_WEIGHT_CALC, r.product_weight_calc.into()),
                    (col::WASTE_VULCANIZED, r.waste_vulcanized.into()),
                    (col::WASTE_VULCANIZED_CALC, r.waste_vulcanized_calc.into()),
                    (col::WASTE_VULCANIZED_PERCENTAGE, r.waste_vulcanized_percentage.into()),
                    (col::WASTE_NON_VULCANIZED, r.waste_non_vulcanized.into()),
                    (col::WASTE_NON_VULCANIZED_CALC, r.waste_non_vulcanized_calc.into()),
                    (
                        col::WASTE_NON_VULCANIZED_PERCENTAGE,
                        r.waste_non_vulcanized_percentage.into(),
                    ),
                    (col::TOTAL_WASTE_CALC, r.total_waste_calc.into()),
                    (col::TOTAL_WASTE_PERCENTAGE, r.total_waste_percentage.into()),
                    (col::TOTAL_PRODUCTION_WEIGHT, r.total_production_weight.into()),
                    (col::TOTAL_PRODUCTION_WEIGHT_REAL, r.total_production_weight_real.into()),
                    (col::START_TIME, time(r.start_time)),
                    (col::END_TIME, time(r.end_time)),
                    (col::ACTUAL_TIME_DISPLAY, r.actual_time_display.as_str().into()),
                    (col::ACTUAL_TIME, r.actual_time.into()),
                    (col::CALCULATED_TIME, r.calculated_time.into()),
                    (col::PERFORMANCE_EVAL_KG, r.performance_eval_kg.into()),
                    (col::PERFORMANCE_EVAL_TIME, r.performance_eval_time.into()),
                    (col::NOTES, r.notes.as_str().into()),
                ]
            })
            .collect(),
    }
}

fn development_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::development as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::RECORD_NUMBER, "P. č."),
            (col::ARTICLE_NUMBER, "Číslo artiklu"),
            (col::DIMENSIONS, "Rozměr"),
            (col::HUBICE_NUMBER, "Číslo hubice"),
            (col::DATE, "Datum"),
            (col::MATERIAL_NAME, "Směs"),
            (col::MATERIAL_ALT, "Kód dodavatele"),
            (col::LOT_NUMBER, "LOT"),
            (col::CUSTOMER, "Zákazník"),
            (col::SUPERVISOR, "Vedoucí směny"),
            (col::OPERATOR, "Operátor"),
            (col::PRODUCTION_QUANTITY, "Množství [m]"),
            (col::LINE_SPEED_REAL, "Rychlost linky real [m/min]"),
            (col::LINE_SPEED_CALC, "Rychlost linky kalk [m/min]"),
            (col::PRODUCT_WEIGHT_REAL, "Hmotnost výrobku real [kg]"),
            (col::PRODUCT_WEIGHT_CALC, "Hmotnost výrobku kalk [kg]"),
            (col::WASTE_VULCANIZED, "Vulk. odpad [kg]"),
            (col::WASTE_NON_VULCANIZED, "Nevulk. odpad [kg]"),
            (col::TOTAL_DEVELOPMENT_WEIGHT, "Celková hmotnost vývoje [kg]"),
            (col::START_TIME, "Začátek"),
            (col::END_TIME, "Konec"),
            (col::REAL_TIME, "Skutečný čas [h]"),
            (col::TOTAL_TIME, "Σ čas [h]"),
            (col::CALC_TIME, "Kalkulovaný čas [h]"),
            (col::NOTES, "Poznámka"),
        ],
        rows: snapshot
            .development
            .iter()
            .map(|r| {
                vec![
                    (col::RECORD_NUMBER, r.record_number.as_str().into()),
                    (col::ARTICLE_NUMBER, r.article_number.as_str().into()),
                    (col::DIMENSIONS, r.dimensions.as_str().into()),
                    (col::HUBICE_NUMBER, r.hubice_number.as_str().into()),
                    (col::DATE, date(r.date)),
                    (col::MATERIAL_NAME, r.material_name.as_str().into()),
                    (col::MATERIAL_ALT, r.supplier_code.as_str().into()),
                    (col::LOT_NUMBER, r.lot_number.as_str().into()),
                    (col::CUSTOMER, r.customer.as_str().into()),
                    (col::SUPERVISOR, r.supervisor.as_str().into()),
                    (col::OPERATOR, r.operator.as_str().into()),
                    (col::PRODUCTION_QUANTITY, r.production_quantity.into()),
                    (col::LINE_SPEED_REAL, r.line_speed_real.into()),
                    (col::LINE_SPEED_CALC, r.line_speed_calc.into()),
                    (col::PRODUCT_WEIGHT_REAL, r.product_weight_real.into()),
                    (col::PRODUCT_WEIGHT_CALC, r.product_weight_calc.into()),
                    (col::WASTE_VULCANIZED, r.waste_vulcanized.into()),
                    (col::WASTE_NON_VULCANIZED, r.waste_non_vulcanized.into()),
                    (col::TOTAL_DEVELOPMENT_WEIGHT, r.total_development_weight.into()),
                    (col::START_TIME, time(r.start_time)),
                    (col::END_TIME, time(r.end_time)),
                    (col::REAL_TIME, r.real_time.into()),
                    (col::TOTAL_TIME, r.total_time.into()),
                    (col::CALC_TIME, r.calc_time.into()),
                    (col::NOTES, r.notes.as_str().into()),
                ]
            })
            .collect(),
    }
}

fn inventory_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::inventory as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::RECORD_NUMBER, "P. č."),
            (col::MIXTURE_TYPE, "Typ směsi"),
            (col::MATERIAL_NAME, "Směs"),
            (col::SUPPLIER_CODE, "Kód dodavatele"),
            (col::LOT_NUMBER, "LOT"),
            (col::STORAGE_MONTH, "Měsíc naskladnění"),
            (col::PRODUCTION_DATE, "Datum výroby"),
            (col::EXPIRATION_DATE, "Datum expirace"),
            (col::STORAGE_DATE, "Datum naskladnění"),
            (col::QUANTITY, "Množství [kg]"),
            (col::STORED_BY, "Naskladnil"),
            (col::EXTENSION_DATE, "Prodloužení"),
            (col::WRITTEN_OFF, "Odepsáno [kg]"),
            (col::WRITTEN_OFF_BY, "Odepsal"),
            (col::WRITE_OFF_REASON, "Důvod odpisu"),
            (col::NOTES, "Poznámka"),
        ],
        rows: snapshot
            .inventory
            .iter()
            .map(|r| {
                let mut row: ExportRow = vec![
                    (col::RECORD_NUMBER, r.record_number.as_str().into()),
                    (col::MIXTURE_TYPE, r.mixture_type.label().into()),
                    (col::MATERIAL_NAME, r.material_name.as_str().into()),
                    (col::SUPPLIER_CODE, r.supplier_code.as_str().into()),
                    (col::LOT_NUMBER, r.lot_number.as_str().into()),
                    (col::STORAGE_MONTH, r.storage_month.as_str().into()),
                    (col::PRODUCTION_DATE, date(r.production_date)),
                    (col::EXPIRATION_DATE, date(r.expiration_date)),
                    (col::STORAGE_DATE, date(r.storage_date)),
                    (col::QUANTITY, r.quantity.into()),
                    (col::STORED_BY, r.stored_by.as_str().into()),
                    (col::WRITTEN_OFF, r.written_off.into()),
                    (col::WRITTEN_OFF_BY, r.written_off_by.as_str().into()),
                    (col::WRITE_OFF_REASON, r.write_off_reason.as_str().into()),
                    (col::NOTES, r.notes.as_str().into()),
                ];
                if let Some(extension) = r.extension_date {
                    row.push((col::EXTENSION_DATE, date(extension)));
                }
                row
            })
            .collect(),
    }
}

fn waste_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::waste as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::RECORD_NUMBER, "P. č."),
            (col::EXPORT_DATE, "Datum odvozu"),
            (col::MONTH, "Měsíc"),
            (col::WASTE_TYPE, "Druh odpadu"),
            (col::WEIGHT, "Hmotnost [kg]"),
            (col::RECORDED_BY, "Zapsal"),
            (col::NOTES, "Poznámka"),
        ],
        rows: snapshot
            .waste
            .iter()
            .map(|r| {
                vec![
                    (col::RECORD_NUMBER, f64::from(r.record_number).into()),
                    (col::EXPORT_DATE, date(r.export_date)),
                    (col::MONTH, r.month.as_str().into()),
                    (col::WASTE_TYPE, r.waste_type.label().into()),
                    (col::WEIGHT, r.weight.into()),
                    (col::RECORDED_BY, r.recorded_by.as_str().into()),
                    (col::NOTES, r.notes.as_str().into()),
                ]
            })
            .collect(),
    }
}

fn requirement_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::requirement as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::RECORD_NUMBER, "P. č."),
            (col::ENTRY_DATE, "Datum zápisu"),
            (col::YEAR, "Rok"),
            (col::REQUIREMENT, "Požadavek"),
            (col::ENTERED_BY, "Zapsal"),
            (col::COMPLETION_PERCENT, "Splněno [%]"),
            (col::NOTES, "Poznámka"),
        ],
        rows: snapshot
            .requirements
            .iter()
            .map(|r| {
                vec![
                    (col::RECORD_NUMBER, f64::from(r.record_number).into()),
                    (col::ENTRY_DATE, date(r.entry_date)),
                    (col::YEAR, f64::from(r.year).into()),
                    (col::REQUIREMENT, r.requirement.as_str().into()),
                    (col::ENTERED_BY, r.entered_by.as_str().into()),
                    (col::COMPLETION_PERCENT, r.completion_percent.into()),
                    (col::NOTES, r.notes.as_str().into()),
                ]
            })
            .collect(),
    }
}

fn production_analysis_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::production_analysis as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::MONTH, "Měsíc"),
            (col::TOTAL_PRODUCTS_WEIGHT_CALC, "Hmotnost výrobků kalk [kg]"),
            (col::TOTAL_PRODUCTS_WEIGHT_REAL, "Hmotnost výrobků real [kg]"),
            (col::PRODUCT_WEIGHT_DIFFERENCE, "Rozdíl [kg]"),
            (col::TOTAL_WASTE_WEIGHT_CALC, "Odpad kalk [kg]"),
            (col::TOTAL_WASTE_WEIGHT_REAL, "Odpad real [kg]"),
            (col::WASTE_WEIGHT_DIFFERENCE, "Rozdíl odpadu [kg]"),
            (col::REAL_TIME, "Skutečný čas"),
            (col::CALCULATED_TIME, "Kalkulovaný čas"),
            (col::WEIGHT_EFFICIENCY_PERCENT, "Efektivita hmotnosti [%]"),
            (col::TIME_EFFICIENCY_PERCENT, "Efektivita času [%]"),
        ],
        rows: snapshot
            .production_analysis
            .iter()
            .map(|r| {
                vec![
                    (col::MONTH, r.month.as_str().into()),
                    (col::TOTAL_PRODUCTS_WEIGHT_CALC, r.total_products_weight_calc.into()),
                    (col::TOTAL_PRODUCTS_WEIGHT_REAL, r.total_products_weight_real.into()),
                    (col::PRODUCT_WEIGHT_DIFFERENCE, r.product_weight_difference.into()),
                    (col::TOTAL_WASTE_WEIGHT_CALC, r.total_waste_weight_calc.into()),
                    (col::TOTAL_WASTE_WEIGHT_REAL, r.total_waste_weight_real.into()),
                    (col::WASTE_WEIGHT_DIFFERENCE, r.waste_weight_difference.into()),
                    (col::REAL_TIME, r.real_time.as_str().into()),
                    (col::CALCULATED_TIME, r.calculated_time.as_str().into()),
                    (col::WEIGHT_EFFICIENCY_PERCENT, r.weight_efficiency_percent.into()),
                    (col::TIME_EFFICIENCY_PERCENT, r.time_efficiency_percent.into()),
                ]
            })
            .collect(),
    }
}

fn inventory_analysis_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::inventory_analysis as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::MONTH, "Měsíc"),
            (col::EXTRUSION_MIXTURES_STORED, "Extrůzní směsi [kg]"),
            (col::PRESSING_MIXTURES_STORED, "Lisovací směsi [kg]"),
            (col::WRITTEN_OFF, "Odepsáno [kg]"),
        ],
        rows: snapshot
            .inventory_analysis
            .iter()
            .map(|r| {
                vec![
                    (col::MONTH, r.month.as_str().into()),
                    (col::EXTRUSION_MIXTURES_STORED, r.extrusion_mixtures_stored.into()),
                    (col::PRESSING_MIXTURES_STORED, r.pressing_mixtures_stored.into()),
                    (col::WRITTEN_OFF, r.written_off.into()),
                ]
            })
            .collect(),
    }
}

fn waste_analysis_sheet(snapshot: &DataSnapshot) -> SheetData {
    use columns::waste_analysis as col;
    SheetData {
        layout: col::LAYOUT,
        headers: &[
            (col::MONTH, "Měsíc"),
            (col::NON_VULCANIZED_EXTRUSION, "Nevulkanizovaný extruze [kg]"),
            (col::VULCANIZED_EXTRUSION, "Vulkanizovaný extruze [kg]"),
            (col::NON_VULCANIZED_EXPIRED, "Nevulkanizovaný expirovaný [kg]"),
            (col::NON_VULCANIZED_CONFECTION, "Nevulkanizovaný konfekce [kg]"),
            (col::VULCANIZED_CONFECTION, "Vulkanizovaný konfekce [kg]"),
            (col::TOTAL, "Celkem [kg]"),
        ],
        rows: snapshot
            .waste_analysis
            .iter()
            .map(|r| {
                vec![
                    (col::MONTH, r.month.as_str().into()),
                    (col::NON_VULCANIZED_EXTRUSION, r.non_vulcanized_extrusion.into()),
                    (col::VULCANIZED_EXTRUSION, r.vulcanized_extrusion.into()),
                    (col::NON_VULCANIZED_EXPIRED, r.non_vulcanized_expired.into()),
                    (col::NON_VULCANIZED_CONFECTION, r.non_vulcanized_confection.into()),
                    (col::VULCANIZED_CONFECTION, r.vulcanized_confection.into()),
                    (col::TOTAL, r.total.into()),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::MaterialStatus;
    use crate::domain::Material;

    #[test]
    fn test_export_file_name() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(export_file_name("VMQ_export", today), "VMQ_export_2025-03-04.xlsx");
    }

    #[test]
    fn test_empty_snapshot_is_rejected() {
        let result = WorkbookExporter::new().export_to_buffer(&DataSnapshot::default());
        assert!(matches!(result, Err(ExportError::NothingToExport)));
    }

    #[test]
    fn test_only_non_empty_collections_become_sheets() {
        let snapshot = DataSnapshot {
            materials: vec![Material {
                id: "mat_1".to_string(),
                name: "VMQ 70".to_string(),
                supplier: "Wacker".to_string(),
                status: MaterialStatus::Production,
            }],
            ..DataSnapshot::default()
        };

        let (bytes, sheets) = WorkbookExporter::new().export_to_buffer(&snapshot).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(sheets, vec!["M_Data".to_string()]);
    }
}
