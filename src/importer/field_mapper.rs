// ==========================================
// VMQ 生产看板 - 字段映射器实现
// ==========================================
// 职责: 工作表行（按列位置）→ 领域记录 + 类型转换 + 派生字段
// 约定: 返回 None 表示该行按跳过规则丢弃
//       非空单元格回退到默认值时记录 CoercionIssue，不中断导入
// ==========================================

use crate::domain::types::{MaterialStatus, MixtureType, MonthLocale, WasteType};
use crate::domain::{
    DevelopmentRecord, InventoryAnalysis, InventoryRecord, Material, ProductionAnalysis,
    ProductionRecord, RequirementRecord, WasteAnalysis, WasteRecord,
};
use crate::importer::columns::{self, MONTH_HEADER, RECORD_NUMBER_HEADER};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::derivation::DerivationService;
use crate::importer::grid::CellValue;
use crate::importer::id_strategy::{
    IdStrategy, DEVELOPMENT_PREFIX, INVENTORY_PREFIX, MATERIAL_PREFIX, PRODUCTION_PREFIX,
    REQUIREMENT_PREFIX, WASTE_PREFIX,
};
use crate::importer::importer_trait::{
    DataCleaner as DataCleanerTrait, DerivationService as DerivationServiceTrait,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use std::sync::Arc;

// ===== 文本默认值 =====
pub const NOT_SPECIFIED: &str = "Nezadáno";
pub const DEVELOPMENT_CUSTOMER: &str = "Vývoj";
pub const NO_WRITE_OFF_REASON: &str = "Žádný";

// 开发记录核算工时缺失时按总工时的比例推算
const DEVELOPMENT_CALC_TIME_RATIO: f64 = 0.9;

// ==========================================
// CoercionIssue - 单元格强制转换问题
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoercionIssue {
    pub sheet: String,
    pub row: usize,
    pub column: usize,
    pub field: String,
    pub raw: String,
}

// ==========================================
// RowReader - 单行读取上下文
// ==========================================
struct RowReader<'a> {
    sheet: &'a str,
    row_index: usize,
    cells: &'a [CellValue],
    now: NaiveDateTime,
    cleaner: &'a DataCleaner,
    issues: &'a mut Vec<CoercionIssue>,
}

impl<'a> RowReader<'a> {
    fn cell(&self, col: usize) -> &'a CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.cells.get(col).unwrap_or(&EMPTY)
    }

    fn text(&self, col: usize) -> String {
        self.cleaner.clean_text(self.cell(col))
    }

    fn text_or(&self, col: usize, default: &str) -> String {
        let value = self.text(col);
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    }

    fn is_blank(&self, col: usize) -> bool {
        self.cleaner.is_blank(self.cell(col))
    }

    fn number(&mut self, col: usize, field: &str) -> f64 {
        if self.is_blank(col) {
            return 0.0;
        }
        match self.cleaner.parse_number(self.cell(col)) {
            Some(n) => n,
            None => {
                self.record_issue(col, field);
                0.0
            }
        }
    }

    /// 空单元格或无法解析 → 当前时间
    fn date(&mut self, col: usize, field: &str) -> NaiveDateTime {
        if self.is_blank(col) {
            return self.now;
        }
        match self.cleaner.parse_date(self.cell(col)) {
            Some(dt) => dt,
            None => {
                self.record_issue(col, field);
                self.now
            }
        }
    }

    fn optional_date(&mut self, col: usize, field: &str) -> Option<NaiveDateTime> {
        if self.is_blank(col) {
            return None;
        }
        let parsed = self.cleaner.parse_date(self.cell(col));
        if parsed.is_none() {
            self.record_issue(col, field);
        }
        parsed
    }

    /// 空单元格 → None；无法解析 → 记录日期零点
    fn time(&mut self, col: usize, field: &str, anchor: NaiveDate) -> Option<NaiveDateTime> {
        if self.is_blank(col) {
            return None;
        }
        match self.cleaner.parse_time(self.cell(col), anchor) {
            Some(dt) => Some(dt),
            None => {
                self.record_issue(col, field);
                Some(anchor.and_time(NaiveTime::MIN))
            }
        }
    }

    fn record_issue(&mut self, col: usize, field: &str) {
        self.issues.push(CoercionIssue {
            sheet: self.sheet.to_string(),
            row: self.row_index,
            column: col,
            field: field.to_string(),
            raw: self.cell(col).to_string(),
        });
    }

    /// 首列是表头回显（如 "P. č."）
    fn is_header_echo(&self, header: &str) -> bool {
        self.text(0) == header
    }
}

// ==========================================
// FieldMapper - 按实体的位置映射
// ==========================================
pub struct FieldMapper {
    cleaner: DataCleaner,
    derivation: DerivationService,
    ids: Arc<dyn IdStrategy>,
    months: MonthLocale,
}

impl FieldMapper {
    pub fn new(ids: Arc<dyn IdStrategy>, months: MonthLocale) -> Self {
        Self {
            cleaner: DataCleaner,
            derivation: DerivationService,
            ids,
            months,
        }
    }

    fn reader<'a>(
        &'a self,
        sheet: &'a str,
        row_index: usize,
        cells: &'a [CellValue],
        now: NaiveDateTime,
        issues: &'a mut Vec<CoercionIssue>,
    ) -> RowReader<'a> {
        RowReader {
            sheet,
            row_index,
            cells,
            now,
            cleaner: &self.cleaner,
            issues,
        }
    }

    fn record_id(&self, prefix: &str, row_index: usize, cells: &[CellValue]) -> String {
        self.ids.record_id(prefix, row_index, cells)
    }

    // ===== M_Data =====
    pub fn map_material(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<Material> {
        use columns::material as col;
        let r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        let name = r.text(col::NAME);
        if name.is_empty() {
            return None;
        }

        Some(Material {
            id: self.record_id(MATERIAL_PREFIX, row_index, cells),
            name,
            supplier: r.text_or(col::SUPPLIER, NOT_SPECIFIED),
            status: MaterialStatus::from_label(&r.text(col::STATUS)),
        })
    }

    // ===== Extruze =====
    pub fn map_production(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<ProductionRecord> {
        use columns::production as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        if r.is_header_echo(RECORD_NUMBER_HEADER) {
            return None;
        }
        let primary_name = r.text(col::MATERIAL_NAME);
        let alternate_name = r.text(col::MATERIAL_ALT);
        let material_name = if primary_name.is_empty() {
            alternate_name.clone()
        } else {
            primary_name
        };
        if material_name.is_empty() {
            return None;
        }

        let date = r.date(col::DATE, "date");
        let anchor = date.date();
        let midnight = anchor.and_time(NaiveTime::MIN);
        let lot_number = r.text(col::LOT_NUMBER);
        let supplier_code = [alternate_name.as_str(), lot_number.as_str()]
            .into_iter()
            .find(|s| !s.is_empty() && *s != material_name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("LOT-{}", row_index));

        let waste_vulcanized = r.number(col::WASTE_VULCANIZED, "wasteVulcanized");
        let waste_non_vulcanized = r.number(col::WASTE_NON_VULCANIZED, "wasteNonVulcanized");
        let total_production_weight =
            r.number(col::TOTAL_PRODUCTION_WEIGHT, "totalProductionWeight");
        let (total_waste, total_weight) = self.derivation.derive_waste_totals(
            waste_vulcanized,
            waste_non_vulcanized,
            total_production_weight,
        );

        let record_number = r.text(col::RECORD_NUMBER);
        Some(ProductionRecord {
            id: self.record_id(PRODUCTION_PREFIX, row_index, cells),
            record_number: if record_number.is_empty() {
                row_index.to_string()
            } else {
                record_number
            },
            article_number: r.text(col::ARTICLE_NUMBER),
            dimensions: r.text(col::DIMENSIONS),
            month: self
                .derivation
                .derive_month(&r.text(col::MONTH), date, self.months),
            start_time: r
                .time(col::START_TIME, "startTime", anchor)
                .unwrap_or(midnight),
            end_time: r.time(col::END_TIME, "endTime", anchor).unwrap_or(midnight),
            actual_time: r.number(col::ACTUAL_TIME, "actualTime"),
            calculated_time: r.number(col::CALCULATED_TIME, "calculatedTime"),
            actual_time_display: r.text(col::ACTUAL_TIME_DISPLAY),
            material_id: self.derivation.derive_material_id(&material_name),
            material_name,
            supplier_code,
            lot_number: if lot_number.is_empty() {
                format!("LOT-{}", row_index)
            } else {
                lot_number
            },
            customer: r.text_or(col::CUSTOMER, NOT_SPECIFIED),
            supervisor: r.text_or(col::SUPERVISOR, NOT_SPECIFIED),
            operator: r.text_or(col::OPERATOR, NOT_SPECIFIED),
            production_quantity: r.number(col::PRODUCTION_QUANTITY, "productionQuantity"),
            line_speed_real: r.number(col::LINE_SPEED_REAL, "lineSpeedReal"),
            line_speed_calc: r.number(col::LINE_SPEED_CALC, "lineSpeedCalc"),
            line_speed_real_per_hour: r
                .number(col::LINE_SPEED_REAL_PER_HOUR, "lineSpeedRealPerHour"),
            line_speed_calc_per_hour: r
                .number(col::LINE_SPEED_CALC_PER_HOUR, "lineSpeedCalcPerHour"),
            product_weight_real: r.number(col::PRODUCT_WEIGHT_REAL, "productWeightReal"),
            product_weight_calc: r.number(col::PRODUCT_WEIGHT_CALC, "productWeightCalc"),
            waste_vulcanized,
            waste_vulcanized_calc: r.number(col::WASTE_VULCANIZED_CALC, "wasteVulcanizedCalc"),
            waste_vulcanized_percentage: r
                .number(col::WASTE_VULCANIZED_PERCENTAGE, "wasteVulcanizedPercentage"),
            waste_non_vulcanized,
            waste_non_vulcanized_calc: r
                .number(col::WASTE_NON_VULCANIZED_CALC, "wasteNonVulcanizedCalc"),
            waste_non_vulcanized_percentage: r.number(
                col::WASTE_NON_VULCANIZED_PERCENTAGE,
                "wasteNonVulcanizedPercentage",
            ),
            total_waste,
            total_waste_calc: r.number(col::TOTAL_WASTE_CALC, "totalWasteCalc"),
            total_waste_percentage: r
                .number(col::TOTAL_WASTE_PERCENTAGE, "totalWastePercentage"),
            total_production_weight,
            total_production_weight_real: r
                .number(col::TOTAL_PRODUCTION_WEIGHT_REAL, "totalProductionWeightReal"),
            total_weight,
            performance_eval_kg: r.number(col::PERFORMANCE_EVAL_KG, "performanceEvalKg"),
            performance_eval_time: r.number(col::PERFORMANCE_EVAL_TIME, "performanceEvalTime"),
            notes: r.text(col::NOTES),
            date,
        })
    }

    // ===== Vývoje =====
    pub fn map_development(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<DevelopmentRecord> {
        use columns::development as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        if r.is_header_echo(RECORD_NUMBER_HEADER) {
            return None;
        }
        let primary_name = r.text(col::MATERIAL_NAME);
        let alternate_name = r.text(col::MATERIAL_ALT);
        let material_name = if primary_name.is_empty() {
            alternate_name.clone()
        } else {
            primary_name
        };
        if material_name.is_empty() {
            return None;
        }

        let date = r.date(col::DATE, "date");
        let anchor = date.date();
        let midnight = anchor.and_time(NaiveTime::MIN);
        let start = r.time(col::START_TIME, "startTime", anchor);
        let end = r.time(col::END_TIME, "endTime", anchor);
        let sheet_total = r.number(col::TOTAL_TIME, "totalTime");
        let total_time = self.derivation.derive_total_hours(start, end, sheet_total);
        let real_time = if r.is_blank(col::REAL_TIME) {
            total_time
        } else {
            r.number(col::REAL_TIME, "realTime")
        };
        let calc_time = if r.is_blank(col::CALC_TIME) {
            total_time * DEVELOPMENT_CALC_TIME_RATIO
        } else {
            r.number(col::CALC_TIME, "calcTime")
        };

        let line_speed_real = r.number(col::LINE_SPEED_REAL, "lineSpeedReal");
        let line_speed_calc = r.number(col::LINE_SPEED_CALC, "lineSpeedCalc");
        let lot_number = r.text(col::LOT_NUMBER);
        let record_number = r.text(col::RECORD_NUMBER);

        Some(DevelopmentRecord {
            id: self.record_id(DEVELOPMENT_PREFIX, row_index, cells),
            record_number: if record_number.is_empty() {
                row_index.to_string()
            } else {
                record_number
            },
            article_number: r.text(col::ARTICLE_NUMBER),
            dimensions: r.text(col::DIMENSIONS),
            hubice_number: r.text(col::HUBICE_NUMBER),
            month: self.derivation.derive_month("", date, self.months),
            material_id: self.derivation.derive_material_id(&material_name),
            supplier_code: if alternate_name.is_empty() || alternate_name == material_name {
                NOT_SPECIFIED.to_string()
            } else {
                alternate_name
            },
            material_name,
            lot_number: if lot_number.is_empty() {
                format!("LOT-{}", row_index)
            } else {
                lot_number
            },
            customer: r.text_or(col::CUSTOMER, DEVELOPMENT_CUSTOMER),
            supervisor: r.text_or(col::SUPERVISOR, NOT_SPECIFIED),
            operator: r.text_or(col::OPERATOR, NOT_SPECIFIED),
            production_quantity: r.number(col::PRODUCTION_QUANTITY, "productionQuantity"),
            line_speed_real,
            line_speed_calc,
            line_speed_real_per_hour: self.derivation.derive_per_hour(line_speed_real),
            line_speed_calc_per_hour: self.derivation.derive_per_hour(line_speed_calc),
            product_weight_real: r.number(col::PRODUCT_WEIGHT_REAL, "productWeightReal"),
            product_weight_calc: r.number(col::PRODUCT_WEIGHT_CALC, "productWeightCalc"),
            waste_vulcanized: r.number(col::WASTE_VULCANIZED, "wasteVulcanized"),
            waste_non_vulcanized: r.number(col::WASTE_NON_VULCANIZED, "wasteNonVulcanized"),
            total_development_weight: r
                .number(col::TOTAL_DEVELOPMENT_WEIGHT, "totalDevelopmentWeight"),
            start_time: start.unwrap_or(midnight),
            end_time: end.unwrap_or(midnight),
            real_time,
            calc_time,
            total_time,
            notes: r.text(col::NOTES),
            date,
        })
    }

    // ===== VMQ sklad směsí =====
    pub fn map_inventory(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<InventoryRecord> {
        use columns::inventory as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        if r.is_header_echo(RECORD_NUMBER_HEADER) {
            return None;
        }
        let material_name = r.text(col::MATERIAL_NAME);
        if material_name.is_empty() {
            return None;
        }
        let quantity = r.number(col::QUANTITY, "quantity");
        if quantity <= 0.0 {
            return None;
        }

        let production_date = r.date(col::PRODUCTION_DATE, "productionDate");
        let expiration_date = r.date(col::EXPIRATION_DATE, "expirationDate");
        let storage_date = r.date(col::STORAGE_DATE, "storageDate");
        let record_number = r.text(col::RECORD_NUMBER);
        let lot_number = r.text(col::LOT_NUMBER);

        let mut record = InventoryRecord::new(
            self.record_id(INVENTORY_PREFIX, row_index, cells),
            material_name,
            quantity,
            expiration_date,
            storage_date,
        );
        record.record_number = if record_number.is_empty() {
            row_index.to_string()
        } else {
            record_number
        };
        record.mixture_type = MixtureType::from_label(&r.text(col::MIXTURE_TYPE));
        record.supplier_code = r.text_or(col::SUPPLIER_CODE, NOT_SPECIFIED);
        record.lot_number = if lot_number.is_empty() {
            format!("LOT-{}", row_index)
        } else {
            lot_number
        };
        record.storage_month = self.derivation.derive_month("", production_date, self.months);
        record.production_date = production_date;
        record.extension_date = r.optional_date(col::EXTENSION_DATE, "extensionDate");
        record.stored_by = r.text_or(col::STORED_BY, NOT_SPECIFIED);
        record.written_off = r.number(col::WRITTEN_OFF, "writtenOff");
        record.written_off_by = r.text(col::WRITTEN_OFF_BY);
        record.write_off_reason = r.text_or(col::WRITE_OFF_REASON, NO_WRITE_OFF_REASON);
        record.notes = r.text(col::NOTES);
        Some(record)
    }

    // ===== Zápis odpadů =====
    pub fn map_waste(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<WasteRecord> {
        use columns::waste as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        let type_label = r.text(col::WASTE_TYPE);
        if type_label.is_empty() {
            return None;
        }
        let weight = r.number(col::WEIGHT, "weight");
        if weight <= 0.0 {
            return None;
        }
        let waste_type = WasteType::from_label(&type_label)?;

        let record_number = r.number(col::RECORD_NUMBER, "recordNumber");
        Some(WasteRecord {
            id: self.record_id(WASTE_PREFIX, row_index, cells),
            record_number: if record_number > 0.0 {
                record_number as u32
            } else {
                row_index as u32
            },
            export_date: r.date(col::EXPORT_DATE, "exportDate"),
            month: r.text_or(col::MONTH, NOT_SPECIFIED),
            waste_type,
            weight,
            recorded_by: r.text_or(col::RECORDED_BY, NOT_SPECIFIED),
            notes: r.text(col::NOTES),
        })
    }

    // ===== Zápis požadavků VMQ linky =====
    pub fn map_requirement(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<RequirementRecord> {
        use columns::requirement as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        if r.is_blank(col::RECORD_NUMBER) || r.is_header_echo(RECORD_NUMBER_HEADER) {
            return None;
        }

        let record_number = r.number(col::RECORD_NUMBER, "recordNumber");
        let year = r.number(col::YEAR, "year");
        Some(RequirementRecord {
            id: self.record_id(REQUIREMENT_PREFIX, row_index, cells),
            record_number: record_number.max(0.0) as u32,
            entry_date: r.date(col::ENTRY_DATE, "entryDate"),
            year: if year > 0.0 { year as i32 } else { now.year() },
            requirement: r.text(col::REQUIREMENT),
            entered_by: r.text(col::ENTERED_BY),
            completion_percent: r.number(col::COMPLETION_PERCENT, "completionPercent"),
            notes: r.text(col::NOTES),
        })
    }

    // ===== Analýza ztrát výroba =====
    pub fn map_production_analysis(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<ProductionAnalysis> {
        use columns::production_analysis as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        let month = r.text(col::MONTH);
        if month.is_empty() || month == MONTH_HEADER {
            return None;
        }

        Some(ProductionAnalysis {
            month,
            total_products_weight_calc: r
                .number(col::TOTAL_PRODUCTS_WEIGHT_CALC, "totalProductsWeightCalc"),
            total_products_weight_real: r
                .number(col::TOTAL_PRODUCTS_WEIGHT_REAL, "totalProductsWeightReal"),
            product_weight_difference: r
                .number(col::PRODUCT_WEIGHT_DIFFERENCE, "productWeightDifference"),
            total_waste_weight_calc: r.number(col::TOTAL_WASTE_WEIGHT_CALC, "totalWasteWeightCalc"),
            total_waste_weight_real: r.number(col::TOTAL_WASTE_WEIGHT_REAL, "totalWasteWeightReal"),
            waste_weight_difference: r
                .number(col::WASTE_WEIGHT_DIFFERENCE, "wasteWeightDifference"),
            real_time: r.text(col::REAL_TIME),
            calculated_time: r.text(col::CALCULATED_TIME),
            weight_efficiency_percent: r
                .number(col::WEIGHT_EFFICIENCY_PERCENT, "weightEfficiencyPercent"),
            time_efficiency_percent: r
                .number(col::TIME_EFFICIENCY_PERCENT, "timeEfficiencyPercent"),
        })
    }

    // ===== Analýza VMQ skladu směsí =====
    pub fn map_inventory_analysis(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<InventoryAnalysis> {
        use columns::inventory_analysis as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        let month = r.text(col::MONTH);
        if month.is_empty() || month == MONTH_HEADER {
            return None;
        }

        Some(InventoryAnalysis {
            month,
            extrusion_mixtures_stored: r
                .number(col::EXTRUSION_MIXTURES_STORED, "extrusionMixturesStored"),
            pressing_mixtures_stored: r
                .number(col::PRESSING_MIXTURES_STORED, "pressingMixturesStored"),
            written_off: r.number(col::WRITTEN_OFF, "writtenOff"),
        })
    }

    // ===== Analýza odpadů =====
    pub fn map_waste_analysis(
        &self,
        row_index: usize,
        cells: &[CellValue],
        now: NaiveDateTime,
        issues: &mut Vec<CoercionIssue>,
    ) -> Option<WasteAnalysis> {
        use columns::waste_analysis as col;
        let mut r = self.reader(col::LAYOUT.sheet_name, row_index, cells, now, issues);

        let month = r.text(col::MONTH);
        if month.is_empty() || month == MONTH_HEADER {
            return None;
        }

        Some(WasteAnalysis {
            month,
            non_vulcanized_extrusion: r
                .number(col::NON_VULCANIZED_EXTRUSION, "nonVulcanizedExtrusion"),
            vulcanized_extrusion: r.number(col::VULCANIZED_EXTRUSION, "vulcanizedExtrusion"),
            non_vulcanized_expired: r.number(col::NON_VULCANIZED_EXPIRED, "nonVulcanizedExpired"),
            non_vulcanized_confection: r
                .number(col::NON_VULCANIZED_CONFECTION, "nonVulcanizedConfection"),
            vulcanized_confection: r.number(col::VULCANIZED_CONFECTION, "vulcanizedConfection"),
            total: r.number(col::TOTAL, "total"),
        })
    }
}
