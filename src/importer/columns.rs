// ==========================================
// VMQ 生产看板 - 工作表位置契约
// ==========================================
// 职责: 工作表名 / 首个数据行 / 列号（从 A 列 = 0 起）
// 说明: 导入与导出共用同一份契约，导出文件可以原样重新导入
// ==========================================

/// 一张工作表的位置契约
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub sheet_name: &'static str,
    pub first_data_row: usize,
}

// 表头回显行（首列文本等于该值时跳过）
pub const RECORD_NUMBER_HEADER: &str = "P. č.";
pub const MONTH_HEADER: &str = "Měsíc";

pub mod material {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "M_Data",
        first_data_row: 1,
    };
    pub const SUPPLIER: usize = 0;
    pub const NAME: usize = 1;
    pub const STATUS: usize = 7;
}

pub mod production {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "Extruze",
        first_data_row: 2,
    };
    pub const RECORD_NUMBER: usize = 0;
    pub const ARTICLE_NUMBER: usize = 1;
    pub const DIMENSIONS: usize = 2;
    pub const DATE: usize = 3;
    pub const MATERIAL_NAME: usize = 4;
    pub const MATERIAL_ALT: usize = 5; // 备用配方名（主列为空时使用）
    pub const LOT_NUMBER: usize = 6;
    pub const CUSTOMER: usize = 7;
    pub const MONTH: usize = 8;
    pub const SUPERVISOR: usize = 9;
    pub const OPERATOR: usize = 10;
    pub const PRODUCTION_QUANTITY: usize = 12;
    pub const LINE_SPEED_REAL: usize = 13;
    pub const LINE_SPEED_CALC: usize = 14;
    pub const LINE_SPEED_REAL_PER_HOUR: usize = 15;
    pub const LINE_SPEED_CALC_PER_HOUR: usize = 16;
    pub const PRODUCT_WEIGHT_REAL: usize = 17;
    pub const PRODUCT_WEIGHT_CALC: usize = 18;
    pub const WASTE_VULCANIZED: usize = 19;
    pub const WASTE_VULCANIZED_CALC: usize = 20;
    pub const WASTE_VULCANIZED_PERCENTAGE: usize = 21;
    pub const WASTE_NON_VULCANIZED: usize = 22;
    pub const WASTE_NON_VULCANIZED_CALC: usize = 23;
    pub const WASTE_NON_VULCANIZED_PERCENTAGE: usize = 24;
    pub const TOTAL_WASTE_CALC: usize = 26;
    pub const TOTAL_WASTE_PERCENTAGE: usize = 27;
    pub const TOTAL_PRODUCTION_WEIGHT: usize = 32;
    pub const TOTAL_PRODUCTION_WEIGHT_REAL: usize = 33;
    pub const START_TIME: usize = 34;
    pub const END_TIME: usize = 35;
    pub const ACTUAL_TIME_DISPLAY: usize = 36;
    pub const ACTUAL_TIME: usize = 37;
    pub const CALCULATED_TIME: usize = 38;
    pub const PERFORMANCE_EVAL_KG: usize = 41;
    pub const PERFORMANCE_EVAL_TIME: usize = 42;
    pub const NOTES: usize = 44;
}

pub mod development {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "Vývoje",
        first_data_row: 2,
    };
    pub const RECORD_NUMBER: usize = 0;
    pub const ARTICLE_NUMBER: usize = 1;
    pub const DIMENSIONS: usize = 2;
    pub const HUBICE_NUMBER: usize = 3;
    pub const DATE: usize = 4;
    pub const MATERIAL_NAME: usize = 5;
    pub const MATERIAL_ALT: usize = 6;
    pub const LOT_NUMBER: usize = 7;
    pub const CUSTOMER: usize = 8;
    pub const SUPERVISOR: usize = 10;
    pub const OPERATOR: usize = 11;
    pub const PRODUCTION_QUANTITY: usize = 13;
    pub const LINE_SPEED_REAL: usize = 14;
    pub const LINE_SPEED_CALC: usize = 15;
    pub const PRODUCT_WEIGHT_REAL: usize = 16;
    pub const PRODUCT_WEIGHT_CALC: usize = 17;
    pub const WASTE_VULCANIZED: usize = 18;
    pub const WASTE_NON_VULCANIZED: usize = 19;
    pub const TOTAL_DEVELOPMENT_WEIGHT: usize = 20;
    pub const START_TIME: usize = 22;
    pub const END_TIME: usize = 23;
    pub const REAL_TIME: usize = 24;
    pub const TOTAL_TIME: usize = 25; // Σ 工时（小时）
    pub const CALC_TIME: usize = 26;
    pub const NOTES: usize = 27;
}

pub mod inventory {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "VMQ sklad směsí",
        first_data_row: 2,
    };
    pub const RECORD_NUMBER: usize = 0;
    pub const MIXTURE_TYPE: usize = 1;
    pub const MATERIAL_NAME: usize = 2;
    pub const SUPPLIER_CODE: usize = 3;
    pub const LOT_NUMBER: usize = 4;
    pub const STORAGE_MONTH: usize = 5;
    pub const PRODUCTION_DATE: usize = 6;
    pub const EXPIRATION_DATE: usize = 7;
    pub const STORAGE_DATE: usize = 8;
    pub const QUANTITY: usize = 9;
    pub const STORED_BY: usize = 10;
    pub const EXTENSION_DATE: usize = 11;
    pub const WRITTEN_OFF: usize = 12;
    pub const WRITTEN_OFF_BY: usize = 13;
    pub const WRITE_OFF_REASON: usize = 14;
    pub const NOTES: usize = 15;
}

pub mod waste {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "Zápis odpadů",
        first_data_row: 1,
    };
    pub const RECORD_NUMBER: usize = 0;
    pub const EXPORT_DATE: usize = 1;
    pub const MONTH: usize = 2;
    pub const WASTE_TYPE: usize = 3;
    pub const WEIGHT: usize = 4;
    pub const RECORDED_BY: usize = 5;
    pub const NOTES: usize = 6;
}

pub mod requirement {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "Zápis požadavků VMQ linky",
        first_data_row: 1,
    };
    pub const RECORD_NUMBER: usize = 0;
    pub const ENTRY_DATE: usize = 1;
    pub const YEAR: usize = 2;
    pub const REQUIREMENT: usize = 3;
    pub const ENTERED_BY: usize = 4;
    pub const COMPLETION_PERCENT: usize = 5;
    pub const NOTES: usize = 6;
}

pub mod production_analysis {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "Analýza ztrát výroba",
        first_data_row: 1,
    };
    pub const MONTH: usize = 0;
    pub const TOTAL_PRODUCTS_WEIGHT_CALC: usize = 1;
    pub const TOTAL_PRODUCTS_WEIGHT_REAL: usize = 2;
    pub const PRODUCT_WEIGHT_DIFFERENCE: usize = 3;
    pub const TOTAL_WASTE_WEIGHT_CALC: usize = 4;
    pub const TOTAL_WASTE_WEIGHT_REAL: usize = 5;
    pub const WASTE_WEIGHT_DIFFERENCE: usize = 6;
    pub const REAL_TIME: usize = 7;
    pub const CALCULATED_TIME: usize = 8;
    pub const WEIGHT_EFFICIENCY_PERCENT: usize = 9;
    pub const TIME_EFFICIENCY_PERCENT: usize = 10;
}

pub mod inventory_analysis {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "Analýza VMQ skladu směsí",
        first_data_row: 1,
    };
    pub const MONTH: usize = 0;
    pub const EXTRUSION_MIXTURES_STORED: usize = 1;
    pub const PRESSING_MIXTURES_STORED: usize = 2;
    pub const WRITTEN_OFF: usize = 3;
}

pub mod waste_analysis {
    use super::SheetLayout;

    pub const LAYOUT: SheetLayout = SheetLayout {
        sheet_name: "Analýza odpadů",
        first_data_row: 1,
    };
    pub const MONTH: usize = 0;
    pub const NON_VULCANIZED_EXTRUSION: usize = 1;
    pub const VULCANIZED_EXTRUSION: usize = 2;
    pub const NON_VULCANIZED_EXPIRED: usize = 3;
    pub const NON_VULCANIZED_CONFECTION: usize = 4;
    pub const VULCANIZED_CONFECTION: usize = 5;
    pub const TOTAL: usize = 6;
}
