// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDateTime;
use vmq_dashboard::domain::types::{MaterialStatus, MixtureType, WasteType};
use vmq_dashboard::domain::{InventoryRecord, Material, ProductionRecord, WasteRecord};

pub fn material(id: &str, name: &str) -> Material {
    Material {
        id: id.to_string(),
        name: name.to_string(),
        supplier: "Wacker".to_string(),
        status: MaterialStatus::Production,
    }
}

// ==========================================
// ProductionRecord 构建器
// ==========================================

pub struct ProductionBuilder {
    record: ProductionRecord,
}

impl ProductionBuilder {
    pub fn new(id: &str, material_name: &str, date: NaiveDateTime) -> Self {
        Self {
            record: ProductionRecord::blank(id, material_name, date),
        }
    }

    pub fn product_weights(mut self, real: f64, calc: f64) -> Self {
        self.record.product_weight_real = real;
        self.record.product_weight_calc = calc;
        self
    }

    pub fn waste(mut self, vulcanized: f64, non_vulcanized: f64) -> Self {
        self.record.waste_vulcanized = vulcanized;
        self.record.waste_non_vulcanized = non_vulcanized;
        self.record.total_waste = vulcanized + non_vulcanized;
        self
    }

    pub fn total_production_weight(mut self, weight: f64) -> Self {
        self.record.total_production_weight = weight;
        self
    }

    pub fn build(self) -> ProductionRecord {
        self.record
    }
}

// ==========================================
// InventoryRecord 构建器
// ==========================================

pub struct InventoryBuilder {
    record: InventoryRecord,
}

impl InventoryBuilder {
    pub fn new(id: &str, material_name: &str, quantity: f64) -> Self {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Self {
            record: InventoryRecord::new(id, material_name, quantity, now, now),
        }
    }

    pub fn expires(mut self, expiration: NaiveDateTime) -> Self {
        self.record.expiration_date = expiration;
        self
    }

    pub fn pressing(mut self) -> Self {
        self.record.mixture_type = MixtureType::Pressing;
        self
    }

    pub fn written_off(mut self, amount: f64) -> Self {
        self.record.written_off = amount;
        self
    }

    pub fn build(self) -> InventoryRecord {
        self.record
    }
}

pub fn waste(id: &str, waste_type: WasteType, weight: f64, date: NaiveDateTime) -> WasteRecord {
    WasteRecord {
        id: id.to_string(),
        record_number: 1,
        export_date: date,
        month: String::new(),
        waste_type,
        weight,
        recorded_by: "Admin".to_string(),
        notes: String::new(),
    }
}
