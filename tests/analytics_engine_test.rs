// ==========================================
// AnalyticsEngine 集成测试
// ==========================================

mod helpers;
mod test_helpers;

use chrono::{Duration, NaiveDate};
use helpers::test_data_builder::{waste, InventoryBuilder, ProductionBuilder};
use test_helpers::*;
use vmq_dashboard::domain::types::{ExpirationStatus, MonthLocale, WasteType};
use vmq_dashboard::engine::{EFFICIENCY_FALLBACK, WASTE_FALLBACK};
use vmq_dashboard::AnalyticsEngine;

fn engine() -> AnalyticsEngine {
    AnalyticsEngine::new(MonthLocale::En, 7, 10)
}

#[test]
fn test_monthly_production_merges_years() {
    let production = vec![
        ProductionBuilder::new("prod_1", "VMQ 70", datetime(2024, 1, 10, 0, 0))
            .total_production_weight(100.0)
            .build(),
        ProductionBuilder::new("prod_2", "VMQ 70", datetime(2025, 2, 3, 0, 0))
            .total_production_weight(40.0)
            .build(),
        ProductionBuilder::new("prod_3", "VMQ 50", datetime(2025, 1, 20, 0, 0))
            .total_production_weight(60.0)
            .build(),
    ];

    let monthly = engine().monthly_production(&production);
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "January");
    assert_eq!(monthly[0].total_production_weight, 160.0);
    assert_eq!(monthly[1].month, "February");
}

#[test]
fn test_efficiency_and_waste_fallbacks() {
    let engine = engine();
    assert_eq!(engine.production_efficiency(&[]), EFFICIENCY_FALLBACK);
    assert_eq!(engine.waste_percentage(&[]), WASTE_FALLBACK);

    // 核算重量为 0 时同样兜底
    let zero_calc = vec![ProductionBuilder::new("prod_1", "VMQ 70", test_now()).build()];
    assert_eq!(engine.production_efficiency(&zero_calc), EFFICIENCY_FALLBACK);
    assert_eq!(engine.waste_percentage(&zero_calc), WASTE_FALLBACK);
}

#[test]
fn test_efficiency_and_waste_percentage() {
    let production = vec![
        ProductionBuilder::new("prod_1", "VMQ 70", test_now())
            .product_weights(90.0, 100.0)
            .waste(6.0, 4.0)
            .total_production_weight(190.0)
            .build(),
        ProductionBuilder::new("prod_2", "VMQ 50", test_now())
            .product_weights(100.0, 100.0)
            .build(),
    ];

    let engine = engine();
    assert_eq!(engine.production_efficiency(&production), 95.0);
    assert_eq!(engine.waste_percentage(&production), 5.0);
}

#[test]
fn test_top_materials_sorted_and_limited() {
    let production = vec![
        ProductionBuilder::new("prod_1", "VMQ 50", test_now())
            .total_production_weight(10.0)
            .build(),
        ProductionBuilder::new("prod_2", "VMQ 70", test_now())
            .total_production_weight(30.0)
            .build(),
        ProductionBuilder::new("prod_3", "VMQ 50", test_now())
            .total_production_weight(25.0)
            .build(),
        ProductionBuilder::new("prod_4", "VMQ 40", test_now())
            .total_production_weight(1.0)
            .build(),
    ];

    let top = engine().top_materials(&production, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].material_name, "VMQ 50");
    assert_eq!(top[0].total_production_weight, 35.0);
    assert_eq!(top[1].material_name, "VMQ 70");
}

#[test]
fn test_expiration_window_boundaries() {
    let engine = engine();
    let now = test_now();

    assert_eq!(
        engine.expiration_status(now - Duration::seconds(1), now),
        ExpirationStatus::Expired
    );
    assert_eq!(engine.expiration_status(now, now), ExpirationStatus::Warning);
    assert_eq!(
        engine.expiration_status(now + Duration::days(7) - Duration::seconds(1), now),
        ExpirationStatus::Warning
    );
    assert_eq!(
        engine.expiration_status(now + Duration::days(7), now),
        ExpirationStatus::Ok
    );
}

#[test]
fn test_oversized_warning_window_does_not_panic() {
    let engine = AnalyticsEngine::new(MonthLocale::En, i64::MAX, 10);
    let now = test_now();

    assert_eq!(
        engine.expiration_status(now + Duration::days(3650), now),
        ExpirationStatus::Warning
    );
    assert_eq!(
        engine.expiration_status(now + Duration::days(40_000), now),
        ExpirationStatus::Ok
    );

    let last_day = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(
        engine.expiration_status(last_day, last_day - Duration::days(1)),
        ExpirationStatus::Warning
    );
}

#[test]
fn test_kpis_ignore_archived_batches_for_expiration() {
    let now = test_now();
    let mut archived = InventoryBuilder::new("inv_3", "VMQ 40", 50.0)
        .expires(now - Duration::days(3))
        .build();
    archived.is_archived = true;

    let inventory = vec![
        InventoryBuilder::new("inv_1", "VMQ 70", 100.0)
            .expires(now + Duration::days(30))
            .build(),
        InventoryBuilder::new("inv_2", "VMQ 50", 50.0)
            .expires(now + Duration::days(2))
            .written_off(70.0)
            .build(),
        archived,
    ];
    let production = vec![ProductionBuilder::new("prod_1", "VMQ 70", now)
        .total_production_weight(100.0)
        .build()];

    let kpis = engine().dashboard_kpis(&production, &inventory, now);
    assert_eq!(kpis.active_batches, 2);
    assert_eq!(kpis.expiration.ok, 1);
    assert_eq!(kpis.expiration.warning, 1);
    assert_eq!(kpis.expiration.expired, 0);
    // 周转包含已归档批次的入库量
    assert_eq!(kpis.inventory_turnover, 0.5);
    assert_eq!(kpis.total_production_weight, 100.0);
}

#[test]
fn test_waste_by_type_lists_all_types() {
    let records = vec![
        waste("waste_1", WasteType::VulcanizedExtrusion, 7.0, test_now()),
        waste("waste_2", WasteType::VulcanizedExtrusion, 3.0, test_now()),
        waste("waste_3", WasteType::NonVulcanizedConfection, 1.5, test_now()),
    ];

    let totals = engine().waste_by_type(&records);
    assert_eq!(totals.len(), 4);
    assert_eq!(totals[0].waste_type, WasteType::VulcanizedExtrusion);
    assert_eq!(totals[0].weight, 10.0);
    assert_eq!(totals[1].weight, 0.0);
    assert_eq!(totals[3].weight, 1.5);
}
