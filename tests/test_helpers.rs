// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 用 rust_xlsxwriter 生成与生产文件同布局的测试工作簿
// ==========================================
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::Workbook;
use std::sync::Arc;
use vmq_dashboard::domain::clock::{FixedClock, SharedClock};

pub const LOSSES_FILE: &str = "VMQ_Ztráty_Extruze_2025.xls";
pub const STOCK_FILE: &str = "VMQ_Sklad_materiálu_2025.xls";

/// 测试统一的 "当前时间": 2025-06-15 12:00
pub fn test_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn test_clock() -> SharedClock {
    Arc::new(FixedClock(test_now()))
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

// ==========================================
// 工作簿构建
// ==========================================

/// 单元格内容
#[derive(Debug, Clone, Copy)]
pub enum Fx {
    T(&'static str),
    N(f64),
}

/// 一行: (行号, [(列号, 内容)])
pub type FixtureRow = (u32, Vec<(u16, Fx)>);

pub struct WorkbookFixture {
    workbook: Workbook,
}

impl WorkbookFixture {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
        }
    }

    pub fn sheet(mut self, name: &str, rows: Vec<FixtureRow>) -> Self {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(name).unwrap();
        for (row, cells) in rows {
            for (col, cell) in cells {
                match cell {
                    Fx::T(text) => {
                        worksheet.write_string(row, col, text).unwrap();
                    }
                    Fx::N(n) => {
                        worksheet.write_number(row, col, n).unwrap();
                    }
                }
            }
        }
        self
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.workbook.save_to_buffer().unwrap()
    }
}

// ==========================================
// 标准测试数据
// ==========================================

/// 损耗工作簿: M_Data / Extruze / Vývoje / Zápis odpadů
///
/// - 材料: 2 条有效（第 2 行 "------"、第 3 行空名称被跳过）
/// - 生产: 2 条有效（第 3 行表头回显被跳过）
/// - 开发: 1 条
/// - 废料: 2 条有效（重量为 0 与无法识别类型的行被跳过）
pub fn losses_workbook() -> Vec<u8> {
    use Fx::{N, T};

    WorkbookFixture::new()
        .sheet(
            "M_Data",
            vec![
                (0, vec![(0, T("Dodavatel")), (1, T("Název")), (7, T("Stav"))]),
                (1, vec![(0, T("Wacker")), (1, T("VMQ 70")), (7, T("Výroba"))]),
                (2, vec![(0, T("Wacker")), (1, T("------"))]),
                (3, vec![(0, T("Momentive")), (1, T(""))]),
                (4, vec![(0, T("Momentive")), (1, T("VMQ 50")), (7, T("Testovací"))]),
            ],
        )
        .sheet(
            "Extruze",
            vec![
                (0, vec![(0, T("P. č.")), (4, T("Směs"))]),
                (
                    2,
                    vec![
                        (0, T("1")),
                        (1, T("ART-100")),
                        (3, T("15.01.2025")),
                        (4, T("VMQ 70")),
                        (6, T("L100")),
                        (12, N(1200.0)),
                        (17, N(95.0)),
                        (18, N(100.0)),
                        (19, N(3.0)),
                        (22, N(2.0)),
                        (32, N(500.0)),
                        (34, T("06:00")),
                        (35, T("14:00")),
                    ],
                ),
                (3, vec![(0, T("P. č.")), (4, T("Směs"))]),
                (
                    4,
                    vec![
                        (0, T("2")),
                        (3, N(45689.0)),
                        (4, T("VMQ 50")),
                        (6, T("L200")),
                        (9, T("Novák")),
                        (17, N(180.0)),
                        (18, N(200.0)),
                        (19, N(4.0)),
                        (32, N(300.0)),
                    ],
                ),
            ],
        )
        .sheet(
            "Vývoje",
            vec![
                (0, vec![(0, T("P. č."))]),
                (
                    2,
                    vec![
                        (0, T("V1")),
                        (3, T("H-7")),
                        (4, T("10.03.2025")),
                        (5, T("VMQ 70")),
                        (14, N(5.0)),
                        (16, N(40.0)),
                        (17, N(50.0)),
                        (22, T("08:00")),
                        (23, T("12:30")),
                    ],
                ),
            ],
        )
        .sheet(
            "Zápis odpadů",
            vec![
                (0, vec![(0, T("P. č.")), (3, T("Druh odpadu"))]),
                (
                    1,
                    vec![
                        (0, N(1.0)),
                        (1, T("31.01.2025")),
                        (2, T("leden")),
                        (3, T("Nevulkanizovaný extruze")),
                        (4, N(12.5)),
                    ],
                ),
                (2, vec![(0, N(2.0)), (3, T("Vulkanizovaný konfekce")), (4, N(0.0))]),
                (3, vec![(0, N(3.0)), (3, T("Neznámý")), (4, N(5.0))]),
                (4, vec![(0, N(4.0)), (3, T("Vulkanizovaný extruze")), (4, N(7.0))]),
            ],
        )
        .into_bytes()
}

/// 库存工作簿: VMQ sklad směsí
///
/// - 第 2 行: 模压胶，部分核销
/// - 第 3 行: 数量为 0，被跳过
/// - 第 4 行: 核销量超过入库量
pub fn stock_workbook() -> Vec<u8> {
    use Fx::{N, T};

    WorkbookFixture::new()
        .sheet(
            "VMQ sklad směsí",
            vec![
                (0, vec![(0, T("P. č.")), (2, T("Směs"))]),
                (
                    2,
                    vec![
                        (0, T("1")),
                        (1, T("Lisovací")),
                        (2, T("VMQ 70")),
                        (3, T("W-70")),
                        (4, T("L100")),
                        (6, T("01.01.2025")),
                        (7, T("01.07.2025")),
                        (8, T("02.01.2025")),
                        (9, N(250.0)),
                        (12, N(50.0)),
                    ],
                ),
                (3, vec![(0, T("2")), (2, T("VMQ 60")), (9, N(0.0))]),
                (
                    4,
                    vec![
                        (0, T("3")),
                        (1, T("Extrůzní")),
                        (2, T("VMQ 50")),
                        (6, T("15.02.2025")),
                        (7, T("15.08.2025")),
                        (8, T("16.02.2025")),
                        (9, N(100.0)),
                        (12, N(120.0)),
                    ],
                ),
            ],
        )
        .into_bytes()
}
