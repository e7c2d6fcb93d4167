// ==========================================
// VMQ 生产看板 - 数据清洗器实现
// ==========================================
// 职责: 文本 TRIM / 占位符置空 / 数值与日期的宽松解析
// 日期: Excel 序列号以 1899-12-30 为零点（含 1900 闰年偏差修正）
// ==========================================

use crate::importer::grid::CellValue;
use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

// Excel 可表示的最大日期 9999-12-31
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

const DATE_TIME_FORMATS: &[&str] = &[
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d", "%d/%m/%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, cell: &CellValue) -> String {
        match cell {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if is_placeholder(trimmed) {
                    String::new()
                } else {
                    trimmed.to_string()
                }
            }
            CellValue::Number(n) => format_number(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d").to_string(),
        }
    }

    fn parse_number(&self, cell: &CellValue) -> Option<f64> {
        match cell {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(s) => parse_number_text(s),
            _ => None,
        }
    }

    fn parse_date(&self, cell: &CellValue) -> Option<NaiveDateTime> {
        match cell {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Number(n) => excel_serial_to_datetime(*n),
            CellValue::Text(s) => parse_date_text(s),
            _ => None,
        }
    }

    fn parse_time(&self, cell: &CellValue, anchor: NaiveDate) -> Option<NaiveDateTime> {
        match cell {
            CellValue::Number(n) if (0.0..1.0).contains(n) => {
                let seconds = (n * 86_400.0).round() as i64;
                anchor
                    .and_time(NaiveTime::MIN)
                    .checked_add_signed(Duration::seconds(seconds))
            }
            CellValue::Number(n) => excel_serial_to_datetime(*n),
            // 纯时刻单元格在 Excel 中落在序列号零点附近
            CellValue::DateTime(dt) if is_time_only(dt) => Some(anchor.and_time(dt.time())),
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                TIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
                    .map(|time| anchor.and_time(time))
                    .or_else(|| parse_date_text(trimmed))
            }
            _ => None,
        }
    }
}

impl DataCleaner {
    /// 清洗后为空（空单元格、空白、占位符）
    pub fn is_blank(&self, cell: &CellValue) -> bool {
        self.clean_text(cell).is_empty()
    }
}

/// 全部由 '-' 组成（含空串）
pub(crate) fn is_placeholder(value: &str) -> bool {
    value.chars().all(|c| c == '-')
}

/// 整数值不带小数部分
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn parse_number_text(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if is_placeholder(trimmed) {
        return None;
    }
    let normalized: String = trimmed
        .trim_end_matches('%')
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_date_text(value: &str) -> Option<NaiveDateTime> {
    // "1. 3. 2025" 这类带空格的写法
    let trimmed = value.trim().replace(". ", ".");
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(&trimmed) {
        return Some(dt.naive_local());
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&trimmed, fmt).ok())
    {
        return Some(dt);
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&trimmed, fmt).ok())
    {
        return Some(date.and_time(NaiveTime::MIN));
    }

    // 以文本保存的序列号
    parse_number_text(&trimmed).and_then(excel_serial_to_datetime)
}

fn is_time_only(dt: &NaiveDateTime) -> bool {
    dt.date().year() < 1900
}

fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN)
}

/// Excel 序列号 → 日期时间（小数部分为当日时刻）
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let millis = (serial * 86_400_000.0).round() as i64;
    excel_epoch()
        .and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::milliseconds(millis))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_clean_text() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_text(&"  VMQ 70  ".into()), "VMQ 70");
        assert_eq!(cleaner.clean_text(&"---".into()), "");
        assert_eq!(cleaner.clean_text(&"-".into()), "");
        assert_eq!(cleaner.clean_text(&CellValue::Number(42.0)), "42");
        assert_eq!(cleaner.clean_text(&CellValue::Number(1.5)), "1.5");
        assert_eq!(cleaner.clean_text(&CellValue::Empty), "");
        let dt = date(2025, 3, 4).and_hms_opt(8, 0, 0).unwrap();
        assert_eq!(cleaner.clean_text(&CellValue::DateTime(dt)), "2025-03-04");
    }

    #[test]
    fn test_parse_number() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_number(&CellValue::Number(3.5)), Some(3.5));
        assert_eq!(cleaner.parse_number(&"12,5".into()), Some(12.5));
        assert_eq!(cleaner.parse_number(&" 1 200 ".into()), Some(1200.0));
        assert_eq!(cleaner.parse_number(&"95%".into()), Some(95.0));
        assert_eq!(cleaner.parse_number(&CellValue::Bool(true)), Some(1.0));
        assert_eq!(cleaner.parse_number(&"abc".into()), None);
        assert_eq!(cleaner.parse_number(&"--".into()), None);
        assert_eq!(cleaner.parse_number(&CellValue::Empty), None);
    }

    #[test]
    fn test_excel_serial_conversion() {
        // 45000 = 2023-03-15
        let dt = excel_serial_to_datetime(45000.0).unwrap();
        assert_eq!(dt.date(), date(2023, 3, 15));

        let dt = excel_serial_to_datetime(45000.5).unwrap();
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());

        assert!(excel_serial_to_datetime(-1.0).is_none());
        assert!(excel_serial_to_datetime(f64::NAN).is_none());
    }

    #[test]
    fn test_parse_date_text_formats() {
        let cleaner = DataCleaner;
        let expected = date(2025, 3, 4);
        for raw in ["04.03.2025", "4.3.2025", "4. 3. 2025", "2025-03-04"] {
            let parsed = cleaner.parse_date(&raw.into()).unwrap();
            assert_eq!(parsed.date(), expected, "格式 {}", raw);
        }

        let parsed = cleaner.parse_date(&"04.03.2025 14:30".into()).unwrap();
        assert_eq!(parsed, expected.and_hms_opt(14, 30, 0).unwrap());

        let parsed = cleaner.parse_date(&"2025-03-04T06:15:00".into()).unwrap();
        assert_eq!(parsed, expected.and_hms_opt(6, 15, 0).unwrap());

        assert!(cleaner.parse_date(&"není datum".into()).is_none());
        assert!(cleaner.parse_date(&CellValue::Empty).is_none());
    }

    #[test]
    fn test_parse_time_anchored_to_record_date() {
        let cleaner = DataCleaner;
        let anchor = date(2025, 3, 4);

        let parsed = cleaner.parse_time(&CellValue::Number(0.25), anchor).unwrap();
        assert_eq!(parsed, anchor.and_hms_opt(6, 0, 0).unwrap());

        let parsed = cleaner.parse_time(&"14:45".into(), anchor).unwrap();
        assert_eq!(parsed, anchor.and_hms_opt(14, 45, 0).unwrap());

        let time_only = date(1899, 12, 30).and_hms_opt(22, 0, 0).unwrap();
        let parsed = cleaner
            .parse_time(&CellValue::DateTime(time_only), anchor)
            .unwrap();
        assert_eq!(parsed, anchor.and_hms_opt(22, 0, 0).unwrap());

        let full = date(2025, 3, 5).and_hms_opt(2, 0, 0).unwrap();
        assert_eq!(cleaner.parse_time(&CellValue::DateTime(full), anchor), Some(full));

        assert!(cleaner.parse_time(&"ráno".into(), anchor).is_none());
    }
}
