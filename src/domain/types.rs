// ==========================================
// VMQ 生产看板 - 领域类型定义
// ==========================================
// 职责: 枚举类型 + 显示标签（捷克语标签即表格数据契约）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 材料状态 (Material Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialStatus {
    #[serde(rename = "Testovací")]
    Testing, // 测试中
    #[serde(rename = "Výroba")]
    Production, // 量产
    #[serde(rename = "Vývoj")]
    Development, // 开发
    #[serde(rename = "Archiv")]
    Archived, // 归档
    #[serde(rename = "Aktivní")]
    Active, // 活跃
    #[serde(rename = "-")]
    Unset, // 未设置
}

impl MaterialStatus {
    /// 表格中的捷克语标签
    pub fn label(&self) -> &'static str {
        match self {
            MaterialStatus::Testing => "Testovací",
            MaterialStatus::Production => "Výroba",
            MaterialStatus::Development => "Vývoj",
            MaterialStatus::Archived => "Archiv",
            MaterialStatus::Active => "Aktivní",
            MaterialStatus::Unset => "-",
        }
    }

    /// 按子串识别状态文本（大小写不敏感），无法识别时为 Unset
    pub fn from_label(s: &str) -> Self {
        let lower = s.trim().to_lowercase();
        if lower.contains("test") {
            MaterialStatus::Testing
        } else if lower.contains("výrob") {
            MaterialStatus::Production
        } else if lower.contains("vývoj") {
            MaterialStatus::Development
        } else if lower.contains("archiv") {
            MaterialStatus::Archived
        } else if lower.contains("aktiv") {
            MaterialStatus::Active
        } else {
            MaterialStatus::Unset
        }
    }
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 混炼胶类型 (Mixture Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MixtureType {
    #[serde(rename = "Extrůzní")]
    Extrusion, // 挤出
    #[serde(rename = "Lisovací")]
    Pressing, // 模压
}

impl MixtureType {
    pub fn label(&self) -> &'static str {
        match self {
            MixtureType::Extrusion => "Extrůzní",
            MixtureType::Pressing => "Lisovací",
        }
    }

    /// 含 "lisov" 视为模压，其余一律挤出
    pub fn from_label(s: &str) -> Self {
        if s.to_lowercase().contains("lisov") {
            MixtureType::Pressing
        } else {
            MixtureType::Extrusion
        }
    }
}

impl fmt::Display for MixtureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 废料类型 (Waste Type)
// ==========================================
// 硫化/未硫化 × 挤出/成型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteType {
    #[serde(rename = "Vulkanizovaný extruze")]
    VulcanizedExtrusion,
    #[serde(rename = "Nevulkanizovaný extruze")]
    NonVulcanizedExtrusion,
    #[serde(rename = "Vulkanizovaný konfekce")]
    VulcanizedConfection,
    #[serde(rename = "Nevulkanizovaný konfekce")]
    NonVulcanizedConfection,
}

impl WasteType {
    pub const ALL: [WasteType; 4] = [
        WasteType::VulcanizedExtrusion,
        WasteType::NonVulcanizedExtrusion,
        WasteType::VulcanizedConfection,
        WasteType::NonVulcanizedConfection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WasteType::VulcanizedExtrusion => "Vulkanizovaný extruze",
            WasteType::NonVulcanizedExtrusion => "Nevulkanizovaný extruze",
            WasteType::VulcanizedConfection => "Vulkanizovaný konfekce",
            WasteType::NonVulcanizedConfection => "Nevulkanizovaný konfekce",
        }
    }

    /// 识别废料类型文本
    ///
    /// "nevulkaniz" 必须先于 "vulkaniz" 判断（后者是前者的子串）。
    /// 无法归入四类之一时返回 None，调用方丢弃该行。
    pub fn from_label(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let non_vulcanized = lower.contains("nevulkaniz");
        let vulcanized = !non_vulcanized && lower.contains("vulkaniz");
        let extrusion = lower.contains("extruz");
        let confection = lower.contains("konfekc");

        match (vulcanized, non_vulcanized, extrusion, confection) {
            (true, _, true, _) => Some(WasteType::VulcanizedExtrusion),
            (_, true, true, _) => Some(WasteType::NonVulcanizedExtrusion),
            (true, _, _, true) => Some(WasteType::VulcanizedConfection),
            (_, true, _, true) => Some(WasteType::NonVulcanizedConfection),
            _ => None,
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// 有效期状态 (Expiration Status)
// ==========================================
// 三段互斥: expired < now <= warning < now + 窗口 <= ok
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationStatus {
    Ok,      // 正常
    Warning, // 即将过期
    Expired, // 已过期
}

impl fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpirationStatus::Ok => write!(f, "ok"),
            ExpirationStatus::Warning => write!(f, "warning"),
            ExpirationStatus::Expired => write!(f, "expired"),
        }
    }
}

// ==========================================
// 视图 (View Type)
// ==========================================
// 纯 UI 路由状态，与领域数据同存只是为了方便
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    Dashboard,
    Production,
    Development,
    Inventory,
    Waste,
    Requirements, // 占位视图
    Analytics,    // 占位视图
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewType::Dashboard => "dashboard",
            ViewType::Production => "production",
            ViewType::Development => "development",
            ViewType::Inventory => "inventory",
            ViewType::Waste => "waste",
            ViewType::Requirements => "requirements",
            ViewType::Analytics => "analytics",
        };
        write!(f, "{}", s)
    }
}

// ==========================================
// 用户角色 (User Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
}

// ==========================================
// 变更策略 (Mutation Policy)
// ==========================================
// Lenient: 未知 ID 的更新/删除静默忽略
// Strict: 未知 ID 报 NotFound，归档需填写原因与操作人
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationPolicy {
    #[default]
    Lenient,
    Strict,
}

impl MutationPolicy {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "strict" => MutationPolicy::Strict,
            _ => MutationPolicy::Lenient,
        }
    }
}

// ==========================================
// 月份命名语言 (Month Locale)
// ==========================================
// 月度汇总只按月份名分组，不含年份
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLocale {
    #[default]
    Cs,
    En,
}

const CZECH_MONTHS: [&str; 12] = [
    "leden", "únor", "březen", "duben", "květen", "červen", "červenec", "srpen", "září", "říjen",
    "listopad", "prosinec",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl MonthLocale {
    /// 月份名（month: 1-12）
    pub fn month_name(&self, month: u32) -> &'static str {
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            MonthLocale::Cs => CZECH_MONTHS[idx],
            MonthLocale::En => ENGLISH_MONTHS[idx],
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => MonthLocale::En,
            _ => MonthLocale::Cs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_status_from_label() {
        assert_eq!(MaterialStatus::from_label("Testovací"), MaterialStatus::Testing);
        assert_eq!(MaterialStatus::from_label("VÝROBA"), MaterialStatus::Production);
        assert_eq!(MaterialStatus::from_label("vývoj směsi"), MaterialStatus::Development);
        assert_eq!(MaterialStatus::from_label("Archiv"), MaterialStatus::Archived);
        assert_eq!(MaterialStatus::from_label("Aktivní"), MaterialStatus::Active);
        assert_eq!(MaterialStatus::from_label("???"), MaterialStatus::Unset);
        assert_eq!(MaterialStatus::from_label(""), MaterialStatus::Unset);
    }

    #[test]
    fn test_mixture_type_from_label() {
        assert_eq!(MixtureType::from_label("Lisovací"), MixtureType::Pressing);
        assert_eq!(MixtureType::from_label("lisovací směs"), MixtureType::Pressing);
        assert_eq!(MixtureType::from_label("Extrůzní"), MixtureType::Extrusion);
        assert_eq!(MixtureType::from_label(""), MixtureType::Extrusion);
    }

    #[test]
    fn test_waste_type_non_vulcanized_checked_first() {
        assert_eq!(
            WasteType::from_label("Nevulkanizovaný extruze"),
            Some(WasteType::NonVulcanizedExtrusion)
        );
        assert_eq!(
            WasteType::from_label("Vulkanizovaný extruze"),
            Some(WasteType::VulcanizedExtrusion)
        );
        assert_eq!(
            WasteType::from_label("nevulkanizovaný konfekce"),
            Some(WasteType::NonVulcanizedConfection)
        );
        assert_eq!(
            WasteType::from_label("Vulkanizovaný konfekce"),
            Some(WasteType::VulcanizedConfection)
        );
        assert_eq!(WasteType::from_label("Ostatní"), None);
    }

    #[test]
    fn test_waste_type_labels_round_trip() {
        for waste_type in WasteType::ALL {
            assert_eq!(WasteType::from_label(waste_type.label()), Some(waste_type));
        }
    }

    #[test]
    fn test_month_names() {
        assert_eq!(MonthLocale::Cs.month_name(1), "leden");
        assert_eq!(MonthLocale::En.month_name(1), "January");
        assert_eq!(MonthLocale::En.month_name(12), "December");
        assert_eq!(MonthLocale::from_code("EN"), MonthLocale::En);
        assert_eq!(MonthLocale::from_code("cs"), MonthLocale::Cs);
    }

    #[test]
    fn test_view_type_serde() {
        let json = serde_json::to_string(&ViewType::Inventory).unwrap();
        assert_eq!(json, "\"inventory\"");
        assert_eq!(ViewType::default(), ViewType::Dashboard);
    }
}
