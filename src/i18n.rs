// ==========================================
// VMQ 生产看板 - 用户提示本地化
// ==========================================
// 使用 rust-i18n（locales/cs.yml、locales/en.yml）
// 宏 rust_i18n::i18n! 已在 lib.rs 中初始化，回退语言为捷克语
// ==========================================

/// 支持的界面语言
pub const SUPPORTED_LOCALES: &[&str] = &["cs", "en"];

/// 回退语言
pub const FALLBACK_LOCALE: &str = "cs";

/// 配置值 → 支持的语言代码
///
/// "cs-CZ"、"EN_us" 这类区域写法取主语言；无法识别时回退捷克语
pub fn normalize_locale(code: &str) -> &'static str {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|l| *l == primary)
        .unwrap_or(FALLBACK_LOCALE)
}

pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置界面语言（先规范化）
pub fn set_locale(code: &str) {
    rust_i18n::set_locale(normalize_locale(code));
}

/// 翻译无参数消息
///
/// # 示例
/// ```no_run
/// use vmq_dashboard::i18n::t;
/// let msg = t("login.failed");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译带 %{name} 占位符的消息
///
/// # 示例
/// ```no_run
/// use vmq_dashboard::i18n::t_with_args;
/// let msg = t_with_args("import.upload_failed", &[("file", "data.xlsx"), ("reason", "timeout")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(rust_i18n::t!(key).to_string(), |message, (name, value)| {
            message.replace(&format!("%{{{}}}", name), value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // locale 为全局状态，相关测试串行执行
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("cs"), "cs");
        assert_eq!(normalize_locale("cs-CZ"), "cs");
        assert_eq!(normalize_locale(" EN_us "), "en");
        assert_eq!(normalize_locale("de"), "cs");
        assert_eq!(normalize_locale(""), "cs");
    }

    #[test]
    fn test_set_locale_switches_messages() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("cs");
        assert_eq!(current_locale(), "cs");
        assert_eq!(t("login.failed"), "Neplatné přihlašovací údaje");

        set_locale("en-GB");
        assert_eq!(current_locale(), "en");
        assert_eq!(t("login.failed"), "Invalid credentials");

        set_locale("cs");
    }

    #[test]
    fn test_placeholders_are_filled() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("cs");
        let msg = t_with_args("import.failed", &[("reason", "soubor nenalezen")]);
        assert_eq!(msg, "Nepodařilo se načíst data: soubor nenalezen");

        set_locale("en");
        let msg = t_with_args(
            "import.upload_failed",
            &[("file", "data.ods"), ("reason", "timeout")],
        );
        assert!(msg.contains("data.ods"));
        assert!(msg.contains("timeout"));

        set_locale("cs");
    }
}
