// ==========================================
// VMQ 生产看板 - 日志初始化
// ==========================================
// 使用 tracing + tracing-subscriber
// RUST_LOG 覆盖默认过滤器；calamine 的解析噪声默认压到 warn
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "info,calamine=warn";

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// 终端可读格式
    #[default]
    Pretty,
    /// JSON 行（带当前 span 字段，如导入批次 batch_id）
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info，calamine=warn）
///   例如: RUST_LOG=vmq_dashboard::importer=debug 可看到单元格强制转换明细
///
/// # 示例
/// ```no_run
/// use vmq_dashboard::logging::{self, LogFormat};
/// logging::init(LogFormat::Pretty);
/// ```
pub fn init(format: LogFormat) {
    match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(env_filter())
            .with_target(true)
            .with_line_number(true)
            .init(),
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(env_filter())
            .with_current_span(true)
            .init(),
    }
}

/// 测试环境日志（debug 级别，重复初始化时静默忽略）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
