// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 输出到 stderr,成功运行时终端只显示状态行
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 未设置 RUST_LOG 时的默认过滤器
pub const DEFAULT_FILTER: &str = "warn";

/// 选择过滤器指令: RUST_LOG 非空时优先,否则取默认值
pub fn filter_directive(env_value: Option<String>) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: warn）
///   例如: RUST_LOG=info 或 RUST_LOG=gas_article_converter=trace
///
/// # 示例
/// ```no_run
/// use gas_article_converter::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::new(filter_directive(std::env::var("RUST_LOG").ok()));

    // 配置日志格式
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
