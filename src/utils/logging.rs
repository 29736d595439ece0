/// 日志工具模块
///
/// 提供日志初始化和输出格式的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 默认 info 级别，可通过 `RUST_LOG` 覆盖。重复调用无副作用。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 当前本地时间，ISO 8601 格式
pub fn now_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// 输出带分隔线的标题
pub fn log_banner(title: &str) {
    info!("\n{}", "=".repeat(80));
    info!("{}", title);
    info!("{}", "=".repeat(80));
}

/// 记录程序启动信息
pub fn log_startup(user_id: &str) {
    log_banner("ILKA/ZYN vs RAG SYSTEM COMPARISON TEST");
    info!("时间: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("用户ID: {}", user_id);
}

/// 记录单道题开始
///
/// # 参数
/// - `index`: 题目序号（从1开始）
/// - `total`: 题目总数
pub fn log_question_start(index: usize, total: usize, id: &str, question: &str, kind: &str) {
    info!("\n{}", "=".repeat(80));
    info!("测试 {}/{}: {}", index, total, id);
    info!("问题: {}", question);
    info!("类型: {}", kind);
    info!("{}", "=".repeat(80));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 超出时截断并追加 "..."
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("国家教育政策", 2), "国家...");
    }

    #[test]
    fn test_now_timestamp_format() {
        let ts = now_timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
