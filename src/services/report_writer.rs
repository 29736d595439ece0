//! 报告写入服务
//!
//! 运行结束时整体写入一次，中途中断则全部丢失

use std::path::Path;

use tracing::info;

use crate::error::{AppError, AppResult, FileError};
use crate::models::report::{MultiMethodSummary, RagSummary, RunReport};
use crate::utils::logging::truncate_text;

/// 将报告写入 JSON 文件（带缩进）
pub async fn write_report(report: &RunReport, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| FileError::ReportJsonFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::file_write_failed(parent.display().to_string(), e))?;
    }

    tokio::fs::write(path, json)
        .await
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

    info!("\n✓ 完整结果已保存至: {}", path.display());
    Ok(())
}

/// 读取已写入的报告
pub async fn read_report(path: &Path) -> AppResult<RunReport> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let report = serde_json::from_str(&content).map_err(|e| FileError::ReportJsonFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(report)
}

/// 输出精简的对比摘要
pub fn print_summary(report: &RunReport) {
    info!("\n摘要:");

    for result in &report.results {
        info!("\n{}", truncate_text(&result.question, 60));

        match &result.rag {
            RagSummary::Error { error } => info!("  RAG: 错误 - {}", error),
            RagSummary::Metrics {
                answer_length,
                citations_count,
                ..
            } => info!("  RAG: {} 字符, {} 条引用", answer_length, citations_count),
        }

        match &result.multi_method {
            MultiMethodSummary::Error { error } => info!("  ILKA: 错误 - {}", error),
            MultiMethodSummary::Metrics {
                methods_count,
                methods,
            } => {
                info!("  ILKA: 测试了 {} 个方法", methods_count);
                for method in methods {
                    info!(
                        "    - {}: {} 字符, {} 条引用",
                        method.method.as_deref().unwrap_or("?"),
                        method.answer_length,
                        method.citations_count
                    );
                }
            }
        }
    }
}
