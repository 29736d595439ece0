//! 上传服务
//!
//! 读取本地文本文件并上传到 ilka，失败即终止本次运行

use std::path::Path;

use tracing::{error, info};

use crate::clients::IlkaClient;
use crate::error::{AppError, AppResult};

/// 上传文档
///
/// # 参数
/// - `client`: ilka 客户端
/// - `file_path`: 本地文件路径（按 UTF-8 文本读取）
/// - `file_name`: 上传时使用的文件名
///
/// # 返回
/// 返回文档ID；任何失败都原样返回给编排层，不重试
pub async fn upload_document(
    client: &IlkaClient,
    file_path: &Path,
    file_name: &str,
) -> AppResult<String> {
    let result = read_and_upload(client, file_path, file_name).await;

    match &result {
        Ok(document_id) => {
            info!("✓ 上传成功! 文档ID: {}", document_id);
            info!("预计处理时间: ~15-20 秒");
        }
        Err(e) => error!("✗ 上传失败: {}", e),
    }

    result
}

async fn read_and_upload(
    client: &IlkaClient,
    file_path: &Path,
    file_name: &str,
) -> AppResult<String> {
    let content = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|e| AppError::file_read_failed(file_path.display().to_string(), e))?;
    client.upload(file_name, &content).await
}
