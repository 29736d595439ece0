/// RAG 系统客户端
use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::clients::to_service_response;
use crate::config::Config;
use crate::models::response::ServiceResponse;

#[derive(Clone)]
pub struct RagClient {
    http: reqwest::Client,
    base_url: String,
    chat_timeout: Duration,
}

impl RagClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.rag_url().to_string(),
            chat_timeout: Duration::from_secs(config.chat_timeout_secs),
        }
    }

    /// 针对已上传文件提问
    ///
    /// # 参数
    /// - `message`: 问题内容
    /// - `file_id`: RAG 系统中的文件ID
    /// - `method_id`: 回答策略
    pub async fn chat(&self, message: &str, file_id: &str, method_id: &str) -> ServiceResponse {
        let endpoint = format!("{}/api/chat", self.base_url);
        let payload = json!({
            "message": message,
            "fileId": file_id,
            "methodId": method_id,
        });

        debug!("RAG 查询 Payload: {}", payload);

        let result = self
            .http
            .post(&endpoint)
            .timeout(self.chat_timeout)
            .json(&payload)
            .send()
            .await;

        to_service_response(result).await
    }
}
