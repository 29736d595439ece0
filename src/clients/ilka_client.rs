/// 多方法问答系统 (ilka) 客户端
///
/// 封装上传、状态查询和多方法查询三个接口
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::clients::to_service_response;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::response::{ServiceResponse, UploadResponse};

#[derive(Clone)]
pub struct IlkaClient {
    http: reqwest::Client,
    base_url: String,
    user_id: String,
    upload_timeout: Duration,
    status_timeout: Duration,
    query_timeout: Duration,
}

impl IlkaClient {
    /// 创建新的 ilka 客户端
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.ilka_url().to_string(),
            user_id: config.user_id.clone(),
            upload_timeout: Duration::from_secs(config.upload_timeout_secs),
            status_timeout: Duration::from_secs(config.status_timeout_secs),
            query_timeout: Duration::from_secs(config.query_timeout_secs),
        }
    }

    /// 上传文档
    ///
    /// # 参数
    /// - `file_name`: 上传时使用的文件名
    /// - `content`: 文件全文
    ///
    /// # 返回
    /// 仅在 HTTP 201 且响应中带有 `document_id` 时返回文档ID
    pub async fn upload(&self, file_name: &str, content: &str) -> AppResult<String> {
        let endpoint = format!("{}/upload", self.base_url);
        let payload = json!({
            "file_name": file_name,
            "content": content,
            "user_id": self.user_id,
        });

        debug!("上传文档: {} ({} 字符)", file_name, content.chars().count());

        let response = self
            .http
            .post(&endpoint)
            .timeout(self.upload_timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::JsonParseFailed {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        info!(
            "上传响应: {}",
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
        );

        if status != StatusCode::CREATED {
            return Err(ApiError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
                body: body.to_string(),
            }
            .into());
        }

        serde_json::from_value::<UploadResponse>(body)
            .ok()
            .and_then(|r| r.document_id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ApiError::MissingField {
                    endpoint,
                    field: "document_id".to_string(),
                }
                .into()
            })
    }

    /// 查询文档处理状态，返回完整响应 JSON
    pub async fn status(&self, document_id: &str) -> AppResult<Value> {
        let endpoint = format!("{}/status/{}", self.base_url, document_id);

        let response = self
            .http
            .get(&endpoint)
            .timeout(self.status_timeout)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&endpoint, e))?;

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::JsonParseFailed {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        Ok(body)
    }

    /// 多方法查询
    ///
    /// 网络错误不会向上传播，而是转换为 `ServiceResponse::Failure`
    pub async fn query(&self, query: &str, methods: &[String]) -> ServiceResponse {
        let endpoint = format!("{}/query", self.base_url);
        let payload = json!({
            "query": query,
            "user_id": self.user_id,
            "methods": methods,
        });

        debug!("ilka 查询 Payload: {}", payload);

        let result = self
            .http
            .post(&endpoint)
            .timeout(self.query_timeout)
            .json(&payload)
            .send()
            .await;

        to_service_response(result).await
    }
}
