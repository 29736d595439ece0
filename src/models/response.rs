//! 外部服务响应模型
//!
//! 两个服务的响应结构都不可信，所有字段均为可选。缺失或为 null 的字段
//! 按约定回退为空值；类型不符则整体解析失败，由调用方记为错误。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 单次服务调用结果
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    /// 请求完成并成功解析 JSON
    Success { body: Value, status_code: u16 },
    /// 网络错误、超时或响应不是 JSON
    Failure { error: String },
}

impl ServiceResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        ServiceResponse::Failure {
            error: error.into(),
        }
    }
}

/// 上传接口响应 (`POST /upload`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub document_id: Option<String>,
}

/// 状态接口响应 (`GET /status/{id}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
}

impl StatusResponse {
    /// 缺失时视为 "unknown"
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}

/// RAG 系统聊天接口响应 (`POST /api/chat`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sources: Option<Vec<Value>>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

impl ChatResponse {
    pub fn answer(&self) -> &str {
        self.answer.as_deref().unwrap_or("")
    }

    pub fn sources(&self) -> &[Value] {
        self.sources.as_deref().unwrap_or(&[])
    }

    /// 原样透传，缺失时为 `{}`
    pub fn metadata(&self) -> Value {
        self.metadata
            .clone()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}

/// 多方法查询接口响应 (`POST /query`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answers: Option<Vec<MethodAnswer>>,
}

impl QueryResponse {
    pub fn answers(&self) -> &[MethodAnswer] {
        self.answers.as_deref().unwrap_or(&[])
    }
}

/// 单个方法的回答
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodAnswer {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<Value>>,
    #[serde(default)]
    pub confidence: Option<Value>,
    #[serde(default)]
    pub latency_ms: Option<Value>,
}

impl MethodAnswer {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn citations(&self) -> &[Value] {
        self.citations.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_response_defaults() {
        let resp: ChatResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(resp.answer(), "");
        assert!(resp.sources().is_empty());
        assert_eq!(resp.metadata(), json!({}));
    }

    #[test]
    fn test_chat_response_null_fields() {
        let resp: ChatResponse =
            serde_json::from_value(json!({"answer": null, "sources": null})).unwrap();
        assert_eq!(resp.answer(), "");
        assert!(resp.sources().is_empty());
    }

    #[test]
    fn test_status_missing_is_unknown() {
        let resp: StatusResponse = serde_json::from_value(json!({"progress": 10})).unwrap();
        assert_eq!(resp.status(), "unknown");
    }

    #[test]
    fn test_method_answer_wrong_type_fails() {
        let result: Result<QueryResponse, _> =
            serde_json::from_value(json!({"answers": [{"text": 42}]}));
        assert!(result.is_err());
    }
}
