pub mod ilka_client;
pub mod rag_client;

pub use ilka_client::IlkaClient;
pub use rag_client::RagClient;

use crate::error::{ApiError, AppResult};
use crate::models::response::ServiceResponse;
use serde_json::Value;

/// 创建所有客户端共用的 HTTP 客户端
///
/// 超时按调用点分别设置，这里不设全局超时
pub fn build_http_client() -> AppResult<reqwest::Client> {
    finish_client(
        reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))),
    )
}

fn finish_client(builder: reqwest::ClientBuilder) -> AppResult<reqwest::Client> {
    builder
        .build()
        .map_err(|e| ApiError::ClientBuildFailed { source: e }.into())
}

/// 把一次请求的结果转换为 `ServiceResponse`
///
/// 任何状态码只要响应体是 JSON 都算成功，状态码一并记录
pub(crate) async fn to_service_response(
    result: Result<reqwest::Response, reqwest::Error>,
) -> ServiceResponse {
    let response = match result {
        Ok(response) => response,
        Err(e) => return ServiceResponse::failure(e.to_string()),
    };

    let status_code = response.status().as_u16();
    match response.json::<Value>().await {
        Ok(body) => ServiceResponse::Success { body, status_code },
        Err(e) => ServiceResponse::failure(format!("响应解析失败 (status={}): {}", status_code, e)),
    }
}
