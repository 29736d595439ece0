//! 对比服务
//!
//! 同一道题依次发给 RAG 系统和多方法系统，两次请求互不影响

use tracing::{info, warn};

use crate::clients::{IlkaClient, RagClient};
use crate::config::Config;
use crate::models::question::QuestionRecord;
use crate::models::response::ServiceResponse;
use crate::utils::logging::truncate_text;

/// 一道题在两个系统上的原始响应
#[derive(Debug, Clone)]
pub struct ComparisonPair {
    pub rag: ServiceResponse,
    pub ilka: ServiceResponse,
}

pub struct Comparator {
    ilka: IlkaClient,
    rag: RagClient,
    ilka_methods: Vec<String>,
    rag_file_id: String,
    rag_method_id: String,
}

impl Comparator {
    pub fn new(ilka: IlkaClient, rag: RagClient, config: &Config) -> Self {
        Self {
            ilka,
            rag,
            ilka_methods: config.ilka_methods.clone(),
            rag_file_id: config.rag_file_id.clone(),
            rag_method_id: config.rag_method_id.clone(),
        }
    }

    /// 对一道题分别请求两个系统
    pub async fn compare(&self, question: &QuestionRecord) -> ComparisonPair {
        info!("\n测试 RAG 系统...");
        let rag = self
            .rag
            .chat(&question.question, &self.rag_file_id, &self.rag_method_id)
            .await;
        log_rag_result(&rag);

        info!("\n测试 ILKA/ZYN 系统...");
        let ilka = self.ilka.query(&question.question, &self.ilka_methods).await;
        log_ilka_result(&ilka);

        ComparisonPair { rag, ilka }
    }
}

fn log_rag_result(response: &ServiceResponse) {
    match response {
        ServiceResponse::Success { body, .. } => {
            let answer = body.get("answer").and_then(|v| v.as_str()).unwrap_or("");
            info!("✓ RAG 已回答 (长度: {} 字符)", answer.chars().count());
            info!("  答案预览: {}", truncate_text(answer, 200));
        }
        ServiceResponse::Failure { error } => warn!("✗ RAG 错误: {}", error),
    }
}

fn log_ilka_result(response: &ServiceResponse) {
    match response {
        ServiceResponse::Success { body, .. } => {
            let answers = body
                .get("answers")
                .and_then(|v| v.as_array())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            info!("✓ ILKA 返回了 {} 个方法的回答", answers.len());
            for answer in answers {
                let method = answer.get("method").and_then(|v| v.as_str()).unwrap_or("?");
                let text = answer.get("text").and_then(|v| v.as_str()).unwrap_or("");
                info!("  - {}: {} 字符", method, text.chars().count());
            }
        }
        ServiceResponse::Failure { error } => warn!("✗ ILKA 错误: {}", error),
    }
}
