//! 对比报告模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::question::{QuestionRecord, QuestionType};

/// RAG 系统的单题摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RagSummary {
    Metrics {
        answer_length: usize,
        citations_count: usize,
        has_answer: bool,
        metadata: Value,
    },
    Error {
        error: String,
    },
}

/// 多方法系统中单个方法的指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodMetrics {
    pub method: Option<String>,
    pub answer_length: usize,
    pub citations_count: usize,
    pub confidence: Option<Value>,
    pub latency_ms: Option<Value>,
}

/// 多方法系统的单题摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultiMethodSummary {
    Metrics {
        methods_count: usize,
        methods: Vec<MethodMetrics>,
    },
    Error {
        error: String,
    },
}

/// 单题分析记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub timestamp: String,
    pub rag: RagSummary,
    #[serde(rename = "ilka")]
    pub multi_method: MultiMethodSummary,
}

/// 本次运行的配置快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    pub timestamp: String,
    pub user_id: String,
    pub document: String,
    pub rag_file_id: String,
    pub ilka_doc_id: String,
}

/// 完整运行报告，运行结束时一次性写入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub test_config: TestConfig,
    pub questions: Vec<QuestionRecord>,
    pub results: Vec<AnalysisRecord>,
}
