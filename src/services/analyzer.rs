//! 答案质量分析 - 纯函数
//!
//! 只统计结构指标（长度、引用数），不判断答案是否正确

use serde_json::Value;

use crate::models::question::QuestionRecord;
use crate::models::report::{AnalysisRecord, MethodMetrics, MultiMethodSummary, RagSummary};
use crate::models::response::{ChatResponse, QueryResponse, ServiceResponse};

/// 汇总一道题在两个系统上的结果
///
/// # 参数
/// - `question`: 题目
/// - `rag`: RAG 系统响应
/// - `ilka`: 多方法系统响应
/// - `timestamp`: 记录时间
pub fn analyze_answer_quality(
    question: &QuestionRecord,
    rag: &ServiceResponse,
    ilka: &ServiceResponse,
    timestamp: impl Into<String>,
) -> AnalysisRecord {
    AnalysisRecord {
        question: question.question.clone(),
        question_type: question.question_type,
        timestamp: timestamp.into(),
        rag: summarize_rag(rag),
        multi_method: summarize_multi_method(ilka),
    }
}

/// 提取 RAG 响应的指标
pub fn summarize_rag(response: &ServiceResponse) -> RagSummary {
    let body = match object_body(response) {
        Ok(body) => body,
        Err(error) => return RagSummary::Error { error },
    };

    match serde_json::from_value::<ChatResponse>(body.clone()) {
        Ok(chat) => RagSummary::Metrics {
            answer_length: chat.answer().chars().count(),
            citations_count: chat.sources().len(),
            has_answer: !chat.answer().is_empty(),
            metadata: chat.metadata(),
        },
        Err(e) => RagSummary::Error {
            error: format!("响应结构不符合预期: {}", e),
        },
    }
}

/// 提取多方法响应的指标，confidence / latency_ms 原样保留
pub fn summarize_multi_method(response: &ServiceResponse) -> MultiMethodSummary {
    let body = match object_body(response) {
        Ok(body) => body,
        Err(error) => return MultiMethodSummary::Error { error },
    };

    match serde_json::from_value::<QueryResponse>(body.clone()) {
        Ok(query) => {
            let methods: Vec<MethodMetrics> = query
                .answers()
                .iter()
                .map(|answer| MethodMetrics {
                    method: answer.method.clone(),
                    answer_length: answer.text().chars().count(),
                    citations_count: answer.citations().len(),
                    confidence: answer.confidence.clone(),
                    latency_ms: answer.latency_ms.clone(),
                })
                .collect();

            MultiMethodSummary::Metrics {
                methods_count: methods.len(),
                methods,
            }
        }
        Err(e) => MultiMethodSummary::Error {
            error: format!("响应结构不符合预期: {}", e),
        },
    }
}

fn object_body(response: &ServiceResponse) -> Result<&Value, String> {
    match response {
        ServiceResponse::Success { body, .. } if body.is_object() => Ok(body),
        ServiceResponse::Success { status_code, .. } => {
            Err(format!("响应不是 JSON 对象 (status={})", status_code))
        }
        ServiceResponse::Failure { error } => Err(error.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::default_questions;
    use serde_json::json;

    fn success(body: Value) -> ServiceResponse {
        ServiceResponse::Success {
            body,
            status_code: 200,
        }
    }

    #[test]
    fn test_rag_metrics() {
        let summary = summarize_rag(&success(json!({"answer": "hello", "sources": [1, 2]})));
        assert_eq!(
            summary,
            RagSummary::Metrics {
                answer_length: 5,
                citations_count: 2,
                has_answer: true,
                metadata: json!({}),
            }
        );
    }

    #[test]
    fn test_rag_metadata_passthrough() {
        let summary = summarize_rag(&success(json!({
            "answer": "",
            "metadata": {"method": "agr/baseline", "chunks": 7}
        })));
        match summary {
            RagSummary::Metrics {
                has_answer,
                metadata,
                ..
            } => {
                assert!(!has_answer);
                assert_eq!(metadata["chunks"], 7);
            }
            other => panic!("期望 Metrics, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_answer_length_counts_chars() {
        let summary = summarize_rag(&success(json!({"answer": "教育政策"})));
        assert!(matches!(
            summary,
            RagSummary::Metrics {
                answer_length: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_multi_method_empty_answers() {
        let summary = summarize_multi_method(&success(json!({"answers": []})));
        assert_eq!(
            summary,
            MultiMethodSummary::Metrics {
                methods_count: 0,
                methods: Vec::new(),
            }
        );
    }

    #[test]
    fn test_multi_method_fields_verbatim() {
        let summary = summarize_multi_method(&success(json!({
            "answers": [
                {"method": "method1", "text": "abc", "citations": [{}, {}], "confidence": 0.8, "latency_ms": 1200},
                {"method": "method2", "text": "de", "confidence": "high"}
            ]
        })));

        let MultiMethodSummary::Metrics {
            methods_count,
            methods,
        } = summary
        else {
            panic!("期望 Metrics");
        };
        assert_eq!(methods_count, 2);
        assert_eq!(methods[0].method.as_deref(), Some("method1"));
        assert_eq!(methods[0].answer_length, 3);
        assert_eq!(methods[0].citations_count, 2);
        assert_eq!(methods[0].confidence, Some(json!(0.8)));
        assert_eq!(methods[0].latency_ms, Some(json!(1200)));
        assert_eq!(methods[1].citations_count, 0);
        assert_eq!(methods[1].confidence, Some(json!("high")));
        assert_eq!(methods[1].latency_ms, None);
    }

    #[test]
    fn test_failure_keeps_only_error() {
        let record = analyze_answer_quality(
            &default_questions()[0],
            &ServiceResponse::failure("connection refused"),
            &ServiceResponse::failure("timed out"),
            "2026-01-01T00:00:00",
        );

        assert_eq!(
            record.rag,
            RagSummary::Error {
                error: "connection refused".to_string()
            }
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["ilka"], json!({"error": "timed out"}));
        assert_eq!(value["type"], "simple_factual");
    }

    #[test]
    fn test_wrong_shape_becomes_error() {
        let rag = summarize_rag(&success(json!({"answer": 12})));
        assert!(matches!(rag, RagSummary::Error { .. }));

        let ilka = summarize_multi_method(&success(json!(["not", "an", "object"])));
        assert!(matches!(ilka, MultiMethodSummary::Error { .. }));
    }
}
