//! 测试题目定义
//!
//! 题目列表是静态配置，不在运行时生成

use serde::{Deserialize, Serialize};

/// 题目类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// 简单事实类
    SimpleFactual,
    /// 特定章节细节
    SpecificSection,
    /// 对比分析
    ComparativeAnalysis,
    /// 跨章节综合
    MultiSection,
    /// 数值/年份类
    NumericalData,
    /// 复杂主题
    ComplexTopic,
}

impl QuestionType {
    /// 与序列化结果一致的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::SimpleFactual => "simple_factual",
            QuestionType::SpecificSection => "specific_section",
            QuestionType::ComparativeAnalysis => "comparative_analysis",
            QuestionType::MultiSection => "multi_section",
            QuestionType::NumericalData => "numerical_data",
            QuestionType::ComplexTopic => "complex_topic",
        }
    }
}

/// 单道测试题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题目标识
    pub id: String,
    /// 题目内容
    pub question: String,
    /// 题目类别
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// 期望答案说明（仅供人工对照）
    pub expected: String,
}

impl QuestionRecord {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        question_type: QuestionType,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            question_type,
            expected: expected.into(),
        }
    }
}

/// 默认的六道测试题，覆盖不同复杂度
pub fn default_questions() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new(
            "q1_simple_fact",
            "What is the National Education Policy 2020?",
            QuestionType::SimpleFactual,
            "Should provide basic definition/overview",
        ),
        QuestionRecord::new(
            "q2_specific_detail",
            "What are the key recommendations for Early Childhood Care and Education?",
            QuestionType::SpecificSection,
            "Should cite specific recommendations from ECCE section",
        ),
        QuestionRecord::new(
            "q3_comparative",
            "How does NEP 2020 propose to restructure school education compared to the previous system?",
            QuestionType::ComparativeAnalysis,
            "Should compare 10+2 structure with new 5+3+3+4 structure",
        ),
        QuestionRecord::new(
            "q4_multi_section",
            "What role do teachers play in implementing the new curriculum framework?",
            QuestionType::MultiSection,
            "Should pull from both Teachers and Curriculum sections",
        ),
        QuestionRecord::new(
            "q5_numerical",
            "What are the target years and goals mentioned in NEP 2020?",
            QuestionType::NumericalData,
            "Should extract specific years and targets",
        ),
        QuestionRecord::new(
            "q6_complex",
            "How does NEP 2020 address equitable and inclusive education for disadvantaged groups?",
            QuestionType::ComplexTopic,
            "Should synthesize from multiple sections about SEDGs, gender, etc.",
        ),
    ]
}
