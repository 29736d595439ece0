pub mod question;
pub mod report;
pub mod response;

pub use question::{default_questions, QuestionRecord, QuestionType};
pub use report::{
    AnalysisRecord, MethodMetrics, MultiMethodSummary, RagSummary, RunReport, TestConfig,
};
pub use response::{
    ChatResponse, MethodAnswer, QueryResponse, ServiceResponse, StatusResponse, UploadResponse,
};
