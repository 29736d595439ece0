//! # RAG Compare
//!
//! 对比两个问答服务的测试工具：向多方法系统 (ilka) 上传文档并等待处理，
//! 然后把同一组问题分别发给 ilka 和 RAG 系统，统计结构指标（答案长度、
//! 引用数、各方法置信度与耗时），写入 JSON 报告供人工审阅。
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 只负责 HTTP 调用，网络错误转换为 `ServiceResponse::Failure`
//!
//! ### ② 业务能力层（Services）
//! - `uploader` - 读取文件并上传
//! - `status_poller` - 固定次数轮询处理状态
//! - `comparator` - 同一问题分别请求两个系统
//! - `analyzer` - 纯函数，提取指标
//! - `report_writer` - 写报告、打印摘要
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator::App` - 线性执行整个流程

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnalysisRecord, QuestionRecord, RunReport, ServiceResponse};
pub use orchestrator::App;
pub use utils::logging;
