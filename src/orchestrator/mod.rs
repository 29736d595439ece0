//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (上传 → 轮询 → 逐题对比 → 报告)
//!     ↓
//! services (uploader / status_poller / comparator / analyzer / report_writer)
//!     ↓
//! clients (IlkaClient / RagClient)
//! ```
//!
//! 编排层只做调度和日志，不解析响应内容

pub mod app;

pub use app::App;
