//! 对比测试编排器
//!
//! 严格线性：上传 → 轮询 → 逐题对比 → 写报告。
//! 只有上传失败会终止运行，其余错误都记录进报告。

use tokio::time::sleep;
use tracing::{error, warn};

use crate::clients::{build_http_client, IlkaClient, RagClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::report::{RunReport, TestConfig};
use crate::services::{
    analyze_answer_quality, print_summary, upload_document, write_report, Comparator,
    PollOutcome, StatusPoller,
};
use crate::utils::logging::{log_banner, log_question_start, log_startup, now_timestamp};

/// 应用主结构
pub struct App {
    config: Config,
    ilka: IlkaClient,
    poller: StatusPoller,
    comparator: Comparator,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;

        let http = build_http_client()?;
        let ilka = IlkaClient::new(http.clone(), &config);
        let rag = RagClient::new(http, &config);

        Ok(Self {
            poller: StatusPoller::new(&config),
            comparator: Comparator::new(ilka.clone(), rag, &config),
            ilka,
            config,
        })
    }

    /// 运行一次完整对比
    ///
    /// # 返回
    /// 返回已写入磁盘的报告；上传失败时返回错误且不写报告
    pub async fn run(&self) -> AppResult<RunReport> {
        log_startup(&self.config.user_id);

        // ========== 1. 上传 ==========
        log_banner(&format!("上传 {} 到 ILKA/ZYN", self.config.document_name));
        let document_id = match upload_document(
            &self.ilka,
            &self.config.input_file,
            &self.config.document_name,
        )
        .await
        {
            Ok(id) => id,
            Err(e) => {
                error!("\n✗ 上传未成功，无法继续");
                return Err(e);
            }
        };

        // ========== 2. 等待处理完成 ==========
        log_banner("等待 ILKA/ZYN 处理文档");
        match self.poller.wait_until_ready(&self.ilka, &document_id).await {
            PollOutcome::Ready { .. } => {}
            outcome => warn!("\n⚠ 文档未就绪 ({:?})，仍继续测试...", outcome),
        }

        // ========== 3. 逐题对比 ==========
        log_banner("运行对比测试");
        let total = self.config.questions.len();
        let mut results = Vec::with_capacity(total);

        for (index, question) in self.config.questions.iter().enumerate() {
            log_question_start(
                index + 1,
                total,
                &question.id,
                &question.question,
                question.question_type.as_str(),
            );

            let pair = self.comparator.compare(question).await;
            results.push(analyze_answer_quality(
                question,
                &pair.rag,
                &pair.ilka,
                now_timestamp(),
            ));

            // 节流，避免请求过于频繁
            sleep(self.config.question_delay()).await;
        }

        // ========== 4. 生成报告 ==========
        log_banner("对比报告");
        let report = RunReport {
            test_config: TestConfig {
                timestamp: now_timestamp(),
                user_id: self.config.user_id.clone(),
                document: self.config.document_name.clone(),
                rag_file_id: self.config.rag_file_id.clone(),
                ilka_doc_id: document_id,
            },
            questions: self.config.questions.clone(),
            results,
        };

        write_report(&report, &self.config.report_file).await?;
        print_summary(&report);

        Ok(report)
    }
}
