//! 文档处理状态轮询
//!
//! 固定次数、固定间隔，不做退避

use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::clients::IlkaClient;
use crate::config::Config;
use crate::models::response::StatusResponse;

/// 轮询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// 文档已就绪
    Ready { attempts: u32 },
    /// 服务端报告处理失败
    Failed { attempts: u32 },
    /// 次数用尽仍未就绪
    TimedOut { attempts: u32 },
}

impl PollOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, PollOutcome::Ready { .. })
    }
}

pub struct StatusPoller {
    max_attempts: u32,
    interval: Duration,
}

impl StatusPoller {
    pub fn new(config: &Config) -> Self {
        Self {
            max_attempts: config.poll_max_attempts,
            interval: config.poll_interval(),
        }
    }

    pub fn with_settings(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    /// 等待文档处理完成
    ///
    /// 请求出错（网络、非 JSON）按"未就绪"处理，休眠后继续，不会提前中止。
    /// 连接彻底不可用时会耗尽全部次数。
    pub async fn wait_until_ready(&self, client: &IlkaClient, document_id: &str) -> PollOutcome {
        info!("检查文档状态: {}", document_id);

        for attempt in 1..=self.max_attempts {
            match client.status(document_id).await {
                Ok(body) => {
                    let status_data: StatusResponse =
                        serde_json::from_value(body.clone()).unwrap_or_default();
                    let status = status_data.status();
                    info!("尝试 {}/{}: 状态 = {}", attempt, self.max_attempts, status);

                    match status {
                        "ready" => {
                            info!("✓ 文档已就绪!");
                            return PollOutcome::Ready { attempts: attempt };
                        }
                        "failed" => {
                            error!("✗ 文档处理失败: {}", body);
                            return PollOutcome::Failed { attempts: attempt };
                        }
                        _ => {}
                    }
                }
                Err(e) => {
                    warn!("状态查询出错 (尝试 {}/{}): {}", attempt, self.max_attempts, e);
                }
            }

            sleep(self.interval).await;
        }

        warn!("✗ 等待文档就绪超时");
        PollOutcome::TimedOut {
            attempts: self.max_attempts,
        }
    }
}
