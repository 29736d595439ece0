use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::question::{default_questions, QuestionRecord};

/// 程序配置
///
/// 加载顺序：内置默认值 → `COMPARE_CONFIG` 指向的 TOML 文件 → 环境变量
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- 多方法系统 (ilka) ---
    pub ilka_base_url: String,
    /// 上传与查询时使用的用户标识
    pub user_id: String,
    /// 查询时要求执行的方法列表
    pub ilka_methods: Vec<String>,
    // --- RAG 系统 ---
    pub rag_base_url: String,
    /// RAG 系统中已存在的同一文档
    pub rag_file_id: String,
    pub rag_method_id: String,
    // --- 文件 ---
    /// 待上传的文本文件
    pub input_file: PathBuf,
    /// 上传时使用的文件名
    pub document_name: String,
    /// 报告输出路径
    pub report_file: PathBuf,
    // --- 轮询与节流 ---
    pub poll_max_attempts: u32,
    pub poll_interval_secs: u64,
    /// 每道题之间的固定间隔
    pub question_delay_secs: u64,
    // --- 超时（秒） ---
    pub upload_timeout_secs: u64,
    pub status_timeout_secs: u64,
    pub query_timeout_secs: u64,
    pub chat_timeout_secs: u64,
    /// 测试题目
    pub questions: Vec<QuestionRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ilka_base_url: "https://ilka.eebehuur13.workers.dev".to_string(),
            user_id: "test-comparison-user".to_string(),
            ilka_methods: vec![
                "method1".to_string(),
                "method2".to_string(),
                "method3".to_string(),
                "method4".to_string(),
            ],
            rag_base_url: "https://rag-worker.eebehuur13.workers.dev".to_string(),
            rag_file_id: "25dec8fe-6220-4b86-bfbc-108a2d4f8b64".to_string(),
            rag_method_id: "agr/baseline".to_string(),
            input_file: PathBuf::from("NEP2020.txt"),
            document_name: "NEP2020.txt".to_string(),
            report_file: PathBuf::from("COMPARISON_RESULTS.json"),
            poll_max_attempts: 40,
            poll_interval_secs: 5,
            question_delay_secs: 2,
            upload_timeout_secs: 30,
            status_timeout_secs: 10,
            query_timeout_secs: 60,
            chat_timeout_secs: 30,
            questions: default_questions(),
        }
    }
}

impl Config {
    /// 按默认值、配置文件、环境变量的顺序加载配置
    pub async fn load() -> AppResult<Self> {
        let base = match std::env::var("COMPARE_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path)).await?,
            Err(_) => Self::default(),
        };
        let config = base.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// 从 TOML 文件加载，未给出的字段保留默认值
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| FileError::TomlParseFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        info!("已加载配置文件: {}", path.display());
        Ok(config)
    }

    /// 使用环境变量覆盖字段
    pub fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            ilka_base_url: env_string("ILKA_BASE_URL").unwrap_or(self.ilka_base_url),
            rag_base_url: env_string("RAG_BASE_URL").unwrap_or(self.rag_base_url),
            user_id: env_string("COMPARE_USER_ID").unwrap_or(self.user_id),
            input_file: env_string("INPUT_FILE").map(PathBuf::from).unwrap_or(self.input_file),
            report_file: env_string("REPORT_FILE").map(PathBuf::from).unwrap_or(self.report_file),
            rag_file_id: env_string("RAG_FILE_ID").unwrap_or(self.rag_file_id),
            rag_method_id: env_string("RAG_METHOD_ID").unwrap_or(self.rag_method_id),
            poll_max_attempts: env_parsed("POLL_MAX_ATTEMPTS", "u32")?
                .unwrap_or(self.poll_max_attempts),
            poll_interval_secs: env_parsed("POLL_INTERVAL_SECS", "u64")?
                .unwrap_or(self.poll_interval_secs),
            question_delay_secs: env_parsed("QUESTION_DELAY_SECS", "u64")?
                .unwrap_or(self.question_delay_secs),
            ..self
        })
    }

    /// 校验配置并规范化 URL
    pub fn validate(&self) -> AppResult<()> {
        if self.ilka_base_url.trim().is_empty() {
            return Err(AppError::invalid_config("ilka_base_url", "不能为空"));
        }
        if self.rag_base_url.trim().is_empty() {
            return Err(AppError::invalid_config("rag_base_url", "不能为空"));
        }
        if self.user_id.trim().is_empty() {
            return Err(AppError::invalid_config("user_id", "不能为空"));
        }
        if self.questions.is_empty() {
            return Err(AppError::invalid_config("questions", "至少需要一道题目"));
        }
        if self.poll_max_attempts == 0 {
            return Err(AppError::invalid_config("poll_max_attempts", "必须大于 0"));
        }
        for (field, secs) in [
            ("upload_timeout_secs", self.upload_timeout_secs),
            ("status_timeout_secs", self.status_timeout_secs),
            ("query_timeout_secs", self.query_timeout_secs),
            ("chat_timeout_secs", self.chat_timeout_secs),
        ] {
            if secs == 0 {
                return Err(AppError::invalid_config(field, "超时必须大于 0"));
            }
        }
        Ok(())
    }

    /// 去掉末尾斜杠后的 ilka 地址
    pub fn ilka_url(&self) -> &str {
        self.ilka_base_url.trim_end_matches('/')
    }

    /// 去掉末尾斜杠后的 RAG 地址
    pub fn rag_url(&self) -> &str {
        self.rag_base_url.trim_end_matches('/')
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn question_delay(&self) -> Duration {
        Duration::from_secs(self.question_delay_secs)
    }
}

fn env_string(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok().filter(|v| !v.is_empty())
}

fn env_parsed<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match env_string(var_name) {
        Some(value) => value.parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.poll_max_attempts, 40);
        assert_eq!(config.poll_interval(), Duration::from_secs(5));
        assert_eq!(config.question_delay(), Duration::from_secs(2));
        assert_eq!(config.questions.len(), 6);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = Config {
            ilka_base_url: "http://localhost:8787/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.ilka_url(), "http://localhost:8787");
    }

    #[test]
    fn test_validate_rejects_empty_questions() {
        let config = Config {
            questions: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AppError::Config(ConfigError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let config = Config {
            poll_max_attempts: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeouts() {
        let config = Config {
            chat_timeout_secs: 0,
            ..Config::default()
        };
        match config.validate() {
            Err(AppError::Config(ConfigError::Invalid { field, .. })) => {
                assert_eq!(field, "chat_timeout_secs");
            }
            other => panic!("期望 Invalid, 实际 {:?}", other),
        }

        let config = Config {
            upload_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    /// 环境变量是进程级状态，所有相关断言放在同一个测试里顺序执行
    #[tokio::test]
    async fn test_env_overrides_and_config_file() {
        const VARS: [&str; 4] = [
            "RAG_BASE_URL",
            "POLL_MAX_ATTEMPTS",
            "QUESTION_DELAY_SECS",
            "COMPARE_CONFIG",
        ];
        for var in VARS {
            std::env::remove_var(var);
        }

        // 未设置任何变量时与默认值一致
        let config = Config::default().with_env_overrides().unwrap();
        assert_eq!(config.rag_base_url, Config::default().rag_base_url);
        assert_eq!(config.poll_max_attempts, 40);

        std::env::set_var("RAG_BASE_URL", "http://127.0.0.1:9100");
        std::env::set_var("POLL_MAX_ATTEMPTS", "7");
        let config = Config::default().with_env_overrides().unwrap();
        assert_eq!(config.rag_base_url, "http://127.0.0.1:9100");
        assert_eq!(config.poll_max_attempts, 7);
        assert_eq!(config.user_id, "test-comparison-user");

        std::env::set_var("POLL_MAX_ATTEMPTS", "abc");
        match Config::default().with_env_overrides() {
            Err(AppError::Config(ConfigError::EnvVarParseFailed {
                var_name, value, ..
            })) => {
                assert_eq!(var_name, "POLL_MAX_ATTEMPTS");
                assert_eq!(value, "abc");
            }
            other => panic!("期望 EnvVarParseFailed, 实际 {:?}", other),
        }
        std::env::remove_var("POLL_MAX_ATTEMPTS");

        // 配置文件先生效，环境变量再覆盖
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rag_base_url = \"http://127.0.0.1:9200\"\nquestion_delay_secs = 9"
        )
        .unwrap();
        std::env::set_var("COMPARE_CONFIG", file.path());
        std::env::set_var("QUESTION_DELAY_SECS", "0");

        let config = Config::load().await.unwrap();
        assert_eq!(config.rag_base_url, "http://127.0.0.1:9100");
        assert_eq!(config.question_delay_secs, 0);
        assert_eq!(config.questions.len(), 6);

        std::env::remove_var("RAG_BASE_URL");
        let config = Config::load().await.unwrap();
        assert_eq!(config.rag_base_url, "http://127.0.0.1:9200");

        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[tokio::test]
    async fn test_partial_toml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "rag_base_url = \"http://127.0.0.1:9000\"\npoll_max_attempts = 3"
        )
        .unwrap();

        let config = Config::from_toml_file(file.path()).await.unwrap();
        assert_eq!(config.rag_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.poll_max_attempts, 3);
        assert_eq!(config.user_id, "test-comparison-user");
        assert_eq!(config.questions.len(), 6);
    }

    #[tokio::test]
    async fn test_invalid_toml_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "poll_max_attempts = \"many\"").unwrap();

        let err = Config::from_toml_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AppError::File(FileError::TomlParseFailed { .. })));
    }
}
