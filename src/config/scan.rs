//! 扫描配置管理

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ScanError, ScanResult};

/// 单次输入的最大字符数（超出部分截断）
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;
/// 批量扫描并发窗口
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;
pub const DEFAULT_LLM_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(60);
/// 发送给模型的内容字符上限
pub const DEFAULT_LLM_MAX_CONTENT_CHARS: usize = 8000;

pub const ENV_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ENV_MODE: &str = "SCTSCAN_MODE";
pub const ENV_BATCH_CONCURRENCY: &str = "SCTSCAN_BATCH_CONCURRENCY";

/// 分析模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnalysisMode {
    /// 仅本地规则匹配，从不调用模型
    #[default]
    LocalOnly,
    /// 模型结果优先，模型不可用/出错时回退到本地结果
    Deep,
    /// 模型结果优先，模型错误直接返回
    DeepStrict,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::LocalOnly => "local",
            AnalysisMode::Deep => "deep",
            AnalysisMode::DeepStrict => "deep-strict",
        }
    }

    #[inline]
    pub fn uses_llm(&self) -> bool {
        !matches!(self, AnalysisMode::LocalOnly)
    }
}

impl Display for AnalysisMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "local-only" | "local_only" => Ok(AnalysisMode::LocalOnly),
            "deep" | "llm" => Ok(AnalysisMode::Deep),
            "deep-strict" | "deep_strict" | "strict" => Ok(AnalysisMode::DeepStrict),
            other => Err(ScanError::InvalidInput(format!(
                "unknown analysis mode '{}', expected local | deep | deep-strict",
                other
            ))),
        }
    }
}

/// 重试策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    Never,     // 不重试
    Times(u8), // 固定次数重试（不含第一次）
}

impl RetryPolicy {
    #[inline]
    pub fn max_retries(&self) -> usize {
        match self {
            RetryPolicy::Never => 0,
            RetryPolicy::Times(n) => *n as usize,
        }
    }
}

/// 模型调用选项
#[derive(Debug, Clone)]
pub struct LlmOptions {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub max_content_chars: usize,
    pub retry: RetryPolicy,
}

impl LlmOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_LLM_MODEL.to_string(),
            endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            max_tokens: DEFAULT_LLM_MAX_TOKENS,
            timeout: DEFAULT_LLM_TIMEOUT,
            max_content_chars: DEFAULT_LLM_MAX_CONTENT_CHARS,
            retry: RetryPolicy::Never,
        }
    }

    #[inline]
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// 完整扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub mode: AnalysisMode,
    pub max_input_chars: usize,
    pub batch_concurrency: usize,
    pub llm: Option<LlmOptions>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::LocalOnly,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
            llm: None,
        }
    }
}

impl ScanConfig {
    /// 纯本地规则匹配
    pub fn local_only() -> Self {
        Self::default()
    }

    /// 深度分析（失败回退本地）
    pub fn deep(api_key: impl Into<String>) -> Self {
        Self {
            mode: AnalysisMode::Deep,
            llm: Some(LlmOptions::new(api_key)),
            ..Self::default()
        }
    }

    pub fn builder() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从进程环境变量读取
    pub fn from_env() -> ScanResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取（便于测试注入）
    /// 未设置 SCTSCAN_MODE 时为 LocalOnly；凭据只影响 llm 选项，不隐式切换模式
    pub fn from_lookup<F>(lookup: F) -> ScanResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = CustomConfigBuilder::new();

        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            builder = builder.llm(LlmOptions::new(key.trim()));
        }
        if let Some(mode) = lookup(ENV_MODE).filter(|m| !m.trim().is_empty()) {
            builder = builder.mode(mode.parse()?);
        }
        if let Some(raw) = lookup(ENV_BATCH_CONCURRENCY).filter(|v| !v.trim().is_empty()) {
            let n: usize = raw.trim().parse().map_err(|_| {
                ScanError::InvalidInput(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_BATCH_CONCURRENCY, raw
                ))
            })?;
            builder = builder.batch_concurrency(n);
        }

        Ok(builder.build())
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ScanConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: AnalysisMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn max_input_chars(mut self, max_chars: usize) -> Self {
        self.config.max_input_chars = max_chars;
        self
    }

    pub fn batch_concurrency(mut self, concurrency: usize) -> Self {
        self.config.batch_concurrency = concurrency;
        self
    }

    pub fn llm(mut self, options: LlmOptions) -> Self {
        self.config.llm = Some(options);
        self
    }

    /// 设置凭据（无 llm 选项时以默认值创建）
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        match self.config.llm.as_mut() {
            Some(opts) => opts.api_key = api_key.into(),
            None => self.config.llm = Some(LlmOptions::new(api_key)),
        }
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        if let Some(opts) = self.config.llm.as_mut() {
            opts.model = model.into();
        }
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        if let Some(opts) = self.config.llm.as_mut() {
            opts.timeout = timeout;
        }
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        if let Some(opts) = self.config.llm.as_mut() {
            opts.retry = retry;
        }
        self
    }

    /// 非法取值在此收敛：并发窗口与输入上限至少为 1
    pub fn build(mut self) -> ScanConfig {
        self.config.batch_concurrency = self.config.batch_concurrency.max(1);
        self.config.max_input_chars = self.config.max_input_chars.max(1);
        self.config
    }
}
