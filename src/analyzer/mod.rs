#[cfg(feature = "llm")]
use std::sync::Arc;

use async_trait::async_trait;
use sctscan_engine::AnalysisResult;

use crate::config::ScanConfig;
use crate::error::ScanResult;

pub mod fallback;
pub mod llm;
pub mod pattern;
pub mod prompt;

#[cfg(feature = "llm")]
pub mod anthropic;

pub use fallback::{AnalysisOutcome, FallbackAnalyzer};
pub use llm::{CompletionClient, LlmAnalyzer};
pub use pattern::PatternAnalyzer;

#[cfg(feature = "llm")]
pub use anthropic::AnthropicClient;

/// 所有分析器的通用抽象特质
/// 本地规则匹配与模型分析是同一能力的两种实现，按模式替换
#[async_trait]
pub trait ContentAnalyzer: std::fmt::Debug + Send + Sync {
    /// 分析器名称，写入报告元数据
    fn name(&self) -> &str;

    /// 对已通过输入守卫的文本执行分析
    async fn analyze(&self, content: &str) -> ScanResult<AnalysisResult>;
}

/// 深度分析器构建结果：可用实例，或不可用原因
/// 可用实例只能由 llm 特性下的客户端构建
pub(crate) enum DeepAnalyzerSlot {
    #[cfg(feature = "llm")]
    Ready(Arc<dyn ContentAnalyzer>),
    Missing(String),
}

/// 按配置构建深度分析器
/// 缺少凭据或未启用 llm 特性时返回 Missing，调用时再按模式决定回退或报错
pub(crate) fn deep_analyzer_from_config(config: &ScanConfig) -> ScanResult<DeepAnalyzerSlot> {
    let options = match &config.llm {
        Some(opts) if opts.has_credential() => opts,
        _ => {
            return Ok(DeepAnalyzerSlot::Missing(
                "no API credential configured (set ANTHROPIC_API_KEY)".to_string(),
            ))
        }
    };

    #[cfg(feature = "llm")]
    {
        let client = AnthropicClient::new(options.clone())?;
        let analyzer = LlmAnalyzer::new(client, options.max_content_chars);
        Ok(DeepAnalyzerSlot::Ready(Arc::new(analyzer)))
    }

    #[cfg(not(feature = "llm"))]
    {
        log::debug!(
            "Deep analyzer requested for model {} but crate built without llm feature",
            options.model
        );
        Ok(DeepAnalyzerSlot::Missing(
            "sctscan was built without the `llm` feature".to_string(),
        ))
    }
}
