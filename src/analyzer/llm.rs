use async_trait::async_trait;
use sctscan_engine::AnalysisResult;

use super::prompt::{build_prompt, parse_reply};
use super::ContentAnalyzer;
use crate::error::ScanResult;
use crate::utils::preview_compact;

/// 文本补全服务（模型提供方的抽象边界）
/// 返回模型回复的原始文本；传输/服务端错误映射为 UpstreamError
#[async_trait]
pub trait CompletionClient: std::fmt::Debug + Send + Sync {
    /// 模型标识，写入报告元数据
    fn model(&self) -> &str;

    async fn complete(&self, prompt: &str) -> ScanResult<String>;
}

/// 模型驱动的深度分析器
#[derive(Debug)]
pub struct LlmAnalyzer<C> {
    client: C,
    max_content_chars: usize,
}

impl<C: CompletionClient> LlmAnalyzer<C> {
    pub fn new(client: C, max_content_chars: usize) -> Self {
        Self {
            client,
            max_content_chars,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: CompletionClient> ContentAnalyzer for LlmAnalyzer<C> {
    fn name(&self) -> &str {
        self.client.model()
    }

    async fn analyze(&self, content: &str) -> ScanResult<AnalysisResult> {
        let prompt = build_prompt(content, self.max_content_chars);
        let reply = self.client.complete(&prompt).await?;
        log::debug!(
            "[{}] reply received | bytes: {} | preview: {}",
            self.client.model(),
            reply.len(),
            preview_compact(&reply, 120)
        );
        parse_reply(&reply)
    }
}
