use async_trait::async_trait;
use sctscan_engine::{AnalysisResult, MatchMap, PatternMatcher, Scorer};

use super::ContentAnalyzer;
use crate::error::ScanResult;

pub const PATTERN_ANALYZER_NAME: &str = "local_patterns";

/// 本地规则分析器：匹配 → 评分，无网络依赖
#[derive(Debug, Clone, Copy)]
pub struct PatternAnalyzer {
    matcher: &'static PatternMatcher,
    scorer: Scorer<'static>,
}

impl PatternAnalyzer {
    /// 使用进程内共享的已编译规则
    pub fn new() -> ScanResult<Self> {
        Ok(Self {
            matcher: PatternMatcher::shared()?,
            scorer: Scorer::default(),
        })
    }

    /// 仅匹配，返回原始证据
    pub fn evidence(&self, content: &str) -> ScanResult<MatchMap> {
        Ok(self.matcher.match_text(content)?)
    }

    /// 同步分析
    pub fn analyze_text(&self, content: &str) -> ScanResult<AnalysisResult> {
        let matches = self.evidence(content)?;
        let result = self.scorer.classify(&matches)?;
        log::debug!(
            "[{}] classified | result: {} | severity: {} | categories: {} | evidence: {}",
            PATTERN_ANALYZER_NAME,
            result.classification,
            result.severity,
            matches.len(),
            matches.evidence_count()
        );
        Ok(result)
    }
}

#[async_trait]
impl ContentAnalyzer for PatternAnalyzer {
    fn name(&self) -> &str {
        PATTERN_ANALYZER_NAME
    }

    async fn analyze(&self, content: &str) -> ScanResult<AnalysisResult> {
        self.analyze_text(content)
    }
}
