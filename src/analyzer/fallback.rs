//! 模式路由 + 降级
//! LocalOnly 只走本地规则；Deep 优先模型，模型不可用/出错时回退本地并记录原因；
//! DeepStrict 直接返回模型错误

use std::sync::Arc;

use sctscan_engine::AnalysisResult;

use super::{ContentAnalyzer, DeepAnalyzerSlot, PatternAnalyzer};
use crate::config::AnalysisMode;
use crate::error::{ScanError, ScanResult};

/// 一次分析的结果与出处
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    /// 实际产出结果的分析器名称
    pub analyzer: String,
    /// Deep 模式下回退到本地结果的原因
    pub fallback_reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FallbackAnalyzer {
    mode: AnalysisMode,
    local: PatternAnalyzer,
    deep: Option<Arc<dyn ContentAnalyzer>>,
    /// deep 为 None 时的不可用原因
    unavailable_reason: String,
}

impl FallbackAnalyzer {
    pub fn new(
        mode: AnalysisMode,
        local: PatternAnalyzer,
        deep: Option<Arc<dyn ContentAnalyzer>>,
    ) -> Self {
        Self {
            mode,
            local,
            deep,
            unavailable_reason: "no deep analyzer configured".to_string(),
        }
    }

    pub(crate) fn from_slot(mode: AnalysisMode, local: PatternAnalyzer, slot: DeepAnalyzerSlot) -> Self {
        match slot {
            #[cfg(feature = "llm")]
            DeepAnalyzerSlot::Ready(analyzer) => Self::new(mode, local, Some(analyzer)),
            DeepAnalyzerSlot::Missing(reason) => Self {
                unavailable_reason: reason,
                ..Self::new(mode, local, None)
            },
        }
    }

    #[inline]
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    #[inline]
    pub fn has_deep_analyzer(&self) -> bool {
        self.deep.is_some()
    }

    fn local_outcome(&self, content: &str, fallback_reason: Option<String>) -> ScanResult<AnalysisOutcome> {
        Ok(AnalysisOutcome {
            result: self.local.analyze_text(content)?,
            analyzer: self.local.name().to_string(),
            fallback_reason,
        })
    }

    async fn run_deep(&self, content: &str) -> ScanResult<AnalysisOutcome> {
        let analyzer = self
            .deep
            .as_ref()
            .ok_or_else(|| ScanError::Unavailable(self.unavailable_reason.clone()))?;
        let result = analyzer.analyze(content).await?;
        Ok(AnalysisOutcome {
            result,
            analyzer: analyzer.name().to_string(),
            fallback_reason: None,
        })
    }

    /// 按模式执行分析（content 已通过输入守卫）
    pub async fn run(&self, content: &str) -> ScanResult<AnalysisOutcome> {
        match self.mode {
            AnalysisMode::LocalOnly => self.local_outcome(content, None),
            AnalysisMode::DeepStrict => self.run_deep(content).await,
            AnalysisMode::Deep => match self.run_deep(content).await {
                Ok(outcome) => Ok(outcome),
                Err(e) if e.is_fallback_eligible() => {
                    log::warn!("Deep analysis failed, falling back to local patterns: {}", e);
                    self.local_outcome(content, Some(e.to_string()))
                }
                Err(e) => Err(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct FailingAnalyzer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ContentAnalyzer for FailingAnalyzer {
        fn name(&self) -> &str {
            "failing"
        }

        async fn analyze(&self, _content: &str) -> ScanResult<AnalysisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ScanError::UpstreamError("connection reset".to_string()))
        }
    }

    #[derive(Debug)]
    struct BenignAnalyzer;

    #[async_trait]
    impl ContentAnalyzer for BenignAnalyzer {
        fn name(&self) -> &str {
            "benign-model"
        }

        async fn analyze(&self, _content: &str) -> ScanResult<AnalysisResult> {
            Ok(AnalysisResult::benign())
        }
    }

    const TEXT: &str = "BREAKING: Share this before they delete it!";

    fn local() -> PatternAnalyzer {
        PatternAnalyzer::new().unwrap()
    }

    #[tokio::test]
    async fn test_local_only_never_calls_deep() {
        let failing = Arc::new(FailingAnalyzer::default());
        let router = FallbackAnalyzer::new(AnalysisMode::LocalOnly, local(), Some(failing.clone()));
        let outcome = router.run(TEXT).await.unwrap();
        assert_eq!(outcome.analyzer, "local_patterns");
        assert!(outcome.fallback_reason.is_none());
        assert_eq!(failing.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_deep_uses_deep_result() {
        let router = FallbackAnalyzer::new(AnalysisMode::Deep, local(), Some(Arc::new(BenignAnalyzer)));
        let outcome = router.run(TEXT).await.unwrap();
        assert_eq!(outcome.analyzer, "benign-model");
        assert!(outcome.result.is_benign());
    }

    #[tokio::test]
    async fn test_deep_falls_back_on_upstream_error() {
        let failing = Arc::new(FailingAnalyzer::default());
        let router = FallbackAnalyzer::new(AnalysisMode::Deep, local(), Some(failing.clone()));
        let outcome = router.run(TEXT).await.unwrap();
        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.analyzer, "local_patterns");
        assert!(outcome.fallback_reason.unwrap().contains("connection reset"));
        // 回退结果是本地匹配结果，不是静默的 Benign
        assert!(!outcome.result.is_benign());
    }

    #[tokio::test]
    async fn test_deep_falls_back_when_unavailable() {
        let slot = DeepAnalyzerSlot::Missing("no API credential configured".to_string());
        let router = FallbackAnalyzer::from_slot(AnalysisMode::Deep, local(), slot);
        assert!(!router.has_deep_analyzer());
        let outcome = router.run(TEXT).await.unwrap();
        assert!(outcome.fallback_reason.unwrap().contains("no API credential"));
    }

    #[tokio::test]
    async fn test_deep_strict_surfaces_errors() {
        let router = FallbackAnalyzer::new(
            AnalysisMode::DeepStrict,
            local(),
            Some(Arc::new(FailingAnalyzer::default())),
        );
        assert!(matches!(router.run(TEXT).await, Err(ScanError::UpstreamError(_))));

        let router = FallbackAnalyzer::new(AnalysisMode::DeepStrict, local(), None);
        assert!(matches!(router.run(TEXT).await, Err(ScanError::Unavailable(_))));
    }
}
