//! 扫描器核心
//! 输入守卫 → 按模式分析（含降级） → 报告组装；批量扫描按配置并发执行，结果顺序与输入一致

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tokio::sync::Semaphore;

use sctscan_engine::InoculationContent;

use crate::analyzer::{deep_analyzer_from_config, ContentAnalyzer, FallbackAnalyzer, PatternAnalyzer};
use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use crate::input::ScanInput;
use crate::report::{ReportMetadata, ScanReport, SCANNER_ID};
use crate::utils::InputGuard;

/// 扫描器
/// 内部状态均为只读共享，Clone 代价低，可跨任务复用
#[derive(Debug, Clone)]
pub struct Scanner {
    config: Arc<ScanConfig>,
    router: FallbackAnalyzer,
}

impl Scanner {
    /// 按配置创建扫描器
    /// Deep 模式下缺少凭据不会报错，扫描时再按模式回退或报错
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        let local = PatternAnalyzer::new().map_err(|e| {
            ScanError::ScannerInitError(format!("Failed to compile pattern rules: {}", e))
        })?;
        let slot = deep_analyzer_from_config(&config)?;
        let router = FallbackAnalyzer::from_slot(config.mode, local, slot);

        log::info!(
            "Scanner initialized | mode: {} | deep analyzer: {} | max input chars: {} | batch concurrency: {}",
            config.mode,
            router.has_deep_analyzer(),
            config.max_input_chars,
            config.batch_concurrency
        );

        Ok(Self {
            config: Arc::new(config),
            router,
        })
    }

    /// 注入自定义深度分析器（替换配置中的模型客户端）
    pub fn with_deep_analyzer(
        config: ScanConfig,
        analyzer: Arc<dyn ContentAnalyzer>,
    ) -> ScanResult<Self> {
        let local = PatternAnalyzer::new().map_err(|e| {
            ScanError::ScannerInitError(format!("Failed to compile pattern rules: {}", e))
        })?;
        log::info!(
            "Scanner initialized with custom deep analyzer | mode: {} | analyzer: {}",
            config.mode,
            analyzer.name()
        );
        Ok(Self {
            router: FallbackAnalyzer::new(config.mode, local, Some(analyzer)),
            config: Arc::new(config),
        })
    }

    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// 扫描单个输入
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip(self, input),
            fields(origin = %input.source.origin, identifier = %input.source.identifier)
        )
    )]
    pub async fn scan(&self, input: &ScanInput) -> ScanResult<ScanReport> {
        let start = Instant::now();
        let content = InputGuard::guard(&input.content, self.config.max_input_chars)?;
        let outcome = self.router.run(&content).await?;

        let metadata = ReportMetadata {
            scanner: SCANNER_ID.to_string(),
            analyzer: outcome.analyzer,
            mode: self.config.mode.as_str().to_string(),
            source: input.source.clone(),
            content_length: content.chars().count(),
            scanned_at: SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
            fallback_reason: outcome.fallback_reason,
        };
        let report = ScanReport::new(&outcome.result, metadata);

        log::debug!(
            "Scan finished | source: {} {} | result: {} | severity: {} | elapsed: {:?}",
            input.source.origin,
            input.source.identifier,
            outcome.result.classification,
            report.severity(),
            start.elapsed()
        );
        Ok(report)
    }

    /// 扫描直接文本
    pub async fn scan_text(&self, text: &str) -> ScanResult<ScanReport> {
        self.scan(&ScanInput::text(text)).await
    }

    /// 批量扫描
    /// 每项独立成败，单项失败不影响其余项；返回顺序与输入顺序一致
    pub async fn scan_batch(&self, inputs: Vec<ScanInput>) -> Vec<ScanResult<ScanReport>> {
        let total = inputs.len();
        if total == 0 {
            return Vec::new();
        }

        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.config.batch_concurrency.max(1)));
        let mut handles = Vec::with_capacity(total);

        for input in inputs {
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => {
                    handles.push(Err(ScanError::AsyncTaskError(format!(
                        "Batch semaphore closed: {}",
                        e
                    ))));
                    continue;
                }
            };
            let scanner = self.clone();
            handles.push(Ok(tokio::spawn(async move {
                let result = scanner.scan(&input).await;
                drop(permit);
                result
            })));
        }

        let mut results = Vec::with_capacity(total);
        for handle in handles {
            let result = match handle {
                Ok(handle) => match handle.await {
                    Ok(result) => result,
                    Err(e) => Err(ScanError::AsyncTaskError(format!("Scan task failed: {}", e))),
                },
                Err(e) => Err(e),
            };
            results.push(result);
        }

        let failed = results.iter().filter(|r| r.is_err()).count();
        log::info!(
            "Batch scan finished | items: {} | failed: {} | elapsed: {:?}",
            total,
            failed,
            start.elapsed()
        );
        results
    }
}

/// 生成指定编码的接种内容
pub fn inoculate(code: &str) -> ScanResult<InoculationContent> {
    Ok(sctscan_engine::generate(code)?)
}

/// 全部分类的接种内容
pub fn inoculate_all() -> Vec<InoculationContent> {
    sctscan_engine::generate_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisMode;
    use crate::input::SourceInfo;
    use async_trait::async_trait;
    use sctscan_engine::AnalysisResult;

    const BREAKING: &str = "BREAKING: Share this before they delete it!";

    #[derive(Debug)]
    struct DownAnalyzer;

    #[async_trait]
    impl ContentAnalyzer for DownAnalyzer {
        fn name(&self) -> &str {
            "down-model"
        }

        async fn analyze(&self, _content: &str) -> ScanResult<AnalysisResult> {
            Err(ScanError::UpstreamError("service unavailable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_scan_text_local() {
        let scanner = Scanner::new(ScanConfig::local_only()).unwrap();
        let report = scanner.scan_text(BREAKING).await.unwrap();
        assert_eq!(report.body.classification_code.as_deref(), Some("SCT-007"));
        assert_eq!(report.metadata.analyzer, "local_patterns");
        assert_eq!(report.metadata.mode, "local");
        assert_eq!(report.metadata.source, SourceInfo::direct());
        assert_eq!(report.metadata.content_length, BREAKING.chars().count());
        assert!(report.metadata.scanned_at > 0);
        assert!(report.metadata.fallback_reason.is_none());
    }

    #[tokio::test]
    async fn test_scan_empty_input() {
        let scanner = Scanner::new(ScanConfig::local_only()).unwrap();
        let err = scanner.scan_text(" \n\t ").await.unwrap_err();
        assert!(matches!(err, ScanError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_scan_truncates_to_max_chars() {
        let config = ScanConfig::builder().max_input_chars(10).build();
        let scanner = Scanner::new(config).unwrap();
        let report = scanner
            .scan_text("The weather today is sunny with a high of 72 degrees.")
            .await
            .unwrap();
        assert_eq!(report.metadata.content_length, 10);
    }

    #[tokio::test]
    async fn test_deep_without_credential_falls_back() {
        let config = ScanConfig::builder().mode(AnalysisMode::Deep).build();
        let scanner = Scanner::new(config).unwrap();
        let report = scanner.scan_text(BREAKING).await.unwrap();
        assert_eq!(report.metadata.analyzer, "local_patterns");
        assert_eq!(report.metadata.mode, "deep");
        assert!(report.metadata.fallback_reason.is_some());
        assert!(!report.is_benign());
    }

    #[tokio::test]
    async fn test_deep_strict_without_credential_errors() {
        let config = ScanConfig::builder().mode(AnalysisMode::DeepStrict).build();
        let scanner = Scanner::new(config).unwrap();
        let err = scanner.scan_text(BREAKING).await.unwrap_err();
        assert!(matches!(err, ScanError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_custom_deep_analyzer_fallback() {
        let config = ScanConfig::builder().mode(AnalysisMode::Deep).build();
        let scanner = Scanner::with_deep_analyzer(config, Arc::new(DownAnalyzer)).unwrap();
        let report = scanner.scan_text(BREAKING).await.unwrap();
        assert_eq!(report.metadata.analyzer, "local_patterns");
        assert!(report
            .metadata
            .fallback_reason
            .as_deref()
            .unwrap()
            .contains("service unavailable"));
    }

    #[tokio::test]
    async fn test_batch_preserves_order() {
        let config = ScanConfig::builder().batch_concurrency(2).build();
        let scanner = Scanner::new(config).unwrap();
        let inputs = vec![
            ScanInput::new(SourceInfo::feed_item("a"), BREAKING),
            ScanInput::new(SourceInfo::feed_item("b"), "   "),
            ScanInput::new(SourceInfo::feed_item("c"), "The weather today is sunny."),
            ScanInput::new(SourceInfo::feed_item("d"), BREAKING),
        ];
        let results = scanner.scan_batch(inputs).await;
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().metadata.source.identifier, "a");
        assert!(matches!(results[1], Err(ScanError::InvalidInput(_))));
        assert!(results[2].as_ref().unwrap().is_benign());
        assert_eq!(results[3].as_ref().unwrap().metadata.source.identifier, "d");
    }

    #[tokio::test]
    async fn test_batch_empty() {
        let scanner = Scanner::new(ScanConfig::default()).unwrap();
        assert!(scanner.scan_batch(Vec::new()).await.is_empty());
    }

    #[test]
    fn test_inoculate() {
        assert_eq!(inoculate("sct-7").unwrap().code, "SCT-007");
        assert!(matches!(inoculate("SCT-099"), Err(ScanError::NotFound(_))));
        assert_eq!(inoculate_all().len(), 12);
    }
}
