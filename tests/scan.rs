use std::sync::Arc;

use async_trait::async_trait;
use sctscan::{
    inoculate, inoculate_all, render_report, AnalysisMode, AnalysisResult, ContentAnalyzer,
    OriginKind, OutputFormat, ScanConfig, ScanError, ScanInput, ScanResult, Scanner, SourceInfo,
    TaxonomyRegistry,
};

const BREAKING: &str = "BREAKING: Share this before they delete it!";
const WEATHER: &str = "The weather today is sunny with a high of 72 degrees.";

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn local_scanner() -> Scanner {
    Scanner::new(ScanConfig::local_only()).unwrap()
}

#[tokio::test]
async fn breaking_news_share_pressure_is_flagged() {
    init_log();
    let report = local_scanner().scan_text(BREAKING).await.unwrap();

    assert!(!report.is_benign());
    assert!(report.body.severity >= 4);
    assert!(report
        .body
        .techniques
        .iter()
        .any(|t| t.code == "SCT-007"));
    assert!(report.body.summary.starts_with("Primary vector is "));
    assert!(report.body.recursive_potential > 0.0);
}

#[tokio::test]
async fn plain_weather_report_is_benign() {
    init_log();
    let report = local_scanner().scan_text(WEATHER).await.unwrap();

    assert!(report.is_benign());
    assert_eq!(report.body.classification, "Benign");
    assert_eq!(report.body.severity, 0);
    assert_eq!(report.body.stage, 0);
    assert!(report.body.techniques.is_empty());
    assert_eq!(report.body.recursive_potential, 0.0);
}

#[tokio::test]
async fn source_metadata_is_carried_through() {
    init_log();
    let input = ScanInput::new(SourceInfo::url("https://news.example/story"), BREAKING);
    let report = local_scanner().scan(&input).await.unwrap();

    assert_eq!(report.metadata.source.origin, OriginKind::Url);
    assert_eq!(report.metadata.source.identifier, "https://news.example/story");
    assert!(report.metadata.scanner.starts_with("sctscan/"));
}

#[tokio::test]
async fn batch_results_follow_input_order() {
    init_log();
    let scanner = Scanner::new(ScanConfig::builder().batch_concurrency(3).build()).unwrap();
    let texts = [BREAKING, WEATHER, "", BREAKING, WEATHER, "\t\n"];
    let inputs: Vec<ScanInput> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| ScanInput::new(SourceInfo::file(format!("item-{}.txt", i)), *text))
        .collect();

    let results = scanner.scan_batch(inputs).await;
    assert_eq!(results.len(), texts.len());
    for (i, result) in results.iter().enumerate() {
        if texts[i].trim().is_empty() {
            assert!(matches!(result, Err(ScanError::InvalidInput(_))), "item {}", i);
            continue;
        }
        let report = result.as_ref().unwrap();
        assert_eq!(report.metadata.source.identifier, format!("item-{}.txt", i));
        assert_eq!(report.is_benign(), texts[i] == WEATHER);
    }
}

#[derive(Debug)]
struct TimeoutAnalyzer;

#[async_trait]
impl ContentAnalyzer for TimeoutAnalyzer {
    fn name(&self) -> &str {
        "timeout-model"
    }

    async fn analyze(&self, _content: &str) -> ScanResult<AnalysisResult> {
        Err(ScanError::UpstreamError("request timed out".to_string()))
    }
}

#[tokio::test]
async fn deep_mode_falls_back_to_local_patterns() {
    init_log();
    let config = ScanConfig::builder().mode(AnalysisMode::Deep).build();
    let scanner = Scanner::with_deep_analyzer(config, Arc::new(TimeoutAnalyzer)).unwrap();
    let report = scanner.scan_text(BREAKING).await.unwrap();

    assert_eq!(report.metadata.analyzer, "local_patterns");
    assert!(report
        .metadata
        .fallback_reason
        .as_deref()
        .unwrap()
        .contains("timed out"));
    assert!(!report.is_benign());

    let strict = ScanConfig::builder().mode(AnalysisMode::DeepStrict).build();
    let scanner = Scanner::with_deep_analyzer(strict, Arc::new(TimeoutAnalyzer)).unwrap();
    assert!(matches!(
        scanner.scan_text(BREAKING).await,
        Err(ScanError::UpstreamError(_))
    ));
}

#[tokio::test]
async fn json_report_exposes_schema_keys() {
    init_log();
    let report = local_scanner().scan_text(BREAKING).await.unwrap();
    let json = render_report(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["classification_code"], report.body.classification_code.as_deref().unwrap());
    assert!(value["severity_label"].is_string());
    assert!(value["techniques"][0]["evidence"].is_string());
    assert_eq!(value["metadata"]["mode"], "local");
    assert_eq!(value["metadata"]["source"]["origin"], "text");
    assert!(value["metadata"]["fallback_reason"].is_null());
}

#[test]
fn inoculation_covers_every_category() {
    let all = inoculate_all();
    assert_eq!(all.len(), TaxonomyRegistry::global().len());
    for content in &all {
        assert!(!content.mechanism_exposure.is_empty());
        assert!(!content.recognition_triggers.is_empty());
        assert!(!content.weakened_example.is_empty());
    }

    assert_eq!(inoculate("3").unwrap().code, "SCT-003");
    assert!(matches!(inoculate("SCT-099"), Err(ScanError::NotFound(_))));
}
