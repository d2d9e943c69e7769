use serde::{Deserialize, Serialize};

use sctscan_engine::{AnalysisResult, Technique};

use crate::input::SourceInfo;

/// 扫描器标识（写入报告元数据）
pub const SCANNER_ID: &str = concat!("sctscan/", env!("CARGO_PKG_VERSION"));

/// 严重度文字标签（0 为 Benign 专用）
pub fn severity_label(severity: u8) -> &'static str {
    match severity {
        0 => "None",
        1 => "Negligible",
        2 => "Minimal",
        3 => "Low",
        4 => "Moderate-Low",
        5 => "Moderate",
        6 => "Moderate-High",
        7 => "High",
        8 => "Severe",
        9 => "Critical",
        10 => "Maximum",
        _ => "Unknown",
    }
}

/// 报告主体（不含元数据）
/// 字段名即对外 JSON 结构，修改需保持兼容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportBody {
    /// "Benign" 或分类名
    pub classification: String,
    pub classification_code: Option<String>,
    pub stage: u8,
    pub severity: u8,
    pub severity_label: String,
    pub techniques: Vec<Technique>,
    pub vulnerability_surfaces: Vec<String>,
    pub behavioral_objective: String,
    pub recommendations: Vec<String>,
    pub recursive_potential: f64,
    pub summary: String,
}

impl From<&AnalysisResult> for ReportBody {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            classification: result.classification.label().to_string(),
            classification_code: result.classification.code().map(str::to_string),
            stage: result.stage,
            severity: result.severity,
            severity_label: severity_label(result.severity).to_string(),
            techniques: result.techniques.clone(),
            vulnerability_surfaces: result.vulnerability_surfaces.clone(),
            behavioral_objective: result.behavioral_objective.clone(),
            recommendations: result.recommendations.clone(),
            recursive_potential: result.recursive_potential,
            summary: result.summary.clone(),
        }
    }
}

/// 报告元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub scanner: String,
    /// 实际产出结果的分析器（local_patterns 或模型标识）
    pub analyzer: String,
    pub mode: String,
    pub source: SourceInfo,
    /// 参与分析的内容字符数（输入守卫处理后）
    pub content_length: usize,
    /// Unix 时间戳（秒）
    pub scanned_at: u64,
    pub fallback_reason: Option<String>,
}

/// 完整扫描报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(flatten)]
    pub body: ReportBody,
    pub metadata: ReportMetadata,
}

impl ScanReport {
    pub fn new(result: &AnalysisResult, metadata: ReportMetadata) -> Self {
        Self {
            body: ReportBody::from(result),
            metadata,
        }
    }

    #[inline]
    pub fn is_benign(&self) -> bool {
        self.body.classification_code.is_none()
    }

    #[inline]
    pub fn severity(&self) -> u8 {
        self.body.severity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SourceInfo;

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            scanner: SCANNER_ID.to_string(),
            analyzer: "local_patterns".to_string(),
            mode: "local".to_string(),
            source: SourceInfo::url("https://example.org/a"),
            content_length: 42,
            scanned_at: 1_700_000_000,
            fallback_reason: None,
        }
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(severity_label(1), "Negligible");
        assert_eq!(severity_label(7), "High");
        assert_eq!(severity_label(10), "Maximum");
        assert_eq!(severity_label(0), "None");
        assert_eq!(severity_label(11), "Unknown");
    }

    #[test]
    fn test_json_schema_field_names() {
        let report = ScanReport::new(&AnalysisResult::benign(), metadata());
        let json = serde_json::to_value(&report).unwrap();
        for key in [
            "classification",
            "classification_code",
            "stage",
            "severity",
            "severity_label",
            "techniques",
            "vulnerability_surfaces",
            "behavioral_objective",
            "recommendations",
            "recursive_potential",
            "summary",
            "metadata",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(json["classification"], "Benign");
        assert!(json["classification_code"].is_null());
        let meta = &json["metadata"];
        for key in ["scanner", "analyzer", "mode", "source", "content_length", "scanned_at", "fallback_reason"] {
            assert!(meta.get(key).is_some(), "missing metadata key {}", key);
        }
        assert_eq!(meta["source"]["origin"], "url");
        assert_eq!(meta["source"]["identifier"], "https://example.org/a");

        let back: ScanReport = serde_json::from_value(json).unwrap();
        assert_eq!(back, report);
    }
}
