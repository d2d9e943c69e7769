use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use sctscan_engine::{AnalysisResult, InoculationContent};

use super::schema::{ReportBody, ScanReport};
use crate::error::{ScanError, ScanResult};

const BANNER_WIDTH: usize = 58;
const SEVERITY_BAR_WIDTH: usize = 10;
const SECTION_RULE: &str = "  ──────────────────────────────────────────────────────";

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ScanError::InvalidInput(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

// ===================== 文本渲染辅助 =====================

/// 标题过长时整体加宽，保证右边框对齐
fn write_banner(out: &mut String, title: &str) {
    let inner = (BANNER_WIDTH - 2).max(title.chars().count() + 4);
    let _ = writeln!(out, "╔{}╗", "═".repeat(inner));
    let _ = writeln!(out, "║  {:<width$}║", title, width = inner - 2);
    let _ = writeln!(out, "╚{}╝", "═".repeat(inner));
}

fn severity_bar(severity: u8) -> String {
    let filled = usize::from(severity.min(10)) * SEVERITY_BAR_WIDTH / 10;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(SEVERITY_BAR_WIDTH - filled)
    )
}

fn write_body(out: &mut String, body: &ReportBody) {
    write_banner(out, "SEITHAR COGNITIVE THREAT SCANNER");
    out.push('\n');

    match &body.classification_code {
        Some(code) => {
            let _ = writeln!(out, "  CLASSIFICATION: {} ({})", body.classification, code);
        }
        None => {
            let _ = writeln!(out, "  CLASSIFICATION: {}", body.classification);
        }
    }
    let _ = writeln!(out, "  STAGE:          {}/5", body.stage);
    let _ = writeln!(
        out,
        "  SEVERITY:       [{}] {}/10 ({})",
        severity_bar(body.severity),
        body.severity,
        body.severity_label
    );
    let _ = writeln!(out, "  RECURSIVE:      {:.2}", body.recursive_potential);
    out.push('\n');
    let _ = writeln!(out, "  {}", body.summary);

    if !body.techniques.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "  TECHNIQUES");
        let _ = writeln!(out, "{}", SECTION_RULE);
        for t in &body.techniques {
            let _ = writeln!(out, "  [{}] {} (confidence {:.2})", t.code, t.name, t.confidence);
            if !t.evidence.is_empty() {
                let _ = writeln!(out, "        {}", t.evidence);
            }
        }
    }

    if !body.vulnerability_surfaces.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "  VULNERABILITY SURFACES");
        let _ = writeln!(out, "{}", SECTION_RULE);
        for surface in &body.vulnerability_surfaces {
            let _ = writeln!(out, "  • {}", surface);
        }
    }

    out.push('\n');
    let _ = writeln!(out, "  BEHAVIORAL OBJECTIVE");
    let _ = writeln!(out, "{}", SECTION_RULE);
    let _ = writeln!(out, "  {}", body.behavioral_objective);

    out.push('\n');
    let _ = writeln!(out, "  RECOMMENDATIONS");
    let _ = writeln!(out, "{}", SECTION_RULE);
    for (i, rec) in body.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, rec);
    }
}

fn write_report(out: &mut String, report: &ScanReport) {
    write_body(out, &report.body);
    let meta = &report.metadata;
    out.push('\n');
    let _ = writeln!(
        out,
        "  source: {} {} | analyzer: {} | mode: {} | chars: {}",
        meta.source.origin, meta.source.identifier, meta.analyzer, meta.mode, meta.content_length
    );
    if let Some(reason) = &meta.fallback_reason {
        let _ = writeln!(out, "  fallback: {}", reason);
    }
}

fn write_inoculation(out: &mut String, content: &InoculationContent) {
    write_banner(out, &format!("INOCULATION: {} ({})", content.name, content.code));
    out.push('\n');
    let _ = writeln!(out, "  MECHANISM");
    let _ = writeln!(out, "{}", SECTION_RULE);
    for (i, paragraph) in content.paragraphs().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "  {}", paragraph);
    }
    out.push('\n');
    let _ = writeln!(out, "  RECOGNITION TRIGGERS");
    let _ = writeln!(out, "{}", SECTION_RULE);
    for trigger in &content.recognition_triggers {
        let _ = writeln!(out, "  • {}", trigger);
    }
    out.push('\n');
    let _ = writeln!(out, "  WEAKENED EXAMPLE");
    let _ = writeln!(out, "{}", SECTION_RULE);
    let _ = writeln!(out, "  {}", content.weakened_example);
}

// ===================== 对外渲染接口 =====================

/// 渲染分析结果（不含元数据）
pub fn render(result: &AnalysisResult, format: OutputFormat) -> ScanResult<String> {
    let body = ReportBody::from(result);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&body)?),
        OutputFormat::Text => {
            let mut out = String::with_capacity(1024);
            write_body(&mut out, &body);
            Ok(out)
        }
    }
}

/// 渲染完整报告
pub fn render_report(report: &ScanReport, format: OutputFormat) -> ScanResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = String::with_capacity(1024);
            write_report(&mut out, report);
            Ok(out)
        }
    }
}

/// 渲染批量结果
/// JSON 输出为数组，失败项为 {"error": "..."}；文本输出逐项分隔
pub fn render_batch(results: &[ScanResult<ScanReport>], format: OutputFormat) -> ScanResult<String> {
    match format {
        OutputFormat::Json => {
            let items = results
                .iter()
                .map(|item| match item {
                    Ok(report) => serde_json::to_value(report),
                    Err(e) => Ok(serde_json::json!({ "error": e.to_string() })),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(serde_json::to_string_pretty(&items)?)
        }
        OutputFormat::Text => {
            let mut out = String::with_capacity(1024 * results.len().max(1));
            for (i, item) in results.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "[{}/{}]", i + 1, results.len());
                match item {
                    Ok(report) => write_report(&mut out, report),
                    Err(e) => {
                        let _ = writeln!(out, "  ERROR: {}", e);
                    }
                }
            }
            Ok(out)
        }
    }
}

/// 渲染单条接种内容
pub fn render_inoculation(content: &InoculationContent, format: OutputFormat) -> ScanResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(content)?),
        OutputFormat::Text => {
            let mut out = String::with_capacity(1024);
            write_inoculation(&mut out, content);
            Ok(out)
        }
    }
}

pub fn render_inoculations(contents: &[InoculationContent], format: OutputFormat) -> ScanResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(contents)?),
        OutputFormat::Text => {
            let mut out = String::with_capacity(1024 * contents.len().max(1));
            for (i, content) in contents.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_inoculation(&mut out, content);
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::PatternAnalyzer;
    use crate::input::SourceInfo;
    use crate::report::{ReportMetadata, SCANNER_ID};

    fn breaking() -> AnalysisResult {
        PatternAnalyzer::new()
            .unwrap()
            .analyze_text("BREAKING: Share this before they delete it!")
            .unwrap()
    }

    #[test]
    fn test_severity_bar() {
        assert_eq!(severity_bar(0), "░░░░░░░░░░");
        assert_eq!(severity_bar(7), "███████░░░");
        assert_eq!(severity_bar(10), "██████████");
    }

    #[test]
    fn test_banner_borders_align() {
        for code in ["SCT-001", "SCT-012"] {
            let content = sctscan_engine::generate(code).unwrap();
            let mut out = String::new();
            write_banner(&mut out, &format!("INOCULATION: {} ({})", content.name, content.code));
            let widths: Vec<usize> = out.lines().map(|line| line.chars().count()).collect();
            assert_eq!(widths.len(), 3);
            assert!(widths.iter().all(|w| *w == widths[0]), "{}: {:?}", code, widths);
            assert!(out.contains(&content.name));
        }

        let mut out = String::new();
        write_banner(&mut out, "SEITHAR COGNITIVE THREAT SCANNER");
        assert!(out.lines().all(|line| line.chars().count() == BANNER_WIDTH));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_text_sections() {
        let text = render(&breaking(), OutputFormat::Text).unwrap();
        assert!(text.contains("SEITHAR COGNITIVE THREAT SCANNER"));
        assert!(text.contains("(SCT-007)"));
        assert!(text.contains("TECHNIQUES"));
        assert!(text.contains("RECOMMENDATIONS"));
        assert!(text.contains("/10 ("));
    }

    #[test]
    fn test_render_benign_text() {
        let text = render(&AnalysisResult::benign(), OutputFormat::Text).unwrap();
        assert!(text.contains("CLASSIFICATION: Benign"));
        assert!(!text.contains("TECHNIQUES"));
        assert!(text.contains("0/10 (None)"));
    }

    #[test]
    fn test_render_json_body() {
        let json = render(&breaking(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["classification_code"], "SCT-007");
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_render_batch_with_error() {
        let report = ScanReport::new(
            &breaking(),
            ReportMetadata {
                scanner: SCANNER_ID.to_string(),
                analyzer: "local_patterns".to_string(),
                mode: "local".to_string(),
                source: SourceInfo::direct(),
                content_length: 44,
                scanned_at: 0,
                fallback_reason: None,
            },
        );
        let results = vec![
            Ok(report),
            Err(ScanError::InvalidInput("content is empty".to_string())),
        ];

        let json = render_batch(&results, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["classification_code"], "SCT-007");
        assert!(value[1]["error"].as_str().unwrap().contains("content is empty"));

        let text = render_batch(&results, OutputFormat::Text).unwrap();
        assert!(text.contains("[1/2]"));
        assert!(text.contains("ERROR: Invalid input"));
    }

    #[test]
    fn test_render_inoculation() {
        let content = sctscan_engine::generate("SCT-007").unwrap();
        let text = render_inoculation(&content, OutputFormat::Text).unwrap();
        assert!(text.contains("INOCULATION:"));
        assert!(text.contains("RECOGNITION TRIGGERS"));
        let json = render_inoculation(&content, OutputFormat::Json).unwrap();
        assert!(json.contains("\"mechanism_exposure\""));

        let all = render_inoculations(&sctscan_engine::generate_all(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&all).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 12);
    }
}
