//! 模型提示词构建 + 回复解析校验
//! 回复必须是 JSON（直接给出或位于 ``` 代码块中），校验后转为 AnalysisResult：
//! 1. 未知分类编码的技术条目丢弃，同编码保留最高置信度
//! 2. 置信度截断到 [0,1]，严重度/阶段截断到合法区间
//! 3. 非 Benign 结论却没有任何合法技术条目，视为上游错误

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

use sctscan_engine::scorer::advisory_for;
use sctscan_engine::utils::truncate_chars;
use sctscan_engine::{
    AnalysisResult, Classification, TaxonomyCategory, TaxonomyRegistry, Technique, MAX_TECHNIQUES,
};

use crate::error::{ScanError, ScanResult};
use crate::utils::preview_compact;

/// 提示词中每个分类列出的指示描述数
const PROMPT_INDICATORS_PER_CATEGORY: usize = 3;
/// 错误信息中回复原文的预览长度
const REPLY_PREVIEW_CHARS: usize = 200;

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").unwrap());

const PROMPT_HEADER: &str = "You are the Seithar Cognitive Threat Scanner, an automated instrument for \
identifying cognitive exploitation vectors in content.\n\n\
Analyze the following content and produce a structured JSON report.\n\n\
## Seithar Cognitive Defense Taxonomy\n\n";

const PROMPT_SCHEMA: &str = r#"## Required Output

Respond with ONLY valid JSON matching this schema:

{
  "threat_classification": "<one taxonomy name or code from above>|Benign",
  "stage": 1-5,
  "severity": 1-10,
  "techniques": [
    {
      "code": "SCT-XXX",
      "name": "technique name",
      "confidence": 0.0-1.0,
      "evidence": "specific quote or pattern from the content"
    }
  ],
  "vulnerability_surface": "what psychological entry point is being targeted",
  "behavioral_objective": "what the content wants the reader to DO",
  "recursive_potential": 0.0-1.0,
  "defensive_recommendations": ["list of 2-3 specific defenses"],
  "summary": "2-3 sentence clinical summary"
}
"#;

/// 分类参考文本（编码、名称、描述、类比、前三条指示）
pub fn build_taxonomy_text(registry: &TaxonomyRegistry) -> String {
    let mut out = String::new();
    for cat in registry.list_categories() {
        let indicators: Vec<&str> = cat
            .indicators
            .iter()
            .take(PROMPT_INDICATORS_PER_CATEGORY)
            .copied()
            .collect();
        out.push_str(&format!("**{}: {}**: {}\n", cat.code, cat.name, cat.description));
        out.push_str(&format!(
            "  Cyber: {} | Cognitive: {}\n",
            cat.cyber_analog, cat.cognitive_analog
        ));
        out.push_str(&format!("  Indicators: {}\n\n", indicators.join("; ")));
    }
    out
}

/// 完整提示词（内容按字符数截断）
pub fn build_prompt(content: &str, max_content_chars: usize) -> String {
    let taxonomy = build_taxonomy_text(TaxonomyRegistry::global());
    let content = truncate_chars(content, max_content_chars);
    format!(
        "{}{}\n## Content to Analyze\n\n{}\n\n{}",
        PROMPT_HEADER, taxonomy, content, PROMPT_SCHEMA
    )
}

/// 从回复中提取 JSON 对象：先整体解析，再尝试代码块
pub fn extract_json(reply: &str) -> ScanResult<Value> {
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(reply.trim()) {
        return Ok(value);
    }
    let fenced = FENCED_JSON
        .captures(reply)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| {
            ScanError::UpstreamError(format!(
                "failed to parse analyzer reply as JSON: {}",
                preview_compact(reply, REPLY_PREVIEW_CHARS)
            ))
        })?;
    serde_json::from_str::<Value>(fenced.as_str()).map_err(|e| {
        ScanError::UpstreamError(format!("fenced JSON block is malformed: {}", e))
    })
}

/// 单值或列表
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        let items = match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawTechnique {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    evidence: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawReport {
    #[serde(default)]
    threat_classification: Option<String>,
    #[serde(default)]
    stage: Option<f64>,
    #[serde(default)]
    severity: Option<f64>,
    #[serde(default)]
    techniques: Vec<RawTechnique>,
    #[serde(default)]
    vulnerability_surface: Option<OneOrMany>,
    #[serde(default)]
    behavioral_objective: Option<String>,
    #[serde(default)]
    recursive_potential: Option<f64>,
    #[serde(default)]
    defensive_recommendations: Vec<String>,
    #[serde(default)]
    summary: Option<String>,
}

/// 有限数值截断到区间，非有限值视为缺失
#[inline]
fn finite_clamp(v: Option<f64>, min: f64, max: f64) -> Option<f64> {
    v.filter(|x| x.is_finite()).map(|x| x.clamp(min, max))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// 按编码或名称匹配分类结论
fn classification_matches(label: &str, cat: &TaxonomyCategory) -> bool {
    let label = label.trim();
    label.eq_ignore_ascii_case(cat.code) || label.eq_ignore_ascii_case(cat.name)
}

/// 解析模型回复为 AnalysisResult
pub fn parse_reply(reply: &str) -> ScanResult<AnalysisResult> {
    let value = extract_json(reply)?;
    let raw: RawReport = serde_json::from_value(value).map_err(|e| {
        ScanError::UpstreamError(format!("analyzer reply does not match report schema: {}", e))
    })?;
    validate(raw)
}

fn validate(raw: RawReport) -> ScanResult<AnalysisResult> {
    let registry = TaxonomyRegistry::global();
    let label = non_empty(raw.threat_classification).ok_or_else(|| {
        ScanError::UpstreamError("analyzer reply is missing threat_classification".to_string())
    })?;

    // 同编码保留最高置信度
    let mut best: FxHashMap<&'static str, (&'static TaxonomyCategory, f64, String)> =
        FxHashMap::default();
    for item in raw.techniques {
        let Some(code) = non_empty(item.code) else {
            continue;
        };
        let category = match registry.resolve(&code) {
            Ok(cat) => cat,
            Err(_) => {
                log::debug!("Drop technique with unknown taxonomy code: {}", code);
                continue;
            }
        };
        let confidence = finite_clamp(item.confidence, 0.0, 1.0).unwrap_or(0.0);
        let evidence = non_empty(item.evidence).unwrap_or_default();
        match best.get(category.code) {
            Some((_, existing, _)) if *existing >= confidence => {}
            _ => {
                best.insert(category.code, (category, confidence, evidence));
            }
        }
    }

    let mut ranked: Vec<(&'static TaxonomyCategory, f64, String)> = best.into_values().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| registry.position(a.0.code).cmp(&registry.position(b.0.code)))
    });
    ranked.truncate(MAX_TECHNIQUES);

    if ranked.is_empty() {
        if label.eq_ignore_ascii_case("benign") {
            let mut result = AnalysisResult::benign();
            if let Some(summary) = non_empty(raw.summary) {
                result.summary = summary;
            }
            return Ok(result);
        }
        return Err(ScanError::UpstreamError(format!(
            "analyzer classified content as '{}' but listed no valid taxonomy techniques",
            label
        )));
    }

    // 结论指向已列出的技术时采用之，否则取置信度最高的技术
    let primary = ranked
        .iter()
        .map(|(cat, _, _)| *cat)
        .find(|cat| classification_matches(&label, cat))
        .unwrap_or(ranked[0].0);

    let top_confidence = ranked[0].1;
    let severity = finite_clamp(raw.severity, 1.0, 10.0)
        .unwrap_or(1.0 + 9.0 * top_confidence)
        .round()
        .clamp(1.0, 10.0) as u8;
    let stage = finite_clamp(raw.stage, 1.0, 5.0)
        .map(|s| s.round() as u8)
        .unwrap_or_else(|| {
            ranked
                .iter()
                .map(|(cat, _, _)| cat.stage_class.stage())
                .max()
                .unwrap_or(1)
        });

    let mut vulnerability_surfaces = raw
        .vulnerability_surface
        .map(OneOrMany::into_vec)
        .unwrap_or_default();
    let mut recommendations: Vec<String> = raw
        .defensive_recommendations
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if vulnerability_surfaces.is_empty() || recommendations.is_empty() {
        let fill_surfaces = vulnerability_surfaces.is_empty();
        let fill_recs = recommendations.is_empty();
        for (cat, _, _) in &ranked {
            if let Some(advisory) = advisory_for(cat.code) {
                if fill_surfaces {
                    extend_unique(&mut vulnerability_surfaces, advisory.vulnerability_surfaces);
                }
                if fill_recs {
                    extend_unique(&mut recommendations, advisory.recommendations);
                }
            }
        }
    }

    let behavioral_objective = non_empty(raw.behavioral_objective)
        .or_else(|| advisory_for(primary.code).map(|a| a.behavioral_objective.to_string()))
        .unwrap_or_default();
    let recursive_potential = finite_clamp(raw.recursive_potential, 0.0, 1.0).unwrap_or(0.0);
    let summary = non_empty(raw.summary).unwrap_or_else(|| {
        format!(
            "Primary vector is {} ({}); severity {}/10 at operation stage {}/5.",
            primary.name, primary.code, severity, stage
        )
    });

    let techniques = ranked
        .into_iter()
        .map(|(cat, confidence, evidence)| Technique {
            code: cat.code.to_string(),
            name: cat.name.to_string(),
            confidence,
            evidence,
        })
        .collect();

    let result = AnalysisResult {
        classification: Classification::Category {
            code: primary.code.to_string(),
            name: primary.name.to_string(),
        },
        stage,
        severity,
        techniques,
        vulnerability_surfaces,
        behavioral_objective,
        recommendations,
        recursive_potential,
        summary,
    };

    match result.invariant_violation() {
        Some(violation) => Err(ScanError::UpstreamError(format!(
            "analyzer reply violates result invariant: {}",
            violation
        ))),
        None => Ok(result),
    }
}

fn extend_unique(target: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !target.iter().any(|existing| existing == item) {
            target.push((*item).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_taxonomy_and_truncates() {
        let content = "x".repeat(9000);
        let prompt = build_prompt(&content, 8000);
        assert!(prompt.contains("**SCT-001: Emotional Hijacking**"));
        assert!(prompt.contains("**SCT-012: Commitment Escalation & Self-Binding**"));
        assert!(prompt.contains(&"x".repeat(8000)));
        assert!(!prompt.contains(&"x".repeat(8001)));
        assert!(prompt.contains("\"threat_classification\""));
    }

    #[test]
    fn test_extract_direct_and_fenced() {
        let direct = extract_json(r#" {"a": 1} "#).unwrap();
        assert_eq!(direct["a"], 1);

        let fenced = "Here is the report:\n```json\n{\"a\": 2}\n```\nDone.";
        assert_eq!(extract_json(fenced).unwrap()["a"], 2);

        let bare_fence = "```\n{\"a\": 3}\n```";
        assert_eq!(extract_json(bare_fence).unwrap()["a"], 3);

        assert!(matches!(
            extract_json("I cannot help with that."),
            Err(ScanError::UpstreamError(_))
        ));
    }

    #[test]
    fn test_parse_valid_reply() {
        let reply = r#"```json
{
  "threat_classification": "Recursive Infection",
  "stage": 4.6,
  "severity": 12,
  "techniques": [
    {"code": "SCT-001", "name": "x", "confidence": 0.4, "evidence": "BREAKING"},
    {"code": "sct-7", "name": "y", "confidence": 1.7, "evidence": "share this"},
    {"code": "DISARM T0049", "name": "z", "confidence": 0.9, "evidence": "flood"},
    {"code": "SCT-001", "name": "dup", "confidence": 0.2, "evidence": "dup"}
  ],
  "vulnerability_surface": "impulse to share",
  "behavioral_objective": "Redistribute before thinking",
  "recursive_potential": 0.95,
  "defensive_recommendations": ["Wait before sharing"],
  "summary": "Viral payload."
}
```"#;
        let result = parse_reply(reply).unwrap();
        assert_eq!(result.classification.code(), Some("SCT-007"));
        assert_eq!(result.severity, 10);
        assert_eq!(result.stage, 5);
        let codes: Vec<&str> = result.techniques.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["SCT-007", "SCT-001"]);
        assert_eq!(result.techniques[0].confidence, 1.0);
        assert_eq!(result.techniques[0].name, "Recursive Infection");
        assert_eq!(result.techniques[1].evidence, "BREAKING");
        assert_eq!(result.vulnerability_surfaces, vec!["impulse to share".to_string()]);
        assert_eq!(result.recommendations, vec!["Wait before sharing".to_string()]);
        assert_eq!(result.summary, "Viral payload.");
    }

    #[test]
    fn test_narrative_errors_field_ignored() {
        assert!(!build_prompt("text", 100).contains("narrative_errors_exploited"));
        let reply = r#"{"threat_classification": "SCT-007", "severity": 5,
            "techniques": [{"code": "SCT-007", "confidence": 0.7}],
            "narrative_errors_exploited": ["scarcity", "in-group loyalty"]}"#;
        let result = parse_reply(reply).unwrap();
        assert_eq!(result.classification.code(), Some("SCT-007"));
    }

    #[test]
    fn test_parse_benign_reply() {
        let reply = r#"{"threat_classification": "Benign", "severity": 0, "techniques": [], "summary": "Weather report."}"#;
        let result = parse_reply(reply).unwrap();
        assert!(result.is_benign());
        assert_eq!(result.severity, 0);
        assert_eq!(result.summary, "Weather report.");
    }

    #[test]
    fn test_parse_rejects_classified_without_techniques() {
        let reply = r#"{"threat_classification": "Narrative Capture", "severity": 7, "techniques": [{"code": "DISARM T0001", "confidence": 0.8}]}"#;
        assert!(matches!(parse_reply(reply), Err(ScanError::UpstreamError(_))));

        let reply = r#"{"severity": 7}"#;
        assert!(matches!(parse_reply(reply), Err(ScanError::UpstreamError(_))));
    }

    #[test]
    fn test_parse_fills_missing_fields_from_advisory() {
        let reply = r#"{"threat_classification": "SCT-012", "techniques": [{"code": "SCT-012", "confidence": 0.5}]}"#;
        let result = parse_reply(reply).unwrap();
        assert_eq!(result.classification.code(), Some("SCT-012"));
        // 缺失的严重度按最高置信度推算
        assert_eq!(result.severity, 6);
        assert_eq!(result.stage, 4);
        assert!(!result.recommendations.is_empty());
        assert!(!result.vulnerability_surfaces.is_empty());
        assert!(!result.behavioral_objective.is_empty());
        assert_eq!(result.recursive_potential, 0.0);
    }
}
