use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 无显著操纵模式时的固定建议
pub const BENIGN_RECOMMENDATION: &str = "No significant manipulation patterns detected.";
/// 良性结果的行为目标占位
pub const BENIGN_OBJECTIVE: &str = "None identified.";

/// 分类结论：良性，或某一个分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    Benign,
    Category { code: String, name: String },
}

impl Classification {
    #[inline]
    pub fn is_benign(&self) -> bool {
        matches!(self, Classification::Benign)
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Classification::Benign => None,
            Classification::Category { code, .. } => Some(code),
        }
    }

    /// 展示名（分类名或 "Benign"）
    pub fn label(&self) -> &str {
        match self {
            Classification::Benign => "Benign",
            Classification::Category { name, .. } => name,
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Benign => write!(f, "Benign"),
            Classification::Category { code, name } => write!(f, "{} ({})", name, code),
        }
    }
}

/// 排名后的技术条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technique {
    pub code: String,
    pub name: String,
    pub confidence: f64,
    pub evidence: String,
}

/// 聚合分析结果
/// 不变量：Benign ⇔ severity == 0 ⇔ stage == 0 ⇔ techniques 为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub classification: Classification,
    pub stage: u8,
    pub severity: u8,
    pub techniques: Vec<Technique>,
    pub vulnerability_surfaces: Vec<String>,
    pub behavioral_objective: String,
    pub recommendations: Vec<String>,
    pub recursive_potential: f64,
    pub summary: String,
}

impl AnalysisResult {
    /// 良性结果（零命中路径）
    pub fn benign() -> Self {
        Self {
            classification: Classification::Benign,
            stage: 0,
            severity: 0,
            techniques: Vec::new(),
            vulnerability_surfaces: Vec::new(),
            behavioral_objective: BENIGN_OBJECTIVE.to_string(),
            recommendations: vec![BENIGN_RECOMMENDATION.to_string()],
            recursive_potential: 0.0,
            summary: "No cognitive exploitation vectors were identified in this content.".to_string(),
        }
    }

    #[inline]
    pub fn is_benign(&self) -> bool {
        self.classification.is_benign()
    }

    /// 检查结果不变量，返回第一条被破坏的约束
    pub fn invariant_violation(&self) -> Option<&'static str> {
        if self.is_benign() {
            if self.severity != 0 {
                return Some("benign result must have severity 0");
            }
            if self.stage != 0 {
                return Some("benign result must have stage 0");
            }
            if !self.techniques.is_empty() {
                return Some("benign result must have no techniques");
            }
        } else {
            if !(1..=10).contains(&self.severity) {
                return Some("classified result must have severity in 1..=10");
            }
            if !(1..=5).contains(&self.stage) {
                return Some("classified result must have stage in 1..=5");
            }
            if self.techniques.is_empty() {
                return Some("classified result must list at least one technique");
            }
        }
        None
    }
}
