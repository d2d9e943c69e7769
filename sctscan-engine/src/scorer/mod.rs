//! 评分 / 分类
//! 将 MatchMap 聚合为 AnalysisResult：
//! 1. 分类得分 = min(Σ 置信度, CATEGORY_SCORE_CAP)
//! 2. 得分降序排名，平局按规范顺序
//! 3. 严重度 = clamp(round(1 + 6 × 强度 + 1.0 × (分类数 − 1)), 1, 10)，强度 = max(得分 × 分类权重)
//! 4. 阶段 = 命中分类阶段贡献的最大值
//! 对任意合法 MatchMap 都有定义；仅未注册编码返回 NotFound，绝不降级为 Benign

use std::cmp::Ordering;

use crate::core::{
    AnalysisResult, CategoryMatches, Classification, MatchMap, StageClass, TaxonomyCategory,
    Technique,
};
use crate::error::{CoreError, CoreResult};
use crate::taxonomy::TaxonomyRegistry;

mod advisory;

pub use advisory::{advisory_for, Advisory, ADVISORIES};

/// 单分类得分上限
pub const CATEGORY_SCORE_CAP: f64 = 1.0;
/// 报告中最多列出的技术数
pub const MAX_TECHNIQUES: usize = 5;

const SEVERITY_BASE: f64 = 1.0;
const SEVERITY_INTENSITY_SCALE: f64 = 6.0;
const SEVERITY_BREADTH_STEP: f64 = 1.0;

/// 排名后的分类
#[derive(Debug, Clone, Copy)]
pub struct RankedCategory<'a> {
    pub category: &'static TaxonomyCategory,
    pub position: usize,
    pub score: f64,
    pub matches: &'a CategoryMatches,
}

/// 评分器（绑定一个注册表）
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'r> {
    registry: &'r TaxonomyRegistry,
}

impl Default for Scorer<'static> {
    fn default() -> Self {
        Self::new(TaxonomyRegistry::global())
    }
}

impl<'r> Scorer<'r> {
    pub fn new(registry: &'r TaxonomyRegistry) -> Self {
        Self { registry }
    }

    /// 按得分降序排名（平局按注册表规范位置）
    /// 未注册的分类编码返回 NotFound，不会被静默丢弃
    pub fn rank<'m>(&self, matches: &'m MatchMap) -> CoreResult<Vec<RankedCategory<'m>>> {
        let mut ranked = matches
            .iter()
            .map(|entry| {
                let category = self.registry.get_category(&entry.code)?;
                let position = self
                    .registry
                    .position(category.code)
                    .ok_or_else(|| CoreError::NotFound(entry.code.clone()))?;
                Ok(RankedCategory {
                    category,
                    position,
                    score: entry.score(CATEGORY_SCORE_CAP),
                    matches: entry,
                })
            })
            .collect::<CoreResult<Vec<RankedCategory<'m>>>>()?;

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.position.cmp(&b.position))
        });
        Ok(ranked)
    }

    /// 空映射返回 Benign；映射中的编码均来自注册表时不会失败
    pub fn classify(&self, matches: &MatchMap) -> CoreResult<AnalysisResult> {
        let ranked = self.rank(matches)?;
        let Some(primary) = ranked.first() else {
            return Ok(AnalysisResult::benign());
        };

        let severity = severity_for(&ranked);
        let stage = ranked
            .iter()
            .map(|r| r.category.stage_class.stage())
            .max()
            .unwrap_or(0);

        let top = &ranked[..ranked.len().min(MAX_TECHNIQUES)];
        let techniques: Vec<Technique> = top.iter().map(technique_for).collect();

        let mut vulnerability_surfaces: Vec<String> = Vec::new();
        let mut recommendations: Vec<String> = Vec::new();
        for r in top {
            if let Some(advisory) = advisory_for(r.category.code) {
                push_unique(&mut vulnerability_surfaces, advisory.vulnerability_surfaces);
                push_unique(&mut recommendations, advisory.recommendations);
            }
        }
        let behavioral_objective = advisory_for(primary.category.code)
            .map(|a| a.behavioral_objective.to_string())
            .unwrap_or_default();

        let recursive_potential = ranked
            .iter()
            .filter(|r| r.category.stage_class == StageClass::Propagation)
            .map(|r| r.score)
            .fold(0.0_f64, f64::max);

        let summary = summarize(primary, ranked.len(), severity, stage);

        Ok(AnalysisResult {
            classification: Classification::Category {
                code: primary.category.code.to_string(),
                name: primary.category.name.to_string(),
            },
            stage,
            severity,
            techniques,
            vulnerability_surfaces,
            behavioral_objective,
            recommendations,
            recursive_potential,
            summary,
        })
    }
}

/// 使用全局注册表分类
#[inline]
pub fn classify(matches: &MatchMap) -> CoreResult<AnalysisResult> {
    Scorer::default().classify(matches)
}

/// 严重度计算（ranked 非空）
fn severity_for(ranked: &[RankedCategory<'_>]) -> u8 {
    let intensity = ranked
        .iter()
        .map(|r| r.score * r.category.default_severity_weight)
        .fold(0.0_f64, f64::max);
    let breadth = ranked.len().saturating_sub(1) as f64;
    let raw = SEVERITY_BASE + SEVERITY_INTENSITY_SCALE * intensity + SEVERITY_BREADTH_STEP * breadth;
    raw.round().clamp(1.0, 10.0) as u8
}

fn technique_for(r: &RankedCategory<'_>) -> Technique {
    let evidence = r
        .matches
        .evidence
        .first()
        .map(|e| format!("{}: \"{}\"", e.rule_id, e.snippet))
        .unwrap_or_default();
    Technique {
        code: r.category.code.to_string(),
        name: r.category.name.to_string(),
        confidence: r.score,
        evidence,
    }
}

fn push_unique(target: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !target.iter().any(|existing| existing == item) {
            target.push((*item).to_string());
        }
    }
}

fn summarize(primary: &RankedCategory<'_>, distinct: usize, severity: u8, stage: u8) -> String {
    let breadth = match distinct {
        1 => "no secondary techniques".to_string(),
        2 => "1 secondary technique".to_string(),
        n => format!("{} secondary techniques", n - 1),
    };
    format!(
        "Primary vector is {} ({}) with {}; severity {}/10 at operation stage {}/5.",
        primary.category.name, primary.category.code, breadth, severity, stage
    )
}
