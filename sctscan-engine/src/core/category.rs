use serde::Serialize;

use super::enums::StageClass;

/// 单条指示规则（静态规则表）
/// 1. pattern 针对 ASCII 小写化后的文本书写
/// 2. exclusions 命中同一句/行时丢弃该证据（regex 不支持环视，用独立表达式代替负向前瞻）
/// 3. min_hits 为同一规则的最少命中数，不足则整条规则不计入
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternRule {
    pub id: &'static str,
    pub pattern: &'static str,
    pub weight: f64,
    pub exclusions: &'static [&'static str],
    pub min_hits: usize,
}

impl PatternRule {
    /// 普通规则：单次命中即计入
    pub const fn new(
        id: &'static str,
        pattern: &'static str,
        weight: f64,
        exclusions: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            pattern,
            weight,
            exclusions,
            min_hits: 1,
        }
    }

    /// 阈值规则：至少命中 min_hits 次才计入
    pub const fn with_min_hits(mut self, min_hits: usize) -> Self {
        self.min_hits = min_hits;
        self
    }
}

/// 分类定义（进程启动时由静态表构建，永不修改）
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TaxonomyCategory {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cyber_analog: &'static str,
    pub cognitive_analog: &'static str,
    /// 人类可读的指示描述（用于LLM提示词）
    pub indicators: &'static [&'static str],
    pub stage_class: StageClass,
    pub default_severity_weight: f64,
    pub indicator_patterns: &'static [PatternRule],
}
