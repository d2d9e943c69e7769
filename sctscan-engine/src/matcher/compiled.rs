use regex::{Regex, RegexBuilder};

use crate::core::{PatternRule, TaxonomyCategory};
use crate::error::CoreResult;

/// 正则体积上限（静态规则表远低于该值）
const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// 编译后的单条规则
/// 职责：持有主表达式与排除表达式，执行"命中所在句是否被排除"判断
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: &'static PatternRule,
    pub regex: Regex,
    pub exclusions: Vec<Regex>,
}

impl CompiledRule {
    pub fn compile(rule: &'static PatternRule) -> CoreResult<Self> {
        let regex = build_regex(rule.pattern)?;
        let exclusions = rule
            .exclusions
            .iter()
            .map(|pattern| build_regex(pattern))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self {
            rule,
            regex,
            exclusions,
        })
    }

    /// 句子（已小写化）是否命中任一排除表达式
    #[inline]
    pub fn is_excluded(&self, sentence_lower: &str) -> Option<&Regex> {
        self.exclusions.iter().find(|re| re.is_match(sentence_lower))
    }
}

/// 编译后的分类（规则保持声明顺序）
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub code: &'static str,
    pub position: usize,
    pub rules: Vec<CompiledRule>,
}

impl CompiledCategory {
    pub fn compile(position: usize, category: &'static TaxonomyCategory) -> CoreResult<Self> {
        let rules = category
            .indicator_patterns
            .iter()
            .map(CompiledRule::compile)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self {
            code: category.code,
            position,
            rules,
        })
    }
}

fn build_regex(pattern: &str) -> CoreResult<Regex> {
    Ok(RegexBuilder::new(pattern)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyRegistry;

    #[test]
    fn test_every_static_rule_compiles() {
        let registry = TaxonomyRegistry::global();
        for (pos, cat) in registry.list_categories().iter().enumerate() {
            let compiled = CompiledCategory::compile(pos, cat).unwrap();
            assert_eq!(compiled.rules.len(), cat.indicator_patterns.len());
        }
    }

    #[test]
    fn test_bad_pattern_surfaces_compile_error() {
        static BROKEN: PatternRule = PatternRule::new("broken", r"(?:unclosed", 0.5, &[]);
        let err = CompiledRule::compile(&BROKEN).unwrap_err();
        assert!(matches!(err, crate::error::CoreError::RegexCompileError(_)));
    }
}
