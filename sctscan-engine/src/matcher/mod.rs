//! 模式匹配器
//! 核心流程：
//! 1. ASCII 小写化（字节偏移不变，证据可按原文逐字引用）
//! 2. 按规范顺序遍历分类、按声明顺序遍历规则，迭代非重叠命中
//! 3. 命中所在句被排除表达式命中则丢弃
//! 4. 每条规则最多保留 MAX_MATCHES_PER_RULE 条；未达上限的稀疏命中按长度系数衰减，
//!    达到上限的规则保持原权重（重复次数增加不会降低得分）

use once_cell::sync::OnceCell;

use crate::core::{MatchEvidence, MatchMap};
use crate::error::{CoreError, CoreResult};
use crate::taxonomy::TaxonomyRegistry;
use crate::utils::{preview_compact, safe_lowercase, sentence_bounds};

mod compiled;

pub use compiled::{CompiledCategory, CompiledRule};

/// 单条规则最多保留的命中数（重复刷屏不会无限抬高得分）
pub const MAX_MATCHES_PER_RULE: usize = 5;
/// 超过该字节数后置信度开始衰减
pub const LONG_INPUT_BYTES: usize = 4000;
/// 长度系数下限
pub const MIN_LENGTH_FACTOR: f64 = 0.5;
/// 证据摘录最大字符数
pub const SNIPPET_MAX_CHARS: usize = 200;

static SHARED_MATCHER: OnceCell<PatternMatcher> = OnceCell::new();

/// 长度系数：短文本 1.0，长文本按 sqrt(LONG_INPUT_BYTES / len) 衰减，不低于 0.5
/// len 为字节数
#[inline]
pub fn length_factor(len: usize) -> f64 {
    if len <= LONG_INPUT_BYTES {
        1.0
    } else {
        (LONG_INPUT_BYTES as f64 / len as f64)
            .sqrt()
            .max(MIN_LENGTH_FACTOR)
    }
}

/// 编译后的规则集（只读，可跨线程共享）
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    categories: Vec<CompiledCategory>,
}

impl PatternMatcher {
    /// 编译注册表中全部分类的规则
    pub fn new(registry: &TaxonomyRegistry) -> CoreResult<Self> {
        let categories = registry
            .list_categories()
            .iter()
            .enumerate()
            .map(|(pos, cat)| CompiledCategory::compile(pos, cat))
            .collect::<CoreResult<Vec<_>>>()?;

        log::debug!(
            "PatternMatcher compiled | categories: {} | rules: {}",
            categories.len(),
            categories.iter().map(|c| c.rules.len()).sum::<usize>()
        );
        Ok(Self { categories })
    }

    /// 进程内共享实例（基于全局注册表，首次调用时编译）
    pub fn shared() -> CoreResult<&'static PatternMatcher> {
        SHARED_MATCHER.get_or_try_init(|| PatternMatcher::new(TaxonomyRegistry::global()))
    }

    #[inline]
    pub fn rule_count(&self) -> usize {
        self.categories.iter().map(|c| c.rules.len()).sum()
    }

    /// 严格 UTF-8 解码后匹配
    pub fn match_bytes(&self, bytes: &[u8]) -> CoreResult<MatchMap> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            CoreError::InvalidInput(format!("content is not valid UTF-8: {}", e))
        })?;
        self.match_text(text)
    }

    /// 对文本执行全部规则
    /// 空文本/纯空白返回 InvalidInput；零命中返回空映射
    pub fn match_text(&self, text: &str) -> CoreResult<MatchMap> {
        if text.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "content is empty or whitespace-only".to_string(),
            ));
        }

        let lower = safe_lowercase(text);
        let factor = length_factor(text.len());
        let mut map = MatchMap::new();

        for category in &self.categories {
            let mut evidence = Vec::new();
            for compiled in &category.rules {
                let mut hits = collect_rule_hits(category.code, compiled, text, &lower);
                if hits.len() < compiled.rule.min_hits {
                    if !hits.is_empty() {
                        log::debug!(
                            "[{}] rule below threshold | rule: {} | hits: {} | required: {}",
                            category.code,
                            compiled.rule.id,
                            hits.len(),
                            compiled.rule.min_hits
                        );
                    }
                    continue;
                }
                // 稀疏命中才衰减
                if hits.len() < MAX_MATCHES_PER_RULE && factor < 1.0 {
                    for hit in &mut hits {
                        hit.confidence *= factor;
                    }
                }
                evidence.extend(hits);
            }
            map.push_category(category.position, category.code, evidence);
        }

        Ok(map)
    }
}

/// 单条规则的存活命中（已执行排除过滤与数量上限）
fn collect_rule_hits(
    code: &str,
    compiled: &CompiledRule,
    text: &str,
    lower: &str,
) -> Vec<MatchEvidence> {
    let mut hits = Vec::new();
    for m in compiled.regex.find_iter(lower) {
        if hits.len() >= MAX_MATCHES_PER_RULE {
            break;
        }
        let (s_start, s_end) = sentence_bounds(lower, m.start(), m.end());
        if let Some(exclusion) = compiled.is_excluded(&lower[s_start..s_end]) {
            log::debug!(
                "[{}] match excluded | rule: {} | exclusion: {} | text: {}",
                code,
                compiled.rule.id,
                exclusion.as_str(),
                preview_compact(&text[m.start()..m.end()], 60)
            );
            continue;
        }

        let matched = &text[m.start()..m.end()];
        log::debug!(
            "[{}] match | rule: {} | text: {}",
            code,
            compiled.rule.id,
            preview_compact(matched, 60)
        );
        hits.push(MatchEvidence {
            code: code.to_string(),
            rule_id: compiled.rule.id.to_string(),
            start: m.start(),
            end: m.end(),
            matched: matched.to_string(),
            snippet: preview_compact(&text[s_start..s_end], SNIPPET_MAX_CHARS).to_string(),
            confidence: compiled.rule.weight,
        });
    }
    hits
}

/// 使用共享匹配器匹配文本
#[inline]
pub fn match_text(text: &str) -> CoreResult<MatchMap> {
    PatternMatcher::shared()?.match_text(text)
}

/// 使用共享匹配器匹配字节流
#[inline]
pub fn match_bytes(bytes: &[u8]) -> CoreResult<MatchMap> {
    PatternMatcher::shared()?.match_bytes(bytes)
}
