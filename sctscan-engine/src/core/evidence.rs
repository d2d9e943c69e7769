use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::taxonomy::TaxonomyRegistry;

/// 单条匹配证据（仅存在于一次分析调用内）
/// start/end 为原文字节偏移，matched 为原文逐字引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvidence {
    pub code: String,
    pub rule_id: String,
    pub start: usize,
    pub end: usize,
    pub matched: String,
    /// 命中所在句子的压缩预览
    pub snippet: String,
    pub confidence: f64,
}

/// 单个分类下的全部证据（按规则声明顺序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatches {
    pub code: String,
    /// 注册表中的规范位置（排序/平局裁决用）
    pub position: usize,
    pub evidence: Vec<MatchEvidence>,
}

impl CategoryMatches {
    /// 分类得分 = 证据置信度之和，按上限截断
    #[inline]
    pub fn score(&self, cap: f64) -> f64 {
        self.evidence
            .iter()
            .map(|e| e.confidence)
            .sum::<f64>()
            .min(cap)
    }
}

/// 分类编码 → 证据列表 的有序映射
/// 仅包含至少有一条存活证据的分类，迭代顺序即规范分类顺序
/// 反序列化同样经过注册表校验（未知编码报错，位置按注册表重建）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatchMap")]
pub struct MatchMap {
    entries: Vec<CategoryMatches>,
}

/// 未校验的序列化形态
#[derive(Deserialize)]
struct RawMatchMap {
    entries: Vec<CategoryMatches>,
}

impl TryFrom<RawMatchMap> for MatchMap {
    type Error = CoreError;

    fn try_from(raw: RawMatchMap) -> CoreResult<Self> {
        let registry = TaxonomyRegistry::global();
        let mut evidence = Vec::new();
        for entry in raw.entries {
            let category = registry.get_category(&entry.code)?;
            evidence.extend(entry.evidence.into_iter().map(|mut item| {
                item.code = category.code.to_string();
                item
            }));
        }
        Self::from_evidence(registry, evidence)
    }
}

impl MatchMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由任意证据集合构建映射
    /// 未知分类编码返回 NotFound；同一分类内保持传入顺序
    pub fn from_evidence<I>(registry: &TaxonomyRegistry, evidence: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = MatchEvidence>,
    {
        let mut map = Self::new();
        for item in evidence {
            let category = registry.get_category(&item.code)?;
            let position = registry.position(category.code).unwrap_or(usize::MAX);
            map.push_evidence(position, category.code, item);
        }
        Ok(map)
    }

    /// 追加一个分类的证据（调用方保证按规范顺序调用，空证据被忽略）
    pub(crate) fn push_category(&mut self, position: usize, code: &str, evidence: Vec<MatchEvidence>) {
        if evidence.is_empty() {
            return;
        }
        self.entries.push(CategoryMatches {
            code: code.to_string(),
            position,
            evidence,
        });
    }

    fn push_evidence(&mut self, position: usize, code: &str, evidence: MatchEvidence) {
        match self.entries.binary_search_by_key(&position, |entry| entry.position) {
            Ok(idx) => self.entries[idx].evidence.push(evidence),
            Err(idx) => self.entries.insert(
                idx,
                CategoryMatches {
                    code: code.to_string(),
                    position,
                    evidence: vec![evidence],
                },
            ),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 命中分类数
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryMatches> {
        self.entries.iter()
    }

    pub fn get(&self, code: &str) -> Option<&[MatchEvidence]> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.evidence.as_slice())
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    /// 证据总条数
    pub fn evidence_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.evidence.len()).sum()
    }
}

impl<'a> IntoIterator for &'a MatchMap {
    type Item = &'a CategoryMatches;
    type IntoIter = std::slice::Iter<'a, CategoryMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
