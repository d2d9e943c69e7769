//! 分类注册表
//! 核心职责：
//! 1. 持有 12 个静态分类定义（插入顺序即规范顺序）
//! 2. 提供按编码查找、规范位置、宽松编码解析
//! 3. 进程内单例共享，只读

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::core::TaxonomyCategory;
use crate::error::{CoreError, CoreResult};

mod table;

/// 编码前缀
pub const CODE_PREFIX: &str = "SCT-";

/// 全局注册表 - 首次访问时构建索引
static GLOBAL_REGISTRY: Lazy<TaxonomyRegistry> =
    Lazy::new(|| TaxonomyRegistry::from_static(&table::CATEGORIES));

/// 分类注册表（无修改接口）
#[derive(Debug, Clone)]
pub struct TaxonomyRegistry {
    categories: &'static [TaxonomyCategory],
    /// 编码 → 规范位置
    index: FxHashMap<&'static str, usize>,
}

impl TaxonomyRegistry {
    fn from_static(categories: &'static [TaxonomyCategory]) -> Self {
        let index = categories
            .iter()
            .enumerate()
            .map(|(pos, cat)| (cat.code, pos))
            .collect();
        Self { categories, index }
    }

    /// 进程内共享实例
    #[inline]
    pub fn global() -> &'static TaxonomyRegistry {
        &GLOBAL_REGISTRY
    }

    /// 全部分类（规范顺序）
    #[inline]
    pub fn list_categories(&self) -> &'static [TaxonomyCategory] {
        self.categories
    }

    /// 按规范编码查找
    pub fn get_category(&self, code: &str) -> CoreResult<&'static TaxonomyCategory> {
        let categories = self.categories;
        self.index
            .get(code)
            .map(|&pos| &categories[pos])
            .ok_or_else(|| CoreError::NotFound(code.to_string()))
    }

    /// 规范位置（0 起）
    #[inline]
    pub fn position(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|cat| cat.code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// 宽松解析编码后查找
    /// 支持："SCT-003" / "sct-3" / "sct003" / "003" / "3"
    pub fn resolve(&self, code_like: &str) -> CoreResult<&'static TaxonomyCategory> {
        let canonical = normalize_code(code_like)
            .ok_or_else(|| CoreError::NotFound(code_like.trim().to_string()))?;
        self.get_category(&canonical)
    }
}

/// 规范化编码写法，无法识别时返回 None
fn normalize_code(code_like: &str) -> Option<String> {
    let trimmed = code_like.trim();
    let digits = match trimmed.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("sct") => {
            trimmed[3..].trim_start_matches(['-', '_', ' '])
        }
        _ => trimmed,
    };
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u16 = digits.parse().ok()?;
    Some(format!("{}{:03}", CODE_PREFIX, number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StageClass;

    #[test]
    fn test_registry_has_twelve_categories_in_order() {
        let registry = TaxonomyRegistry::global();
        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes.len(), 12);
        for (i, code) in codes.iter().enumerate() {
            assert_eq!(*code, format!("SCT-{:03}", i + 1));
            assert_eq!(registry.position(code), Some(i));
        }
    }

    #[test]
    fn test_get_category_unknown_code() {
        let registry = TaxonomyRegistry::global();
        let err = registry.get_category("SCT-099").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref c) if c == "SCT-099"));
        // 编码大小写敏感，仅 resolve 做宽松处理
        assert!(registry.get_category("sct-001").is_err());
    }

    #[test]
    fn test_resolve_accepts_loose_forms() {
        let registry = TaxonomyRegistry::global();
        for input in ["SCT-003", "sct-3", "sct003", "003", "3", " Sct_03 "] {
            let cat = registry.resolve(input).unwrap();
            assert_eq!(cat.code, "SCT-003", "input: {input:?}");
        }
        assert!(registry.resolve("SCT-099").is_err());
        assert!(registry.resolve("abc").is_err());
        assert!(registry.resolve("").is_err());
        assert!(registry.resolve("SCT-0001").is_err());
    }

    #[test]
    fn test_static_table_sanity() {
        let registry = TaxonomyRegistry::global();
        for cat in registry.list_categories() {
            assert!((0.0..=1.0).contains(&cat.default_severity_weight));
            assert!(!cat.indicators.is_empty());
            assert!(!cat.indicator_patterns.is_empty());
            let mut ids: Vec<&str> = cat.indicator_patterns.iter().map(|r| r.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), cat.indicator_patterns.len(), "duplicate rule id in {}", cat.code);
            for rule in cat.indicator_patterns {
                assert!(rule.weight > 0.0 && rule.weight <= 1.0);
                assert!(rule.min_hits >= 1);
            }
        }
    }

    #[test]
    fn test_stage_classes() {
        let registry = TaxonomyRegistry::global();
        let stage = |code: &str| registry.get_category(code).unwrap().stage_class;
        assert_eq!(stage("SCT-002"), StageClass::Exposure);
        assert_eq!(stage("SCT-001"), StageClass::Priming);
        assert_eq!(stage("SCT-005"), StageClass::Capture);
        assert_eq!(stage("SCT-010"), StageClass::Entrenchment);
        assert_eq!(stage("SCT-007"), StageClass::Propagation);
    }
}
