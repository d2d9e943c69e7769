//! 接种内容生成器
//! 纯静态查表：编码 → 机制暴露说明 + 识别触发点 + 弱化示例

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::taxonomy::TaxonomyRegistry;

mod templates;

pub use templates::{InoculationTemplate, TEMPLATES};

/// 接种内容（输出值对象）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InoculationContent {
    pub code: String,
    pub name: String,
    pub mechanism_exposure: String,
    pub recognition_triggers: Vec<String>,
    pub weakened_example: String,
}

impl InoculationContent {
    /// 机制说明按空行拆分的段落
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> + '_ {
        self.mechanism_exposure
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

fn template_for(code: &str) -> Option<&'static InoculationTemplate> {
    TEMPLATES.iter().find(|t| t.code == code)
}

/// 生成指定编码的接种内容（编码宽松解析）
pub fn generate(code: &str) -> CoreResult<InoculationContent> {
    let category = TaxonomyRegistry::global().resolve(code)?;
    let template = template_for(category.code)
        .ok_or_else(|| CoreError::NotFound(category.code.to_string()))?;

    Ok(InoculationContent {
        code: category.code.to_string(),
        name: category.name.to_string(),
        mechanism_exposure: template.mechanism_exposure.to_string(),
        recognition_triggers: template
            .recognition_triggers
            .iter()
            .map(|t| (*t).to_string())
            .collect(),
        weakened_example: template.weakened_example.to_string(),
    })
}

/// 全部分类的接种内容（规范顺序）
pub fn generate_all() -> Vec<InoculationContent> {
    TaxonomyRegistry::global()
        .codes()
        .filter_map(|code| match generate(code) {
            Ok(content) => Some(content),
            Err(e) => {
                log::warn!("Inoculation template missing: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_every_code() {
        let registry = TaxonomyRegistry::global();
        for code in registry.codes() {
            let content = generate(code).unwrap();
            assert_eq!(content.code, code);
            assert_eq!(content.name, registry.get_category(code).unwrap().name);
            assert!(content.mechanism_exposure.len() > 50);
            assert!(content.recognition_triggers.len() >= 2, "{} needs triggers", code);
            assert!(!content.weakened_example.is_empty());
        }
    }

    #[test]
    fn test_generate_unknown_code() {
        assert!(matches!(generate("SCT-099"), Err(CoreError::NotFound(_))));
        assert!(matches!(generate("SCT-999"), Err(CoreError::NotFound(_))));
        assert!(matches!(generate("nonsense"), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_generate_loose_code() {
        assert_eq!(generate("sct-7").unwrap().code, "SCT-007");
        assert_eq!(generate("012").unwrap().code, "SCT-012");
    }

    #[test]
    fn test_generate_all_in_order() {
        let all = generate_all();
        assert_eq!(all.len(), 12);
        let codes: Vec<&str> = all.iter().map(|c| c.code.as_str()).collect();
        let expected: Vec<&str> = TaxonomyRegistry::global().codes().collect();
        assert_eq!(codes, expected);

        let mut names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_paragraph_split() {
        let content = generate("SCT-001").unwrap();
        let paragraphs: Vec<&str> = content.paragraphs().collect();
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[1].starts_with("The defense"));
    }
}
