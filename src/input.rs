//! 扫描输入与来源元数据
//! 来源信息只透传到报告中，不参与分类

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 内容来源类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginKind {
    Url,
    File,
    #[default]
    Text,
    FeedItem,
}

impl OriginKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginKind::Url => "url",
            OriginKind::File => "file",
            OriginKind::Text => "text",
            OriginKind::FeedItem => "feed_item",
        }
    }
}

impl Display for OriginKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 来源描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub origin: OriginKind,
    pub identifier: String,
}

impl Default for SourceInfo {
    fn default() -> Self {
        Self::direct()
    }
}

impl SourceInfo {
    pub fn new(origin: OriginKind, identifier: impl Into<String>) -> Self {
        Self {
            origin,
            identifier: identifier.into(),
        }
    }

    /// 直接传入的文本
    pub fn direct() -> Self {
        Self::new(OriginKind::Text, "direct_input")
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self::new(OriginKind::Url, url)
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(OriginKind::File, path)
    }

    pub fn feed_item(link: impl Into<String>) -> Self {
        Self::new(OriginKind::FeedItem, link)
    }
}

/// 单次扫描输入（内容需已获取完毕）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanInput {
    pub source: SourceInfo,
    pub content: String,
}

impl ScanInput {
    pub fn new(source: SourceInfo, content: impl Into<String>) -> Self {
        Self {
            source,
            content: content.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(SourceInfo::direct(), content)
    }
}

impl From<&str> for ScanInput {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

impl From<String> for ScanInput {
    fn from(content: String) -> Self {
        Self::text(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serialization() {
        let source = SourceInfo::feed_item("https://example.org/item/1");
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(json["origin"], "feed_item");
        assert_eq!(json["identifier"], "https://example.org/item/1");
    }

    #[test]
    fn test_text_input_defaults() {
        let input: ScanInput = "hello".into();
        assert_eq!(input.source.origin, OriginKind::Text);
        assert_eq!(input.source.identifier, "direct_input");
    }
}
