/// 文本输入守卫：进入规则匹配前
/// 保证输入非空，且长度不会拖垮匹配引擎
use std::borrow::Cow;

use crate::error::{ScanError, ScanResult};

pub struct InputGuard;

impl InputGuard {
    #[inline]
    fn is_trim_byte(b: u8) -> bool {
        b.is_ascii_whitespace() || b.is_ascii_control()
    }

    /// 1. ASCII 级双端 trim（空白 + 控制字符）
    /// 2. 空输入返回 InvalidInput
    /// 3. 超过 max_chars 个字符时在 char 边界截断
    /// 未截断时零拷贝返回借用切片
    pub fn guard(content: &str, max_chars: usize) -> ScanResult<Cow<'_, str>> {
        let bytes = content.as_bytes();
        let start = bytes.iter().position(|&b| !Self::is_trim_byte(b));
        let end = bytes.iter().rposition(|&b| !Self::is_trim_byte(b)).map(|p| p + 1);

        let (start, end) = match (start, end) {
            (Some(s), Some(e)) if s < e => (s, e),
            _ => {
                return Err(ScanError::InvalidInput(
                    "content is empty or whitespace-only".to_string(),
                ))
            }
        };
        // 边界字节均为 ASCII，切片安全
        let trimmed = &content[start..end];

        match trimmed.char_indices().nth(max_chars) {
            Some((cut, _)) => {
                log::debug!(
                    "Input truncated | max_chars: {} | original_bytes: {}",
                    max_chars,
                    trimmed.len()
                );
                Ok(Cow::Owned(trimmed[..cut].to_string()))
            }
            None => Ok(Cow::Borrowed(trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_rejects_empty() {
        assert!(InputGuard::guard("", 100).is_err());
        assert!(InputGuard::guard(" \t\r\n\u{0}", 100).is_err());
    }

    #[test]
    fn test_guard_trims_without_copy() {
        let out = InputGuard::guard("  share this \n", 100).unwrap();
        assert!(matches!(out, Cow::Borrowed("share this")));
    }

    #[test]
    fn test_guard_truncates_on_char_boundary() {
        let out = InputGuard::guard("ééééé", 3).unwrap();
        assert_eq!(out, "ééé");
        assert!(matches!(out, Cow::Owned(_)));
    }
}
