use std::fmt::{self, Write};

// ======================== 日志/摘录预览 ========================
/// 空白折叠 + 截断的预览视图，不分配堆内存
/// 1. 连续空白折叠为单个空格，首尾空白不输出
/// 2. 超出 max_len 个字符时以 "..." 结尾
#[inline]
pub fn preview_compact<'a>(s: &'a str, max_len: usize) -> impl fmt::Display + 'a {
    struct CompactView<'a> {
        source: &'a str,
        max_length: usize,
    }

    impl fmt::Display for CompactView<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut char_count = 0;
            let mut pending_space = false;

            for ch in self.source.trim().chars() {
                if ch.is_whitespace() {
                    pending_space = true;
                    continue;
                }
                let needed = if pending_space { 2 } else { 1 };
                if char_count + needed > self.max_length {
                    return f.write_str("...");
                }
                if pending_space {
                    f.write_char(' ')?;
                    pending_space = false;
                }
                f.write_char(ch)?;
                char_count += needed;
            }
            Ok(())
        }
    }

    CompactView {
        source: s,
        max_length: max_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_collapses_whitespace() {
        let out = preview_compact("  share   this\n\tnow  ", 100).to_string();
        assert_eq!(out, "share this now");
    }

    #[test]
    fn test_preview_truncates() {
        let out = preview_compact("abcdefghij", 4).to_string();
        assert_eq!(out, "abcd...");
        // 恰好等长不追加省略号
        assert_eq!(preview_compact("abcd", 4).to_string(), "abcd");
    }

    #[test]
    fn test_preview_multibyte() {
        let out = preview_compact("紧急 通知 立即 行动", 5).to_string();
        assert_eq!(out, "紧急 通知...");
    }
}
