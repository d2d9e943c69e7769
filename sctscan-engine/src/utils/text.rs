/// 安全转小写，仅转换ASCII字符（字节偏移与原文一致）
#[inline(always)]
pub fn safe_lowercase(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// 句子/行边界符
#[inline(always)]
fn is_boundary(b: u8) -> bool {
    matches!(b, b'.' | b'!' | b'?' | b'\n' | b'\r')
}

/// 命中 [start, end) 所在句子的字节范围
/// 向前找到上一个边界符之后，向后找到下一个边界符（含）
/// 边界符均为 ASCII，返回值总在 char 边界上
pub fn sentence_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = text.as_bytes();
    let start = start.min(bytes.len());
    let end = end.clamp(start, bytes.len());

    let head = bytes[..start]
        .iter()
        .rposition(|&b| is_boundary(b))
        .map(|pos| pos + 1)
        .unwrap_or(0);
    let tail = bytes[end..]
        .iter()
        .position(|&b| is_boundary(b))
        .map(|pos| end + pos + 1)
        .unwrap_or(bytes.len());
    (head, tail)
}

/// 按字符数截断，保证落在 char 边界
#[inline]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
