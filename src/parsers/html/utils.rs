/// 默认文档编码
pub const DEFAULT_ENCODING: &str = "utf-8";

/// ASCII 空白字符
pub const WHITESPACES: &[char] = &[' ', '\t', '\n', '\x0c', '\r'];

/// 字节顺序标记，页面文本中按空白处理
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// 去除首尾空白（含 BOM）
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// 检查文本是否只由空白组成
pub fn is_blank(text: &str) -> bool {
    trim_text(text).is_empty()
}

/// 规范化编码标签，空值回退到 UTF-8
pub fn normalize_encoding(label: Option<&str>) -> String {
    match label.map(|l| l.trim_matches(WHITESPACES)) {
        Some(l) if !l.is_empty() => l.to_lowercase(),
        _ => DEFAULT_ENCODING.to_string(),
    }
}
