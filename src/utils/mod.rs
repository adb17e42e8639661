pub mod tei_constants;

use unicode_segmentation::UnicodeSegmentation;
pub use tei_constants::{XML_DECLARATION, XLSX_MIME};

/// 去掉文档开头的XML声明
///
/// 只处理开头的声明，返回原文本的切片，不复制。
pub fn strip_xml_declaration(text: &str) -> &str {
    match XML_DECLARATION.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}

/// HTML 转义
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// 按字素截断，超出部分以 `…` 结尾
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = graphemes[..max - 1].concat();
    out.push('…');
    out
}
