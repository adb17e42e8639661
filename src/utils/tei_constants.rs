use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 文档开头的XML声明，可带BOM与前导空白
    pub static ref XML_DECLARATION: Regex =
        Regex::new(r#"^\x{FEFF}?\s*<\?xml\s[^?]*\?>"#).unwrap();
}

/// 表格文件 MIME 类型
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
