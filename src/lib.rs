pub mod models;
pub mod utils;
pub mod parser;
pub mod export;
pub mod api;

pub use models::{
    Conf,
    TeiNamespaces,
    QualifiedName,
    DialogueRecord,
    ResultTable,
    CastMember
};

pub use parser::{
    TeiParser,
    TeiDocument,
    DialogueElement,
    ParseOutput,
    TeiError,
    TeiResult,
    TreeQuery
};

pub use export::{
    ExportError,
    ExportFileResult,
    to_xlsx_bytes,
    write_xlsx,
    download_link
};

pub use api::{
    ExportResult,
    process_xml,
    parse_tei_text,
    export_to_xlsx,
    export_to_xlsx_link,
    export_to_json
};

/// 从TEI文本提取对白表
///
/// # Arguments
///
/// * `raw` - XML文本，可带XML声明
/// * `config` - 配置对象，含命名空间
///
/// # Returns
///
/// 按文档顺序的对白表；XML格式错误时返回解析错误
pub fn extract_table(raw: &str, config: &Conf) -> TeiResult<ResultTable> {
    parser::extract_table(raw, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let config = Conf::default();
        let xml = r#"<TEI xmlns:HIS="http://www.example.org/ns/HIS"><HIS:hisSp>
A
b</HIS:hisSp></TEI>"#;
        let table = extract_table(xml, &config).unwrap();
        assert_eq!(table.records(), &[DialogueRecord::new("A", "b")]);
    }
}
