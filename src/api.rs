//! 面向界面层的API
//!
//! 上传控件、文本框等外部协作方只需传入解码后的XML文本，拿到表格或错误消息。

use log::{error, info};
use crate::export::{self, ExportError};
use crate::models::{Conf, ResultTable};
use crate::parser::{TeiError, TeiParser};

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
    /// 内存导出的内容(下载链接或 JSON)
    pub data: Option<String>,
}

impl ExportResult {
    fn ok(message: &str, file_path: Option<String>, data: Option<String>) -> Self {
        ExportResult {
            success: true,
            message: message.to_string(),
            file_path,
            data,
        }
    }

    fn failed(message: String) -> Self {
        error!("{}", message);
        ExportResult {
            success: false,
            message,
            file_path: None,
            data: None,
        }
    }
}

#[derive(Debug)]
enum ApiError {
    Tei(TeiError),
    Export(ExportError),
}

impl From<TeiError> for ApiError {
    fn from(e: TeiError) -> Self {
        ApiError::Tei(e)
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Export(e)
    }
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            ApiError::Tei(e) => format!("处理XML出错: {}", e),
            ApiError::Export(e) => format!("导出失败: {}", e),
        }
    }
}

/// 处理XML文本，返回对白表或错误消息，二者必居其一
pub fn process_xml(xml_content: &str, conf: &Conf) -> (Option<ResultTable>, Option<String>) {
    match TeiParser::new(conf.clone()).extract_table(xml_content) {
        Ok(table) => {
            info!("XML处理成功: {} 条对白", table.len());
            (Some(table), None)
        }
        Err(e) => (None, Some(e.to_string())),
    }
}

/// 解析TEI文本，返回 JSON 格式结果
pub fn parse_tei_text(text: String, config: Option<Conf>) -> String {
    let parser = TeiParser::new(config.unwrap_or_default());
    match parser.parse(&text) {
        Ok(output) => serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string()),
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}

fn with_table<F>(text: &str, config: Option<Conf>, op: F) -> ExportResult
where
    F: FnOnce(&ResultTable, &Conf) -> Result<ExportResult, ApiError>,
{
    let conf = config.unwrap_or_default();
    let result = TeiParser::new(conf.clone())
        .extract_table(text)
        .map_err(ApiError::from)
        .and_then(|table| op(&table, &conf));

    match result {
        Ok(r) => r,
        Err(e) => ExportResult::failed(e.message()),
    }
}

/// 导出为 xlsx 文件
pub fn export_to_xlsx(text: String, output_path: String, config: Option<Conf>) -> ExportResult {
    with_table(&text, config, |table, conf| {
        export::write_xlsx(table, &conf.sheet_name, &output_path)?;
        Ok(ExportResult::ok("表格导出成功", Some(output_path.clone()), None))
    })
}

/// 导出为内嵌数据的下载链接
pub fn export_to_xlsx_link(text: String, config: Option<Conf>) -> ExportResult {
    with_table(&text, config, |table, conf| {
        let link = export::download_link_for_table(table, &conf.sheet_name, &conf.download_file_name)?;
        Ok(ExportResult::ok("下载链接生成成功", None, Some(link)))
    })
}

/// 导出为 JSON，`output_path` 为空时只返回内容
pub fn export_to_json(text: String, output_path: Option<String>, config: Option<Conf>) -> ExportResult {
    with_table(&text, config, |table, _| {
        let json = table.to_json().map_err(ExportError::from)?;
        if let Some(path) = &output_path {
            std::fs::write(path, &json).map_err(ExportError::from)?;
        }
        Ok(ExportResult::ok("JSON导出成功", output_path.clone(), Some(json)))
    })
}
