pub mod xlsx;
pub mod download;

use thiserror::Error;

/// 导出错误
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("XLSX生成错误: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON错误: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 导出结果
pub type ExportFileResult<T> = Result<T, ExportError>;

pub use xlsx::{to_xlsx_bytes, write_xlsx, sanitize_sheet_name, MAX_CELL_CHARS};
pub use download::{download_link, download_link_for_table};
