use crate::models::ResultTable;
use crate::utils::{escape_html, XLSX_MIME};
use super::{xlsx, ExportFileResult};

/// 生成内嵌 base64 数据的下载链接
pub fn download_link(bytes: &[u8], file_name: &str) -> String {
    format!(
        "<a href=\"data:{};base64,{}\" download=\"{}\">Download Excel file</a>",
        XLSX_MIME,
        base64::encode(bytes),
        escape_html(file_name)
    )
}

/// 将对白表导出为表格后生成下载链接
pub fn download_link_for_table(table: &ResultTable, sheet_name: &str, file_name: &str) -> ExportFileResult<String> {
    let bytes = xlsx::to_xlsx_bytes(table, sheet_name)?;
    Ok(download_link(&bytes, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_embeds_base64_payload() {
        let link = download_link(b"hello", "processed_dialogue.xlsx");
        assert_eq!(
            link,
            "<a href=\"data:application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;base64,aGVsbG8=\" \
             download=\"processed_dialogue.xlsx\">Download Excel file</a>"
        );
    }
}
