//! 表格导出
//!
//! 一张工作表，首行为加粗表头，之后每条对白一行，不含索引列。

use std::path::Path;
use log::{debug, warn};
use rust_xlsxwriter::{Format, Workbook};
use crate::models::result_table::COLUMNS;
use crate::models::ResultTable;
use super::ExportFileResult;

/// 单元格最多 32767 个字符
pub const MAX_CELL_CHARS: usize = 32_767;

/// 工作表名最长 31 个字符，不能含 `[]:*?/\`，首尾不能是 `'`
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if "[]:*?/\\".contains(c) { '_' } else { c })
        .collect();
    let cleaned: String = replaced
        .trim()
        .trim_matches('\'')
        .chars()
        .take(31)
        .collect();
    let cleaned = cleaned.trim_end_matches('\'').trim();
    if cleaned.is_empty() {
        "Sheet1".to_string()
    } else {
        cleaned.to_string()
    }
}

/// 超长文本截断到单元格上限
fn cell_text(value: &str, row: u32) -> String {
    if value.chars().count() <= MAX_CELL_CHARS {
        return value.to_string();
    }
    warn!("第 {} 行文本超出单元格上限 {} 字符，已截断", row + 1, MAX_CELL_CHARS);
    value.chars().take(MAX_CELL_CHARS).collect()
}

fn build_workbook(table: &ResultTable, sheet_name: &str) -> ExportFileResult<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sanitize_sheet_name(sheet_name))?;
    worksheet.set_column_width(0, 24.0)?;
    worksheet.set_column_width(1, 100.0)?;

    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, record) in table.records().iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &cell_text(&record.speaker, row))?;
        worksheet.write_string(row, 1, &cell_text(&record.content, row))?;
    }

    debug!("工作簿写入完成: {} 行数据", table.len());
    Ok(workbook)
}

/// 导出为内存中的 xlsx 字节
pub fn to_xlsx_bytes(table: &ResultTable, sheet_name: &str) -> ExportFileResult<Vec<u8>> {
    let mut workbook = build_workbook(table, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

/// 导出为 xlsx 文件
pub fn write_xlsx<P: AsRef<Path>>(table: &ResultTable, sheet_name: &str, path: P) -> ExportFileResult<()> {
    let mut workbook = build_workbook(table, sheet_name)?;
    workbook.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_name_is_sanitized() {
        assert_eq!(sanitize_sheet_name("Akt 1/2"), "Akt 1_2");
        assert_eq!(sanitize_sheet_name("  "), "Sheet1");
        assert_eq!(sanitize_sheet_name(&"x".repeat(40)).len(), 31);
        assert_eq!(sanitize_sheet_name("'Akt'"), "Akt");
        assert_eq!(sanitize_sheet_name("''"), "Sheet1");
        assert_eq!(sanitize_sheet_name(&format!("{}'y", "x".repeat(30))), "x".repeat(30));
    }

    #[test]
    fn long_cell_text_is_capped() {
        let long = "å".repeat(MAX_CELL_CHARS + 10);
        assert_eq!(cell_text(&long, 1).chars().count(), MAX_CELL_CHARS);
        assert_eq!(cell_text("kort", 1), "kort");
    }
}
