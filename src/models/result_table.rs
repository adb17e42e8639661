use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use crate::models::DialogueRecord;
use crate::utils::truncate_graphemes;

/// 表头
pub const COLUMNS: [&str; 2] = ["speaker", "content"];

/// 提取结果表，按对白在文档中的顺序排列
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    records: Vec<DialogueRecord>,
}

impl From<Vec<DialogueRecord>> for ResultTable {
    fn from(records: Vec<DialogueRecord>) -> Self {
        ResultTable { records }
    }
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DialogueRecord] {
        &self.records
    }

    /// 前 n 行
    pub fn head(&self, n: usize) -> &[DialogueRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// 去重后的说话人，按首次出现顺序
    pub fn speakers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !record.speaker.is_empty() && !seen.contains(&record.speaker.as_str()) {
                seen.push(&record.speaker);
            }
        }
        seen
    }

    /// 序列化为 `[{"speaker": .., "content": ..}, ..]`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// 生成HTML预览表格
    pub fn to_html(&self, rows: usize, cell_width: usize) -> String {
        let mut buffer = String::new();
        buffer.push_str("<table class=\"dialogue-preview\">\n");
        buffer.push_str(&format!(
            "<thead><tr><th></th><th>{}</th><th>{}</th></tr></thead>\n",
            COLUMNS[0], COLUMNS[1]
        ));
        buffer.push_str("<tbody>\n");
        for (i, record) in self.head(rows).iter().enumerate() {
            buffer.push_str(&record.to_html(i, cell_width));
            buffer.push('\n');
        }
        buffer.push_str("</tbody>\n</table>");
        buffer
    }

    /// 生成控制台预览，列按字素数对齐
    pub fn to_text_preview(&self, rows: usize, cell_width: usize) -> String {
        let head = self.head(rows);
        let cells: Vec<(String, String, String)> = head
            .iter()
            .enumerate()
            .map(|(i, r)| {
                (
                    i.to_string(),
                    truncate_graphemes(&r.speaker, cell_width),
                    truncate_graphemes(&r.content, cell_width),
                )
            })
            .collect();

        let width = |s: &str| s.graphemes(true).count();
        let index_width = cells.iter().map(|c| width(&c.0)).max().unwrap_or(0);
        let speaker_width = cells
            .iter()
            .map(|c| width(&c.1))
            .chain(std::iter::once(COLUMNS[0].len()))
            .max()
            .unwrap_or(0);

        let pad = |s: &str, w: usize| format!("{}{}", s, " ".repeat(w.saturating_sub(width(s))));

        let mut lines = vec![format!(
            "{}  {}  {}",
            " ".repeat(index_width),
            pad(COLUMNS[0], speaker_width),
            COLUMNS[1]
        )];
        for (index, speaker, content) in &cells {
            lines.push(format!(
                "{}  {}  {}",
                pad(index, index_width),
                pad(speaker, speaker_width),
                content
            ));
        }
        lines.join("\n").trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultTable {
        ResultTable::from(vec![
            DialogueRecord::new("NORA", "Kom ind."),
            DialogueRecord::new("HELMER", "Er det min lærkefugl?"),
            DialogueRecord::new("NORA", "Ja, det er."),
        ])
    }

    #[test]
    fn head_is_clamped() {
        let table = sample();
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
        assert!(ResultTable::new().head(5).is_empty());
    }

    #[test]
    fn speakers_keep_first_appearance_order() {
        assert_eq!(sample().speakers(), vec!["NORA", "HELMER"]);
    }

    #[test]
    fn json_is_array_of_objects() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["speaker"], "HELMER");
        assert_eq!(value[2]["content"], "Ja, det er.");
        assert_eq!(ResultTable::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn html_preview_escapes_and_limits_rows() {
        let table = ResultTable::from(vec![
            DialogueRecord::new("A & B", "<hi>"),
            DialogueRecord::new("C", "d"),
        ]);
        let html = table.to_html(1, 60);
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("&lt;hi&gt;"));
        assert!(!html.contains(">C<"));
    }

    #[test]
    fn text_preview_aligns_columns() {
        let preview = sample().to_text_preview(2, 60);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   speaker  content");
        assert_eq!(lines[1], "0  NORA     Kom ind.");
        assert_eq!(lines[2], "1  HELMER   Er det min lærkefugl?");
    }
}
