use serde::{Deserialize, Serialize};
use crate::utils::{escape_html, truncate_graphemes};

/// 一条对白记录：说话人与台词
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub speaker: String,
    pub content: String,
}

impl DialogueRecord {
    pub fn new(speaker: &str, content: &str) -> Self {
        DialogueRecord {
            speaker: speaker.to_string(),
            content: content.to_string(),
        }
    }

    /// 说话人与台词均为空
    pub fn is_blank(&self) -> bool {
        self.speaker.is_empty() && self.content.is_empty()
    }

    // 转换为HTML表格行(用于预览)
    pub fn to_html(&self, index: usize, cell_width: usize) -> String {
        format!(
            "<tr><th>{}</th><td class=\"speaker\">{}</td><td class=\"content\">{}</td></tr>",
            index,
            escape_html(&truncate_graphemes(&self.speaker, cell_width)),
            escape_html(&truncate_graphemes(&self.content, cell_width))
        )
    }
}
