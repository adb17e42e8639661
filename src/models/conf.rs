use serde::{Deserialize, Serialize};

/// TEI 主命名空间
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";
/// 易卜生文集扩展命名空间（对白与舞台说明）
pub const HIS_NS: &str = "http://www.example.org/ns/HIS";

/// 带命名空间的元素名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedName {
    pub namespace: String,
    pub local: String,
}

impl QualifiedName {
    pub fn new(namespace: &str, local: &str) -> Self {
        QualifiedName {
            namespace: namespace.to_string(),
            local: local.to_string(),
        }
    }
}

/// 命名空间与标签配置
///
/// 启动时构造一次，之后只读，显式传入提取入口。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeiNamespaces {
    /// 对白元素 `HIS:hisSp`
    pub dialogue: QualifiedName,
    /// 舞台说明元素 `HIS:hisStage`
    pub stage: QualifiedName,
    /// 角色表条目 `tei:castItem`
    pub cast_item: QualifiedName,
}

impl Default for TeiNamespaces {
    fn default() -> Self {
        TeiNamespaces {
            dialogue: QualifiedName::new(HIS_NS, "hisSp"),
            stage: QualifiedName::new(HIS_NS, "hisStage"),
            cast_item: QualifiedName::new(TEI_NS, "castItem"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 命名空间约定固定，不从配置文件读取
    #[serde(skip)]
    pub namespaces: TeiNamespaces,
    /// 是否去除对白中的舞台说明
    pub strip_stage_directions: bool,
    /// 预览行数
    pub preview_rows: usize,
    /// 预览单元格最大宽度(字素)
    pub preview_cell_width: usize,
    /// 表格工作表名
    pub sheet_name: String,
    /// 下载文件名
    pub download_file_name: String,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            namespaces: TeiNamespaces::default(),
            strip_stage_directions: true,
            preview_rows: 5,
            preview_cell_width: 60,
            sheet_name: "Sheet1".to_string(),
            download_file_name: "processed_dialogue.xlsx".to_string(),
        }
    }
}

impl Conf {
    /// 从 JSON 文本读取配置，缺省字段取默认值
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let conf = Conf::from_json(r#"{"preview_rows": 10}"#).unwrap();
        assert_eq!(conf.preview_rows, 10);
        assert!(conf.strip_stage_directions);
        assert_eq!(conf.namespaces, TeiNamespaces::default());
        assert_eq!(conf.sheet_name, "Sheet1");
    }

    #[test]
    fn namespaces_are_not_read_from_json() {
        let json = r#"{
            "namespaces": {
                "dialogue": {"namespace": "urn:other", "local": "p"},
                "stage": {"namespace": "urn:other", "local": "s"},
                "cast_item": {"namespace": "urn:other", "local": "c"}
            },
            "preview_rows": 3
        }"#;
        let conf = Conf::from_json(json).unwrap();
        assert_eq!(conf.namespaces, TeiNamespaces::default());
        assert_eq!(conf.preview_rows, 3);

        let written = serde_json::to_string(&conf).unwrap();
        assert!(!written.contains("namespaces"));
    }
}
