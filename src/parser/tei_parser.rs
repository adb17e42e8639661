use std::time::Instant;
use log::{debug, info};
use roxmltree::{Document, Node, NodeId, ParsingOptions};
use serde::Serialize;
use thiserror::Error;
use crate::models::{CastMember, Conf, DialogueRecord, ResultTable, TeiNamespaces};
use crate::parser::text_processor::{linearize, split_speaker_content};
use crate::parser::tree_query::TreeQuery;
use crate::utils::strip_xml_declaration;

/// TEI 解析错误
#[derive(Error, Debug)]
pub enum TeiError {
    /// 输入不是格式良好的XML，消息原样来自底层解析器
    #[error(transparent)]
    Parse(#[from] roxmltree::Error),
}

pub type TeiResult<T> = Result<T, TeiError>;

/// 解析后的 TEI 文档，只读
pub struct TeiDocument<'input> {
    doc: Document<'input>,
}

/// 一段对白元素
///
/// 去除舞台说明不会改动文档树：被排除的子树只在线性化时跳过。
#[derive(Debug, Clone)]
pub struct DialogueElement<'a, 'input> {
    node: Node<'a, 'input>,
    excluded: Vec<NodeId>,
}

/// 解析文本，开头的XML声明会先被去掉
pub fn parse(raw: &str) -> TeiResult<TeiDocument<'_>> {
    let text = strip_xml_declaration(raw);
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(text, options)?;
    Ok(TeiDocument { doc })
}

impl<'input> TeiDocument<'input> {
    /// 文档中全部对白元素，任意深度，按文档顺序
    pub fn extract_dialogues<'a>(&'a self, namespaces: &TeiNamespaces) -> Vec<DialogueElement<'a, 'input>> {
        (&self.doc)
            .query_descendants(&namespaces.dialogue)
            .into_iter()
            .map(DialogueElement::new)
            .collect()
    }

    /// 角色表
    pub fn extract_cast(&self, namespaces: &TeiNamespaces) -> Vec<CastMember> {
        (&self.doc)
            .query_descendants(&namespaces.cast_item)
            .iter()
            .map(|item| CastMember::from_label(&item.text_content()))
            .collect()
    }
}

impl<'a, 'input> DialogueElement<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        DialogueElement {
            node,
            excluded: Vec::new(),
        }
    }

    /// 线性化文本，跳过已排除的子树
    pub fn text_content(&self) -> String {
        linearize(self.node, |n| self.excluded.contains(&n.id()))
    }

    pub fn to_record(&self) -> DialogueRecord {
        split_speaker_content(&self.text_content())
    }
}

/// 排除对白元素下所有舞台说明（任意深度）
pub fn strip_stage_directions<'a, 'input>(
    mut elem: DialogueElement<'a, 'input>,
    namespaces: &TeiNamespaces,
) -> DialogueElement<'a, 'input> {
    let stages = elem.node.query_descendants(&namespaces.stage);
    elem.excluded.extend(stages.iter().map(|n| n.id()));
    elem
}

/// 提取对白表
///
/// 解析失败时整体返回错误，不会给出部分结果。
pub fn extract_table(raw: &str, conf: &Conf) -> TeiResult<ResultTable> {
    let doc = parse(raw)?;
    Ok(table_from_document(&doc, conf))
}

fn table_from_document(doc: &TeiDocument, conf: &Conf) -> ResultTable {
    let dialogues = doc.extract_dialogues(&conf.namespaces);
    debug!("找到 {} 个对白元素", dialogues.len());

    dialogues
        .into_iter()
        .map(|elem| {
            if conf.strip_stage_directions {
                strip_stage_directions(elem, &conf.namespaces)
            } else {
                elem
            }
        })
        .map(|elem| elem.to_record())
        .collect::<Vec<_>>()
        .into()
}

/// 解析结果
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub table: ResultTable,
    pub cast: Vec<CastMember>,
    /// 解析耗时(毫秒)
    pub parse_time: u64,
}

/// TEI 对白解析器
pub struct TeiParser {
    conf: Conf,
}

impl TeiParser {
    pub fn new(conf: Conf) -> Self {
        TeiParser { conf }
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    pub fn extract_table(&self, raw: &str) -> TeiResult<ResultTable> {
        extract_table(raw, &self.conf)
    }

    /// 解析并同时提取对白表与角色表
    pub fn parse(&self, raw: &str) -> TeiResult<ParseOutput> {
        let start = Instant::now();
        let doc = parse(raw)?;
        let table = table_from_document(&doc, &self.conf);
        let cast = doc.extract_cast(&self.conf.namespaces);
        let parse_time = start.elapsed().as_millis() as u64;

        info!("解析完成: {} 条对白, {} 个角色, 耗时 {}ms", table.len(), cast.len(), parse_time);
        Ok(ParseOutput { table, cast, parse_time })
    }
}

impl Default for TeiParser {
    fn default() -> Self {
        Self::new(Conf::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAY: &str = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0" xmlns:HIS="http://www.example.org/ns/HIS">
<HIS:hisSp>
  ALICE<HIS:hisStage>(softly)</HIS:hisStage>
  Hello there.
  </HIS:hisSp>
<sp><HIS:hisSp>
  BOB
  <HIS:hisStage>(laughs)</HIS:hisStage>Hi.
  Again.
</HIS:hisSp></sp>
</TEI>"#;

    #[test]
    fn stage_directions_excluded_per_element() {
        let doc = parse(PLAY).unwrap();
        let ns = TeiNamespaces::default();
        let dialogues = doc.extract_dialogues(&ns);
        assert_eq!(dialogues.len(), 2);

        let stripped = strip_stage_directions(dialogues[0].clone(), &ns);
        assert_eq!(stripped.to_record(), DialogueRecord::new("ALICE", "Hello there."));
        // 其他元素不受影响
        assert!(dialogues[1].text_content().contains("(laughs)"));
    }

    #[test]
    fn raw_mode_keeps_stage_text() {
        let conf = Conf {
            strip_stage_directions: false,
            ..Conf::default()
        };
        let table = extract_table(PLAY, &conf).unwrap();
        assert_eq!(table.records()[0].speaker, "ALICE(softly)");
        assert_eq!(table.records()[1].content, "(laughs)Hi. Again.");
    }

    #[test]
    fn parse_error_message_is_verbatim() {
        let err = parse("<root><unclosed>").err().unwrap();
        let TeiError::Parse(inner) = &err;
        assert_eq!(err.to_string(), inner.to_string());
    }
}
