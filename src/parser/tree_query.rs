use roxmltree::{Document, Node};
use crate::models::QualifiedName;
use crate::parser::text_processor::linearize;

/// 树查询接口
///
/// 调用方只通过带命名空间的标签查询节点、读取文本，不接触节点内部结构。
pub trait TreeQuery<'a, 'input: 'a> {
    /// 任意深度下匹配 `name` 的后代元素，按文档顺序，不含自身
    fn query_descendants(&self, name: &QualifiedName) -> Vec<Node<'a, 'input>>;

    /// 全部文本节点按文档顺序拼接
    fn text_content(&self) -> String;
}

/// 元素是否匹配带命名空间的标签
pub fn matches(node: Node, name: &QualifiedName) -> bool {
    node.is_element()
        && node.tag_name().name() == name.local
        && node.tag_name().namespace() == Some(name.namespace.as_str())
}

impl<'a, 'input: 'a> TreeQuery<'a, 'input> for Node<'a, 'input> {
    fn query_descendants(&self, name: &QualifiedName) -> Vec<Node<'a, 'input>> {
        self.descendants()
            .skip(1)
            .filter(|n| matches(*n, name))
            .collect()
    }

    fn text_content(&self) -> String {
        linearize(*self, |_| false)
    }
}

impl<'a, 'input: 'a> TreeQuery<'a, 'input> for &'a Document<'input> {
    fn query_descendants(&self, name: &QualifiedName) -> Vec<Node<'a, 'input>> {
        Document::root(*self).query_descendants(name)
    }

    fn text_content(&self) -> String {
        Document::root(*self).text_content()
    }
}
