use roxmltree::Node;
use crate::models::DialogueRecord;

/// 按文档顺序拼接节点下所有文本节点
///
/// `skip` 为真的元素连同其子树一起跳过；节点本身总会被展开。
pub fn linearize<'a, 'input, F>(node: Node<'a, 'input>, skip: F) -> String
where
    F: Fn(Node<'a, 'input>) -> bool,
{
    let mut buffer = String::new();
    let mut stack: Vec<Node<'a, 'input>> = node.children().rev().collect();

    while let Some(current) = stack.pop() {
        if current.is_text() {
            if let Some(text) = current.text() {
                buffer.push_str(text);
            }
        } else if current.is_element() && !skip(current) {
            stack.extend(current.children().rev());
        }
    }

    buffer
}

/// 将线性化文本拆成说话人与台词
///
/// 按换行切分并去除首尾空白，丢弃空行；第一行为说话人，其余以单个空格连接为台词。
pub fn split_speaker_content(text: &str) -> DialogueRecord {
    let mut parts = text
        .split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty());

    let speaker = parts.next().unwrap_or_default();
    let content = parts.collect::<Vec<_>>().join(" ");

    DialogueRecord::new(speaker, &content)
}
