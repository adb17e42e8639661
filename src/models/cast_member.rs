use serde::{Deserialize, Serialize};

/// 角色表条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    /// 条目完整文本，如 "Doktor Stockmann, badelæge"
    pub label: String,
    /// 第一个逗号前的角色名
    pub name: String,
}

impl CastMember {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        let name = label.split(',').next().unwrap_or_default().trim();
        CastMember {
            label: label.to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_text_before_first_comma() {
        let member = CastMember::from_label("  Doktor Stockmann, badelæge ved badet, ");
        assert_eq!(member.name, "Doktor Stockmann");
        assert_eq!(member.label, "Doktor Stockmann, badelæge ved badet,");
    }

    #[test]
    fn label_without_comma() {
        let member = CastMember::from_label("Hovstad");
        assert_eq!(member.name, "Hovstad");
    }
}
