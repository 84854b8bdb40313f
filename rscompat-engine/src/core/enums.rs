use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// 源码语言，决定使用哪一个解析器与哪一张规则表
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Css,
    JavaScript,
    Html,
}

impl Language {
    /// 按文件扩展名选择语言，未知扩展名返回 None
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "css" => Some(Language::Css),
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" => Some(Language::JavaScript),
            "html" | "htm" | "xhtml" => Some(Language::Html),
            _ => None,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Css => write!(f, "css"),
            Language::JavaScript => write!(f, "javascript"),
            Language::Html => write!(f, "html"),
        }
    }
}

/// 自定义规则文件中的顶层分区
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSection {
    Css,
    #[serde(rename = "javascript")]
    JavaScript,
    Html,
}

impl RuleSection {
    /// JSON 文档中的键名
    pub fn key(&self) -> &'static str {
        match self {
            RuleSection::Css => "css",
            RuleSection::JavaScript => "javascript",
            RuleSection::Html => "html",
        }
    }
}

impl From<Language> for RuleSection {
    fn from(lang: Language) -> Self {
        match lang {
            Language::Css => RuleSection::Css,
            Language::JavaScript => RuleSection::JavaScript,
            Language::Html => RuleSection::Html,
        }
    }
}

/// HTML 自定义规则的四类查找表
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HtmlRuleKind {
    Elements,
    Attributes,
    InputTypes,
    AttributeValues,
}

impl HtmlRuleKind {
    pub const ALL: [HtmlRuleKind; 4] = [
        HtmlRuleKind::Elements,
        HtmlRuleKind::Attributes,
        HtmlRuleKind::InputTypes,
        HtmlRuleKind::AttributeValues,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            HtmlRuleKind::Elements => "elements",
            HtmlRuleKind::Attributes => "attributes",
            HtmlRuleKind::InputTypes => "input_types",
            HtmlRuleKind::AttributeValues => "attribute_values",
        }
    }
}

/// 规则来源层：内置表 或 用户自定义表
/// overrides_builtin 标记自定义规则是否覆盖了同名内置规则
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleLayer {
    Builtin,
    Custom { overrides_builtin: bool },
}

impl RuleLayer {
    #[inline]
    pub fn is_custom(&self) -> bool {
        matches!(self, RuleLayer::Custom { .. })
    }

    #[inline]
    pub fn is_override(&self) -> bool {
        matches!(self, RuleLayer::Custom { overrides_builtin: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_extension() {
        assert_eq!(Language::from_path(Path::new("a/site.CSS")), Some(Language::Css));
        assert_eq!(Language::from_path(Path::new("app.mjs")), Some(Language::JavaScript));
        assert_eq!(Language::from_path(Path::new("index.htm")), Some(Language::Html));
        assert_eq!(Language::from_path(Path::new("README")), None);
        assert_eq!(Language::from_path(Path::new("notes.txt")), None);
    }

    #[test]
    fn layer_flags() {
        assert!(!RuleLayer::Builtin.is_custom());
        assert!(RuleLayer::Custom { overrides_builtin: false }.is_custom());
        assert!(!RuleLayer::Custom { overrides_builtin: false }.is_override());
        assert!(RuleLayer::Custom { overrides_builtin: true }.is_override());
    }
}
