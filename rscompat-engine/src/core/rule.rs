use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::enums::Language;

/// 内置规则的静态定义（编译期常量，按主题分表）
#[derive(Debug, Clone, Copy)]
pub struct RuleDef {
    pub id: &'static str,
    pub description: &'static str,
    pub patterns: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

impl RuleDef {
    pub const fn new(
        id: &'static str,
        description: &'static str,
        patterns: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            description,
            patterns,
            keywords: &[],
        }
    }

    /// 附加检索关键词
    pub const fn with_keywords(self, keywords: &'static [&'static str]) -> Self {
        Self { keywords, ..self }
    }
}

/// 一条特性检测规则
/// patterns 之间为"或"关系：任意一条命中即视为规则满足
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRule {
    pub id: String,
    pub patterns: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// 规则所属主题子表（layout/typography/...），自定义规则为 "custom"
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

pub const CUSTOM_CATEGORY: &str = "custom";

fn default_category() -> String {
    CUSTOM_CATEGORY.to_string()
}

impl FeatureRule {
    /// 由静态定义构建
    pub fn from_def(def: &RuleDef, category: &str) -> Self {
        Self {
            id: def.id.to_string(),
            patterns: def.patterns.iter().map(|p| p.to_string()).collect(),
            description: def.description.to_string(),
            category: category.to_string(),
            keywords: def.keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// 用户自定义规则
    pub fn custom(id: impl Into<String>, patterns: Vec<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            patterns,
            description: description.into(),
            category: default_category(),
            keywords: Vec::new(),
        }
    }
}

/// 单一语言的规则表（FeatureId → FeatureRule），迭代顺序按 FeatureId 排序
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    pub language: Language,
    pub rules: BTreeMap<String, FeatureRule>,
}

impl RuleTable {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            rules: BTreeMap::new(),
        }
    }

    /// 合并一张主题子表；同名规则后写入者覆盖先写入者
    pub fn extend_defs(&mut self, category: &str, defs: &[RuleDef]) {
        for def in defs {
            if self.rules.contains_key(def.id) {
                log::debug!(
                    "Builtin {} rule [{}] redefined by sub-table [{}]",
                    self.language,
                    def.id,
                    category
                );
            }
            self.rules
                .insert(def.id.to_string(), FeatureRule::from_def(def, category));
        }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<&FeatureRule> {
        self.rules.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureRule> {
        self.rules.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &[RuleDef] = &[RuleDef::new("a", "first", &["x"])];
    const SECOND: &[RuleDef] = &[RuleDef::new("a", "second", &["y"]), RuleDef::new("b", "b", &["z"])];

    #[test]
    fn later_sub_table_wins() {
        let mut table = RuleTable::new(Language::Css);
        table.extend_defs("one", FIRST);
        table.extend_defs("two", SECOND);

        assert_eq!(table.len(), 2);
        let a = table.get("a").unwrap();
        assert_eq!(a.description, "second");
        assert_eq!(a.patterns, vec!["y".to_string()]);
        assert_eq!(a.category, "two");
    }

    #[test]
    fn custom_rule_defaults() {
        let rule = FeatureRule::custom("my-feature", vec!["foo".into()], "Foo");
        assert_eq!(rule.category, CUSTOM_CATEGORY);
        assert!(rule.keywords.is_empty());
    }
}
