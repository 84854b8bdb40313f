//! 用户自定义规则文档模型
//! 文档结构：
//! `{"css": {id: {"patterns": [..], "description": ..}}, "javascript": {..},
//!   "html": {"elements": {}, "attributes": {}, "input_types": {}, "attribute_values": {"attr:value": id}}}`
//! 以 `_` 开头的键视为注释，类型化访问时忽略
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::core::{FeatureRule, HtmlRuleKind, RuleSection};
use crate::error::{CoreError, CoreResult};
use crate::indexer::matcher::validate_pattern;

/// HTML 四类查找表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomHtmlRules {
    pub elements: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub input_types: BTreeMap<String, String>,
    /// 键格式 `attr:value`
    pub attribute_values: BTreeMap<String, String>,
}

impl CustomHtmlRules {
    pub fn map(&self, kind: HtmlRuleKind) -> &BTreeMap<String, String> {
        match kind {
            HtmlRuleKind::Elements => &self.elements,
            HtmlRuleKind::Attributes => &self.attributes,
            HtmlRuleKind::InputTypes => &self.input_types,
            HtmlRuleKind::AttributeValues => &self.attribute_values,
        }
    }

    pub fn map_mut(&mut self, kind: HtmlRuleKind) -> &mut BTreeMap<String, String> {
        match kind {
            HtmlRuleKind::Elements => &mut self.elements,
            HtmlRuleKind::Attributes => &mut self.attributes,
            HtmlRuleKind::InputTypes => &mut self.input_types,
            HtmlRuleKind::AttributeValues => &mut self.attribute_values,
        }
    }

    pub fn is_empty(&self) -> bool {
        HtmlRuleKind::ALL.iter().all(|k| self.map(*k).is_empty())
    }

    pub fn len(&self) -> usize {
        HtmlRuleKind::ALL.iter().map(|k| self.map(*k).len()).sum()
    }
}

/// 自定义规则集（三种语言）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomRuleSet {
    pub css: BTreeMap<String, FeatureRule>,
    pub javascript: BTreeMap<String, FeatureRule>,
    pub html: CustomHtmlRules,
}

impl CustomRuleSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从 JSON 文本解析
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CoreError::MalformedCustomRules(e.to_string()))?;
        Self::from_value(&value)
    }

    /// 从 JSON 值宽松解析
    /// 顶层非对象返回 MalformedCustomRules；单条无效条目跳过
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let root = value.as_object().ok_or_else(|| {
            CoreError::MalformedCustomRules("top-level value is not an object".to_string())
        })?;

        let mut set = Self::default();
        if let Some(section) = section_object(root, RuleSection::Css) {
            set.css = parse_rule_section(section, RuleSection::Css);
        }
        if let Some(section) = section_object(root, RuleSection::JavaScript) {
            set.javascript = parse_rule_section(section, RuleSection::JavaScript);
        }
        if let Some(section) = section_object(root, RuleSection::Html) {
            for kind in HtmlRuleKind::ALL {
                match section.get(kind.key()) {
                    Some(Value::Object(map)) => *set.html.map_mut(kind) = parse_lookup(map, kind),
                    Some(_) => log::warn!(
                        "Custom html rules: [{}] is not an object, ignored",
                        kind.key()
                    ),
                    None => {}
                }
            }
        }
        Ok(set)
    }

    /// 序列化为文档结构（不含注释键）
    pub fn to_value(&self) -> Value {
        let mut html = Map::new();
        for kind in HtmlRuleKind::ALL {
            html.insert(kind.key().to_string(), json!(self.html.map(kind)));
        }

        let mut root = Map::new();
        root.insert(RuleSection::Css.key().to_string(), rules_to_value(&self.css));
        root.insert(
            RuleSection::JavaScript.key().to_string(),
            rules_to_value(&self.javascript),
        );
        root.insert(RuleSection::Html.key().to_string(), Value::Object(html));
        Value::Object(root)
    }

    /// CSS / JS 分区的规则；HTML 分区返回 None
    pub fn rules(&self, section: RuleSection) -> Option<&BTreeMap<String, FeatureRule>> {
        match section {
            RuleSection::Css => Some(&self.css),
            RuleSection::JavaScript => Some(&self.javascript),
            RuleSection::Html => None,
        }
    }

    /// 判断某ID是否由用户定义
    /// HTML 分区：指定子类时查该表的键；未指定时任一表的键或特性ID命中即为真
    pub fn contains(&self, section: RuleSection, id: &str, subtype: Option<HtmlRuleKind>) -> bool {
        match section {
            RuleSection::Css => self.css.contains_key(id),
            RuleSection::JavaScript => self.javascript.contains_key(id),
            RuleSection::Html => match subtype {
                Some(kind) => self.html.map(kind).contains_key(id),
                None => HtmlRuleKind::ALL.iter().any(|k| {
                    let map = self.html.map(*k);
                    map.contains_key(id) || map.values().any(|v| v == id)
                }),
            },
        }
    }

    /// 逐条校验 CSS / JS 规则：无模式的规则与无法编译的模式
    /// 无效模式在编译时同样会被跳过，此处只用于提前报告
    pub fn validate(&self) -> Vec<CoreError> {
        let mut problems = Vec::new();
        for rule in self.css.values().chain(self.javascript.values()) {
            if rule.patterns.is_empty() {
                problems.push(CoreError::InvalidInput(format!("rule [{}] has no patterns", rule.id)));
            }
            for pattern in &rule.patterns {
                if let Err(e) = validate_pattern(pattern) {
                    problems.push(CoreError::InvalidRulePattern {
                        rule: rule.id.clone(),
                        pattern: pattern.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        problems
    }

    pub fn len(&self) -> usize {
        self.css.len() + self.javascript.len() + self.html.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[inline]
fn is_comment_key(key: &str) -> bool {
    key.starts_with('_')
}

fn section_object(root: &Map<String, Value>, section: RuleSection) -> Option<&Map<String, Value>> {
    match root.get(section.key()) {
        Some(Value::Object(map)) => Some(map),
        Some(Value::Null) | None => None,
        Some(_) => {
            log::warn!(
                "Custom rules: section [{}] is not an object, ignored",
                section.key()
            );
            None
        }
    }
}

fn parse_rule_section(section: &Map<String, Value>, kind: RuleSection) -> BTreeMap<String, FeatureRule> {
    let mut rules = BTreeMap::new();
    for (id, entry) in section {
        if is_comment_key(id) {
            continue;
        }
        match parse_rule_entry(id, entry) {
            Some(rule) => {
                rules.insert(id.clone(), rule);
            }
            None => log::debug!(
                "Custom {} rule [{}] has no usable patterns, skipped",
                kind.key(),
                id
            ),
        }
    }
    rules
}

fn parse_rule_entry(id: &str, entry: &Value) -> Option<FeatureRule> {
    let obj = entry.as_object()?;
    let patterns: Vec<String> = match obj.get("patterns")? {
        Value::Array(items) => items
            .iter()
            .filter_map(|p| p.as_str().map(str::to_string))
            .collect(),
        Value::String(single) => vec![single.clone()],
        _ => return None,
    };

    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or(id)
        .to_string();
    let keywords = obj
        .get("keywords")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    let mut rule = FeatureRule::custom(id, patterns, description);
    rule.keywords = keywords;
    Some(rule)
}

fn parse_lookup(map: &Map<String, Value>, kind: HtmlRuleKind) -> BTreeMap<String, String> {
    map.iter()
        .filter(|(key, _)| !is_comment_key(key))
        .filter_map(|(key, value)| match value.as_str() {
            Some(id) => Some((key.to_ascii_lowercase(), id.to_string())),
            None => {
                log::debug!(
                    "Custom html {} entry [{}] is not a string, skipped",
                    kind.key(),
                    key
                );
                None
            }
        })
        .collect()
}

fn rules_to_value(rules: &BTreeMap<String, FeatureRule>) -> Value {
    let map: Map<String, Value> = rules
        .iter()
        .map(|(id, rule)| {
            let mut entry = json!({
                "patterns": rule.patterns,
                "description": rule.description,
            });
            if !rule.keywords.is_empty() {
                entry["keywords"] = json!(rule.keywords);
            }
            (id.clone(), entry)
        })
        .collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "_comment": "user rules",
        "css": {
            "_note": "ignored",
            "css-grid": {"patterns": ["grid-magic"], "description": "Mine", "keywords": ["grid"]},
            "broken": {"description": "no patterns"},
            "odd": 42
        },
        "javascript": {
            "my-api": {"patterns": ["\\bmyApi\\("]}
        },
        "html": {
            "elements": {"X-Widget": "custom-elementsv1", "_c": "skip"},
            "attribute_values": {"rel:modulepreload": "link-rel-modulepreload"},
            "input_types": {"color": 5}
        }
    }"#;

    #[test]
    fn lenient_parse() {
        let set = CustomRuleSet::from_json_str(DOC).unwrap();
        assert_eq!(set.css.len(), 1);
        let grid = &set.css["css-grid"];
        assert_eq!(grid.patterns, vec!["grid-magic"]);
        assert_eq!(grid.keywords, vec!["grid"]);
        assert_eq!(set.javascript["my-api"].description, "my-api");
        assert_eq!(set.html.elements.get("x-widget").map(String::as_str), Some("custom-elementsv1"));
        assert!(set.html.input_types.is_empty());
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn user_rule_membership() {
        let set = CustomRuleSet::from_json_str(DOC).unwrap();
        assert!(set.contains(RuleSection::Css, "css-grid", None));
        assert!(!set.contains(RuleSection::Css, "broken", None));
        assert!(set.contains(RuleSection::JavaScript, "my-api", None));
        assert!(set.contains(RuleSection::Html, "x-widget", Some(HtmlRuleKind::Elements)));
        assert!(!set.contains(RuleSection::Html, "x-widget", Some(HtmlRuleKind::Attributes)));
        assert!(set.contains(RuleSection::Html, "rel:modulepreload", None));
        assert!(set.contains(RuleSection::Html, "link-rel-modulepreload", None));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(matches!(
            CustomRuleSet::from_json_str("[1, 2]"),
            Err(CoreError::MalformedCustomRules(_))
        ));
        assert!(CustomRuleSet::from_json_str("{not json").is_err());
    }

    #[test]
    fn validate_reports_bad_rules() {
        let mut set = CustomRuleSet::empty();
        set.css.insert("empty".into(), FeatureRule::custom("empty", vec![], "Empty"));
        set.javascript.insert(
            "lookbehind".into(),
            FeatureRule::custom("lookbehind", vec!["(?<=a)b".into(), "ok".into()], "Bad"),
        );
        let problems = set.validate();
        assert_eq!(problems.len(), 2);
        assert!(matches!(&problems[0], CoreError::InvalidInput(_)));
        assert!(matches!(
            &problems[1],
            CoreError::InvalidRulePattern { rule, .. } if rule == "lookbehind"
        ));
    }

    #[test]
    fn to_value_reloads_equal() {
        let set = CustomRuleSet::from_json_str(DOC).unwrap();
        let again = CustomRuleSet::from_value(&set.to_value()).unwrap();
        assert_eq!(set, again);
    }
}
