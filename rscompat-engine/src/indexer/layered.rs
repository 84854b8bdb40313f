//! 两层规则查找：自定义层优先，其次内置层
//! 覆盖关系由 RuleLayer 显式标记，而非依赖字典合并顺序
use regex::Regex;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::{FeatureOrigin, FeatureRule, Language, RuleLayer, RuleTable};
use crate::indexer::matcher::compile_cached;

/// 已编译的单条模式（保留原始模式文本作为命中证据）
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub source: Arc<str>,
    pub regex: Arc<Regex>,
}

impl CompiledPattern {
    #[inline(always)]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// 已编译规则，无效模式在编译时已被剔除
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub id: String,
    pub description: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub patterns: Vec<CompiledPattern>,
    pub layer: RuleLayer,
}

impl CompiledRule {
    fn compile(rule: &FeatureRule, layer: RuleLayer, case_insensitive: bool) -> Self {
        let patterns = rule
            .patterns
            .iter()
            .filter_map(|p| {
                compile_cached(&rule.id, p, case_insensitive).map(|regex| CompiledPattern {
                    source: Arc::from(p.as_str()),
                    regex,
                })
            })
            .collect();

        Self {
            id: rule.id.clone(),
            description: rule.description.clone(),
            category: rule.category.clone(),
            keywords: rule.keywords.clone(),
            patterns,
            layer,
        }
    }

    /// 按顺序返回第一条命中的模式
    pub fn first_match(&self, text: &str) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.is_match(text))
    }

    /// 返回全部命中的模式
    pub fn all_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a CompiledPattern> + 'a {
        self.patterns.iter().filter(move |p| p.is_match(text))
    }
}

/// 单一语言的两层规则表
#[derive(Debug, Clone)]
pub struct LayeredRuleTable {
    language: Language,
    builtin: BTreeMap<String, Arc<CompiledRule>>,
    custom: BTreeMap<String, Arc<CompiledRule>>,
    /// 生效规则（按ID排序），构造时计算一次
    effective: Vec<Arc<CompiledRule>>,
}

impl LayeredRuleTable {
    /// 构建两层表
    /// 参数：
    /// - builtin: 内置规则表
    /// - custom: 用户规则（同名即覆盖）
    /// - case_insensitive: 模式是否忽略大小写（CSS为true，JS为false）
    pub fn new(
        builtin: &RuleTable,
        custom: &BTreeMap<String, FeatureRule>,
        case_insensitive: bool,
    ) -> Self {
        let builtin_compiled: BTreeMap<String, Arc<CompiledRule>> = builtin
            .iter()
            .map(|rule| {
                (
                    rule.id.clone(),
                    Arc::new(CompiledRule::compile(rule, RuleLayer::Builtin, case_insensitive)),
                )
            })
            .collect();

        let custom_compiled: BTreeMap<String, Arc<CompiledRule>> = custom
            .values()
            .map(|rule| {
                let layer = RuleLayer::Custom {
                    overrides_builtin: builtin.contains(&rule.id),
                };
                if layer.is_override() {
                    log::debug!(
                        "Custom {} rule [{}] overrides builtin rule",
                        builtin.language,
                        rule.id
                    );
                }
                (
                    rule.id.clone(),
                    Arc::new(CompiledRule::compile(rule, layer, case_insensitive)),
                )
            })
            .collect();

        let mut effective: Vec<Arc<CompiledRule>> = builtin_compiled
            .iter()
            .filter(|(id, _)| !custom_compiled.contains_key(*id))
            .map(|(_, r)| r.clone())
            .chain(custom_compiled.values().cloned())
            .collect();
        effective.sort_by(|a, b| a.id.cmp(&b.id));

        Self {
            language: builtin.language,
            builtin: builtin_compiled,
            custom: custom_compiled,
            effective,
        }
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// custom.get(id) 优先，其次 builtin.get(id)
    pub fn get(&self, id: &str) -> Option<&CompiledRule> {
        self.custom
            .get(id)
            .or_else(|| self.builtin.get(id))
            .map(|r| r.as_ref())
    }

    pub fn layer(&self, id: &str) -> Option<RuleLayer> {
        self.get(id).map(|r| r.layer)
    }

    #[inline]
    pub fn is_custom(&self, id: &str) -> bool {
        self.custom.contains_key(id)
    }

    #[inline]
    pub fn is_override(&self, id: &str) -> bool {
        self.custom.get(id).is_some_and(|r| r.layer.is_override())
    }

    /// 生效规则迭代（按ID排序）
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.effective.iter().map(|r| r.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.effective.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.effective.is_empty()
    }

    pub fn supported_features(&self) -> Vec<String> {
        self.effective.iter().map(|r| r.id.clone()).collect()
    }

    /// 任意生效规则的任意模式命中探测文本
    pub fn any_pattern_matches(&self, probe: &str) -> bool {
        self.effective
            .iter()
            .any(|r| r.patterns.iter().any(|p| p.is_match(probe)))
    }

    pub fn origin(&self, id: &str) -> Option<FeatureOrigin<'_>> {
        self.get(id).map(|r| FeatureOrigin {
            category: r.category.as_str(),
            user_defined: r.layer.is_custom(),
        })
    }
}

/// HTML 查找表（名称 → 特性ID）的两层版本
#[derive(Debug, Clone, Default)]
pub struct LayeredLookup {
    builtin: FxHashMap<String, String>,
    custom: BTreeMap<String, String>,
}

impl LayeredLookup {
    pub fn new(builtin: &[(&str, &str)], custom: &BTreeMap<String, String>) -> Self {
        Self {
            builtin: builtin
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            custom: custom.clone(),
        }
    }

    /// 返回 (特性ID, 来源层)
    pub fn get(&self, key: &str) -> Option<(&str, RuleLayer)> {
        if let Some(id) = self.custom.get(key) {
            let layer = RuleLayer::Custom {
                overrides_builtin: self.builtin.contains_key(key),
            };
            return Some((id.as_str(), layer));
        }
        self.builtin
            .get(key)
            .map(|id| (id.as_str(), RuleLayer::Builtin))
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.custom.contains_key(key) || self.builtin.contains_key(key)
    }

    /// 生效的键（两层并集）
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.builtin
            .keys()
            .filter(|k| !self.custom.contains_key(*k))
            .chain(self.custom.keys())
            .map(|k| k.as_str())
    }

    /// 生效的特性ID集合（去重前）
    pub fn feature_ids(&self) -> impl Iterator<Item = &str> {
        self.builtin
            .iter()
            .filter(|(k, _)| !self.custom.contains_key(*k))
            .map(|(_, v)| v.as_str())
            .chain(self.custom.values().map(|v| v.as_str()))
    }

    /// 某特性ID是否只由用户层提供
    pub fn provides_custom(&self, feature: &str) -> bool {
        self.custom.values().any(|v| v == feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RuleDef;

    const DEFS: &[RuleDef] = &[
        RuleDef::new("css-grid", "CSS Grid", &[r"display\s*:\s*grid"]),
        RuleDef::new("flexbox", "Flexbox", &[r"display\s*:\s*flex", r"(?<=x)bad"]),
    ];

    fn builtin() -> RuleTable {
        let mut t = RuleTable::new(Language::Css);
        t.extend_defs("layout", DEFS);
        t
    }

    #[test]
    fn custom_overrides_builtin() {
        let mut custom = BTreeMap::new();
        custom.insert(
            "css-grid".to_string(),
            FeatureRule::custom("css-grid", vec!["grid-magic".into()], "Mine"),
        );
        custom.insert(
            "my-thing".to_string(),
            FeatureRule::custom("my-thing", vec!["thing".into()], "Thing"),
        );
        let table = LayeredRuleTable::new(&builtin(), &custom, true);

        let grid = table.get("css-grid").unwrap();
        assert_eq!(grid.patterns.len(), 1);
        assert_eq!(&*grid.patterns[0].source, "grid-magic");
        assert!(table.is_override("css-grid"));
        assert!(table.is_custom("my-thing"));
        assert!(!table.is_override("my-thing"));
        assert!(!table.is_custom("flexbox"));
        assert_eq!(table.layer("flexbox"), Some(RuleLayer::Builtin));
        assert_eq!(table.supported_features(), vec!["css-grid", "flexbox", "my-thing"]);
        // 被覆盖的内置模式不再生效
        assert!(!table.any_pattern_matches("display: grid"));
    }

    #[test]
    fn invalid_patterns_are_dropped() {
        let table = LayeredRuleTable::new(&builtin(), &BTreeMap::new(), true);
        assert_eq!(table.get("flexbox").unwrap().patterns.len(), 1);
        assert!(table.get("flexbox").unwrap().first_match("DISPLAY:FLEX").is_some());
    }

    #[test]
    fn lookup_precedence() {
        let mut custom = BTreeMap::new();
        custom.insert("dialog".to_string(), "my-dialog".to_string());
        let lookup = LayeredLookup::new(&[("dialog", "dialog"), ("details", "details")], &custom);

        let (id, layer) = lookup.get("dialog").unwrap();
        assert_eq!(id, "my-dialog");
        assert!(layer.is_override());
        assert_eq!(lookup.get("details"), Some(("details", RuleLayer::Builtin)));
        assert!(lookup.provides_custom("my-dialog"));
        assert!(!lookup.contains_key("marquee"));
    }
}
