//! CSS 解析器
//! 流程：结构化提取 → 重建可匹配文本 → 全部生效规则忽略大小写匹配 → 结构化未识别检测
mod allowlist;
mod extract;
mod matchable;
mod unrecognized;

use rscompat_engine::{
    css_rules, CustomRuleSet, Evidence, FeatureMatch, FeatureOrigin, Language, LayeredRuleTable,
    ParseResult,
};

use crate::config::ParserOptions;
use crate::parser::SourceParser;

pub use extract::{extract_stylesheet, AtRule, Declaration, Extracted, SelectorEntry};
pub use matchable::build_matchable_text;

/// CSS 解析器：构造时合并一次规则表，之后只读
#[derive(Debug, Clone)]
pub struct CssParser {
    rules: LayeredRuleTable,
    options: ParserOptions,
}

impl CssParser {
    pub fn new(custom: &CustomRuleSet) -> Self {
        Self::with_options(custom, ParserOptions::default())
    }

    pub fn with_options(custom: &CustomRuleSet, options: ParserOptions) -> Self {
        let rules = LayeredRuleTable::new(css_rules(), &custom.css, true);
        log::debug!(
            "[{}] parser ready: {} effective rules ({} custom)",
            Self::TYPE_NAME,
            rules.len(),
            custom.css.len()
        );
        Self { rules, options }
    }

    /// 仅内置规则
    pub fn builtin() -> Self {
        Self::new(&CustomRuleSet::empty())
    }

    pub fn rules(&self) -> &LayeredRuleTable {
        &self.rules
    }
}

impl SourceParser for CssParser {
    const TYPE_NAME: &'static str = "CSS";
    const LANGUAGE: Language = Language::Css;

    fn parse_string(&self, source: &str) -> ParseResult {
        parse(&self.rules, source, &self.options)
    }

    fn supported_features(&self) -> Vec<String> {
        self.rules.supported_features()
    }

    fn feature_origin(&self, feature: &str) -> Option<FeatureOrigin<'_>> {
        self.rules.origin(feature)
    }
}

/// 无状态解析入口
pub fn parse(rules: &LayeredRuleTable, source: &str, options: &ParserOptions) -> ParseResult {
    let extracted = extract_stylesheet(source);
    let text = build_matchable_text(&extracted);

    let mut result = ParseResult::new();
    for rule in rules.iter() {
        let matched: Vec<String> = rule
            .all_matches(&text)
            .map(|p| p.source.to_string())
            .collect();
        if !matched.is_empty() {
            result.record(FeatureMatch::new(
                &rule.id,
                &rule.description,
                Evidence::MatchedProperties(matched),
            ));
        }
    }

    if options.report_unrecognized {
        result.unrecognized = unrecognized::find_unrecognized(&extracted, rules);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rscompat_engine::{FeatureRule, RuleLayer};

    fn custom_css(id: &str, patterns: &[&str]) -> CustomRuleSet {
        let mut set = CustomRuleSet::empty();
        set.css.insert(
            id.to_string(),
            FeatureRule::custom(id, patterns.iter().map(|p| p.to_string()).collect(), "Custom"),
        );
        set
    }

    #[test]
    fn flexbox_gap_is_block_scoped() {
        let parser = CssParser::builtin();

        let same_block = parser.parse_string(".x { display: flex; gap: 10px; }");
        assert!(same_block.contains("flexbox"));
        assert!(same_block.contains("flexbox-gap"));

        let split = parser.parse_string(".a { display: flex; } .b { gap: 10px; }");
        assert!(split.contains("flexbox"));
        assert!(!split.contains("flexbox-gap"));

        let same_selector = parser.parse_string(".x { display: flex; } .x { gap: 10px; }");
        assert!(!same_selector.contains("flexbox-gap"));
    }

    #[test]
    fn details_carry_all_matched_patterns() {
        let result = CssParser::builtin().parse_string(".x { display: flex; gap: 1rem; }");
        let detail = result.detail("flexbox-gap").unwrap();
        assert_eq!(detail.description, "gap property for Flexbox");
        match &detail.evidence {
            Evidence::MatchedProperties(patterns) => assert!(!patterns.is_empty()),
            other => panic!("unexpected evidence {:?}", other),
        }
        assert_eq!(result.features.len(), result.details.len());
    }

    #[test]
    fn unrecognized_hygiene() {
        let result = CssParser::builtin()
            .parse_string(":root { --c: red; } @media print { a { color: var(--c); } }");
        assert!(result.contains("css-variables"));
        assert!(result.contains("css-mediaqueries"));
        assert!(!result.unrecognized.iter().any(|t| t.contains("--c")));
        assert!(!result.unrecognized.contains("@-rule: @media"));
    }

    #[test]
    fn unknown_names_are_reported() {
        let result = CssParser::builtin()
            .parse_string("a { zoomy-thing: 1; -webkit-zoomy-thing: 2; color: red } @frobnicate x;");
        assert!(result.unrecognized.contains("property: zoomy-thing"));
        assert!(result.unrecognized.contains("property: -webkit-zoomy-thing"));
        assert!(result.unrecognized.contains("@-rule: @frobnicate"));
        assert!(!result.unrecognized.contains("property: color"));
    }

    #[test]
    fn unrecognized_can_be_disabled() {
        let parser = CssParser::with_options(
            &CustomRuleSet::empty(),
            ParserOptions {
                report_unrecognized: false,
            },
        );
        assert!(parser.parse_string("a { zoomy-thing: 1 }").unrecognized.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = CssParser::builtin().parse_string("DIV { DISPLAY: GRID }");
        assert!(result.contains("css-grid"));
    }

    #[test]
    fn deterministic_and_stateless() {
        let parser = CssParser::builtin();
        let source = ".g { display: grid } @supports (display: grid) { .g { gap: 1px } }";
        let first = parser.parse_string(source);
        // 中间插入一次不相关的解析，结果不受影响
        let other = parser.parse_string("a { color: red }");
        assert!(!other.contains("css-grid"));
        assert_eq!(first, parser.parse_string(source));
        assert!(first.contains("css-featurequeries"));
    }

    #[test]
    fn deeply_nested_source_still_parses() {
        let source = "@media screen{".repeat(5000)
            + &"}".repeat(5000)
            + ".g { display: grid; width: calc"
            + &"(".repeat(5000)
            + &")".repeat(5000)
            + " }";
        let result = CssParser::builtin().parse_string(&source);
        assert!(result.contains("css-mediaqueries"));
        assert!(result.contains("css-grid"));
    }

    #[test]
    fn custom_rules_override_builtin() {
        let parser = CssParser::new(&custom_css("css-grid", &["grid-magic"]));
        assert_eq!(
            parser.rules().layer("css-grid"),
            Some(RuleLayer::Custom {
                overrides_builtin: true
            })
        );
        assert!(!parser.parse_string("a { display: grid }").contains("css-grid"));
        let hit = parser.parse_string("a { grid-magic: 1 }");
        assert!(hit.contains("css-grid"));
        // 被自定义模式覆盖的名称不再视为未识别
        assert!(hit.unrecognized.is_empty());
    }

    #[test]
    fn invalid_custom_pattern_is_skipped() {
        let parser = CssParser::new(&custom_css("my-feature", &["(?<=a)b", "magic-prop\\s*:"]));
        let result = parser.parse_string("a { magic-prop: 1 }");
        assert!(result.contains("my-feature"));
        assert!(parser.supported_features().contains(&"my-feature".to_string()));
    }

    #[test]
    fn detailed_report_groups_by_category() {
        let parser = CssParser::new(&custom_css("my-feature", &["magic-prop\\s*:"]));
        let result = parser.parse_string("a { display: grid; magic-prop: 1 }");
        let report = parser.detailed_report(&result);
        assert_eq!(report.language, Some(Language::Css));
        assert_eq!(report.total_features, result.features.len());
        assert!(report.by_category["layout"].contains(&"css-grid".to_string()));
        assert_eq!(report.by_category["custom"], vec!["my-feature".to_string()]);
        assert_eq!(report.custom_features, vec!["my-feature".to_string()]);
    }
}
