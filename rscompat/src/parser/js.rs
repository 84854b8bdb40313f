//! JavaScript 解析器
//! 去除注释后逐规则按顺序尝试模式，首个命中即记录并停止
//! 不构建语法树：字符串 / 模板字面量中的内容同样参与匹配
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use rscompat_engine::{
    js_rules, CustomRuleSet, Evidence, FeatureMatch, FeatureOrigin, Language, LayeredRuleTable,
    ParseResult,
};

use crate::config::ParserOptions;
use crate::parser::SourceParser;

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//[^\n]*").unwrap());

/// JavaScript 解析器（模式区分大小写）
#[derive(Debug, Clone)]
pub struct JsParser {
    rules: LayeredRuleTable,
    options: ParserOptions,
}

impl JsParser {
    pub fn new(custom: &CustomRuleSet) -> Self {
        Self::with_options(custom, ParserOptions::default())
    }

    pub fn with_options(custom: &CustomRuleSet, options: ParserOptions) -> Self {
        let rules = LayeredRuleTable::new(js_rules(), &custom.javascript, false);
        log::debug!(
            "[{}] parser ready: {} effective rules ({} custom)",
            Self::TYPE_NAME,
            rules.len(),
            custom.javascript.len()
        );
        Self { rules, options }
    }

    pub fn builtin() -> Self {
        Self::new(&CustomRuleSet::empty())
    }
}

impl SourceParser for JsParser {
    const TYPE_NAME: &'static str = "JS";
    const LANGUAGE: Language = Language::JavaScript;

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

/// 去除 `/* */` 与 `//` 注释；块注释替换为空格，避免前后标记粘连
pub fn strip_comments(source: &str) -> Cow<'_, str> {
    let without_blocks = BLOCK_COMMENT.replace_all(source, " ");
    if !LINE_COMMENT.is_match(&without_blocks) {
        return without_blocks;
    }
    Cow::Owned(LINE_COMMENT.replace_all(&without_blocks, "").into_owned())
}

/// 无状态解析入口
/// JavaScript 没有可靠的结构化名称集合，unrecognized 恒为空
pub fn parse(rules: &LayeredRuleTable, source: &str, _options: &ParserOptions) -> ParseResult {
    let code = strip_comments(source);
    let mut result = ParseResult::new();
    for rule in rules.iter() {
        if let Some(pattern) = rule.first_match(&code) {
            result.record(FeatureMatch::new(
                &rule.id,
                &rule.description,
                Evidence::Pattern(pattern.source.to_string()),
            ));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rscompat_engine::FeatureRule;

    #[test]
    fn comments_are_excluded() {
        let parser = JsParser::builtin();
        assert!(!parser.parse_string("// fetch('/x')\nlet a = 1;").contains("fetch"));
        assert!(!parser.parse_string("/* fetch('/x') */ var a;").contains("fetch"));
        assert!(parser.parse_string("fetch('/x')").contains("fetch"));
    }

    #[test]
    fn first_pattern_is_evidence() {
        let result = JsParser::builtin().parse_string("new Promise(r => r()).then(x => x)");
        let detail = result.detail("promises").unwrap();
        assert_eq!(detail.evidence, Evidence::Pattern(r"\bnew\s+Promise\s*\(".to_string()));
        assert!(result.contains("arrow-functions"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!JsParser::builtin().parse_string("FETCH('/x')").contains("fetch"));
    }

    #[test]
    fn custom_rule_is_detected() {
        let mut set = CustomRuleSet::empty();
        set.javascript.insert(
            "my-api".into(),
            FeatureRule::custom("my-api", vec![r"\bmyApi\(".into()], "My API"),
        );
        let parser = JsParser::new(&set);
        let result = parser.parse_string("myApi(1)");
        assert!(result.contains("my-api"));
        assert!(result.unrecognized.is_empty());
        assert_eq!(parser.detailed_report(&result).custom_features, vec!["my-api".to_string()]);
    }

    #[test]
    fn repeated_parses_do_not_leak() {
        let parser = JsParser::builtin();
        let first_source = "fetch('/a').then(r => r.json())";
        let second_source = "class Widget {}";

        let first = parser.parse_string(first_source);
        let second = parser.parse_string(second_source);
        assert_eq!(first, parser.parse_string(first_source));

        assert!(second.contains("es6-class"));
        assert!(!second.contains("fetch"));
        assert!(!second.contains("arrow-functions"));
        assert!(!first.contains("es6-class"));
    }

    #[test]
    fn string_contents_still_match() {
        // 已知限制：字符串中的调用同样被识别
        assert!(JsParser::builtin().parse_string("const s = 'fetch(1)';").contains("fetch"));
    }
}
