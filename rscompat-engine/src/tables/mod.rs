//! 内置规则表：CSS / JavaScript 模式表与 HTML 查找表
pub mod css;
pub mod html;
pub mod js;

pub use css::css_rules;
pub use html::{builtin_lookup, html_feature_description};
pub use js::js_rules;

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;
    use std::collections::HashSet;

    #[test]
    fn every_builtin_pattern_compiles() {
        for (table, ci) in [(css_rules(), true), (js_rules(), false)] {
            assert!(!table.is_empty());
            for rule in table.iter() {
                assert!(!rule.patterns.is_empty(), "{} has no patterns", rule.id);
                assert!(!rule.description.is_empty(), "{} has no description", rule.id);
                for pattern in &rule.patterns {
                    let built = RegexBuilder::new(pattern).case_insensitive(ci).build();
                    assert!(built.is_ok(), "{}: {} -> {:?}", rule.id, pattern, built.err());
                }
            }
        }
    }

    #[test]
    fn ids_are_unique_within_sub_tables() {
        for (_, defs) in css::CSS_SUB_TABLES.iter().chain(js::JS_SUB_TABLES) {
            let mut seen = HashSet::new();
            for def in *defs {
                assert!(seen.insert(def.id), "duplicate id {}", def.id);
            }
        }
    }

    #[test]
    fn categories_follow_sub_tables() {
        assert_eq!(css_rules().get("css-grid").unwrap().category, "layout");
        assert_eq!(css_rules().get("css-has").unwrap().category, "selectors");
        assert_eq!(js_rules().get("fetch").unwrap().category, "network");
    }
}
