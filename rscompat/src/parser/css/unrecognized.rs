//! 未识别模式：基于结构化的声明 / @规则集合，而非文本
use std::collections::BTreeSet;

use rscompat_engine::utils::strip_vendor_prefix;
use rscompat_engine::LayeredRuleTable;

use super::allowlist::{is_basic_at_rule, is_basic_property};
use super::extract::Extracted;

/// 返回 `property: x` / `@-rule: @x` 形式的标记
/// 排除：白名单（去厂商前缀后比较）、自定义属性 `--x`、能被任意生效规则模式命中的探测文本
pub fn find_unrecognized(extracted: &Extracted, rules: &LayeredRuleTable) -> BTreeSet<String> {
    let properties: BTreeSet<&str> = extracted
        .declarations
        .iter()
        .map(|d| d.property.as_str())
        .filter(|p| !p.starts_with("--"))
        .collect();
    let keywords: BTreeSet<&str> = extracted
        .at_rules
        .iter()
        .map(|a| a.keyword.as_str())
        .collect();

    let mut unrecognized = BTreeSet::new();
    for property in properties {
        let base = strip_vendor_prefix(property);
        if is_basic_property(base) || probe(rules, &format!("{}:", property)) {
            continue;
        }
        if base != property && probe(rules, &format!("{}:", base)) {
            continue;
        }
        unrecognized.insert(format!("property: {}", property));
    }

    for keyword in keywords {
        let base = strip_vendor_prefix(keyword);
        if is_basic_at_rule(base) || probe(rules, &format!("@{}", keyword)) {
            continue;
        }
        if base != keyword && probe(rules, &format!("@{}", base)) {
            continue;
        }
        unrecognized.insert(format!("@-rule: @{}", keyword));
    }
    unrecognized
}

#[inline]
fn probe(rules: &LayeredRuleTable, text: &str) -> bool {
    rules.any_pattern_matches(text)
}
