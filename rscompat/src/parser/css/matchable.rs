//! 可匹配文本重建
//! 每个规则块一行 `selector { prop: value; ... }`，无声明的块输出 `selector { }`，
//! 每条@规则一行 `@keyword prelude`；块以字面 `}` 结束，`[^}]*` 类模式无法跨块
use std::collections::BTreeMap;
use std::fmt::Write;

use super::extract::Extracted;

pub fn build_matchable_text(extracted: &Extracted) -> String {
    let mut blocks: BTreeMap<u32, (&str, Vec<(&str, &str)>)> = BTreeMap::new();
    for decl in &extracted.declarations {
        blocks
            .entry(decl.block_id)
            .or_insert_with(|| (decl.selector.as_str(), Vec::new()))
            .1
            .push((decl.property.as_str(), decl.value.as_str()));
    }

    let mut text = String::new();
    for (selector, declarations) in blocks.values() {
        let _ = write!(text, "{} {{", selector);
        for (property, value) in declarations {
            let _ = write!(text, " {}: {};", property, value);
        }
        text.push_str(" }\n");
    }

    for entry in &extracted.selectors {
        if !blocks.contains_key(&entry.block_id) {
            let _ = writeln!(text, "{} {{ }}", entry.selector);
        }
    }

    for at_rule in &extracted.at_rules {
        if at_rule.prelude.is_empty() {
            let _ = writeln!(text, "@{}", at_rule.keyword);
        } else {
            let _ = writeln!(text, "@{} {}", at_rule.keyword, at_rule.prelude);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::css::extract::extract_stylesheet;

    #[test]
    fn one_line_per_block() {
        let e = extract_stylesheet(".x{display:flex} .x{gap:10px} a:hover{} @media print { .p { color: red } }");
        let text = build_matchable_text(&e);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                ".x { display: flex; }",
                ".x { gap: 10px; }",
                ".p { color: red; }",
                "a:hover { }",
                "@media print",
            ]
        );
    }
}
