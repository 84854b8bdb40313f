//! 内置 CSS 规则表
//! 模式在重建后的可匹配文本上以忽略大小写方式搜索，文本格式：
//! 每个规则块一行 `selector { prop: value; prop2: value2; }`，每个@规则一行 `@keyword prelude`
//! 块内共现类模式使用 `[^}]*` 限定在同一块内
use once_cell::sync::Lazy;

use crate::core::{Language, RuleDef, RuleTable};

mod animation;
mod at_rules;
mod interaction;
mod layout;
mod selectors;
mod typography;
mod values;
mod visual;

/// (分类名, 子表)，后出现的子表覆盖先出现的同名规则
pub const CSS_SUB_TABLES: &[(&str, &[RuleDef])] = &[
    ("layout", layout::RULES),
    ("typography", typography::RULES),
    ("visual", visual::RULES),
    ("animation", animation::RULES),
    ("selectors", selectors::RULES),
    ("at-rules", at_rules::RULES),
    ("values", values::RULES),
    ("interaction", interaction::RULES),
];

static CSS_RULES: Lazy<RuleTable> = Lazy::new(|| {
    let mut table = RuleTable::new(Language::Css);
    for (category, defs) in CSS_SUB_TABLES {
        table.extend_defs(category, defs);
    }
    log::debug!("Builtin css rule table assembled: {} rules", table.len());
    table
});

/// 内置 CSS 规则表（进程内只组装一次）
pub fn css_rules() -> &'static RuleTable {
    &CSS_RULES
}
