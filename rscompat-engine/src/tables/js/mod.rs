//! 内置 JavaScript 规则表
//! 模式区分大小写，在去除注释后的源码上搜索；每条规则按顺序尝试模式，首个命中即记录
use once_cell::sync::Lazy;

use crate::core::{Language, RuleDef, RuleTable};

mod device;
mod dom;
mod media;
mod network;
mod runtime;
mod storage;
mod syntax;

/// (分类名, 子表)
pub const JS_SUB_TABLES: &[(&str, &[RuleDef])] = &[
    ("syntax", syntax::RULES),
    ("runtime", runtime::RULES),
    ("network", network::RULES),
    ("dom", dom::RULES),
    ("storage", storage::RULES),
    ("media", media::RULES),
    ("device", device::RULES),
];

static JS_RULES: Lazy<RuleTable> = Lazy::new(|| {
    let mut table = RuleTable::new(Language::JavaScript);
    for (category, defs) in JS_SUB_TABLES {
        table.extend_defs(category, defs);
    }
    log::debug!("Builtin javascript rule table assembled: {} rules", table.len());
    table
});

pub fn js_rules() -> &'static RuleTable {
    &JS_RULES
}
