// 核心公共结构体+枚举
pub mod core;
// 内核错误
pub mod error;
// 已编译规则：正则缓存 + 两层查找
pub mod indexer;
// 用户自定义规则文档模型
pub mod custom;
// 内置规则表
pub mod tables;
// 文本工具
pub mod utils;

// 顶层导出常用类型
pub use core::{
    Evidence, FeatureMatch, FeatureOrigin, FeatureReport, FeatureRule, HtmlRuleKind, Language,
    ParseResult, RuleDef, RuleLayer, RuleSection, RuleTable, CUSTOM_CATEGORY,
};
pub use custom::{CustomHtmlRules, CustomRuleSet};
pub use error::{CoreError, CoreResult};
pub use indexer::{CompiledPattern, CompiledRule, LayeredLookup, LayeredRuleTable};
pub use tables::{builtin_lookup, css_rules, html_feature_description, js_rules};
