mod enums;
mod report;
mod result;
mod rule;

// 导出常用项
pub use enums::{HtmlRuleKind, Language, RuleLayer, RuleSection};
pub use report::{FeatureOrigin, FeatureReport};
pub use result::{Evidence, FeatureMatch, ParseResult};
pub use rule::{FeatureRule, RuleDef, RuleTable, CUSTOM_CATEGORY};
