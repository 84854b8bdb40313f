//! rscompat - 面向 CSS / JavaScript / HTML 源码的 Web 平台特性检测库

pub mod config;
pub mod custom;
pub mod detector;
pub mod error;
pub mod logging;
pub mod parser;

// 导出全局错误类型
pub use self::error::{RscResult, RscompatError};

// 导出配置模块核心结构体与构建器
pub use crate::config::{CustomConfigBuilder, ParserOptions, RuleConfig};

// 导出自定义规则存储
pub use crate::custom::{global_store, init_global_store, CustomRuleStore};

// 导出解析器与通用特质
pub use crate::parser::{read_source, CssParser, HtmlParser, JsParser, SourceParser};

// 导出检测模块核心接口
pub use crate::detector::FeatureDetector;

// 重新导出内核数据结构
pub use rscompat_engine::{
    CustomHtmlRules, CustomRuleSet, Evidence, FeatureMatch, FeatureReport, FeatureRule,
    HtmlRuleKind, Language, ParseResult, RuleLayer, RuleSection,
};
