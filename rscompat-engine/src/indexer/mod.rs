mod layered;
pub mod matcher;

// 对外只导出具体内容，不导出模块名
pub use layered::{CompiledPattern, CompiledRule, LayeredLookup, LayeredRuleTable};
pub use matcher::compile_cached;
