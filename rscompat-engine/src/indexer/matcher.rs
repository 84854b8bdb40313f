use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

use crate::error::CoreError;

/// 全局正则缓存类型定义
/// Key: (正则模式字符串, 是否忽略大小写)
/// Value: 编译结果（None 表示该模式无效，同样缓存，避免重复编译与重复告警）
type RegexCacheKey = (Arc<str>, bool);
static REGEX_CACHE: Lazy<RwLock<FxHashMap<RegexCacheKey, Option<Arc<Regex>>>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

/// 编译并缓存正则
/// 核心逻辑：读锁查缓存 → 未命中则写锁编译并缓存
/// 参数：
/// - rule: 规则ID（仅用于日志）
/// - pattern: 正则模式字符串
/// - case_insensitive: 是否忽略大小写
/// 返回：编译后的正则Arc（无效模式返回 None）
pub fn compile_cached(rule: &str, pattern: &str, case_insensitive: bool) -> Option<Arc<Regex>> {
    let cache_key: RegexCacheKey = (Arc::from(pattern), case_insensitive);

    {
        let cache_read = REGEX_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = cache_read.get(&cache_key) {
            return entry.clone();
        }
    }

    let mut cache_write = REGEX_CACHE.write().unwrap_or_else(|e| e.into_inner());
    cache_write
        .entry(cache_key)
        .or_insert_with(|| compile_regex(rule, pattern, case_insensitive))
        .clone()
}

/// 正则编译公共逻辑（失败记录日志并返回 None）
#[inline]
fn compile_regex(rule: &str, pattern: &str, case_insensitive: bool) -> Option<Arc<Regex>> {
    match RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
    {
        Ok(re) => Some(Arc::new(re)),
        Err(e) => {
            let err = CoreError::InvalidRulePattern {
                rule: rule.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            };
            log::warn!("{}, pattern skipped", err);
            None
        }
    }
}

/// 严格编译（不经缓存），用于校验用户输入的规则
pub fn validate_pattern(pattern: &str) -> Result<(), CoreError> {
    Regex::new(pattern).map(|_| ()).map_err(CoreError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_compiled_regex() {
        let a = compile_cached("t", r"display\s*:\s*grid", true).unwrap();
        let b = compile_cached("t", r"display\s*:\s*grid", true).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_match("DISPLAY: GRID"));
    }

    #[test]
    fn case_flag_is_part_of_key() {
        let sensitive = compile_cached("t", r"\bfetchCase\b", false).unwrap();
        let insensitive = compile_cached("t", r"\bfetchCase\b", true).unwrap();
        assert!(!sensitive.is_match("FETCHCASE"));
        assert!(insensitive.is_match("FETCHCASE"));
    }

    #[test]
    fn invalid_pattern_is_skipped() {
        assert!(compile_cached("bad", r"(?<=a)b", true).is_none());
        assert!(compile_cached("bad", r"([unclosed", true).is_none());
        assert!(validate_pattern(r"([unclosed").is_err());
    }
}
