//! 进程级自定义规则存储
//! 显式构造的 CustomRuleStore 仍是首选；此处仅为只需一份全局实例的调用方提供入口
use once_cell::sync::OnceCell;

use super::store::CustomRuleStore;
use crate::config::RuleConfig;

/// 全局存储实例 - 仅初始化一次，进程内唯一
static GLOBAL_STORE: OnceCell<CustomRuleStore> = OnceCell::new();

/// 初始化全局存储
/// 幂等：已初始化则忽略新配置并返回 false
pub fn init_global_store(config: RuleConfig) -> bool {
    if GLOBAL_STORE.get().is_some() {
        log::debug!("Global custom rule store already initialized, skip reinitialization");
        return false;
    }

    let initialized = GLOBAL_STORE.set(CustomRuleStore::new(&config)).is_ok();
    if initialized {
        log::info!(
            "Global custom rule store initialized: {}",
            config.custom_rules_path.display()
        );
    }
    initialized
}

/// 获取全局存储（未初始化时以默认配置懒加载）
pub fn global_store() -> &'static CustomRuleStore {
    GLOBAL_STORE.get_or_init(|| {
        log::debug!("Lazy initializing global custom rule store with default config");
        CustomRuleStore::new(&RuleConfig::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_global_store(RuleConfig::builtin_only());
        let first = global_store() as *const CustomRuleStore;
        assert!(!init_global_store(RuleConfig::local_file("ignored.json")));
        assert_eq!(first, global_store() as *const CustomRuleStore);
    }
}
