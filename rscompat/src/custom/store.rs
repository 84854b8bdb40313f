//! 文件存储的用户自定义规则
//! 持有不可变快照（Arc），reload 以新快照整体替换；已构建的解析器继续使用旧快照
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use rscompat_engine::{
    CoreError, CustomHtmlRules, CustomRuleSet, FeatureRule, HtmlRuleKind, RuleSection,
};
use serde_json::{Map, Value};

use crate::config::RuleConfig;
use crate::error::{RscResult, RscompatError};

#[derive(Debug)]
pub struct CustomRuleStore {
    path: PathBuf,
    /// 为 false 时不读取文件，快照恒为空
    load_from_disk: bool,
    snapshot: RwLock<Arc<CustomRuleSet>>,
}

impl CustomRuleStore {
    /// 按配置构建并立即加载一次
    pub fn new(config: &RuleConfig) -> Self {
        let store = Self {
            path: config.custom_rules_path.clone(),
            load_from_disk: config.load_custom_rules,
            snapshot: RwLock::new(Arc::new(CustomRuleSet::empty())),
        };
        store.reload();
        store
    }

    /// 指定文件路径
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(&RuleConfig::local_file(path))
    }

    /// 不读取任何文件的空存储
    pub fn builtin_only() -> Self {
        Self::new(&RuleConfig::builtin_only())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 当前快照（共享只读）
    pub fn snapshot(&self) -> Arc<CustomRuleSet> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// CSS 自定义规则副本
    pub fn get_custom_css_rules(&self) -> BTreeMap<String, FeatureRule> {
        self.snapshot().css.clone()
    }

    /// JavaScript 自定义规则副本
    pub fn get_custom_js_rules(&self) -> BTreeMap<String, FeatureRule> {
        self.snapshot().javascript.clone()
    }

    /// HTML 四类查找表副本
    pub fn get_custom_html_rules(&self) -> CustomHtmlRules {
        self.snapshot().html.clone()
    }

    /// 重新读取文件并替换快照，返回新快照
    pub fn reload(&self) -> Arc<CustomRuleSet> {
        let fresh = if self.load_from_disk {
            Arc::new(load_rule_file(&self.path))
        } else {
            Arc::new(CustomRuleSet::empty())
        };
        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = fresh.clone();
        fresh
    }

    /// 保存规则；失败记录日志并返回 false
    pub fn save(&self, rules: &CustomRuleSet) -> bool {
        match self.try_save(rules) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// 保存规则并刷新快照
    /// 文件中已有的顶层 `_` 注释键原样保留
    pub fn try_save(&self, rules: &CustomRuleSet) -> RscResult<()> {
        for problem in rules.validate() {
            log::warn!("{}, saved anyway and skipped at compile time", problem);
        }
        let mut document = match rules.to_value() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if let Value::Object(existing) = self.load_raw() {
            for (key, value) in existing {
                if key.starts_with('_') {
                    document.insert(key, value);
                }
            }
        }

        let text = serde_json::to_string_pretty(&Value::Object(document))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                RscompatError::RuleSaveError(format!("{}: {}", parent.display(), e))
            })?;
        }
        fs::write(&self.path, text)
            .map_err(|e| RscompatError::RuleSaveError(format!("{}: {}", self.path.display(), e)))?;

        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = Arc::new(rules.clone());
        log::info!(
            "Custom rules saved: {} rules -> {}",
            rules.len(),
            self.path.display()
        );
        Ok(())
    }

    /// 判断某ID是否由用户定义
    pub fn is_user_rule(&self, section: RuleSection, id: &str, subtype: Option<HtmlRuleKind>) -> bool {
        self.snapshot().contains(section, id, subtype)
    }

    /// 原始 JSON 文档（含注释键）；文件缺失或格式错误返回空对象
    pub fn load_raw(&self) -> Value {
        let empty = Value::Object(Map::new());
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return empty,
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) | Err(_) => empty,
        }
    }
}

/// 读取规则文件：缺失为空集（非错误）；格式错误记录日志后为空集
fn load_rule_file(path: &Path) -> CustomRuleSet {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Custom rules file not found: {}, using builtin rules only", path.display());
            return CustomRuleSet::empty();
        }
        Err(e) => {
            let err = CoreError::MalformedCustomRules(format!("{}: {}", path.display(), e));
            log::warn!("{}", err);
            return CustomRuleSet::empty();
        }
    };

    match CustomRuleSet::from_json_str(&text) {
        Ok(set) => {
            log::info!(
                "Custom rules loaded: css={} javascript={} html={} from {}",
                set.css.len(),
                set.javascript.len(),
                set.html.len(),
                path.display()
            );
            set
        }
        Err(e) => {
            log::warn!("{} ({}), custom rules ignored", e, path.display());
            CustomRuleSet::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const RULES: &str = r#"{
        "_comment": "keep me",
        "css": {"css-grid": {"patterns": ["grid-magic"], "description": "Mine"}},
        "javascript": {"my-api": {"patterns": ["myApi\\("], "description": "My API"}},
        "html": {"elements": {"x-widget": "my-widget"}}
    }"#;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = CustomRuleStore::open(dir.path().join("absent.json"));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.load_raw(), Value::Object(Map::new()));
    }

    #[test]
    fn malformed_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, "{ not json").unwrap();
        let store = CustomRuleStore::open(&path);
        assert!(store.snapshot().is_empty());
        assert!(store.get_custom_css_rules().is_empty());
    }

    #[test]
    fn typed_accessors_and_membership() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, RULES).unwrap();
        let store = CustomRuleStore::open(&path);

        assert!(store.get_custom_css_rules().contains_key("css-grid"));
        assert!(store.get_custom_js_rules().contains_key("my-api"));
        assert_eq!(store.get_custom_html_rules().elements["x-widget"], "my-widget");
        assert!(store.is_user_rule(RuleSection::Css, "css-grid", None));
        assert!(!store.is_user_rule(RuleSection::Css, "flexbox", None));
        assert!(store.is_user_rule(RuleSection::Html, "x-widget", Some(HtmlRuleKind::Elements)));
        assert_eq!(store.load_raw()["_comment"], "keep me");
    }

    #[test]
    fn reload_returns_new_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rules.json");
        let store = CustomRuleStore::open(&path);
        let before = store.snapshot();
        assert!(before.is_empty());

        fs::write(&path, RULES).unwrap();
        let after = store.reload();
        assert_eq!(after.css.len(), 1);
        // 旧快照不受影响
        assert!(before.is_empty());
        assert!(Arc::ptr_eq(&after, &store.snapshot()));
    }

    #[test]
    fn save_preserves_comment_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("rules.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, RULES).unwrap();
        let store = CustomRuleStore::open(&path);

        let mut rules = (*store.snapshot()).clone();
        rules.css.insert(
            "my-layout".to_string(),
            FeatureRule::custom("my-layout", vec!["magic-layout".into()], "Magic"),
        );
        assert!(store.save(&rules));

        let raw = store.load_raw();
        assert_eq!(raw["_comment"], "keep me");
        assert!(raw["css"]["my-layout"]["patterns"].is_array());
        assert!(store.is_user_rule(RuleSection::Css, "my-layout", None));
        assert_eq!(store.reload().css.len(), 2);
    }

    #[test]
    fn save_into_unwritable_location_fails() {
        let dir = tempdir().unwrap();
        // 目标路径的父级是一个普通文件
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = CustomRuleStore::open(blocker.join("rules.json"));
        assert!(!store.save(&CustomRuleSet::empty()));
        assert!(matches!(
            store.try_save(&CustomRuleSet::empty()),
            Err(RscompatError::RuleSaveError(_))
        ));
    }

    #[test]
    fn builtin_only_never_reads() {
        let store = CustomRuleStore::builtin_only();
        assert!(store.reload().is_empty());
    }
}
