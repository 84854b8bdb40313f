//! 全局规则配置管理
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// 覆盖默认自定义规则文件路径的环境变量
pub const CUSTOM_RULES_ENV: &str = "RSCOMPAT_CUSTOM_RULES";
/// 默认自定义规则文件名（相对当前工作目录）
pub const DEFAULT_CUSTOM_RULES_FILE: &str = "custom_rules.json";

/// 解析器选项（可嵌入调用方的配置文件，缺省字段取默认值）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// 是否计算 unrecognized 集合
    pub report_unrecognized: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            report_unrecognized: true,
        }
    }
}

/// 完整规则配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// 自定义规则 JSON 文件路径
    pub custom_rules_path: PathBuf,
    /// 为 false 时只使用内置规则，不读取文件
    pub load_custom_rules: bool,
    pub options: ParserOptions,
}

impl Default for RuleConfig {
    fn default() -> Self {
        let custom_rules_path = env::var_os(CUSTOM_RULES_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CUSTOM_RULES_FILE));
        Self {
            custom_rules_path,
            load_custom_rules: true,
            options: ParserOptions::default(),
        }
    }
}

impl RuleConfig {
    /// 仅内置规则
    pub fn builtin_only() -> Self {
        Self {
            load_custom_rules: false,
            ..Self::default()
        }
    }

    /// 指定自定义规则文件
    pub fn local_file(path: impl Into<PathBuf>) -> Self {
        Self {
            custom_rules_path: path.into(),
            load_custom_rules: true,
            options: ParserOptions::default(),
        }
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: RuleConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom_rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.custom_rules_path = path.into();
        self
    }

    pub fn load_custom_rules(mut self, load: bool) -> Self {
        self.config.load_custom_rules = load;
        self
    }

    pub fn report_unrecognized(mut self, report: bool) -> Self {
        self.config.options.report_unrecognized = report;
        self
    }

    pub fn options(mut self, options: ParserOptions) -> Self {
        self.config.options = options;
        self
    }

    pub fn build(self) -> RuleConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let config = CustomConfigBuilder::new()
            .custom_rules_path("/tmp/rules.json")
            .report_unrecognized(false)
            .build();
        assert_eq!(config.custom_rules_path, PathBuf::from("/tmp/rules.json"));
        assert!(config.load_custom_rules);
        assert!(!config.options.report_unrecognized);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ParserOptions = serde_json::from_str("{}").unwrap();
        assert!(options.report_unrecognized);
        let options: ParserOptions =
            serde_json::from_str(r#"{"report_unrecognized": false}"#).unwrap();
        assert!(!options.report_unrecognized);
    }

    #[test]
    fn builtin_only_skips_file() {
        let config = RuleConfig::builtin_only();
        assert!(!config.load_custom_rules);
        assert!(config.options.report_unrecognized);
    }
}
