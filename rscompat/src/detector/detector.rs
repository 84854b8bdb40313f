//! Feature detector core module
//! 特性检测器核心
//! 核心职责：
//! 1. 从同一份自定义规则快照构建 CSS / JS / HTML 三个解析器
//! 2. 按扩展名分派文件，批量检测取并集
//! 3. 规则文件变更后整体重建

use std::path::Path;
use std::sync::Arc;

use rscompat_engine::{CustomRuleSet, FeatureReport, Language, ParseResult};

use crate::config::{ParserOptions, RuleConfig};
use crate::custom::CustomRuleStore;
use crate::error::{RscResult, RscompatError};
use crate::parser::{CssParser, HtmlParser, JsParser, SourceParser};

/// 特性检测器
/// - snapshot: 构建三个解析器所用的自定义规则快照
/// - 解析器构造后只读，可跨线程共享
#[derive(Debug, Clone)]
pub struct FeatureDetector {
    snapshot: Arc<CustomRuleSet>,
    options: ParserOptions,
    css: CssParser,
    js: JsParser,
    html: HtmlParser,
}

impl FeatureDetector {
    /// 使用内存中的规则快照创建检测器
    pub fn with_rules(snapshot: Arc<CustomRuleSet>, options: ParserOptions) -> Self {
        log::debug!(
            "Building feature detector: {} custom rules",
            snapshot.len()
        );
        Self {
            css: CssParser::with_options(&snapshot, options.clone()),
            js: JsParser::with_options(&snapshot, options.clone()),
            html: HtmlParser::with_options(&snapshot, options.clone()),
            snapshot,
            options,
        }
    }

    /// 使用存储的当前快照
    pub fn new(store: &CustomRuleStore) -> Self {
        Self::with_rules(store.snapshot(), ParserOptions::default())
    }

    /// 按配置加载自定义规则文件后创建
    pub fn from_config(config: &RuleConfig) -> Self {
        let store = CustomRuleStore::new(config);
        Self::with_rules(store.snapshot(), config.options.clone())
    }

    /// 仅内置规则
    pub fn builtin() -> Self {
        Self::with_rules(Arc::new(CustomRuleSet::empty()), ParserOptions::default())
    }

    /// 重新读取存储并重建全部解析器
    pub fn reload(&mut self, store: &CustomRuleStore) {
        let snapshot = store.reload();
        *self = Self::with_rules(snapshot, self.options.clone());
        log::info!("Feature detector reloaded from {}", store.path().display());
    }

    pub fn snapshot(&self) -> &Arc<CustomRuleSet> {
        &self.snapshot
    }

    pub fn css(&self) -> &CssParser {
        &self.css
    }

    pub fn js(&self) -> &JsParser {
        &self.js
    }

    pub fn html(&self) -> &HtmlParser {
        &self.html
    }

    /// 解析源码文本
    pub fn detect_string(&self, language: Language, source: &str) -> ParseResult {
        match language {
            Language::Css => self.css.parse_string(source),
            Language::JavaScript => self.js.parse_string(source),
            Language::Html => self.html.parse_string(source),
        }
    }

    /// 按扩展名选择解析器解析文件
    pub fn detect_file(&self, path: impl AsRef<Path>) -> RscResult<ParseResult> {
        let path = path.as_ref();
        match Language::from_path(path) {
            Some(Language::Css) => self.css.parse_file(path),
            Some(Language::JavaScript) => self.js.parse_file(path),
            Some(Language::Html) => self.html.parse_file(path),
            None => Err(RscompatError::UnsupportedFileType(path.to_path_buf())),
        }
    }

    /// 批量检测取并集；不支持的类型与读取失败的文件记录日志后跳过
    pub fn detect_files<I, P>(&self, paths: I) -> ParseResult
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut merged = ParseResult::new();
        let mut skipped = 0usize;
        for path in paths {
            match self.detect_file(path.as_ref()) {
                Ok(result) => merged.merge(result),
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skip file: {}", e);
                }
            }
        }
        if skipped > 0 {
            log::debug!("Batch detection finished, {} files skipped", skipped);
        }
        merged
    }

    /// 某语言的生效特性ID
    pub fn supported_features(&self, language: Language) -> Vec<String> {
        match language {
            Language::Css => self.css.supported_features(),
            Language::JavaScript => self.js.supported_features(),
            Language::Html => self.html.supported_features(),
        }
    }

    /// 某语言解析结果的汇总报告
    pub fn detailed_report(&self, language: Language, result: &ParseResult) -> FeatureReport {
        match language {
            Language::Css => self.css.detailed_report(result),
            Language::JavaScript => self.js.detailed_report(result),
            Language::Html => self.html.detailed_report(result),
        }
    }
}
