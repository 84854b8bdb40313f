//! 源码解析器：CSS / JavaScript / HTML
pub mod css;
pub mod html;
pub mod js;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rscompat_engine::{FeatureOrigin, FeatureReport, Language, ParseResult};

use crate::error::{RscResult, RscompatError};

pub use css::CssParser;
pub use html::HtmlParser;
pub use js::JsParser;

/// 所有解析器的通用抽象特质
/// 差异化实现点只有 parse_string 与规则来源查询，文件读取 / 批量合并 / 报告为共用骨架
pub trait SourceParser {
    /// 解析器类型名称，用于日志标准化输出
    const TYPE_NAME: &'static str;
    const LANGUAGE: Language;

    /// 解析源码文本；不会失败，畸形输入按节点跳过
    fn parse_string(&self, source: &str) -> ParseResult;

    /// 生效的特性ID（内置 ∪ 自定义）
    fn supported_features(&self) -> Vec<String>;

    /// 特性的分类与来源层
    fn feature_origin(&self, feature: &str) -> Option<FeatureOrigin<'_>>;

    /// 读取并解析单个文件
    fn parse_file(&self, path: impl AsRef<Path>) -> RscResult<ParseResult>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let source = read_source(path)?;
        let result = self.parse_string(&source);
        log::debug!(
            "[{}] {} -> {} features, {} unrecognized",
            Self::TYPE_NAME,
            path.display(),
            result.features.len(),
            result.unrecognized.len()
        );
        Ok(result)
    }

    /// 批量解析并取并集；单个文件失败记录日志后跳过
    fn parse_multiple_files<I, P>(&self, paths: I) -> ParseResult
    where
        Self: Sized,
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut merged = ParseResult::new();
        for path in paths {
            match self.parse_file(path.as_ref()) {
                Ok(result) => merged.merge(result),
                Err(e) => log::warn!("[{}] skip file: {}", Self::TYPE_NAME, e),
            }
        }
        merged
    }

    /// 汇总报告：按分类分组、用户规则特性、未识别标记
    fn detailed_report(&self, result: &ParseResult) -> FeatureReport {
        FeatureReport::build(Self::LANGUAGE, result, |feature| self.feature_origin(feature))
    }
}

/// 以 UTF-8 读取源文件，去掉 BOM
/// 路径不存在与编码错误分别返回独立错误
pub fn read_source(path: &Path) -> RscResult<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RscompatError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    let text = String::from_utf8(bytes).map_err(|source| RscompatError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_source_errors_are_distinct() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.css");
        assert!(matches!(read_source(&missing), Err(RscompatError::FileNotFound(p)) if p == missing));

        let latin1 = dir.path().join("latin1.css");
        fs::write(&latin1, [b'a', 0xE9, b'{', b'}']).unwrap();
        assert!(matches!(
            read_source(&latin1),
            Err(RscompatError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn read_source_strips_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.css");
        fs::write(&path, "\u{feff}a { color: red }").unwrap();
        assert_eq!(read_source(&path).unwrap(), "a { color: red }");
    }
}
