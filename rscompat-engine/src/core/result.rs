use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 命中证据
/// 扁平化序列化后以变体名作为键，例如 `{"feature": .., "matched_properties": [..]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// CSS：命中的全部模式
    MatchedProperties(Vec<String>),
    /// JS：第一条命中的模式
    Pattern(String),
    /// HTML：元素查找命中
    Element(String),
    /// HTML：属性 / 属性值 / input类型查找命中
    Attribute(String),
    /// HTML：结构检测器命中，值为检测器描述
    Detector(String),
}

/// 单个特性的命中记录（每次解析每个特性至多一条）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureMatch {
    pub feature: String,
    pub description: String,
    #[serde(flatten)]
    pub evidence: Evidence,
}

impl FeatureMatch {
    pub fn new(feature: impl Into<String>, description: impl Into<String>, evidence: Evidence) -> Self {
        Self {
            feature: feature.into(),
            description: description.into(),
            evidence,
        }
    }
}

/// 三个解析器共用的输出
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub features: BTreeSet<String>,
    pub details: Vec<FeatureMatch>,
    pub unrecognized: BTreeSet<String>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次命中；同一特性重复命中时只保留第一条明细
    pub fn record(&mut self, detail: FeatureMatch) -> bool {
        if self.features.insert(detail.feature.clone()) {
            self.details.push(detail);
            true
        } else {
            false
        }
    }

    pub fn add_unrecognized(&mut self, token: impl Into<String>) {
        self.unrecognized.insert(token.into());
    }

    /// 并集合并（批量解析使用）
    pub fn merge(&mut self, other: ParseResult) {
        for detail in other.details {
            self.record(detail);
        }
        // details 缺失时仍以 features 为准
        self.features.extend(other.features);
        self.unrecognized.extend(other.unrecognized);
    }

    #[inline]
    pub fn contains(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.unrecognized.is_empty()
    }

    pub fn detail(&self, feature: &str) -> Option<&FeatureMatch> {
        self.details.iter().find(|d| d.feature == feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(id: &str) -> FeatureMatch {
        FeatureMatch::new(id, id, Evidence::Pattern(id.to_string()))
    }

    #[test]
    fn record_collapses_duplicates() {
        let mut r = ParseResult::new();
        assert!(r.record(m("fetch")));
        assert!(!r.record(FeatureMatch::new("fetch", "other", Evidence::Pattern("x".into()))));
        assert_eq!(r.details.len(), 1);
        assert_eq!(r.details[0].description, "fetch");
    }

    #[test]
    fn merge_is_union() {
        let mut a = ParseResult::new();
        a.record(m("css-grid"));
        a.add_unrecognized("property: zoom");
        let mut b = ParseResult::new();
        b.record(m("css-grid"));
        b.record(m("flexbox"));
        b.add_unrecognized("@-rule: @foo");

        a.merge(b);
        assert_eq!(a.features.len(), 2);
        assert_eq!(a.details.len(), 2);
        assert_eq!(a.unrecognized.len(), 2);
    }

    #[test]
    fn evidence_serializes_flat() {
        let detail = FeatureMatch::new(
            "flexbox-gap",
            "Gap in flexbox",
            Evidence::MatchedProperties(vec!["gap".into()]),
        );
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["feature"], "flexbox-gap");
        assert_eq!(json["matched_properties"][0], "gap");

        let back: FeatureMatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, detail);
    }
}
