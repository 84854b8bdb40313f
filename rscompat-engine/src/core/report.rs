use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::enums::Language;
use super::result::ParseResult;

/// 规则来源信息，由规则表按特性ID提供
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureOrigin<'a> {
    pub category: &'a str,
    pub user_defined: bool,
}

/// 单次解析的汇总报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub language: Option<Language>,
    pub total_features: usize,
    /// 分类 → 特性ID列表（均已排序）
    pub by_category: BTreeMap<String, Vec<String>>,
    /// 来自用户规则的特性（含覆盖内置的）
    pub custom_features: Vec<String>,
    pub total_unrecognized: usize,
    pub unrecognized: Vec<String>,
}

impl FeatureReport {
    /// 汇总解析结果；规则表查不到来源的特性归入 "uncategorized"
    pub fn build<'a, F>(language: Language, result: &ParseResult, origin: F) -> Self
    where
        F: Fn(&str) -> Option<FeatureOrigin<'a>>,
    {
        let mut by_category: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut custom_features = Vec::new();

        for feature in &result.features {
            let (category, user_defined) = match origin(feature) {
                Some(o) => (o.category, o.user_defined),
                None => ("uncategorized", false),
            };
            by_category
                .entry(category.to_string())
                .or_default()
                .push(feature.clone());
            if user_defined {
                custom_features.push(feature.clone());
            }
        }

        Self {
            language: Some(language),
            total_features: result.features.len(),
            by_category,
            custom_features,
            total_unrecognized: result.unrecognized.len(),
            unrecognized: result.unrecognized.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::result::{Evidence, FeatureMatch};

    #[test]
    fn groups_by_origin() {
        let mut result = ParseResult::new();
        for id in ["css-grid", "flexbox", "my-rule", "ghost"] {
            result.record(FeatureMatch::new(id, id, Evidence::MatchedProperties(vec![])));
        }
        result.add_unrecognized("property: foo");

        let report = FeatureReport::build(Language::Css, &result, |id| match id {
            "css-grid" | "flexbox" => Some(FeatureOrigin { category: "layout", user_defined: false }),
            "my-rule" => Some(FeatureOrigin { category: "custom", user_defined: true }),
            _ => None,
        });

        assert_eq!(report.total_features, 4);
        assert_eq!(report.by_category["layout"], vec!["css-grid", "flexbox"]);
        assert_eq!(report.by_category["uncategorized"], vec!["ghost"]);
        assert_eq!(report.custom_features, vec!["my-rule"]);
        assert_eq!(report.unrecognized, vec!["property: foo"]);
    }
}
