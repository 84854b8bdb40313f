//! HTML 解析器
//! DOM 解析（不执行脚本）→ 四类名称查找 + 结构检测器 → 未识别名称
mod allowlist;
mod detectors;

use rustc_hash::FxHashSet;
use scraper::{ElementRef, Html};
use std::collections::BTreeSet;

use rscompat_engine::{
    builtin_lookup, html_feature_description, CustomHtmlRules, CustomRuleSet, Evidence,
    FeatureMatch, FeatureOrigin, HtmlRuleKind, Language, LayeredLookup, ParseResult,
};

use crate::config::ParserOptions;
use crate::parser::SourceParser;

use allowlist::{is_basic_attribute, is_hyphenated_foreign_element};
use detectors::DETECTORS;

/// 结构检测器特性的分类名
const STRUCTURE_CATEGORY: &str = "structure";

/// 合并后的 HTML 查找表
#[derive(Debug, Clone)]
pub struct HtmlRules {
    elements: LayeredLookup,
    attributes: LayeredLookup,
    input_types: LayeredLookup,
    attribute_values: LayeredLookup,
    /// 属性查找键 ∪ 属性值查找键中的属性名
    known_attributes: FxHashSet<String>,
}

impl HtmlRules {
    pub fn new(custom: &CustomHtmlRules) -> Self {
        let layered = |kind: HtmlRuleKind| LayeredLookup::new(builtin_lookup(kind), custom.map(kind));
        let elements = layered(HtmlRuleKind::Elements);
        let attributes = layered(HtmlRuleKind::Attributes);
        let input_types = layered(HtmlRuleKind::InputTypes);
        let attribute_values = layered(HtmlRuleKind::AttributeValues);

        let known_attributes = attributes
            .keys()
            .map(str::to_string)
            .chain(
                attribute_values
                    .keys()
                    .filter_map(|k| k.split_once(':').map(|(attr, _)| attr.to_string())),
            )
            .collect();

        Self {
            elements,
            attributes,
            input_types,
            attribute_values,
            known_attributes,
        }
    }

    pub fn lookup(&self, kind: HtmlRuleKind) -> &LayeredLookup {
        match kind {
            HtmlRuleKind::Elements => &self.elements,
            HtmlRuleKind::Attributes => &self.attributes,
            HtmlRuleKind::InputTypes => &self.input_types,
            HtmlRuleKind::AttributeValues => &self.attribute_values,
        }
    }

    /// 生效特性ID（查找表 ∪ 结构检测器），排序去重
    pub fn supported_features(&self) -> Vec<String> {
        let ids: BTreeSet<&str> = HtmlRuleKind::ALL
            .iter()
            .flat_map(|kind| self.lookup(*kind).feature_ids())
            .chain(DETECTORS.iter().map(|d| d.feature))
            .collect();
        ids.into_iter().map(str::to_string).collect()
    }

    /// 来源查询：分类取首个提供该特性的查找表，检测器特性归入 "structure"
    pub fn origin(&self, feature: &str) -> Option<FeatureOrigin<'static>> {
        let user_defined = HtmlRuleKind::ALL
            .iter()
            .any(|kind| self.lookup(*kind).provides_custom(feature));
        HtmlRuleKind::ALL
            .iter()
            .find(|kind| self.lookup(**kind).feature_ids().any(|id| id == feature))
            .map(|kind| kind.key())
            .or_else(|| {
                DETECTORS
                    .iter()
                    .any(|d| d.feature == feature)
                    .then_some(STRUCTURE_CATEGORY)
            })
            .map(|category| FeatureOrigin {
                category,
                user_defined,
            })
    }
}

/// HTML 解析器
#[derive(Debug, Clone)]
pub struct HtmlParser {
    rules: HtmlRules,
    options: ParserOptions,
}

impl HtmlParser {
    pub fn new(custom: &CustomRuleSet) -> Self {
        Self::with_options(custom, ParserOptions::default())
    }

    pub fn with_options(custom: &CustomRuleSet, options: ParserOptions) -> Self {
        log::debug!(
            "[{}] parser ready: {} custom lookup entries",
            Self::TYPE_NAME,
            custom.html.len()
        );
        Self {
            rules: HtmlRules::new(&custom.html),
            options,
        }
    }

    pub fn builtin() -> Self {
        Self::new(&CustomRuleSet::empty())
    }
}

impl SourceParser for HtmlParser {
    const TYPE_NAME: &'static str = "HTML";
    const LANGUAGE: Language = Language::Html;

    fn parse_string(&self, source: &str) -> ParseResult {
        parse(&self.rules, source, &self.options)
    }

    fn supported_features(&self) -> Vec<String> {
        self.rules.supported_features()
    }

    fn feature_origin(&self, feature: &str) -> Option<FeatureOrigin<'_>> {
        self.rules.origin(feature)
    }
}

/// 无状态解析入口
pub fn parse(rules: &HtmlRules, source: &str, options: &ParserOptions) -> ParseResult {
    let document = Html::parse_document(source);
    if !document.errors.is_empty() {
        log::debug!(
            "[HTML] {} recoverable parse errors, first: {}",
            document.errors.len(),
            document.errors[0]
        );
    }

    let mut result = ParseResult::new();
    for node in document.root_element().descendants() {
        if let Some(el) = ElementRef::wrap(node) {
            inspect_element(rules, el, options, &mut result);
        }
    }
    result
}

fn inspect_element(rules: &HtmlRules, el: ElementRef<'_>, options: &ParserOptions, result: &mut ParseResult) {
    let tag = el.value().name().to_ascii_lowercase();

    let tag_known = record_lookup(result, &rules.elements, &tag, || Evidence::Element(tag.clone()));
    if options.report_unrecognized
        && !tag_known
        && tag.contains('-')
        && !is_hyphenated_foreign_element(&tag)
    {
        result.add_unrecognized(format!("element: <{}>", tag));
    }

    for (raw_name, raw_value) in el.value().attrs() {
        let name = raw_name.to_ascii_lowercase();
        record_lookup(result, &rules.attributes, &name, || Evidence::Attribute(name.clone()));

        let value = normalize_value(&name, raw_value);
        if tag == "input" && name == "type" {
            record_lookup(result, &rules.input_types, &value, || {
                Evidence::Attribute(format!("input type=\"{}\"", value))
            });
        }
        record_attribute_value(result, &rules.attribute_values, &name, &value);
        if name == "rel" {
            for token in value.split_ascii_whitespace() {
                record_attribute_value(result, &rules.attribute_values, &name, token);
            }
        }

        if options.report_unrecognized
            && !rules.known_attributes.contains(&name)
            && !is_basic_attribute(&name)
        {
            result.add_unrecognized(format!("attribute: {}", name));
        }
    }

    for detector in DETECTORS {
        if !result.contains(detector.feature) && (detector.check)(el) {
            result.record(FeatureMatch::new(
                detector.feature,
                html_feature_description(detector.feature),
                Evidence::Detector(detector.evidence.to_string()),
            ));
        }
    }
}

/// 属性值小写并去首尾空白；`type` 值截断到 `;` 之前（去掉 codecs 等参数）
fn normalize_value(name: &str, value: &str) -> String {
    let value = if name == "type" {
        value.split(';').next().unwrap_or(value)
    } else {
        value
    };
    value.trim().to_ascii_lowercase()
}

fn record_attribute_value(result: &mut ParseResult, lookup: &LayeredLookup, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let key = format!("{}:{}", name, value);
    record_lookup(result, lookup, &key, || {
        Evidence::Attribute(format!("{}=\"{}\"", name, value))
    });
}

/// 查找命中则记录，返回键是否已知
fn record_lookup<F>(result: &mut ParseResult, lookup: &LayeredLookup, key: &str, evidence: F) -> bool
where
    F: FnOnce() -> Evidence,
{
    match lookup.get(key) {
        Some((feature, _)) => {
            if !result.contains(feature) {
                result.record(FeatureMatch::new(
                    feature,
                    html_feature_description(feature),
                    evidence(),
                ));
            }
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn parse_builtin(html: &str) -> ParseResult {
        HtmlParser::builtin().parse_string(html)
    }

    #[test]
    fn video_with_vtt_track() {
        let result = parse_builtin(
            r#"<video controls><source src="a.webm" type="video/webm; codecs=vp9"><track kind="captions" src="subs.vtt"></video>"#,
        );
        for feature in ["video", "videotracks", "webvtt", "webm"] {
            assert!(result.contains(feature), "missing {}", feature);
        }
        assert!(!result.contains("audiotracks"));
        assert_eq!(
            result.detail("video").map(|d| &d.evidence),
            Some(&Evidence::Element("video".into()))
        );
    }

    #[test]
    fn audio_track_is_distinct() {
        let result = parse_builtin(r#"<audio><track src="t.vtt?x=1"></audio>"#);
        assert!(result.contains("audiotracks"));
        assert!(result.contains("webvtt"));
        assert!(!result.contains("videotracks"));
    }

    #[test]
    fn data_attributes_and_custom_elements() {
        let result = parse_builtin(r#"<div data-id="1" aria-label="x"></div><my-widget></my-widget>"#);
        assert!(result.contains("dataset"));
        assert!(result.contains("custom-elementsv1"));
        assert!(result.unrecognized.contains("element: <my-widget>"));
        assert!(!result.unrecognized.iter().any(|t| t.contains("data-id") || t.contains("aria-")));
    }

    #[test]
    fn svg_hyphenated_elements_are_not_custom() {
        let result = parse_builtin(r#"<svg><font-face></font-face><missing-glyph></missing-glyph></svg>"#);
        assert!(result.contains("svg-html5"));
        assert!(!result.contains("custom-elementsv1"));
        assert!(result.unrecognized.is_empty());
    }

    #[test]
    fn lookups_and_head_detectors() {
        let result = parse_builtin(
            r#"<html><head>
                <meta name="viewport" content="width=device-width">
                <link rel="preload stylesheet" href="a.css">
                <link rel="icon" href="/favicon.svg">
                <script type="module" src="m.js"></script>
                <script async src="a.js"></script>
            </head><body>
                <input type="color" placeholder="c">
                <img src="logo.svg" loading="lazy">
                <a href="x" rel="noopener">x</a>
            </body></html>"#,
        );
        for feature in [
            "viewport-meta",
            "link-rel-preload",
            "link-icon-svg",
            "es6-module",
            "script-async",
            "input-color",
            "input-placeholder",
            "svg-img",
            "loading-lazy-attr",
            "rel-noopener",
        ] {
            assert!(result.contains(feature), "missing {}", feature);
        }
        assert!(!result.contains("script-defer"));
    }

    #[test]
    fn responsive_images_and_svg_sources() {
        let result = parse_builtin(
            r#"<picture><source srcset="logo.svg" type="image/svg+xml"><img src="a.png" alt=""></picture>"#,
        );
        for feature in ["picture", "srcset", "svg-img"] {
            assert!(result.contains(feature), "missing {}", feature);
        }

        let result = parse_builtin(r#"<img src="a.png" srcset="a-1x.png 1x, Logo.SVG?v=2 2x">"#);
        assert!(result.contains("srcset"));
        assert!(result.contains("svg-img"));

        let result = parse_builtin(r#"<img src="a.png" srcset="a-1x.png 1x, a-2x.png 2x">"#);
        assert!(result.contains("srcset"));
        assert!(!result.contains("svg-img"));
        assert!(!result.contains("picture"));
    }

    #[test]
    fn svg_fragment_references() {
        for html in [
            r##"<svg><use href="#icon-star"></use></svg>"##,
            r##"<svg><use xlink:href="#icon-star"></use></svg>"##,
            r##"<svg><use href="sprite.svg#star"></use></svg>"##,
            r##"<img src="sprite.SVG#star">"##,
        ] {
            assert!(parse_builtin(html).contains("svg-fragment"), "missed {}", html);
        }
        assert!(!parse_builtin(r##"<svg><use href="sprite"></use></svg><a href="#top">x</a>"##)
            .contains("svg-fragment"));
    }

    #[test]
    fn media_fragment_uris() {
        for html in [
            r##"<video src="v.mp4#t=10,20"></video>"##,
            r##"<video src="v.mp4#track=audio2"></video>"##,
            r##"<img src="photo.jpg#xywh=160,120,320,240">"##,
            r##"<audio><source src="a.ogg#t=5"></audio>"##,
        ] {
            assert!(parse_builtin(html).contains("media-fragments"), "missed {}", html);
        }
        assert!(!parse_builtin(r##"<video src="v.mp4#chapter-2"></video>"##).contains("media-fragments"));
    }

    #[test]
    fn meta_script_and_link_hints() {
        let result = parse_builtin(
            r##"<html><head>
                <meta name="Theme-Color" content="#333">
                <script defer src="d.js"></script>
                <link rel="prefetch" href="next.html">
                <link rel="preconnect" href="https://cdn.example">
                <link rel="DNS-Prefetch" href="//fonts.example">
            </head><body></body></html>"##,
        );
        for feature in [
            "meta-theme-color",
            "script-defer",
            "link-rel-prefetch",
            "link-rel-preconnect",
            "link-rel-dns-prefetch",
        ] {
            assert!(result.contains(feature), "missing {}", feature);
        }
        assert!(!result.contains("script-async"));
        assert!(!result.contains("link-rel-preload"));
    }

    #[test]
    fn repeated_parses_do_not_leak() {
        let parser = HtmlParser::builtin();
        let first_source = r#"<video><track src="a.vtt"></video><div frobnicate="1"></div>"#;
        let second_source = r#"<link rel="prefetch" href="n.html"><span wobble="2"></span>"#;

        let first = parser.parse_string(first_source);
        let second = parser.parse_string(second_source);
        assert_eq!(first, parser.parse_string(first_source));

        assert!(second.contains("link-rel-prefetch"));
        assert!(!second.contains("video"));
        assert!(!second.contains("webvtt"));
        assert!(!second.unrecognized.contains("attribute: frobnicate"));
        assert!(second.unrecognized.contains("attribute: wobble"));
        assert!(!first.contains("link-rel-prefetch"));
    }

    #[test]
    fn unknown_attributes_are_reported() {
        let result = parse_builtin(r#"<div class="a" onclick="f()" frobnicate="1"></div>"#);
        assert_eq!(
            result.unrecognized,
            BTreeSet::from(["attribute: frobnicate".to_string()])
        );
    }

    #[test]
    fn custom_lookups_override_and_extend() {
        let mut set = CustomRuleSet::empty();
        set.html.elements.insert("x-gallery".into(), "my-gallery".into());
        set.html.attributes.insert("frobnicate".into(), "my-frob".into());
        let parser = HtmlParser::new(&set);

        let result = parser.parse_string(r#"<x-gallery frobnicate></x-gallery>"#);
        assert!(result.contains("my-gallery"));
        assert!(result.contains("my-frob"));
        assert!(result.unrecognized.is_empty());
        let report = parser.detailed_report(&result);
        assert_eq!(report.custom_features, vec!["my-frob".to_string(), "my-gallery".to_string()]);
        assert_eq!(report.by_category["structure"], vec!["custom-elementsv1".to_string()]);
    }

    #[test]
    fn attribute_value_lookup_truncates_type() {
        let mut values = BTreeMap::new();
        values.insert("type:text/x-custom".to_string(), "my-mime".to_string());
        let mut set = CustomRuleSet::empty();
        set.html.attribute_values = values;
        let result = HtmlParser::new(&set)
            .parse_string(r#"<script type="Text/X-Custom; charset=utf-8"></script>"#);
        assert_eq!(
            result.detail("my-mime").map(|d| &d.evidence),
            Some(&Evidence::Attribute("type=\"text/x-custom\"".into()))
        );
    }

    #[test]
    fn data_uri_and_xhtml() {
        let result = parse_builtin(
            r#"<html xmlns="http://www.w3.org/1999/xhtml"><body><img src="data:image/png;base64,AAAA"><fieldset disabled></fieldset></body></html>"#,
        );
        assert!(result.contains("datauri"));
        assert!(result.contains("xhtml"));
        assert!(result.contains("fieldset-disabled"));
    }

    #[test]
    fn supported_features_cover_lookups_and_detectors() {
        let features = HtmlParser::builtin().supported_features();
        assert!(features.contains(&"dialog".to_string()));
        assert!(features.contains(&"webvtt".to_string()));
        let mut sorted = features.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(features, sorted);
    }
}
