//! 结构检测器：单靠名称查找表达不了的特性
//! 逐元素执行，命中即记录 (特性ID, 检测说明)
use scraper::ElementRef;

use super::allowlist::is_hyphenated_foreign_element;

/// 可能携带 URL 的属性
const URL_ATTRIBUTES: &[&str] = &["src", "href", "srcset", "poster", "data", "action", "formaction", "cite"];

pub struct StructuralDetector {
    pub feature: &'static str,
    pub evidence: &'static str,
    pub check: fn(ElementRef<'_>) -> bool,
}

const fn detector(
    feature: &'static str,
    evidence: &'static str,
    check: fn(ElementRef<'_>) -> bool,
) -> StructuralDetector {
    StructuralDetector {
        feature,
        evidence,
        check,
    }
}

pub const DETECTORS: &[StructuralDetector] = &[
    detector("srcset", "srcset/sizes on img or source", responsive_image),
    detector("picture", "source inside picture", picture_source),
    detector("dataset", "data-* attribute", data_attribute),
    detector("script-async", "script async", script_async),
    detector("script-defer", "script defer", script_defer),
    detector("es6-module", "script type=module", module_script),
    detector("link-rel-preload", "link rel=preload", rel_preload),
    detector("link-rel-prefetch", "link rel=prefetch", rel_prefetch),
    detector("link-rel-preconnect", "link rel=preconnect", rel_preconnect),
    detector("link-rel-dns-prefetch", "link rel=dns-prefetch", rel_dns_prefetch),
    detector("link-rel-modulepreload", "link rel=modulepreload", rel_modulepreload),
    detector("link-rel-prerender", "link rel=prerender", rel_prerender),
    detector("link-icon-svg", "SVG icon link", svg_icon),
    detector("rel-noopener", "rel=noopener", rel_noopener),
    detector("rel-noreferrer", "rel=noreferrer", rel_noreferrer),
    detector("web-app-manifest", "link rel=manifest", rel_manifest),
    detector("viewport-meta", "meta name=viewport", meta_viewport),
    detector("meta-theme-color", "meta name=theme-color", meta_theme_color),
    detector("svg-img", "SVG image source", svg_image),
    detector("svg-fragment", "SVG fragment reference", svg_fragment),
    detector("media-fragments", "media fragment URI", media_fragment),
    detector("custom-elementsv1", "hyphenated custom element", custom_element),
    detector("fieldset-disabled", "fieldset disabled", fieldset_disabled),
    detector("videotracks", "track inside video", video_track),
    detector("audiotracks", "track inside audio", audio_track),
    detector("webvtt", "track with .vtt source", webvtt_track),
    detector("datauri", "data: URI in URL attribute", data_uri),
    detector("xhtml", "xhtml namespace on html", xhtml_namespace),
];

#[inline]
fn is_tag(el: ElementRef<'_>, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

#[inline]
fn has_attr(el: ElementRef<'_>, name: &str) -> bool {
    el.value().attr(name).is_some()
}

fn attr_eq(el: ElementRef<'_>, name: &str, expected: &str) -> bool {
    el.value()
        .attr(name)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}

/// rel 属性按空白切分后的任一标记
fn has_rel(el: ElementRef<'_>, token: &str) -> bool {
    el.value()
        .attr("rel")
        .is_some_and(|rel| rel.split_ascii_whitespace().any(|t| t.eq_ignore_ascii_case(token)))
}

/// 去掉查询串与片段后的小写路径
fn url_path(url: &str) -> String {
    let end = url.find(|c| c == '?' || c == '#').unwrap_or(url.len());
    url[..end].trim().to_ascii_lowercase()
}

fn within(el: ElementRef<'_>, ancestor: &str) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|a| is_tag(a, ancestor))
}

fn url_values<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    URL_ATTRIBUTES
        .iter()
        .filter_map(move |name| el.value().attr(name))
}

fn responsive_image(el: ElementRef<'_>) -> bool {
    (is_tag(el, "img") || is_tag(el, "source")) && (has_attr(el, "srcset") || has_attr(el, "sizes"))
}

fn picture_source(el: ElementRef<'_>) -> bool {
    is_tag(el, "source")
        && el
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|p| is_tag(p, "picture"))
}

fn data_attribute(el: ElementRef<'_>) -> bool {
    el.value()
        .attrs()
        .any(|(name, _)| name.len() > 5 && name.starts_with("data-"))
}

fn script_async(el: ElementRef<'_>) -> bool {
    is_tag(el, "script") && has_attr(el, "async")
}

fn script_defer(el: ElementRef<'_>) -> bool {
    is_tag(el, "script") && has_attr(el, "defer")
}

fn module_script(el: ElementRef<'_>) -> bool {
    is_tag(el, "script") && attr_eq(el, "type", "module")
}

fn rel_preload(el: ElementRef<'_>) -> bool {
    is_tag(el, "link") && has_rel(el, "preload")
}

fn rel_prefetch(el: ElementRef<'_>) -> bool {
    is_tag(el, "link") && has_rel(el, "prefetch")
}

fn rel_preconnect(el: ElementRef<'_>) -> bool {
    is_tag(el, "link") && has_rel(el, "preconnect")
}

fn rel_dns_prefetch(el: ElementRef<'_>) -> bool {
    is_tag(el, "link") && has_rel(el, "dns-prefetch")
}

fn rel_modulepreload(el: ElementRef<'_>) -> bool {
    is_tag(el, "link") && has_rel(el, "modulepreload")
}

fn rel_prerender(el: ElementRef<'_>) -> bool {
    is_tag(el, "link") && has_rel(el, "prerender")
}

fn rel_manifest(el: ElementRef<'_>) -> bool {
    is_tag(el, "link") && has_rel(el, "manifest")
}

fn svg_icon(el: ElementRef<'_>) -> bool {
    is_tag(el, "link")
        && has_rel(el, "icon")
        && (attr_eq(el, "type", "image/svg+xml")
            || el.value().attr("href").is_some_and(|h| url_path(h).ends_with(".svg")))
}

fn rel_noopener(el: ElementRef<'_>) -> bool {
    has_rel(el, "noopener")
}

fn rel_noreferrer(el: ElementRef<'_>) -> bool {
    has_rel(el, "noreferrer")
}

fn meta_viewport(el: ElementRef<'_>) -> bool {
    is_tag(el, "meta") && attr_eq(el, "name", "viewport")
}

fn meta_theme_color(el: ElementRef<'_>) -> bool {
    is_tag(el, "meta") && attr_eq(el, "name", "theme-color")
}

/// SVG 地址：路径以 .svg 结尾，或 SVG data URI
fn is_svg_url(url: &str) -> bool {
    let url = url.trim();
    url_path(url).ends_with(".svg")
        || url
            .get(..18)
            .is_some_and(|p| p.eq_ignore_ascii_case("data:image/svg+xml"))
}

/// srcset 中每个候选的 URL（逗号分隔，取候选的第一个标记）
fn srcset_urls<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.value()
        .attr("srcset")
        .into_iter()
        .flat_map(|set| set.split(','))
        .filter_map(|candidate| candidate.split_ascii_whitespace().next())
}

fn svg_image(el: ElementRef<'_>) -> bool {
    if is_tag(el, "img") && el.value().attr("src").is_some_and(is_svg_url) {
        return true;
    }
    (is_tag(el, "img") || is_tag(el, "source")) && srcset_urls(el).any(is_svg_url)
}

/// `<use>` 的 href 在 SVG 内以 xlink 命名空间存放，只比较本地名
fn svg_fragment(el: ElementRef<'_>) -> bool {
    if is_tag(el, "use") {
        return el
            .value()
            .attrs()
            .any(|(name, v)| (name == "href" || name == "xlink:href") && v.contains('#'));
    }
    url_values(el).any(|v| v.to_ascii_lowercase().contains(".svg#"))
}

/// 时间 / 轨道 / 空间三种媒体片段
const MEDIA_FRAGMENT_KEYS: &[&str] = &["#t=", "#track=", "#xywh="];

fn media_fragment(el: ElementRef<'_>) -> bool {
    url_values(el).any(|v| MEDIA_FRAGMENT_KEYS.iter().any(|key| v.contains(key)))
}

fn custom_element(el: ElementRef<'_>) -> bool {
    let tag = el.value().name().to_ascii_lowercase();
    tag.contains('-') && !is_hyphenated_foreign_element(&tag)
}

fn fieldset_disabled(el: ElementRef<'_>) -> bool {
    is_tag(el, "fieldset") && has_attr(el, "disabled")
}

fn video_track(el: ElementRef<'_>) -> bool {
    is_tag(el, "track") && within(el, "video")
}

fn audio_track(el: ElementRef<'_>) -> bool {
    is_tag(el, "track") && within(el, "audio")
}

fn webvtt_track(el: ElementRef<'_>) -> bool {
    is_tag(el, "track") && el.value().attr("src").is_some_and(|src| url_path(src).ends_with(".vtt"))
}

fn data_uri(el: ElementRef<'_>) -> bool {
    url_values(el).any(|v| {
        v.trim_start()
            .get(..5)
            .is_some_and(|p| p.eq_ignore_ascii_case("data:"))
    })
}

fn xhtml_namespace(el: ElementRef<'_>) -> bool {
    is_tag(el, "html")
        && el
            .value()
            .attr("xmlns")
            .is_some_and(|ns| ns.to_ascii_lowercase().contains("xhtml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_path_drops_query_and_fragment() {
        assert_eq!(url_path(" Subs.VTT?v=2#x "), "subs.vtt");
        assert_eq!(url_path("a.svg#icon"), "a.svg");
    }

    #[test]
    fn svg_urls() {
        assert!(is_svg_url(" Logo.SVG?v=3 "));
        assert!(is_svg_url("DATA:image/svg+xml;base64,PHN2Zz4="));
        assert!(!is_svg_url("logo.svgz"));
        assert!(!is_svg_url("data:image/png;base64,AAAA"));
    }

    #[test]
    fn detector_features_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for d in DETECTORS {
            assert!(seen.insert(d.feature), "duplicate detector {}", d.feature);
        }
    }
}
