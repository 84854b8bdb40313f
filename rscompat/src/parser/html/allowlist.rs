//! 通用 HTML / SVG 名称白名单（不计入 unrecognized）
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// 含连字符但不是自定义元素的 SVG / MathML 元素
pub const HYPHENATED_FOREIGN_ELEMENTS: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

const BASIC_ATTRIBUTES: &[&str] = &[
    // 全局属性
    "id", "class", "style", "title", "lang", "dir", "tabindex", "accesskey", "translate",
    "role", "slot", "is", "part", "exportparts", "itemscope", "itemtype", "itemprop",
    "itemid", "itemref", "xmlns", "xml:lang", "xml:space",
    // 链接 / 资源
    "href", "src", "alt", "width", "height", "type", "name", "value", "rel", "rev",
    "target", "hreflang", "media", "charset", "content", "http-equiv", "property",
    "srcset", "sizes", "usemap", "ismap", "coords", "shape", "longdesc",
    // 表单
    "action", "method", "enctype", "accept-charset", "for", "checked", "disabled",
    "selected", "readonly", "multiple", "max", "min", "step", "size", "maxlength",
    "cols", "rows", "wrap", "label", "list", "dirname",
    // 表格
    "colspan", "rowspan", "headers", "scope", "span", "summary", "abbr",
    // 脚本 / 媒体
    "async", "defer", "nomodule", "controls", "autoplay", "loop", "muted", "poster",
    "preload", "playsinline", "kind", "srclang", "default", "data", "datetime", "cite",
    "open", "start", "high", "low", "optimum", "frameborder", "scrolling",
    "allowfullscreen", "border", "cellpadding", "cellspacing", "align", "valign",
    "bgcolor", "manifest",
    // SVG 常用展示属性
    "viewbox", "preserveaspectratio", "d", "fill", "fill-rule", "clip-rule", "stroke",
    "stroke-width", "stroke-linecap", "stroke-linejoin", "stroke-dasharray", "opacity",
    "transform", "x", "y", "x1", "y1", "x2", "y2", "cx", "cy", "r", "rx", "ry", "points",
    "version", "focusable", "xlink:href", "xmlns:xlink", "offset", "stop-color",
    "gradientunits", "gradienttransform", "clip-path", "mask", "filter",
];

static ATTRIBUTE_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| BASIC_ATTRIBUTES.iter().copied().collect());

#[inline]
pub fn is_hyphenated_foreign_element(tag: &str) -> bool {
    HYPHENATED_FOREIGN_ELEMENTS.contains(&tag)
}

/// 通用属性、事件处理器 `on*`、`data-*`、`aria-*`
pub fn is_basic_attribute(name: &str) -> bool {
    ATTRIBUTE_SET.contains(name)
        || name.starts_with("data-")
        || name.starts_with("aria-")
        || (name.len() > 2 && name.starts_with("on"))
}
