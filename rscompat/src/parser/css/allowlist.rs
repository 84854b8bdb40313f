//! 通用 CSS 属性 / @规则白名单（不计入 unrecognized）
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

const BASIC_PROPERTIES: &[&str] = &[
    // 盒模型
    "display", "position", "top", "right", "bottom", "left", "float", "clear", "z-index",
    "width", "height", "min-width", "min-height", "max-width", "max-height",
    "margin", "margin-top", "margin-right", "margin-bottom", "margin-left",
    "padding", "padding-top", "padding-right", "padding-bottom", "padding-left",
    "overflow", "overflow-x", "overflow-y", "visibility", "clip", "vertical-align",
    // 边框 / 背景
    "border", "border-top", "border-right", "border-bottom", "border-left",
    "border-width", "border-style", "border-color",
    "border-top-width", "border-right-width", "border-bottom-width", "border-left-width",
    "border-top-style", "border-right-style", "border-bottom-style", "border-left-style",
    "border-top-color", "border-right-color", "border-bottom-color", "border-left-color",
    "border-collapse", "border-spacing", "outline", "outline-width", "outline-style",
    "outline-color", "background", "background-color", "background-image",
    "background-repeat", "background-position", "background-attachment",
    // 文本 / 字体
    "color", "font", "font-family", "font-size", "font-weight", "font-style",
    "font-variant", "line-height", "letter-spacing", "word-spacing", "text-align",
    "text-decoration", "text-indent", "text-transform", "white-space", "direction",
    "quotes", "content", "src", "unicode-range",
    // 列表 / 表格 / 其他
    "list-style", "list-style-type", "list-style-position", "list-style-image",
    "table-layout", "caption-side", "empty-cells", "cursor", "page-break-before",
    "page-break-after", "page-break-inside", "orphans", "widows", "size", "marks",
    // 间距（grid / flex 共用）
    "gap", "row-gap", "column-gap",
];

const BASIC_AT_RULES: &[&str] = &["media", "import", "charset", "font-face", "keyframes", "namespace", "page"];

static PROPERTY_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| BASIC_PROPERTIES.iter().copied().collect());
static AT_RULE_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| BASIC_AT_RULES.iter().copied().collect());

#[inline]
pub fn is_basic_property(name: &str) -> bool {
    PROPERTY_SET.contains(name)
}

#[inline]
pub fn is_basic_at_rule(name: &str) -> bool {
    AT_RULE_SET.contains(name)
}
