use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("css-mediaqueries", "CSS3 Media Queries", &[r"@media\b"]),
    RuleDef::new("css-featurequeries", "CSS Feature Queries", &[r"@supports\b"]),
    RuleDef::new(
        "css-container-queries",
        "CSS Container Queries (Size)",
        &[r"@container\b", r"(?:^|[{;\s])container(?:-type|-name)?\s*:"],
    )
    .with_keywords(&["container"]),
    RuleDef::new(
        "css-container-queries-style",
        "CSS Container Style Queries",
        &[r"@container\b[^\n{]*\bstyle\("],
    ),
    RuleDef::new("css-cascade-layers", "CSS Cascade Layers", &[r"@layer\b", r"@import\b[^\n]*\blayer\b"]),
    RuleDef::new("css-cascade-scope", "Scoped Styles: the @scope rule", &[r"@scope\b"]),
    RuleDef::new("css-at-counter-style", "CSS Counter Styles", &[r"@counter-style\b"]),
    RuleDef::new("css-paged-media", "CSS Paged Media (@page)", &[r"@page\b"]),
    RuleDef::new("css-at-property", "CSS @property", &[r"@property\b"]),
    RuleDef::new("css-namespaces", "CSS namespaces", &[r"@namespace\b"]),
    RuleDef::new(
        "css-media-range-syntax",
        "Media Queries: Range Syntax",
        &[r"@(?:media|container)\b[^\n]*\([^)\n]*[<>]"],
    ),
    RuleDef::new("prefers-color-scheme", "prefers-color-scheme media query", &[r"\bprefers-color-scheme\b"]),
    RuleDef::new("prefers-reduced-motion", "prefers-reduced-motion media query", &[r"\bprefers-reduced-motion\b"]),
    RuleDef::new("css-media-resolution", "Media Queries: resolution feature", &[r"@media\b[^\n]*\b(?:min-|max-)?resolution\b", r"-webkit-(?:min-|max-)?device-pixel-ratio"]),
    RuleDef::new("css-media-interaction", "Media Queries: interaction media features", &[r"@media\b[^\n]*\b(?:any-)?(?:hover|pointer)\s*:"]),
    RuleDef::new("css-media-scripting", "Media Queries: scripting media feature", &[r"@media\b[^\n]*\bscripting\b"]),
    RuleDef::new("css-when-else", "CSS @when / @else conditional rules", &[r"@when\b", r"@else\b"]),
];
