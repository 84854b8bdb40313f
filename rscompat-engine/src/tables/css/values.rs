use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(
        "css-variables",
        "CSS Variables (Custom Properties)",
        &[r"\bvar\(\s*--", r"(?:^|[{;\s])--[\w-]+\s*:"],
    )
    .with_keywords(&["custom properties"]),
    RuleDef::new("calc", "calc() as CSS unit value", &[r"\b(?:-webkit-|-moz-)?calc\("]),
    RuleDef::new("css-math-functions", "CSS min(), max() and clamp()", &[r"\b(?:min|max|clamp)\("]),
    RuleDef::new("css-trig-functions", "CSS trigonometric and exponential functions", &[r"\b(?:sin|cos|tan|asin|acos|atan|atan2|pow|sqrt|hypot|log|exp|round|mod|rem)\("]),
    RuleDef::new("viewport-units", "Viewport units: vw, vh, vmin, vmax", &[r"\d(?:vw|vh|vmin|vmax)\b"]),
    RuleDef::new(
        "viewport-unit-variants",
        "Small, Large, and Dynamic viewport units",
        &[r"\d(?:[sld]v(?:w|h|i|b|min|max))\b"],
    ),
    RuleDef::new("rem", "rem (root em) units", &[r"\drem\b"]),
    RuleDef::new("ch-unit", "ch (character) unit", &[r"\dch\b"]),
    RuleDef::new("css-container-query-units", "CSS Container Query Units", &[r"\d(?:cqw|cqh|cqi|cqb|cqmin|cqmax)\b"]),
    RuleDef::new("css-env-function", "CSS Environment Variables env()", &[r"\benv\(\s*[a-z-]+"]),
    RuleDef::new("css-unset-value", "CSS unset value", &[r":\s*unset\b"]),
    RuleDef::new("css-initial-value", "CSS initial value", &[r":\s*initial\b"]),
    RuleDef::new("css-revert-value", "CSS revert value", &[r":\s*revert(?:-layer)?\b"]),
    RuleDef::new("css-all", "CSS all property", &[r"(?:^|[{;\s])all\s*:"]),
    RuleDef::new("css-rrggbbaa", "#rrggbbaa hex color notation", &[r"#[0-9a-f]{8}\b", r":\s*#[0-9a-f]{4}\b"]),
    RuleDef::new("intrinsic-width", "Intrinsic & Extrinsic Sizing", &[r"\b(?:min-content|max-content|fit-content)\b"]),
    RuleDef::new("css-counters", "CSS Counters", &[r"(?:^|[{;\s])counter-(?:reset|increment|set)\s*:", r"\bcounters?\("]),
    RuleDef::new("css-attr-function", "CSS attr() function", &[r"\battr\(\s*[\w-]+"]),
    RuleDef::new("css-light-dark", "CSS light-dark() color function", &[r"\blight-dark\("]),
];
