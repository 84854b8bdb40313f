use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("fontface", "@font-face Web fonts", &[r"@font-face\b"]).with_keywords(&["fonts"]),
    RuleDef::new("woff", "WOFF - Web Open Font Format", &[r#"format\(\s*["']?woff["']?\s*\)"#, r"\.woff\b"]),
    RuleDef::new("woff2", "WOFF 2.0 - Web Open Font Format", &[r#"format\(\s*["']?woff2"#, r"\.woff2\b"]),
    RuleDef::new("ttf", "TTF/OTF - TrueType and OpenType font support", &[r#"format\(\s*["']?(?:truetype|opentype)"#, r"\.(?:ttf|otf)\b"]),
    RuleDef::new(
        "font-feature",
        "CSS font-feature-settings",
        &[r"(?:^|[{;\s])font-feature-settings\s*:"],
    ),
    RuleDef::new(
        "font-variant-alternates",
        "CSS font-variant-alternates",
        &[r"(?:^|[{;\s])font-variant-alternates\s*:"],
    ),
    RuleDef::new(
        "font-variant-numeric",
        "CSS font-variant-numeric",
        &[r"(?:^|[{;\s])font-variant-numeric\s*:"],
    ),
    RuleDef::new(
        "variable-fonts",
        "Variable fonts",
        &[r"(?:^|[{;\s])font-variation-settings\s*:", r"(?:^|[{;\s])font-optical-sizing\s*:"],
    ),
    RuleDef::new("css-font-rendering-controls", "CSS font-display", &[r"(?:^|[{;\s])font-display\s*:"]),
    RuleDef::new("css-font-stretch", "CSS font-stretch", &[r"(?:^|[{;\s])font-stretch\s*:"]),
    RuleDef::new("font-size-adjust", "CSS font-size-adjust", &[r"(?:^|[{;\s])font-size-adjust\s*:"]),
    RuleDef::new("font-kerning", "CSS3 font-kerning", &[r"(?:^|[{;\s])font-kerning\s*:"]),
    RuleDef::new("css-font-palette", "CSS font-palette", &[r"(?:^|[{;\s])font-palette\s*:", r"@font-palette-values\b"]),
    RuleDef::new(
        "extended-system-fonts",
        "ui-serif, ui-sans-serif, ui-monospace and ui-rounded values for font-family",
        &[r"(?:^|[{;\s])font(?:-family)?\s*:[^;}]*\b(?:system-ui|ui-serif|ui-sans-serif|ui-monospace|ui-rounded)\b"],
    ),
    RuleDef::new("css-text-align-last", "CSS3 text-align-last", &[r"(?:^|[{;\s])text-align-last\s*:"]),
    RuleDef::new(
        "text-decoration",
        "text-decoration styling",
        &[
            r"(?:^|[{;\s])text-decoration-(?:line|style|color|thickness|skip(?:-ink)?)\s*:",
            r"(?:^|[{;\s])text-underline-(?:offset|position)\s*:",
        ],
    ),
    RuleDef::new("text-overflow", "CSS3 Text-overflow", &[r"(?:^|[{;\s])text-overflow\s*:"]),
    RuleDef::new("css-hyphens", "CSS Hyphenation", &[r"(?:^|[{;\s])(?:-webkit-|-ms-)?hyphens\s*:"]),
    RuleDef::new(
        "css-text-wrap-balance",
        "CSS text-wrap: balance",
        &[r"(?:^|[{;\s])text-wrap(?:-style)?\s*:\s*(?:balance|pretty)\b"],
    ),
    RuleDef::new("css-writing-mode", "CSS writing-mode property", &[r"(?:^|[{;\s])writing-mode\s*:"]),
    RuleDef::new("css-text-orientation", "CSS text-orientation", &[r"(?:^|[{;\s])text-orientation\s*:"]),
    RuleDef::new("css-initial-letter", "CSS initial-letter", &[r"(?:^|[{;\s])(?:-webkit-)?initial-letter\s*:"]),
    RuleDef::new("word-break", "CSS3 word-break", &[r"(?:^|[{;\s])word-break\s*:"]),
    RuleDef::new("wordwrap", "CSS3 Overflow-wrap", &[r"(?:^|[{;\s])(?:overflow-wrap|word-wrap)\s*:"]),
    RuleDef::new("text-stroke", "CSS text-stroke and text-fill", &[r"(?:^|[{;\s])-webkit-text-(?:stroke|fill-color)(?:-width|-color)?\s*:"]),
    RuleDef::new("css-line-clamp", "CSS line-clamp", &[r"(?:^|[{;\s])(?:-webkit-)?line-clamp\s*:"]),
    RuleDef::new("css-unicode-bidi", "CSS unicode-bidi property", &[r"(?:^|[{;\s])unicode-bidi\s*:"]),
    RuleDef::new("css-text-justify", "CSS text-justify", &[r"(?:^|[{;\s])text-justify\s*:"]),
    RuleDef::new("text-size-adjust", "CSS text-size-adjust", &[r"(?:^|[{;\s])(?:-webkit-|-moz-|-ms-)?text-size-adjust\s*:"]),
];
