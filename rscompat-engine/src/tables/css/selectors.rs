use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("css-has", ":has() CSS relational pseudo-class", &[r":has\("]),
    RuleDef::new(
        "css-matches-pseudo",
        ":is() CSS pseudo-class",
        &[r":is\(", r":matches\(", r":-(?:webkit|moz)-any\("],
    ),
    RuleDef::new("css-where-pseudo", ":where() CSS pseudo-class", &[r":where\("]),
    RuleDef::new("css-not-sel-list", "selector list argument of :not()", &[r":not\([^){}]*,"]),
    RuleDef::new("css-nth-child-of", "selector list argument of :nth-child and :nth-last-child", &[r":nth-(?:last-)?child\([^){}]*\bof\b"]),
    RuleDef::new("css-focus-visible", ":focus-visible CSS pseudo-class", &[r":focus-visible\b"]),
    RuleDef::new("css-focus-within", ":focus-within CSS pseudo-class", &[r":focus-within\b"]),
    RuleDef::new("css-placeholder", "::placeholder CSS pseudo-element", &[r"::?(?:-webkit-input-|-moz-)?placeholder\b"]),
    RuleDef::new("css-placeholder-shown", ":placeholder-shown CSS pseudo-class", &[r":placeholder-shown\b"]),
    RuleDef::new("css-selection", "::selection CSS pseudo-element", &[r"::(?:-moz-)?selection\b"]),
    RuleDef::new("css-marker-pseudo", "CSS ::marker pseudo-element", &[r"::marker\b"]),
    RuleDef::new("css-gencontent", "CSS Generated content for pseudo-elements", &[r"::?(?:before|after)\b"]),
    RuleDef::new(
        "css-sel3",
        "CSS3 selectors",
        &[r":(?:nth-child|nth-last-child|nth-of-type|nth-last-of-type)\(", r":(?:last-child|first-of-type|last-of-type|only-child|only-of-type|checked|empty|target|enabled|disabled)\b"],
    ),
    RuleDef::new("css-read-only-write", "CSS :read-only and :read-write selectors", &[r":(?:-moz-)?read-(?:only|write)\b"]),
    RuleDef::new("css-default-pseudo", ":default CSS pseudo-class", &[r":default\b"]),
    RuleDef::new("css-indeterminate-pseudo", ":indeterminate CSS pseudo-class", &[r":indeterminate\b"]),
    RuleDef::new("css-in-out-of-range", ":in-range and :out-of-range CSS pseudo-classes", &[r":(?:in|out-of)-range\b"]),
    RuleDef::new("css-optional-pseudo", ":optional CSS pseudo-class", &[r":(?:optional|required)\b"]),
    RuleDef::new("form-validation", "Form validation pseudo-classes", &[r":(?:invalid|valid|user-invalid|user-valid)\b"]),
    RuleDef::new("css-any-link", ":any-link CSS pseudo-class", &[r":any-link\b"]),
    RuleDef::new("css-dir-pseudo", ":dir() CSS pseudo-class", &[r":dir\("]),
    RuleDef::new("css-case-insensitive", "Case-insensitive CSS attribute selectors", &[r#"\[[^\]{}]*=\s*(?:"[^"]*"|'[^']*'|[\w-]+)\s+i\s*\]"#]),
    RuleDef::new("css-file-selector-button", "::file-selector-button CSS pseudo-element", &[r"::file-selector-button\b"]),
    RuleDef::new("css-autofill", ":autofill CSS pseudo-class", &[r":(?:-webkit-)?autofill\b"]),
    RuleDef::new("fullscreen", "Full Screen API pseudo-class", &[r":(?:-webkit-)?full-?screen\b", r"::backdrop\b"]),
    RuleDef::new(
        "css-nesting",
        "CSS Nesting",
        &[r"(?:^|[\s,{(])&"],
    )
    .with_keywords(&["nesting", "&"]),
    RuleDef::new("css-first-letter", "::first-letter CSS pseudo-element", &[r"::?first-letter\b"]),
    RuleDef::new("css-first-line", "CSS first-line pseudo-element", &[r"::?first-line\b"]),
    RuleDef::new("css-modal-pseudo", ":modal CSS pseudo-class", &[r":modal\b"]),
    RuleDef::new("css-popover-pseudo", ":popover-open CSS pseudo-class", &[r":popover-open\b"]),
];
