use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("pointer-events", "CSS pointer-events (for HTML)", &[r"(?:^|[{;\s])pointer-events\s*:"]),
    RuleDef::new("css-touch-action", "CSS touch-action property", &[r"(?:^|[{;\s])touch-action\s*:"]),
    RuleDef::new("user-select-none", "CSS user-select: none", &[r"(?:^|[{;\s])(?:-webkit-|-moz-|-ms-)?user-select\s*:"]),
    RuleDef::new("css-resize", "CSS resize property", &[r"(?:^|[{;\s])resize\s*:"]),
    RuleDef::new("css-appearance", "CSS Appearance", &[r"(?:^|[{;\s])(?:-webkit-|-moz-)?appearance\s*:"]),
    RuleDef::new("css-scroll-behavior", "CSS Scroll-behavior", &[r"(?:^|[{;\s])scroll-behavior\s*:"]),
    RuleDef::new(
        "css-snappoints",
        "CSS Scroll Snap",
        &[r"(?:^|[{;\s])scroll-snap-(?:type|align|stop)\s*:", r"(?:^|[{;\s])scroll-(?:padding|margin)(?:-[a-z]+)*\s*:"],
    ),
    RuleDef::new("css-overscroll-behavior", "CSS overscroll-behavior", &[r"(?:^|[{;\s])overscroll-behavior(?:-x|-y|-inline|-block)?\s*:"]),
    RuleDef::new("css-scrollbar", "CSS scrollbar styling", &[r"(?:^|[{;\s])scrollbar-(?:width|color)\s*:", r"::-webkit-scrollbar"]),
    RuleDef::new("css-scrollbar-gutter", "CSS scrollbar-gutter", &[r"(?:^|[{;\s])scrollbar-gutter\s*:"]),
    RuleDef::new("css-caret-color", "CSS caret-color", &[r"(?:^|[{;\s])caret-color\s*:"]),
    RuleDef::new("css-accent-color", "accent-color", &[r"(?:^|[{;\s])accent-color\s*:"]),
    RuleDef::new("css-field-sizing", "CSS field-sizing", &[r"(?:^|[{;\s])field-sizing\s*:"]),
    RuleDef::new("css-interpolate-size", "CSS interpolate-size", &[r"(?:^|[{;\s])interpolate-size\s*:", r"\bcalc-size\("]),
];
