use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(
        "css-animation",
        "CSS Animation",
        &[
            r"@(?:-webkit-|-moz-|-o-)?keyframes\b",
            r"(?:^|[{;\s])(?:-webkit-)?animation(?:-name|-duration|-delay|-iteration-count|-direction|-fill-mode|-play-state|-timing-function)?\s*:",
        ],
    )
    .with_keywords(&["keyframes"]),
    RuleDef::new(
        "css-transitions",
        "CSS3 Transitions",
        &[r"(?:^|[{;\s])(?:-webkit-)?transition(?:-property|-duration|-delay|-timing-function)?\s*:"],
    ),
    RuleDef::new(
        "transforms2d",
        "CSS3 2D Transforms",
        &[r"(?:^|[{;\s])(?:-webkit-|-ms-)?transform(?:-origin)?\s*:"],
    ),
    RuleDef::new(
        "transforms3d",
        "CSS3 3D Transforms",
        &[
            r"\b(?:translate3d|rotate3d|scale3d|matrix3d|translateZ|rotate[XY]|scaleZ|perspective)\(",
            r"(?:^|[{;\s])perspective(?:-origin)?\s*:",
            r"(?:^|[{;\s])transform-style\s*:\s*preserve-3d\b",
            r"(?:^|[{;\s])backface-visibility\s*:",
        ],
    ),
    RuleDef::new(
        "css-individual-transforms",
        "Individual CSS transform properties",
        &[r"(?:^|[{;\s])(?:translate|rotate|scale)\s*:"],
    ),
    RuleDef::new("will-change", "CSS will-change property", &[r"(?:^|[{;\s])will-change\s*:"]),
    RuleDef::new(
        "css-motion-paths",
        "CSS Motion Path",
        &[r"(?:^|[{;\s])offset-(?:path|distance|rotate|anchor)\s*:"],
    ),
    RuleDef::new(
        "css-scroll-timeline",
        "CSS Scroll-driven Animations",
        &[
            r"(?:^|[{;\s])(?:animation-timeline|animation-range|scroll-timeline(?:-name|-axis)?|view-timeline(?:-name|-axis|-inset)?)\s*:",
            r":\s*(?:scroll|view)\(",
        ],
    ),
    RuleDef::new(
        "view-transitions",
        "View Transitions API (single-document)",
        &[r"(?:^|[{;\s])view-transition-name\s*:", r"::view-transition", r"@view-transition\b"],
    ),
    RuleDef::new(
        "css-starting-style",
        "CSS @starting-style",
        &[r"@starting-style\b"],
    ),
    RuleDef::new(
        "css-transition-behavior",
        "CSS transition-behavior / allow-discrete",
        &[r"(?:^|[{;\s])transition-behavior\s*:", r"\ballow-discrete\b"],
    ),
    RuleDef::new(
        "css-easing-functions",
        "CSS linear() easing function",
        &[r"(?:^|[\s:,])linear\(\s*[-0-9.]"],
    ),
];
