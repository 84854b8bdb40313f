use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(
        "css-grid",
        "CSS Grid Layout",
        &[
            r"(?:^|[{;\s])display\s*:\s*(?:inline-)?grid\b",
            r"(?:^|[{;\s])grid-template(?:-columns|-rows|-areas)?\s*:",
            r"(?:^|[{;\s])grid-(?:area|column|row)(?:-start|-end)?\s*:",
            r"(?:^|[{;\s])grid-auto-(?:flow|columns|rows)\s*:",
        ],
    )
    .with_keywords(&["grid", "layout"]),
    RuleDef::new(
        "css-subgrid",
        "CSS Subgrid",
        &[r"(?:^|[{;\s])grid-template-(?:columns|rows)\s*:\s*subgrid\b"],
    ),
    RuleDef::new(
        "flexbox",
        "CSS Flexible Box Layout",
        &[
            r"(?:^|[{;\s])display\s*:\s*(?:inline-)?flex\b",
            r"(?:^|[{;\s])flex(?:-direction|-wrap|-flow|-grow|-shrink|-basis)?\s*:",
        ],
    )
    .with_keywords(&["flex", "layout"]),
    RuleDef::new(
        "flexbox-gap",
        "gap property for Flexbox",
        &[
            r"display\s*:\s*(?:inline-)?flex[^}]*[{;\s](?:row-|column-)?gap\s*:",
            r"[{;\s](?:row-|column-)?gap\s*:[^}]*display\s*:\s*(?:inline-)?flex",
        ],
    ),
    RuleDef::new(
        "multicolumn",
        "CSS3 Multiple column layout",
        &[
            r"(?:^|[{;\s])columns\s*:",
            r"(?:^|[{;\s])column-(?:count|width|rule|span|fill)\s*:",
        ],
    ),
    RuleDef::new(
        "css-display-contents",
        "CSS display: contents",
        &[r"(?:^|[{;\s])display\s*:\s*contents\b"],
    ),
    RuleDef::new(
        "inline-block",
        "CSS inline-block",
        &[r"(?:^|[{;\s])display\s*:\s*inline-block\b"],
    ),
    RuleDef::new(
        "css-table",
        "CSS Table display",
        &[r"(?:^|[{;\s])display\s*:\s*(?:inline-)?table(?:-cell|-row|-column)?\b"],
    ),
    RuleDef::new(
        "flow-root",
        "display: flow-root",
        &[r"(?:^|[{;\s])display\s*:\s*flow-root\b"],
    ),
    RuleDef::new(
        "css-sticky",
        "CSS position:sticky",
        &[r"(?:^|[{;\s])position\s*:\s*(?:-webkit-)?sticky\b"],
    ),
    RuleDef::new(
        "css-logical-props",
        "CSS Logical Properties",
        &[
            r"(?:^|[{;\s])(?:margin|padding|border|inset)-(?:inline|block)(?:-start|-end)?(?:-width|-style|-color)?\s*:",
            r"(?:^|[{;\s])(?:min-|max-)?(?:inline|block)-size\s*:",
        ],
    ),
    RuleDef::new(
        "css3-boxsizing",
        "CSS3 Box-sizing",
        &[r"(?:^|[{;\s])box-sizing\s*:"],
    ),
    RuleDef::new(
        "css-aspect-ratio",
        "CSS aspect-ratio",
        &[r"(?:^|[{;\s])aspect-ratio\s*:"],
    ),
    RuleDef::new(
        "css-containment",
        "CSS Containment",
        &[r"(?:^|[{;\s])contain\s*:"],
    ),
    RuleDef::new(
        "css-content-visibility",
        "CSS content-visibility",
        &[r"(?:^|[{;\s])content-visibility\s*:", r"(?:^|[{;\s])contain-intrinsic-size\s*:"],
    ),
    RuleDef::new(
        "object-fit",
        "CSS3 object-fit/object-position",
        &[r"(?:^|[{;\s])object-(?:fit|position)\s*:"],
    ),
    RuleDef::new(
        "css-overflow-anchor",
        "CSS overflow-anchor (Scroll Anchoring)",
        &[r"(?:^|[{;\s])overflow-anchor\s*:"],
    ),
    RuleDef::new(
        "css-overflow",
        "CSS overflow property with clip",
        &[r"(?:^|[{;\s])overflow(?:-x|-y)?\s*:\s*clip\b", r"(?:^|[{;\s])overflow-clip-margin\s*:"],
    ),
    RuleDef::new(
        "css-anchor-positioning",
        "CSS Anchor Positioning",
        &[
            r"(?:^|[{;\s])(?:anchor-name|position-anchor|position-area|position-try(?:-fallbacks)?)\s*:",
            r"\banchor\(",
        ],
    ),
    RuleDef::new(
        "css-shapes",
        "CSS Shapes Level 1",
        &[r"(?:^|[{;\s])shape-(?:outside|margin|image-threshold)\s*:"],
    ),
    RuleDef::new(
        "css-zoom",
        "CSS zoom",
        &[r"(?:^|[{;\s])zoom\s*:"],
    ),
];
