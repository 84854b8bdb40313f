use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new(
        "css-gradients",
        "CSS Gradients",
        &[r"\b(?:-webkit-|-moz-|-o-)?(?:linear|radial)-gradient\("],
    ),
    RuleDef::new(
        "css-repeating-gradients",
        "CSS Repeating Gradients",
        &[r"\brepeating-(?:linear|radial|conic)-gradient\("],
    ),
    RuleDef::new("css-conic-gradients", "CSS Conical Gradients", &[r"\b(?:repeating-)?conic-gradient\("]),
    RuleDef::new("border-radius", "CSS3 Border-radius (rounded corners)", &[r"(?:^|[{;\s])border(?:-(?:top|bottom)-(?:left|right))?-radius\s*:"]),
    RuleDef::new("css-boxshadow", "CSS3 Box-shadow", &[r"(?:^|[{;\s])box-shadow\s*:"]),
    RuleDef::new("css-textshadow", "CSS3 Text-shadow", &[r"(?:^|[{;\s])text-shadow\s*:"]),
    RuleDef::new("css-filters", "CSS Filter Effects", &[r"(?:^|[{;\s])(?:-webkit-)?filter\s*:\s*[a-z-]+\("]),
    RuleDef::new("css-backdrop-filter", "CSS Backdrop Filter", &[r"(?:^|[{;\s])(?:-webkit-)?backdrop-filter\s*:"]),
    RuleDef::new("css-mixblendmode", "Blending of HTML/SVG elements", &[r"(?:^|[{;\s])mix-blend-mode\s*:"]),
    RuleDef::new("css-backgroundblendmode", "CSS background-blend-mode", &[r"(?:^|[{;\s])background-blend-mode\s*:"]),
    RuleDef::new("css-clip-path", "CSS clip-path property (for HTML)", &[r"(?:^|[{;\s])(?:-webkit-)?clip-path\s*:"]),
    RuleDef::new("css-masks", "CSS Masks", &[r"(?:^|[{;\s])(?:-webkit-)?mask(?:-image|-size|-position|-repeat|-mode|-composite|-clip|-origin)?\s*:"]),
    RuleDef::new("css-opacity", "CSS3 Opacity", &[r"(?:^|[{;\s])opacity\s*:"]),
    RuleDef::new("css3-colors", "CSS3 Colors", &[r"\b(?:rgba|hsla?)\("]),
    RuleDef::new("css-lch-lab", "LCH and Lab color values", &[r"\b(?:ok)?(?:lab|lch)\("]),
    RuleDef::new("css-color-function", "CSS color() function", &[r"(?:^|[\s:,(])color\(\s*(?:from\s+)?[a-z-]+"]),
    RuleDef::new("css-color-mix", "CSS color-mix()", &[r"\bcolor-mix\("]),
    RuleDef::new("css-relative-colors", "CSS Relative color syntax", &[r"\b(?:rgb|hsl|hwb|lab|lch|oklab|oklch|color)\(\s*from\b"]),
    RuleDef::new("css-image-set", "CSS image-set", &[r"\b(?:-webkit-)?image-set\("]),
    RuleDef::new(
        "background-img-opts",
        "CSS3 Background-image options",
        &[r"(?:^|[{;\s])background-(?:size|origin|clip)\s*:"],
    ),
    RuleDef::new("background-clip-text", "Background-clip: text", &[r"(?:^|[{;\s])(?:-webkit-)?background-clip\s*:\s*text\b"]),
    RuleDef::new("css-crisp-edges", "Crisp edges/pixelated images", &[r"(?:^|[{;\s])image-rendering\s*:"]),
    RuleDef::new("border-image", "CSS3 Border images", &[r"(?:^|[{;\s])border-image(?:-source|-slice|-width|-outset|-repeat)?\s*:"]),
    RuleDef::new("outline", "CSS outline properties", &[r"(?:^|[{;\s])outline-offset\s*:"]),
    RuleDef::new("css-color-adjust", "CSS print-color-adjust", &[r"(?:^|[{;\s])(?:-webkit-)?(?:print-)?color-adjust\s*:"]),
    RuleDef::new("css-color-scheme", "CSS color-scheme property", &[r"(?:^|[{;\s])color-scheme\s*:"]),
    RuleDef::new("css3-cursors", "CSS3 Cursors (original values)", &[r"(?:^|[{;\s])cursor\s*:\s*(?:none|context-menu|cell|vertical-text|alias|copy|no-drop|not-allowed|[a-z]+-resize)\b"]),
    RuleDef::new("css3-cursors-grab", "CSS grab & grabbing cursors", &[r"(?:^|[{;\s])cursor\s*:\s*(?:-webkit-|-moz-)?grab(?:bing)?\b"]),
    RuleDef::new("css3-cursors-newer", "CSS3 Cursors: zoom-in & zoom-out", &[r"(?:^|[{;\s])cursor\s*:\s*(?:-webkit-|-moz-)?zoom-(?:in|out)\b"]),
];
