use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("queryselector", "querySelector/querySelectorAll", &[r"\.querySelector(?:All)?\s*\("]),
    RuleDef::new("classlist", "DOMTokenList / classList", &[r"\.classList\b"]),
    RuleDef::new("dataset", "dataset & data-* attributes", &[r"\.dataset\b"]),
    RuleDef::new("element-closest", "Element.closest()", &[r"\.closest\s*\("]),
    RuleDef::new("matchesselector", "matches() DOM method", &[r"\.(?:matches|webkitMatchesSelector|msMatchesSelector)\s*\("]),
    RuleDef::new(
        "dom-manip-convenience",
        "DOM manipulation convenience methods",
        &[r"\.(?:append|prepend|before|after|replaceWith|replaceChildren)\s*\("],
    ),
    RuleDef::new("customevent", "CustomEvent", &[r"\bnew\s+CustomEvent\s*\("]),
    RuleDef::new(
        "passive-event-listener",
        "Passive event listeners",
        &[r"\baddEventListener\s*\([^)]*\bpassive\s*:"],
    ),
    RuleDef::new(
        "once-event-listener",
        "\"once\" event listener option",
        &[r"\baddEventListener\s*\([^)]*\bonce\s*:"],
    ),
    RuleDef::new("mutationobserver", "Mutation Observer", &[r"\bnew\s+(?:WebKit)?MutationObserver\s*\("]),
    RuleDef::new("intersectionobserver", "IntersectionObserver", &[r"\bnew\s+IntersectionObserver\s*\("]),
    RuleDef::new("resizeobserver", "Resize Observer", &[r"\bnew\s+ResizeObserver\s*\("]),
    RuleDef::new("custom-elementsv1", "Custom Elements (V1)", &[r"\bcustomElements\.(?:define|get|whenDefined)\s*\("]),
    RuleDef::new("shadowdomv1", "Shadow DOM (V1)", &[r"\.attachShadow\s*\("]),
    RuleDef::new("web-animation", "Web Animations API", &[r"\.animate\s*\(\s*[\[{]", r"\bnew\s+(?:Animation|KeyframeEffect)\s*\("]),
    RuleDef::new("pagevisibility", "Page Visibility", &[r"\bdocument\.(?:hidden|visibilityState)\b", r"\bvisibilitychange\b"]),
    RuleDef::new("fullscreen", "Full Screen API", &[r"\.requestFullscreen\s*\(", r"\bdocument\.exitFullscreen\s*\("]),
    RuleDef::new("pointer", "Pointer events", &[r"\bpointer(?:down|up|move|enter|leave|over|out|cancel)\b", r"\bPointerEvent\b"]),
    RuleDef::new("touch", "Touch events", &[r"\btouch(?:start|end|move|cancel)\b", r"\bTouchEvent\b"]),
    RuleDef::new("keyboardevent-key", "KeyboardEvent.key", &[r"\b(?:e|ev|evt|event)\.key\b"]),
    RuleDef::new("dialog", "Dialog element", &[r"\.showModal\s*\("]),
    RuleDef::new("mdn-api_htmlelement_popover", "Popover API", &[r"\.(?:showPopover|hidePopover|togglePopover)\s*\("]),
    RuleDef::new("view-transitions", "View Transitions API (single-document)", &[r"\bdocument\.startViewTransition\s*\("]),
    RuleDef::new("selection-api", "Selection API", &[r"\bgetSelection\s*\("]),
    RuleDef::new("css-supports-api", "CSS.supports() API", &[r"\bCSS\.supports\s*\("]),
    RuleDef::new("css-paint-api", "CSS Painting API", &[r"\bCSS\.paintWorklet\b", r"\bregisterPaint\s*\("]),
    RuleDef::new("mdn-api_css_registerproperty", "CSS.registerProperty()", &[r"\bCSS\.registerProperty\s*\("]),
    RuleDef::new("matchmedia", "matchMedia", &[r"\bmatchMedia\s*\("]),
    RuleDef::new("history", "Session history management", &[r"\bhistory\.(?:pushState|replaceState)\s*\("]),
    RuleDef::new("mdn-api_navigation", "Navigation API", &[r"\bnavigation\.(?:navigate|addEventListener)\s*\("]),
    RuleDef::new("mdn-api_element_scrollintoview", "scrollIntoView", &[r"\.scrollIntoView\s*\("]),
];
