use crate::core::RuleDef;

pub(super) const RULES: &[RuleDef] = &[
    RuleDef::new("arrow-functions", "Arrow functions", &[r"=>"]),
    RuleDef::new("const", "const", &[r"\bconst\s+[\w$\[{]"]),
    RuleDef::new("let", "let", &[r"\blet\s+[\w$\[{]"]),
    RuleDef::new(
        "es6-class",
        "ES6 classes",
        &[r"\bclass\s+[A-Za-z_$][\w$]*(?:\s+extends\s+[\w$.]+)?\s*\{", r"\bclass\s+extends\b"],
    ),
    RuleDef::new("template-literals", "ES6 Template Literals (Template Strings)", &[r"`"]),
    RuleDef::new("rest-parameters", "Rest parameters and spread syntax", &[r"\.\.\.[\w$\[{(]"]),
    RuleDef::new(
        "es6-module",
        "JavaScript modules via script tag",
        &[
            r#"(?m)^\s*import\s+(?:[\w$*{]|["'])"#,
            r"(?m)^\s*export\s+(?:default\b|const\b|let\b|var\b|function\b|class\b|async\b|\{|\*)",
        ],
    ),
    RuleDef::new(
        "es6-module-dynamic-import",
        "JavaScript modules: dynamic import()",
        &[r"\bimport\s*\(\s*[`'\x22\w$]"],
    ),
    RuleDef::new("import-meta", "import.meta", &[r"\bimport\.meta\b"]),
    RuleDef::new(
        "async-functions",
        "Async functions",
        &[r"\basync\s+(?:function\b|\(|[\w$]+\s*=>)", r"\bawait\s+[\w$(\[]"],
    ),
    RuleDef::new("es6-generators", "ES6 Generators", &[r"\bfunction\s*\*", r"\byield\s*\*?\s*[\w$(\[]"]),
    RuleDef::new(
        "async-iterations-and-generators",
        "Async iterators and generators",
        &[r"\bfor\s+await\s*\(", r"\basync\s+function\s*\*", r"Symbol\.asyncIterator\b"],
    ),
    RuleDef::new(
        "es6",
        "ES6 destructuring, default parameters and computed properties",
        &[r"\b(?:const|let|var)\s*[\[{]"],
    ),
    RuleDef::new(
        "mdn-javascript_operators_optional_chaining",
        "Optional chaining (?.)",
        &[r"\?\.[\w$\[(]"],
    ),
    RuleDef::new(
        "mdn-javascript_operators_nullish_coalescing",
        "Nullish coalescing operator (??)",
        &[r"\?\?"],
    ),
    RuleDef::new(
        "mdn-javascript_operators_logical_assignment",
        "Logical assignment operators (&&=, ||=, ??=)",
        &[r"(?:&&|\|\||\?\?)="],
    ),
    RuleDef::new(
        "mdn-javascript_operators_exponentiation",
        "Exponentiation operator (**)",
        &[r"[\w$)\]]\s*\*\*=?\s*[\w$(\[-]"],
    ),
    RuleDef::new("bigint", "BigInt", &[r"\bBigInt\s*\(", r"\b\d+n\b"]),
    RuleDef::new(
        "mdn-javascript_classes_private_class_fields",
        "Private class fields",
        &[r"\bthis\.#[A-Za-z_$]", r"(?m)^\s*(?:static\s+)?#[A-Za-z_$][\w$]*\s*(?:=|;|\()"],
    ),
    RuleDef::new(
        "mdn-javascript_classes_static_initialization_blocks",
        "Class static initialization blocks",
        &[r"\bstatic\s*\{"],
    ),
    RuleDef::new(
        "mdn-javascript_grammar_numeric_separators",
        "Numeric separators",
        &[r"\b\d+(?:_\d+)+\b"],
    ),
    RuleDef::new(
        "mdn-javascript_regular_expressions_named_capturing_group",
        "RegExp named capture groups",
        &[r"\(\?<[A-Za-z_$]"],
    ),
    RuleDef::new("js-regexp-lookbehind", "Lookbehind in JS regular expressions", &[r"\(\?<[=!]"]),
    RuleDef::new("es5", "ECMAScript 5 strict mode", &[r#"["']use strict["']"#]),
];
