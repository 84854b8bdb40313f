//! 结构化提取：声明 / @规则 / 选择器
//! 每层递归返回自己的 Extracted，由调用方拼接；块编号计数器显式传递
use cssparser::{ParseError, Parser, ParserInput, ToCss, Token};
use rscompat_engine::utils::{ascii_lower, snippet, strip_vendor_prefix};
use rscompat_engine::CoreError;

/// 一条声明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub selector: String,
    pub block_id: u32,
}

/// 一条@规则（keyword 不含 `@`，已小写）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    pub keyword: String,
    pub prelude: String,
}

/// 一个规则块的选择器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub selector: String,
    pub block_id: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub declarations: Vec<Declaration>,
    pub at_rules: Vec<AtRule>,
    pub selectors: Vec<SelectorEntry>,
}

impl Extracted {
    /// 拼接另一层的提取结果
    pub fn concat(mut self, other: Extracted) -> Self {
        self.declarations.extend(other.declarations);
        self.at_rules.extend(other.at_rules);
        self.selectors.extend(other.selectors);
        self
    }
}

/// 块编号分配器：每个不同的规则块分配一次
#[derive(Debug, Default)]
pub struct BlockIds(u32);

impl BlockIds {
    fn next_id(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

/// 内容按规则列表递归的容器类@规则（去掉厂商前缀后比较）
const CONTAINER_AT_RULES: &[&str] = &[
    "media",
    "supports",
    "keyframes",
    "layer",
    "container",
    "scope",
    "starting-style",
    "document",
];

/// 块 / 括号的最大嵌套层数，超过的块整体跳过
const MAX_NESTING_DEPTH: usize = 128;

type NodeResult<'i, T> = Result<T, ParseError<'i, ()>>;

/// 前导部分的结束方式
enum PreludeEnd {
    Block,
    Semicolon,
    Eof,
}

/// 提取整张样式表
pub fn extract_stylesheet(css: &str) -> Extracted {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut ids = BlockIds::default();
    extract_rule_list(&mut parser, &mut ids, 0)
}

fn log_malformed(parser: &Parser<'_, '_>, reason: impl Into<String>) {
    let err = CoreError::MalformedSource {
        line: parser.current_source_location().line + 1,
        reason: reason.into(),
    };
    log::debug!("{}, node skipped", err);
}

/// 跳过刚打开的块并记录
fn skip_too_deep<'i, 't>(parser: &mut Parser<'i, 't>) {
    log_malformed(parser, format!("nesting deeper than {} levels", MAX_NESTING_DEPTH));
    let _ = parser.parse_nested_block(|nested| skip_block(nested));
}

/// 规则列表：顶层样式表 / 容器类@规则内部
/// depth 为外层块的层数，顶层为 0
fn extract_rule_list<'i, 't>(
    parser: &mut Parser<'i, 't>,
    ids: &mut BlockIds,
    depth: usize,
) -> Extracted {
    let mut out = Extracted::default();
    loop {
        parser.skip_whitespace();
        let state = parser.state();
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::AtKeyword(_) => {
                parser.reset(&state);
                out = out.concat(extract_at_rule(parser, ids, None, depth));
            }
            Token::Semicolon | Token::CDO | Token::CDC => {}
            Token::CloseCurlyBracket | Token::CloseParenthesis | Token::CloseSquareBracket => {
                log_malformed(parser, format!("stray `{}`", token.to_css_string()));
            }
            _ => {
                parser.reset(&state);
                out = out.concat(extract_qualified_rule(parser, ids, depth));
            }
        }
    }
    out
}

/// 样式规则：`selector { ... }`，嵌套规则的选择器按原文保留
fn extract_qualified_rule<'i, 't>(
    parser: &mut Parser<'i, 't>,
    ids: &mut BlockIds,
    depth: usize,
) -> Extracted {
    let (selector, end) = read_prelude(parser, depth);
    match end {
        PreludeEnd::Block => {}
        PreludeEnd::Semicolon | PreludeEnd::Eof => {
            log_malformed(parser, format!("rule without block: {}", snippet(&selector, 60)));
            return Extracted::default();
        }
    }
    if depth >= MAX_NESTING_DEPTH {
        skip_too_deep(parser);
        return Extracted::default();
    }

    if selector.is_empty() {
        log_malformed(parser, "block without selector");
        let _ = parser.parse_nested_block(|nested| skip_block(nested));
        return Extracted::default();
    }
    let block_id = ids.next_id();
    let mut out = Extracted::default();
    out.selectors.push(SelectorEntry {
        selector: selector.clone(),
        block_id,
    });
    let inner = parser
        .parse_nested_block(|nested| {
            NodeResult::Ok(extract_style_block(nested, &selector, block_id, ids, depth + 1))
        })
        .unwrap_or_default();
    out.concat(inner)
}

/// @规则；parent 为所在样式规则的选择器（嵌套条件规则时）
fn extract_at_rule<'i, 't>(
    parser: &mut Parser<'i, 't>,
    ids: &mut BlockIds,
    parent: Option<&str>,
    depth: usize,
) -> Extracted {
    let keyword = match parser.next_including_whitespace() {
        Ok(Token::AtKeyword(name)) => ascii_lower(name).into_owned(),
        _ => return Extracted::default(),
    };
    let (prelude, end) = read_prelude(parser, depth);

    let mut out = Extracted::default();
    out.at_rules.push(AtRule {
        keyword: keyword.clone(),
        prelude,
    });

    match end {
        PreludeEnd::Block => {}
        PreludeEnd::Semicolon | PreludeEnd::Eof => return out,
    }
    if depth >= MAX_NESTING_DEPTH {
        skip_too_deep(parser);
        return out;
    }

    let base = strip_vendor_prefix(&keyword);
    let inner = if CONTAINER_AT_RULES.contains(&base) {
        match parent {
            // 样式规则内的条件规则：内容是父选择器的声明
            Some(selector) if base != "keyframes" => {
                let block_id = ids.next_id();
                let selector = selector.to_string();
                parser
                    .parse_nested_block(|nested| {
                        NodeResult::Ok(extract_style_block(nested, &selector, block_id, ids, depth + 1))
                    })
                    .unwrap_or_default()
            }
            _ => parser
                .parse_nested_block(|nested| NodeResult::Ok(extract_rule_list(nested, ids, depth + 1)))
                .unwrap_or_default(),
        }
    } else {
        // 描述符类@规则（@font-face、@page、@property 等）：平铺到伪选择器 `@keyword`
        let selector = format!("@{}", keyword);
        let block_id = ids.next_id();
        parser
            .parse_nested_block(|nested| {
                NodeResult::Ok(extract_style_block(nested, &selector, block_id, ids, depth + 1))
            })
            .unwrap_or_default()
    };
    out.concat(inner)
}

/// 规则块内容：声明 / 嵌套@规则 / 嵌套样式规则
fn extract_style_block<'i, 't>(
    parser: &mut Parser<'i, 't>,
    selector: &str,
    block_id: u32,
    ids: &mut BlockIds,
    depth: usize,
) -> Extracted {
    let mut out = Extracted::default();
    loop {
        parser.skip_whitespace();
        let state = parser.state();
        match parser.next() {
            Ok(Token::Semicolon) => continue,
            Ok(Token::AtKeyword(_)) => {
                parser.reset(&state);
                out = out.concat(extract_at_rule(parser, ids, Some(selector), depth));
                continue;
            }
            Ok(_) => parser.reset(&state),
            Err(_) => break,
        }

        match parser.try_parse(|p| parse_declaration(p, depth)) {
            Ok(Some((property, value))) => {
                out.declarations.push(Declaration {
                    property,
                    value,
                    selector: selector.to_string(),
                    block_id,
                });
                continue;
            }
            Ok(None) => {
                log_malformed(parser, format!("invalid declaration in `{}`", snippet(selector, 60)));
                continue;
            }
            Err(_) => {}
        }

        out = out.concat(extract_qualified_rule(parser, ids, depth));
    }
    out
}

/// 解析一条声明
/// Ok(None)：无效声明，已消费到 `;`
/// Err：不是声明（嵌套规则），调用方回退
fn parse_declaration<'i, 't>(
    parser: &mut Parser<'i, 't>,
    depth: usize,
) -> NodeResult<'i, Option<(String, String)>> {
    let name = parser.expect_ident()?.clone();
    let is_custom_property = name.starts_with("--");
    let property = if is_custom_property {
        name.to_string()
    } else {
        ascii_lower(&name).into_owned()
    };

    if parser.expect_colon().is_err() {
        // 区分无效声明（`color red;`）与嵌套规则（`a b { ... }`）
        loop {
            match parser.next() {
                Ok(Token::Semicolon) | Err(_) => return Ok(None),
                Ok(Token::CurlyBracketBlock) => return Err(parser.new_custom_error(())),
                Ok(_) => {}
            }
        }
    }

    let mut value = String::new();
    let mut important = false;
    loop {
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::Semicolon => break,
            Token::WhiteSpace(_) => push_space(&mut value),
            Token::Delim('!')
                if parser
                    .try_parse(|p| {
                        p.skip_whitespace();
                        p.expect_ident_matching("important")
                    })
                    .is_ok() =>
            {
                important = true;
            }
            // 带冒号的嵌套规则，如 `a:hover { }`
            Token::CurlyBracketBlock if !is_custom_property => {
                return Err(parser.new_custom_error(()));
            }
            Token::CurlyBracketBlock => {
                let _ = parser.parse_nested_block(|nested| skip_block(nested));
            }
            other => {
                // `!important` 只能出现在末尾，其后仍有内容则视为值的一部分
                if important {
                    push_space(&mut value);
                    value.push_str("!important ");
                    important = false;
                }
                write_token(parser, &other, &mut value, depth);
            }
        }
    }

    let value = value.trim().to_string();
    if value.is_empty() && !is_custom_property {
        return Ok(None);
    }
    Ok(Some((property, value)))
}

/// 读取前导部分（选择器或@规则 prelude），在 `{` / `;` / 输入结束处停止
/// 遇到 `{` 时块内容尚未消费，调用方紧接着 parse_nested_block
fn read_prelude<'i, 't>(parser: &mut Parser<'i, 't>, depth: usize) -> (String, PreludeEnd) {
    let mut text = String::new();
    let end = loop {
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break PreludeEnd::Eof,
        };
        match token {
            Token::CurlyBracketBlock => break PreludeEnd::Block,
            Token::Semicolon => break PreludeEnd::Semicolon,
            Token::WhiteSpace(_) => push_space(&mut text),
            other => write_token(parser, &other, &mut text, depth),
        }
    };
    (text.trim().to_string(), end)
}

/// 序列化一个 token；函数 / 括号块递归写出内容与闭合符
fn write_token<'i, 't>(parser: &mut Parser<'i, 't>, token: &Token<'i>, out: &mut String, depth: usize) {
    let closing = match token {
        Token::Function(_) | Token::ParenthesisBlock => Some(')'),
        Token::SquareBracketBlock => Some(']'),
        // 值中的花括号块不参与匹配
        Token::CurlyBracketBlock => {
            let _ = parser.parse_nested_block(|nested| skip_block(nested));
            return;
        }
        _ => None,
    };

    let _ = token.to_css(out);
    if let Some(close) = closing {
        if depth >= MAX_NESTING_DEPTH {
            skip_too_deep(parser);
        } else {
            let _ = parser.parse_nested_block(|nested| {
                write_component_values(nested, out, depth + 1);
                NodeResult::Ok(())
            });
        }
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
        out.push(close);
    }
}

fn write_component_values<'i, 't>(parser: &mut Parser<'i, 't>, out: &mut String, depth: usize) {
    loop {
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::WhiteSpace(_) => push_space(out),
            other => write_token(parser, &other, out, depth),
        }
    }
}

fn skip_block<'i, 't>(parser: &mut Parser<'i, 't>) -> NodeResult<'i, ()> {
    while parser.next_including_whitespace().is_ok() {}
    Ok(())
}

#[inline]
fn push_space(out: &mut String) {
    if !out.is_empty() && !out.ends_with(' ') && !out.ends_with('(') && !out.ends_with('[') {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decls(e: &Extracted) -> Vec<(&str, &str, &str, u32)> {
        e.declarations
            .iter()
            .map(|d| (d.selector.as_str(), d.property.as_str(), d.value.as_str(), d.block_id))
            .collect()
    }

    #[test]
    fn blocks_get_distinct_ids() {
        let e = extract_stylesheet(".x{display:flex} .x{gap:10px}");
        assert_eq!(
            decls(&e),
            vec![(".x", "display", "flex", 1), (".x", "gap", "10px", 2)]
        );
        assert_eq!(e.selectors.len(), 2);
    }

    #[test]
    fn comments_and_case_are_normalized() {
        let e = extract_stylesheet("A > B { /* c */ COLOR : Red ; background: rgba( 0, 0, 0, .5 ) }");
        assert_eq!(e.selectors[0].selector, "A > B");
        assert_eq!(e.declarations[0].property, "color");
        assert_eq!(e.declarations[0].value, "Red");
        assert_eq!(e.declarations[1].value, "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn important_is_stripped() {
        let e = extract_stylesheet("a { color: red !important; }");
        assert_eq!(e.declarations[0].value, "red");
    }

    #[test]
    fn containers_recurse() {
        let css = "@media screen { @supports (display: grid) { @layer base { .g { display: grid } } } }";
        let e = extract_stylesheet(css);
        let keywords: Vec<_> = e.at_rules.iter().map(|a| a.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["media", "supports", "layer"]);
        assert_eq!(e.at_rules[1].prelude, "(display: grid)");
        assert_eq!(decls(&e), vec![(".g", "display", "grid", 1)]);
    }

    #[test]
    fn font_face_is_flattened() {
        let e = extract_stylesheet("@font-face { font-family: X; src: url(x.woff2) format(\"woff2\"); }");
        assert_eq!(e.at_rules[0].keyword, "font-face");
        assert!(e.declarations.iter().all(|d| d.selector == "@font-face"));
        assert_eq!(e.declarations.len(), 2);
    }

    #[test]
    fn keyframes_and_vendor_prefixed_containers() {
        let e = extract_stylesheet("@-webkit-keyframes spin { from { opacity: 0 } 50% { opacity: 1 } }");
        assert_eq!(e.at_rules[0].keyword, "-webkit-keyframes");
        assert_eq!(e.at_rules[0].prelude, "spin");
        let selectors: Vec<_> = e.selectors.iter().map(|s| s.selector.as_str()).collect();
        assert_eq!(selectors, vec!["from", "50%"]);
    }

    #[test]
    fn nested_rules_get_own_blocks() {
        let css = ".card { color: red; &:hover { color: blue } .title { font-weight: bold } @media (min-width: 10px) { padding: 0 } }";
        let e = extract_stylesheet(css);
        assert_eq!(
            decls(&e),
            vec![
                (".card", "color", "red", 1),
                ("&:hover", "color", "blue", 2),
                (".title", "font-weight", "bold", 3),
                (".card", "padding", "0", 4),
            ]
        );
        assert_eq!(e.at_rules[0].keyword, "media");
    }

    #[test]
    fn malformed_nodes_are_skipped() {
        let e = extract_stylesheet("} .a { color red; display: block } @import url(x.css); .b { gap: 1px");
        assert_eq!(
            decls(&e),
            vec![(".a", "display", "block", 1), (".b", "gap", "1px", 2)]
        );
        assert_eq!(e.at_rules[0].keyword, "import");
    }

    #[test]
    fn selectors_without_declarations_are_kept() {
        let e = extract_stylesheet("li:nth-child(2n of .x) {}");
        assert_eq!(e.selectors[0].selector, "li:nth-child(2n of .x)");
        assert!(e.declarations.is_empty());
    }

    #[test]
    fn deep_nesting_stops_at_limit() {
        let css = "@media screen{".repeat(5000) + &"}".repeat(5000) + " .after { color: red }";
        let e = extract_stylesheet(&css);
        assert_eq!(e.at_rules.len(), MAX_NESTING_DEPTH + 1);
        assert_eq!(decls(&e), vec![(".after", "color", "red", 1)]);

        let css = ".a{".repeat(5000) + &"}".repeat(5000);
        let e = extract_stylesheet(&css);
        assert_eq!(e.selectors.len(), MAX_NESTING_DEPTH);

        let css = "a { b: ".to_string() + &"(".repeat(5000) + &")".repeat(5000) + "; c: d }";
        let e = extract_stylesheet(&css);
        assert_eq!(e.declarations.len(), 2);
        assert_eq!(e.declarations[1].property, "c");

        let css = "x:is(".repeat(5000) + "y" + &")".repeat(5000) + " { color: red }";
        let e = extract_stylesheet(&css);
        assert_eq!(e.declarations.len(), 1);
    }

    #[test]
    fn custom_properties_keep_case() {
        let e = extract_stylesheet(":root { --Main-Color: #fff; }");
        assert_eq!(e.declarations[0].property, "--Main-Color");
        assert_eq!(e.declarations[0].value, "#fff");
    }
}
