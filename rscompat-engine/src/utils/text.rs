use std::borrow::Cow;
use std::fmt::{self, Write};

/// ASCII 小写化；已是小写时不分配
#[inline]
pub fn ascii_lower(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(s.to_ascii_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

/// 去掉 `-webkit-` / `-moz-` / `-ms-` / `-o-` 前缀
pub fn strip_vendor_prefix(name: &str) -> &str {
    for prefix in ["-webkit-", "-moz-", "-ms-", "-o-"] {
        if let Some(rest) = name.strip_prefix(prefix) {
            if !rest.is_empty() {
                return rest;
            }
        }
    }
    name
}

/// 日志用源码片段：空白折叠 + 截断，不分配
pub fn snippet(s: &str, max_chars: usize) -> impl fmt::Display + '_ {
    struct Snippet<'a> {
        source: &'a str,
        max_chars: usize,
    }

    impl fmt::Display for Snippet<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut written = 0;
            let mut in_space = false;
            for ch in self.source.trim().chars() {
                if written == self.max_chars {
                    return f.write_char('…');
                }
                if ch.is_whitespace() {
                    if in_space {
                        continue;
                    }
                    in_space = true;
                    f.write_char(' ')?;
                } else {
                    in_space = false;
                    f.write_char(ch)?;
                }
                written += 1;
            }
            Ok(())
        }
    }

    Snippet {
        source: s,
        max_chars,
    }
}
