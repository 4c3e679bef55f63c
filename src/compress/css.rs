//! # CSS 压缩
//!
//! 基于正则的逐步压缩，输出按固定列宽在 `}` 之后换行。
//!
//! ## 流程
//! 1. 移除注释（保留 `/*! ... */`），字符串字面量替换为占位符
//! 2. 折叠空白，去掉 `{ } ; , >` 两侧空白
//! 3. 声明块内去掉 `:` 两侧空白，去掉末尾多余的 `;`
//! 4. 删除空规则，缩短零值与前导零
//! 5. 还原占位符，按列宽换行
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 使用
//! - 使用 `regex` crate

use regex::{Captures, Regex};

const PLACEHOLDER_PREFIX: &str = "___ASSETPIPE_PRESERVED_";

/// CSS 压缩器（正则只编译一次，整批复用）
pub struct CssCompressor {
    line_break: Option<usize>,
    tokens: Regex,
    whitespace: Regex,
    around_punct: Regex,
    declarations: Regex,
    colon: Regex,
    paren_open: Regex,
    paren_close: Regex,
    repeated_semi: Regex,
    trailing_semi: Regex,
    empty_rule: Regex,
    zero_units: Regex,
    leading_zero: Regex,
    placeholder: Regex,
}

impl CssCompressor {
    /// `line_break` 为换行列宽；`None` 时输出单行
    pub fn new(line_break: Option<usize>) -> Self {
        let re = |pattern: &str| Regex::new(pattern).expect("built-in CSS pattern is valid");
        Self {
            line_break,
            tokens: re(r#"/\*[\s\S]*?\*/|/\*[\s\S]*$|"(?:[^"\\\n]|\\[\s\S])*"|'(?:[^'\\\n]|\\[\s\S])*'"#),
            whitespace: re(r"\s+"),
            around_punct: re(r"\s*([{};,>])\s*"),
            declarations: re(r"\{([^{}]*)\}"),
            colon: re(r"\s*:\s*"),
            paren_open: re(r"\(\s+"),
            paren_close: re(r"\s+\)"),
            repeated_semi: re(r";{2,}"),
            trailing_semi: re(r";\}"),
            empty_rule: re(r"(^|[{};])[^{};/]+\{\}"),
            zero_units: re(r"(?i)([\s:,(])0(?:px|em|ex|cm|mm|in|pt|pc)\b"),
            leading_zero: re(r"([\s:,(])0+\.(\d)"),
            placeholder: re(&format!(r"{PLACEHOLDER_PREFIX}(\d+)___")),
        }
    }

    /// 压缩 CSS 文本
    pub fn compress(&self, css: &str) -> String {
        let mut preserved: Vec<String> = Vec::new();

        let text = self.tokens.replace_all(css, |caps: &Captures| {
            let token = &caps[0];
            if token.starts_with("/*") && !(token.starts_with("/*!") && token.ends_with("*/")) {
                return String::new();
            }
            preserved.push(token.to_string());
            format!("{PLACEHOLDER_PREFIX}{}___", preserved.len() - 1)
        });

        let text = self.whitespace.replace_all(&text, " ");
        let text = self.around_punct.replace_all(&text, "$1");
        let text = self.declarations.replace_all(&text, |caps: &Captures| {
            format!("{{{}}}", self.colon.replace_all(&caps[1], ":"))
        });
        let text = self.paren_open.replace_all(&text, "(");
        let text = self.paren_close.replace_all(&text, ")");
        let text = self.repeated_semi.replace_all(&text, ";");
        let text = self.trailing_semi.replace_all(&text, "}");
        let text = self.empty_rule.replace_all(&text, "$1");
        let text = self.zero_units.replace_all(&text, "${1}0");
        let text = self.leading_zero.replace_all(&text, "${1}.${2}");

        let text = self.placeholder.replace_all(&text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| preserved.get(i).cloned())
                .unwrap_or_else(|| caps[0].to_string())
        });

        let text = text.trim();
        match self.line_break {
            Some(column) => break_lines(text, column),
            None => text.to_string(),
        }
    }
}

/// 当前行长度超过 `column` 时，在 `}` 之后插入换行
fn break_lines(css: &str, column: usize) -> String {
    let mut out = String::with_capacity(css.len() + css.len() / column.max(1) + 1);
    let mut line_len = 0usize;
    for c in css.chars() {
        out.push(c);
        line_len += 1;
        if c == '}' && line_len > column {
            out.push('\n');
            line_len = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compress(css: &str) -> String {
        CssCompressor::new(Some(80)).compress(css)
    }

    #[test]
    fn test_basic_rule() {
        let css = "body {\n  color : red ;\n  margin: 0px;\n}\n";
        assert_eq!(compress(css), "body{color:red;margin:0}");
    }

    #[test]
    fn test_comments_removed_bang_comments_kept() {
        let css = "/* header */\nbody { margin: 0 }\n/*! (c) 2010 */\na { b: c }";
        let out = compress(css);
        assert!(!out.contains("header"));
        assert!(out.contains("/*! (c) 2010 */"));
        assert!(out.starts_with("body{margin:0}"));
    }

    #[test]
    fn test_strings_preserved() {
        let css = "a:after { content: \"  a  ,  b ; } \"; }";
        assert_eq!(compress(css), "a:after{content:\"  a  ,  b ; } \"}");
    }

    #[test]
    fn test_selector_spacing_kept() {
        let css = "ul li , ol > li { padding : 0.5em 10px }";
        assert_eq!(compress(css), "ul li,ol>li{padding:.5em 10px}");
    }

    #[test]
    fn test_empty_rules_removed() {
        let css = "a { } b { color: blue; }";
        assert_eq!(compress(css), "b{color:blue}");
    }

    #[test]
    fn test_media_query_declarations() {
        let css = "@media screen { .x { width : 0em ; } }";
        assert_eq!(compress(css), "@media screen{.x{width:0}}");
    }

    #[test]
    fn test_line_break_after_column() {
        let css = "a { color: red; }\n".repeat(10);
        let out = compress(&css);
        let rule = "a{color:red}";
        assert_eq!(out, format!("{}\n{}", rule.repeat(7), rule.repeat(3)));
        assert!(out.lines().all(|l| l.len() <= 80 + rule.len()));
    }

    #[test]
    fn test_no_line_break_when_disabled() {
        let css = "a { color: red; }\n".repeat(10);
        let out = CssCompressor::new(None).compress(&css);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn test_unterminated_comment_dropped() {
        assert_eq!(compress("a { b: c } /* never closed"), "a{b:c}");
    }
}
