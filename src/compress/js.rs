//! # JavaScript 压缩
//!
//! JSMin 算法：删除注释与多余空白，保留字符串、模板字符串和正则字面量。
//! 不重命名标识符。
//!
//! ## 依赖关系
//! - 被 `commands/minify.rs` 使用
//! - 无外部 crate 依赖

use super::CompressError;

/// 输入结束标记（原始输入中的 `\0` 会先被映射为空格）
const EOF: char = '\0';

/// 压缩 JavaScript 文本
pub fn compress(source: &str) -> Result<String, CompressError> {
    JsMin::new(source).run()
}

fn is_alphanum(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '\\' || c > '~'
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// 可以出现在正则字面量之前的字符
fn precedes_regex(c: char) -> bool {
    matches!(
        c,
        '(' | ',' | '=' | ':' | '[' | '!' | '&' | '|' | '?' | '+' | '-' | '~' | '*' | '/' | '{' | '}' | ';'
    )
}

/// 三种输出动作
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Action {
    /// 输出 A，把 B 复制到 A，读取下一个 B
    Output,
    /// 把 B 复制到 A，读取下一个 B
    Copy,
    /// 读取下一个 B
    Skip,
}

struct JsMin<'a> {
    input: std::str::Chars<'a>,
    out: String,
    a: char,
    b: char,
    lookahead: char,
    x: char,
    y: char,
}

impl<'a> JsMin<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            input: source.chars(),
            out: String::with_capacity(source.len()),
            a: EOF,
            b: EOF,
            lookahead: EOF,
            x: EOF,
            y: EOF,
        }
    }

    /// 读取下一个字符；控制字符映射为空格，`\r` 映射为 `\n`
    fn get(&mut self) -> char {
        let c = if self.lookahead != EOF {
            std::mem::replace(&mut self.lookahead, EOF)
        } else {
            match self.input.next() {
                Some(c) => c,
                None => return EOF,
            }
        };
        if c >= ' ' || c == '\n' {
            c
        } else if c == '\r' {
            '\n'
        } else {
            ' '
        }
    }

    fn peek(&mut self) -> char {
        self.lookahead = self.get();
        self.lookahead
    }

    /// 读取下一个字符，跳过注释
    fn next(&mut self) -> Result<char, CompressError> {
        let mut c = self.get();
        if c == '/' {
            match self.peek() {
                '/' => loop {
                    c = self.get();
                    if c <= '\n' {
                        break;
                    }
                },
                '*' => {
                    self.get();
                    while c != ' ' {
                        match self.get() {
                            '*' => {
                                if self.peek() == '/' {
                                    self.get();
                                    c = ' ';
                                }
                            }
                            EOF => return Err(CompressError::UnterminatedComment),
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }
        self.y = self.x;
        self.x = c;
        Ok(c)
    }

    fn action(&mut self, action: Action) -> Result<(), CompressError> {
        if action <= Action::Output {
            self.out.push(self.a);
            if (self.y == '\n' || self.y == ' ') && is_operator(self.a) && is_operator(self.b) {
                self.out.push(self.y);
            }
        }
        if action <= Action::Copy {
            self.a = self.b;
            if matches!(self.a, '\'' | '"' | '`') {
                self.copy_string()?;
            }
        }
        self.b = self.next()?;
        if self.b == '/' && precedes_regex(self.a) {
            self.copy_regex()?;
            self.b = self.next()?;
        }
        Ok(())
    }

    /// A 为引号：原样输出直到匹配的结束引号（结束引号留在 A 中）
    fn copy_string(&mut self) -> Result<(), CompressError> {
        loop {
            self.out.push(self.a);
            self.a = self.get();
            if self.a == self.b {
                return Ok(());
            }
            if self.a == '\\' {
                self.out.push(self.a);
                self.a = self.get();
            }
            if self.a == EOF {
                return Err(CompressError::UnterminatedString);
            }
        }
    }

    /// B 为正则起始 `/`：原样输出正则体（结束 `/` 留在 A 中）
    fn copy_regex(&mut self) -> Result<(), CompressError> {
        self.out.push(self.a);
        if self.a == '/' || self.a == '*' {
            self.out.push(' ');
        }
        self.out.push(self.b);
        loop {
            self.a = self.get();
            if self.a == '[' {
                loop {
                    self.out.push(self.a);
                    self.a = self.get();
                    if self.a == ']' {
                        break;
                    }
                    if self.a == '\\' {
                        self.out.push(self.a);
                        self.a = self.get();
                    }
                    if self.a == EOF {
                        return Err(CompressError::UnterminatedRegexSet);
                    }
                }
            } else if self.a == '/' {
                if matches!(self.peek(), '/' | '*') {
                    return Err(CompressError::UnterminatedRegexSet);
                }
                return Ok(());
            } else if self.a == '\\' {
                self.out.push(self.a);
                self.a = self.get();
            }
            if self.a == EOF {
                return Err(CompressError::UnterminatedRegex);
            }
            self.out.push(self.a);
        }
    }

    fn run(mut self) -> Result<String, CompressError> {
        if self.peek() == '\u{feff}' {
            self.get();
        }
        self.a = '\n';
        self.action(Action::Skip)?;
        while self.a != EOF {
            let next = match (self.a, self.b) {
                (' ', b) => {
                    if is_alphanum(b) {
                        Action::Output
                    } else {
                        Action::Copy
                    }
                }
                ('\n', '{' | '[' | '(' | '+' | '-' | '!' | '~') => Action::Output,
                ('\n', ' ') => Action::Skip,
                ('\n', b) => {
                    if is_alphanum(b) {
                        Action::Output
                    } else {
                        Action::Copy
                    }
                }
                (a, ' ') => {
                    if is_alphanum(a) {
                        Action::Output
                    } else {
                        Action::Skip
                    }
                }
                ('}' | ']' | ')' | '+' | '-' | '"' | '\'' | '`', '\n') => Action::Output,
                (a, '\n') => {
                    if is_alphanum(a) {
                        Action::Output
                    } else {
                        Action::Skip
                    }
                }
                _ => Action::Output,
            };
            self.action(next)?;
        }
        Ok(self.out.trim_start_matches('\n').to_string())
    }
}
