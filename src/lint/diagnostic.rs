//! # 诊断流解析
//!
//! lint 工具在错误流上每个发现输出两行：摘要行，然后是位置/详情行。
//! 这里按位置两两配对，不解析行内容。流在摘要行之后结束时，
//! 生成一条没有详情的记录。
//!
//! ## 依赖关系
//! - 被 `lint/supervisor.rs` 使用
//! - 产出 `models::DiagnosticRecord`

use crate::models::DiagnosticRecord;

/// 截断过长的详情行
///
/// 超过 `max_len` 个字符时保留前 `max_len` 个字符并追加 `ellipsis`，
/// 否则原样返回。
pub fn truncate_detail(line: String, max_len: usize, ellipsis: &str) -> String {
    match line.char_indices().nth(max_len) {
        Some((cut, _)) => {
            let mut kept = line;
            kept.truncate(cut);
            kept.push_str(ellipsis);
            kept
        }
        None => line,
    }
}

/// 把错误流中的一行原始字节解码为文本
///
/// 去掉行尾的 `\r`；非 UTF-8 字节按替换字符解码，不视为错误。
pub fn decode_line(mut raw: Vec<u8>) -> String {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    match String::from_utf8(raw) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// 把行序列配对为诊断记录的迭代器
pub struct DiagnosticPairs<'a, I> {
    lines: I,
    max_detail_len: usize,
    ellipsis: &'a str,
}

impl<'a, I> DiagnosticPairs<'a, I> {
    pub fn new(lines: I, max_detail_len: usize, ellipsis: &'a str) -> Self {
        Self {
            lines,
            max_detail_len,
            ellipsis,
        }
    }
}

impl<I, E> Iterator for DiagnosticPairs<'_, I>
where
    I: Iterator<Item = Result<String, E>>,
{
    type Item = Result<DiagnosticRecord, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let primary = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        let detail = match self.lines.next() {
            None => None,
            Some(Ok(line)) => Some(truncate_detail(line, self.max_detail_len, self.ellipsis)),
            Some(Err(e)) => return Some(Err(e)),
        };
        Some(Ok(DiagnosticRecord { primary, detail }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn pairs(lines: &[&str]) -> Vec<DiagnosticRecord> {
        let iter = lines
            .iter()
            .map(|l| Ok::<_, Infallible>(l.to_string()));
        DiagnosticPairs::new(iter, 100, "...")
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn test_empty_stream_has_no_records() {
        assert!(pairs(&[]).is_empty());
    }

    #[test]
    fn test_two_lines_make_one_record() {
        let out = pairs(&["Error: Unexpected token", "  line 4, col 2: foo(}"]);
        assert_eq!(
            out,
            vec![DiagnosticRecord {
                primary: "Error: Unexpected token".into(),
                detail: Some("  line 4, col 2: foo(}".into()),
            }]
        );
    }

    #[test]
    fn test_odd_trailing_line_has_no_detail() {
        let out = pairs(&["first", "first detail", "second"]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].primary, "second");
        assert_eq!(out[1].detail, None);
    }

    #[test]
    fn test_primary_line_is_never_truncated() {
        let long = "x".repeat(250);
        let out = pairs(&[&long, "short"]);
        assert_eq!(out[0].primary, long);
    }

    #[test]
    fn test_truncate_detail_limits() {
        let exact = "a".repeat(100);
        assert_eq!(truncate_detail(exact.clone(), 100, "..."), exact);

        let over = "b".repeat(101);
        assert_eq!(
            truncate_detail(over, 100, "..."),
            format!("{}...", "b".repeat(100))
        );

        assert_eq!(truncate_detail(String::new(), 100, "..."), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let wide = "é".repeat(101);
        let out = truncate_detail(wide, 100, "...");
        assert_eq!(out.chars().count(), 103);
        assert!(out.starts_with(&"é".repeat(100)));
    }

    #[test]
    fn test_decode_line_strips_carriage_return() {
        assert_eq!(decode_line(b"line 3, col 1\r".to_vec()), "line 3, col 1");
        assert_eq!(decode_line(b"plain".to_vec()), "plain");
        assert_eq!(decode_line(Vec::new()), "");
    }

    #[test]
    fn test_decode_line_replaces_invalid_bytes() {
        assert_eq!(decode_line(b"caf\xe9\r".to_vec()), "caf\u{fffd}");
    }

    #[test]
    fn test_stream_error_is_forwarded() {
        let lines = vec![Ok("one".to_string()), Err("broken")];
        let mut iter = DiagnosticPairs::new(lines.into_iter(), 100, "...");
        assert_eq!(iter.next(), Some(Err("broken")));
    }
}
