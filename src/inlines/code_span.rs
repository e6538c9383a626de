//! Inline code spans (spec.md §4.E "Inline code"). Opener is a run of N
//! backticks; the matching closer is a run of exactly N. Interior newlines
//! are normalized to a single space; the final string is trimmed.

use crate::ast::Inline;

fn backtick_run(input: &str) -> usize {
    input.chars().take_while(|&c| c == '`').count()
}

pub fn code_span(input: &str) -> Option<(Inline, &str)> {
    let n = backtick_run(input);
    if n == 0 {
        return None;
    }
    let body_start = &input[n..];
    let mut idx = 0usize;
    let bytes = body_start.as_bytes();
    while idx < bytes.len() {
        if bytes[idx] == b'`' {
            let run_start = idx;
            let run_len = body_start[idx..].chars().take_while(|&c| c == '`').count();
            if run_len == n {
                let raw = &body_start[..run_start];
                let normalized: String = raw
                    .chars()
                    .map(|c| if c == '\n' { ' ' } else { c })
                    .collect();
                let trimmed = normalized.trim().to_string();
                return Some((Inline::Code(trimmed), &body_start[run_start + run_len..]));
            }
            idx = run_start + run_len;
        } else {
            idx += body_start[idx..].chars().next().unwrap().len_utf8();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_backtick_span() {
        let (inline, rest) = code_span("`code`after").unwrap();
        assert_eq!(inline, Inline::Code("code".to_string()));
        assert_eq!(rest, "after");
    }

    #[test]
    fn double_backtick_allows_single_inside() {
        let (inline, rest) = code_span("``a ` b``x").unwrap();
        assert_eq!(inline, Inline::Code("a ` b".to_string()));
        assert_eq!(rest, "x");
    }

    #[test]
    fn unterminated_span_fails() {
        assert!(code_span("`no closer").is_none());
    }
}
