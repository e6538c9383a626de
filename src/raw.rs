//! Stand-ins for the external collaborators spec.md §6 specifies only the
//! *interface* of (raw HTML tag recognition, raw LaTeX recognition,
//! character-reference decoding). Real, minimal implementations — good
//! enough to make the crate a runnable end-to-end reader — not a full
//! HTML5 tokenizer or TeX engine.

/// Block-level HTML tag names that open a raw HTML block (spec.md §4.D).
const HTML_BLOCK_TAGS: &[&str] = &[
    "div", "table", "p", "ul", "ol", "li", "blockquote", "pre", "script", "style", "h1", "h2",
    "h3", "h4", "h5", "h6", "hr", "form", "fieldset", "iframe", "math", "center", "dl", "dd",
    "dt", "noscript", "section", "article", "header", "footer", "nav",
];

pub fn extract_tag_type(tag: &str) -> Option<&str> {
    let inner = tag.trim_start_matches('<').trim_start_matches('/');
    let end = inner
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(inner.len());
    if end == 0 {
        return None;
    }
    Some(&inner[..end])
}

pub fn any_html_block_tag(tag: &str) -> bool {
    match extract_tag_type(tag) {
        Some(name) => HTML_BLOCK_TAGS.contains(&name.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Recognize one raw HTML block starting at `input`: a line beginning with
/// `<tag` (block-level) or `<!--`, consumed up to (and including) the next
/// blank line. Returns `(raw_text, rest)`.
pub fn raw_html_block(input: &str) -> Option<(&str, &str)> {
    let trimmed = input.trim_start_matches(' ');
    if !trimmed.starts_with('<') {
        return None;
    }
    let is_comment = trimmed.starts_with("<!--");
    if !is_comment {
        let tag_end = trimmed
            .find(|c: char| c.is_whitespace() || c == '>')
            .unwrap_or(trimmed.len());
        if !any_html_block_tag(&trimmed[..tag_end.max(1)]) {
            return None;
        }
    }
    let blank_at = find_blank_line_boundary(input);
    Some((&input[..blank_at], &input[blank_at..]))
}

fn find_blank_line_boundary(input: &str) -> usize {
    let mut offset = 0;
    let mut seen_line = false;
    for line in input.split_inclusive('\n') {
        let content = line.trim_end_matches('\n');
        if seen_line && content.trim().is_empty() {
            return offset;
        }
        seen_line = true;
        offset += line.len();
    }
    offset
}

/// `<tag ...>`-shaped inline HTML, including end tags and self-closing tags.
pub fn any_html_inline_tag(input: &str) -> Option<(&str, &str)> {
    if !input.starts_with('<') {
        return None;
    }
    let end = input.find('>')?;
    let candidate = &input[1..end];
    let body = candidate.trim_start_matches('/');
    let first = body.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '!' || first == '?') {
        return None;
    }
    Some((&input[..=end], &input[end + 1..]))
}

/// `\name` or `\name{...}` (one non-nested brace group) raw LaTeX inline.
pub fn raw_latex_inline(input: &str) -> Option<(&str, &str)> {
    if !input.starts_with('\\') {
        return None;
    }
    let rest = &input[1..];
    let name_end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    if name_end == 0 {
        return None;
    }
    let mut end = 1 + name_end;
    if input[end..].starts_with('{') {
        let mut depth = 0usize;
        for (i, c) in input[end..].char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        end += i + 1;
                        break;
                    }
                }
                _ => {}
            }
        }
    }
    Some((&input[..end], &input[end..]))
}

/// `\begin{name}...\end{name}`, non-nested.
pub fn raw_latex_environment(input: &str) -> Option<(&str, &str)> {
    let after_begin = input.strip_prefix("\\begin{")?;
    let name_end = after_begin.find('}')?;
    let name = &after_begin[..name_end];
    let closer = format!("\\end{{{name}}}");
    let body_start = 7 + name_end + 1; // "\begin{" + name + "}"
    let close_at = input[body_start..].find(&closer)?;
    let end = body_start + close_at + closer.len();
    Some((&input[..end], &input[end..]))
}

/// Decode the small set of named entities plus `&#NN;`/`&#xHH;` numeric
/// references. Unknown named entities pass through unchanged.
pub fn decode_character_references(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'&' {
            if let Some(end) = input[i..].find(';').map(|p| p + i) {
                let entity = &input[i + 1..end];
                if let Some(decoded) = decode_entity(entity) {
                    out.push(decoded);
                    i = end + 1;
                    continue;
                }
            }
        }
        let ch = input[i..].chars().next().unwrap();
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => return Some('&'),
        "lt" => return Some('<'),
        "gt" => return Some('>'),
        "quot" => return Some('"'),
        "apos" | "#39" => return Some('\''),
        "nbsp" => return Some('\u{00A0}'),
        _ => {}
    }
    if let Some(hex) = entity.strip_prefix("#x").or_else(|| entity.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = entity.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_basic_entities() {
        assert_eq!(decode_character_references("a &amp; b"), "a & b");
        assert_eq!(decode_character_references("&#65;&#x42;"), "AB");
        assert_eq!(decode_character_references("&unknown;"), "&unknown;");
    }

    #[test]
    fn latex_inline_with_brace_group() {
        let (matched, rest) = raw_latex_inline("\\foo{bar}baz").unwrap();
        assert_eq!(matched, "\\foo{bar}");
        assert_eq!(rest, "baz");
    }

    #[test]
    fn latex_environment() {
        let (matched, rest) = raw_latex_environment("\\begin{eq}x=1\\end{eq} after").unwrap();
        assert_eq!(matched, "\\begin{eq}x=1\\end{eq}");
        assert_eq!(rest, " after");
    }

    #[test]
    fn html_block_tag_recognition() {
        assert!(any_html_block_tag("<div class=\"x\">"));
        assert!(!any_html_block_tag("<span>"));
    }
}
