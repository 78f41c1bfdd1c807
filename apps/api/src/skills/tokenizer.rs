//! Span-preserving tokenizer for phrase matching.
//!
//! Whitespace separates chunks. Within a chunk, opening punctuation is peeled off
//! the front, closing punctuation and a possessive `'s` off the back, and a few
//! infix separators are split out. Characters that belong to skill names (`+`,
//! `#`, inner `.`) stay attached, so `c++`, `c#` and `node.js` survive intact.

/// A token and its byte span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

fn is_prefix(c: char) -> bool {
    matches!(
        c,
        '(' | '[' | '{' | '<' | '"' | '\'' | '`' | '“' | '‘' | '«' | '*' | '•' | '·' | '▪' | '-'
    )
}

fn is_suffix(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ';' | ':' | '!' | '?' | ')' | ']' | '}' | '>' | '"' | '\'' | '`' | '”' | '’'
            | '»' | '*' | '…'
    )
}

/// `/ : < > =` after an alphanumeric and before a letter; `- ,` between letters.
fn is_infix(prev: char, c: char, next: char) -> bool {
    match c {
        '/' | ':' | '<' | '>' | '=' => prev.is_alphanumeric() && next.is_alphabetic(),
        '-' | '–' | '—' | ',' => prev.is_alphabetic() && next.is_alphabetic(),
        _ => false,
    }
}

pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chunk_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = chunk_start.take() {
                split_chunk(text, s, i, &mut tokens);
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(i);
        }
    }
    if let Some(s) = chunk_start {
        split_chunk(text, s, text.len(), &mut tokens);
    }

    tokens
}

fn push<'a>(text: &'a str, start: usize, end: usize, out: &mut Vec<Token<'a>>) {
    if start < end {
        out.push(Token {
            text: &text[start..end],
            start,
            end,
        });
    }
}

fn split_chunk<'a>(text: &'a str, mut start: usize, mut end: usize, out: &mut Vec<Token<'a>>) {
    // Prefixes, keeping at least one character as the core.
    while let Some(c) = text[start..end].chars().next() {
        if is_prefix(c) && start + c.len_utf8() < end {
            push(text, start, start + c.len_utf8(), out);
            start += c.len_utf8();
        } else {
            break;
        }
    }

    // Suffixes are collected back to front and emitted after the core.
    let mut suffixes = Vec::new();
    loop {
        let core = &text[start..end];
        let possessive = ["'s", "’s"]
            .into_iter()
            .find(|p| core.len() > p.len() && core.ends_with(p));
        if let Some(p) = possessive {
            suffixes.push((end - p.len(), end));
            end -= p.len();
            continue;
        }
        match core.chars().next_back() {
            Some(c) if is_suffix(c) && start + c.len_utf8() < end => {
                suffixes.push((end - c.len_utf8(), end));
                end -= c.len_utf8();
            }
            _ => break,
        }
    }

    split_infixes(text, start, end, out);

    for (s, e) in suffixes.into_iter().rev() {
        push(text, s, e, out);
    }
}

fn split_infixes<'a>(text: &'a str, start: usize, end: usize, out: &mut Vec<Token<'a>>) {
    let core: Vec<(usize, char)> = text[start..end]
        .char_indices()
        .map(|(i, c)| (start + i, c))
        .collect();
    let mut segment_start = start;

    for w in 1..core.len().saturating_sub(1) {
        let (pos, c) = core[w];
        if is_infix(core[w - 1].1, c, core[w + 1].1) {
            push(text, segment_start, pos, out);
            push(text, pos, pos + c.len_utf8(), out);
            segment_start = pos + c.len_utf8();
        }
    }
    push(text, segment_start, end, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_trailing_punctuation_is_split() {
        assert_eq!(texts("python, docker."), vec!["python", ",", "docker", "."]);
    }

    #[test]
    fn test_skill_symbols_stay_attached() {
        assert_eq!(texts("c++ c# .net node.js"), vec!["c++", "c#", ".net", "node.js"]);
        assert_eq!(texts("(react.js)."), vec!["(", "react.js", ")", "."]);
    }

    #[test]
    fn test_infix_separators() {
        assert_eq!(texts("ci/cd"), vec!["ci", "/", "cd"]);
        assert_eq!(texts("scikit-learn"), vec!["scikit", "-", "learn"]);
        assert_eq!(texts("docker/kubernetes"), vec!["docker", "/", "kubernetes"]);
    }

    #[test]
    fn test_possessive_is_split() {
        assert_eq!(texts("python's"), vec!["python", "'s"]);
    }

    #[test]
    fn test_bullets_and_brackets() {
        assert_eq!(texts("•aws [gcp]"), vec!["•", "aws", "[", "gcp", "]"]);
    }

    #[test]
    fn test_spans_index_the_source() {
        let text = "  rust,\tgo ";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_punctuation_only_chunk() {
        assert_eq!(texts("..."), vec![".", ".", "."]);
        assert!(tokenize("   \n ").is_empty());
    }
}
