//! Anchor scanner: finds the two insertion points the rewriter needs.
//!
//! Matching is done by hand rather than with a regex engine so the rules are
//! exactly the ones written here:
//!
//! * **Package terminator**: the earliest `package` keyword (not preceded by
//!   an identifier character) followed by one or more whitespace characters, a
//!   dotted identifier, optional whitespace and `;`. The anchor is the byte
//!   offset just past the `;`.
//! * **Class anchor**: the earliest `\n` immediately followed by `public`,
//!   whitespace, an optional `abstract` + whitespace, `class`, whitespace and
//!   a word character. The anchor is the byte offset of that `\n`.
//!
//! All offsets are byte offsets into the `&str` and always land on a char
//! boundary (every keyword and delimiter is ASCII).

const PACKAGE_KEYWORD: &str = "package";

/// Returns the byte offset just past the `;` of the first package statement.
pub fn find_package_terminator(text: &str) -> Option<usize> {
    for (start, _) in text.match_indices(PACKAGE_KEYWORD) {
        if preceded_by_ident(text, start) {
            continue;
        }
        let body = start + PACKAGE_KEYWORD.len();
        if let Some(len) = match_package_body(&text[body..]) {
            return Some(body + len);
        }
    }
    None
}

/// Returns the byte offset of the `\n` preceding the first public class header.
pub fn find_class_anchor(text: &str) -> Option<usize> {
    text.match_indices('\n')
        .map(|(i, _)| i)
        .find(|&i| is_class_header(&text[i + 1..]))
}

/// Matches `\s+ ident(.ident)* \s* ;` at the start of `rest`.
/// Returns the length of the match including the `;`.
fn match_package_body(rest: &str) -> Option<usize> {
    let mut pos = skip_whitespace(rest, 0);
    if pos == 0 {
        return None;
    }

    loop {
        let segment_end = skip_while(rest, pos, is_ident_char);
        if segment_end == pos {
            return None;
        }
        pos = segment_end;
        if rest[pos..].starts_with('.') {
            pos += 1;
        } else {
            break;
        }
    }

    pos = skip_whitespace(rest, pos);
    rest[pos..].starts_with(';').then_some(pos + 1)
}

fn is_class_header(line: &str) -> bool {
    let Some(n) = keyword_then_space(line, "public") else {
        return false;
    };
    let mut rest = &line[n..];
    if let Some(n) = keyword_then_space(rest, "abstract") {
        rest = &rest[n..];
    }
    match keyword_then_space(rest, "class") {
        Some(n) => rest[n..].chars().next().is_some_and(is_word_char),
        None => false,
    }
}

/// If `s` starts with `keyword` followed by at least one whitespace character,
/// returns the offset just past that whitespace run.
fn keyword_then_space(s: &str, keyword: &str) -> Option<usize> {
    let rest = s.strip_prefix(keyword)?;
    let gap = skip_whitespace(rest, 0);
    (gap > 0).then_some(keyword.len() + gap)
}

fn preceded_by_ident(text: &str, at: usize) -> bool {
    text[..at].chars().next_back().is_some_and(is_ident_char)
}

fn skip_whitespace(s: &str, from: usize) -> usize {
    skip_while(s, from, char::is_whitespace)
}

fn skip_while(s: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    s[from..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| from + i)
}

/// Java identifier character.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
