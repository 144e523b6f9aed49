//! Title normalization for loose matching.

/// ASCII punctuation and symbols removed from titles.
const STRIPPED_ASCII: &str = "\\'!\"#$%&()*+,-./:;<=>?@[]^_`{|}~";

/// True for characters dropped from the loose form: the General
/// Punctuation and Supplemental Punctuation blocks plus ASCII symbols.
fn is_stripped(c: char) -> bool {
    matches!(c, '\u{2000}'..='\u{206F}' | '\u{2E00}'..='\u{2E7F}') || STRIPPED_ASCII.contains(c)
}

/// NEL (U+0085) is not a separator; the byte-order mark is.
fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Produce the loose form of a title.
///
/// Strips punctuation, collapses each whitespace run to a single space and
/// upper-cases the result. Leading and trailing runs become one boundary
/// space rather than being trimmed.
pub fn normalize(title: &str) -> String {
    let mut collapsed = String::with_capacity(title.len());
    let mut in_space = false;

    for c in title.chars().filter(|c| !is_stripped(*c)) {
        if is_space(c) {
            if !in_space {
                collapsed.push(' ');
                in_space = true;
            }
        } else {
            collapsed.push(c);
            in_space = false;
        }
    }

    collapsed.to_uppercase()
}
