//! Placeholder scanning for `:name` parameters in query text.
//!
//! The same scan drives append-time binding and render-time substitution, so
//! it lives here as a pure function.

/// A placeholder located in a fragment of query text.
///
/// `start..end` spans the identifier characters just past the colon, so the
/// colon itself sits at `start - 1` and `name` is empty for a bare `:`.
/// Offsets are byte positions into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamPos<'a> {
    pub start: usize,
    pub end: usize,
    pub name: &'a str,
}

/// Find the next `:name` placeholder at or after byte offset `from`.
///
/// Returns `None` when no colon remains (or `from` is out of bounds).
/// Identifier characters are ASCII letters, ASCII digits, and underscore; a
/// colon followed by anything else yields a match with an empty `name`.
pub fn next_param(text: &str, from: usize) -> Option<ParamPos<'_>> {
    let colon = text.get(from..)?.find(':')? + from;
    let start = colon + 1;
    let len = text[start..]
        .find(|c: char| !is_ident_char(c))
        .unwrap_or(text.len() - start);
    let end = start + len;
    Some(ParamPos {
        start,
        end,
        name: &text[start..end],
    })
}

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
