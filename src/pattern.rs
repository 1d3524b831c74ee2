//! Regex compilation helpers: sticky anchoring and literal quoting.
//!
//! The `regex` crate has no sticky flag, so token patterns are compiled as
//! `\A(?:pat)` and matched against the source sliced at the current offset,
//! an equivalent strategy. Literal strings are quoted before compilation so
//! metacharacters match themselves.

use regex::Regex;

/// Wrap `pattern` so it can only match at the start of a slice.
pub(crate) fn anchored(pattern: &str) -> String {
    format!(r"\A(?:{pattern})")
}

/// Quote regex metacharacters so `text` matches verbatim.
pub(crate) fn quote(text: &str) -> String {
    regex::escape(text)
}

/// Compile a start-anchored token pattern. Grammar construction is startup
/// code; an invalid pattern is a programming error and panics with the
/// offending pattern.
pub(crate) fn compile_anchored(pattern: &str) -> Regex {
    match Regex::new(&anchored(pattern)) {
        Ok(re) => re,
        Err(err) => panic!("invalid token pattern {pattern:?}: {err}"),
    }
}

/// Compile `pattern` so it must match a whole string, for lexeme-text
/// filters.
pub(crate) fn compile_full(pattern: &str) -> Regex {
    let full = format!(r"\A(?:{pattern})\z");
    match Regex::new(&full) {
        Ok(re) => re,
        Err(err) => panic!("invalid filter pattern {pattern:?}: {err}"),
    }
}
