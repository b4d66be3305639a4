//! Fixed lexical constants. Luna's lexer has no runtime configuration — the
//! marker delimiters, the metadata header, and the keyword set below are all
//! the "configuration" there is, exposed as named constants rather than a
//! config file, since none of them vary between invocations.

/// Opens a `«...»` editor/tooling marker. Chosen below code point 200 so it
/// is addressable directly by the dispatch table rather than falling into
/// the `Unknown` catch-all.
pub const MARKER_BEGIN: char = '\u{AB}';
/// Closes a `«...»` editor/tooling marker.
pub const MARKER_END: char = '\u{BB}';

/// The literal identifier that must immediately follow a `###` run (after
/// skipping spaces) for the line to be recognized as build metadata rather
/// than degrading to `Incorrect`.
pub const METADATA_HEADER: &str = "META";

/// The exact nine reserved words. Anything else matching an identifier
/// shape is a `Var` or `Cons`, never a keyword — Luna does not grow its
/// keyword set implicitly.
pub const KEYWORDS: &[(&str, fn() -> crate::token::Symbol)] = &[
    ("all", || crate::token::Symbol::KwAll),
    ("case", || crate::token::Symbol::KwCase),
    ("class", || crate::token::Symbol::KwClass),
    ("def", || crate::token::Symbol::KwDef),
    ("import", || crate::token::Symbol::KwImport),
    ("of", || crate::token::Symbol::KwOf),
    ("type", || crate::token::Symbol::KwType),
    ("foreign", || crate::token::Symbol::KwForeign),
    ("native", || crate::token::Symbol::KwNative),
];

pub fn keyword_for(text: &str) -> Option<crate::token::Symbol> {
    KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == text)
        .map(|(_, make)| make())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Symbol;

    #[test]
    fn recognizes_every_keyword() {
        assert_eq!(keyword_for("def"), Some(Symbol::KwDef));
        assert_eq!(keyword_for("native"), Some(Symbol::KwNative));
    }

    #[test]
    fn non_keyword_identifier_misses() {
        assert_eq!(keyword_for("definition"), None);
    }
}
