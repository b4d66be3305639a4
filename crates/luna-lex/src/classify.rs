//! Character-class predicates used by the dispatch table and the sub-lexers.
//!
//! Luna's lexical grammar is ASCII-headed: every predicate here only ever
//! returns `true` for code points below 128. Code points in `128..200` are
//! still dispatch-table-addressable (see [`crate::dispatch`]) but none of
//! them currently head an identifier, digit, or operator rule; anything
//! `>= 200` always falls through to [`crate::token::Symbol::Unknown`].

pub fn is_dec_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_oct_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

pub fn is_bin_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// First character of a `Var` identifier: lowercase ASCII letter or `_`.
pub fn is_var_head(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

/// First character of a `Cons` identifier: uppercase ASCII letter.
pub fn is_cons_head(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// Continuation character of either identifier kind.
pub fn is_ident_body(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that may appear in an operator run. Deliberately excludes
/// characters claimed by a fixed single-character punctuator (`.`, `:`, `=`,
/// `@`, `|`, `_`) so the dispatch table has exactly one owner per head
/// character.
pub fn is_regular_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '^' | '<' | '>' | '&' | '$' | '~' | '?' | '!'
    )
}
