//! The fixed 200-entry dispatch table: which sub-lexer owns the first
//! character of the next top-level symbol.
//!
//! Built once, behind a `OnceLock`, and never rebuilt — every `Scanner`
//! shares the same static table rather than constructing its own closures
//! per instance.

use std::sync::OnceLock;

use crate::classify::{is_cons_head, is_dec_digit, is_regular_operator_char, is_var_head};
use crate::constants::MARKER_BEGIN;
use crate::lexer::Scanner;
use crate::token::Symbol;

pub(crate) type SubLexer = fn(&mut Scanner) -> Symbol;

const TABLE_SIZE: usize = 200;

static TABLE: OnceLock<[SubLexer; TABLE_SIZE]> = OnceLock::new();

pub(crate) fn dispatch_table() -> &'static [SubLexer; TABLE_SIZE] {
    TABLE.get_or_init(build_table)
}

fn build_table() -> [SubLexer; TABLE_SIZE] {
    let mut table: [SubLexer; TABLE_SIZE] = [Scanner::advance_unknown_char as SubLexer; TABLE_SIZE];
    for (cp, slot) in table.iter_mut().enumerate() {
        // Every code point below 200 is a valid `char`; no surrogate range
        // intersects `0..200`.
        let c = char::from_u32(cp as u32).expect("code point below 200 is always a valid char");
        *slot = slot_for(c);
    }
    table
}

fn slot_for(c: char) -> SubLexer {
    match c {
        ';' => Scanner::lex_terminator,
        ',' => Scanner::lex_comma,
        '{' | '}' => Scanner::lex_block_delim,
        '(' | ')' => Scanner::lex_group_delim,
        '[' | ']' => Scanner::lex_list_delim,
        '\n' => Scanner::lex_eol_lf,
        '\r' => Scanner::lex_eol_crlf,
        ':' => Scanner::lex_colon_run,
        '.' => Scanner::lex_dot_run,
        '=' => Scanner::lex_equals_run,
        '@' => Scanner::lex_type_app,
        '|' => Scanner::lex_merge,
        '"' => Scanner::lex_open_raw,
        '\'' => Scanner::lex_open_fmt,
        '`' => Scanner::lex_open_nat,
        '#' => Scanner::lex_hash_run,
        c if c == MARKER_BEGIN => Scanner::lex_marker,
        c if is_var_head(c) => Scanner::lex_var,
        c if is_cons_head(c) => Scanner::lex_cons,
        c if is_dec_digit(c) => Scanner::lex_number,
        c if is_regular_operator_char(c) => Scanner::lex_operator_run,
        _ => Scanner::advance_unknown_char,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_fixed_size() {
        assert_eq!(dispatch_table().len(), TABLE_SIZE);
    }

    #[test]
    fn table_is_built_once() {
        let a = dispatch_table() as *const _;
        let b = dispatch_table() as *const _;
        assert_eq!(a, b);
    }
}
