use super::core::Scanner;
use crate::entry::Entry;
use crate::escapes::lookup_mnemonic;
use crate::token::{EscapeDescriptor, Side, StrKind, Symbol};

impl<'a> Scanner<'a> {
    /// Entry point for `"`, `'`, and `` ` ``: opens a string entry, or
    /// degrades to a single `Unknown` character when the run of quote
    /// characters is exactly 2 (the ambiguous empty-string case — see
    /// `DESIGN.md`).
    pub(crate) fn lex_quote(&mut self, kind: StrKind, c: char) -> Symbol {
        let n = self.peek_run(c);
        if n == 2 {
            self.cursor.advance();
            return Symbol::Unknown(c.to_string());
        }
        self.cursor.advance_n(n);
        self.stack.push(Entry::Str(kind, n));
        Symbol::Quote(kind, Side::Begin)
    }

    pub(crate) fn lex_open_raw(&mut self) -> Symbol {
        self.lex_quote(StrKind::Raw, '"')
    }

    pub(crate) fn lex_open_fmt(&mut self) -> Symbol {
        self.lex_quote(StrKind::Fmt, '\'')
    }

    pub(crate) fn lex_open_nat(&mut self) -> Symbol {
        self.lex_quote(StrKind::Nat, '`')
    }

    pub(crate) fn str_body(&mut self, kind: StrKind, hlen: usize) -> Symbol {
        match kind {
            StrKind::Raw => self.raw_str_body(hlen),
            StrKind::Fmt => self.fmt_str_body(hlen),
            StrKind::Nat => self.nat_str_body(hlen),
        }
    }

    /// Consumes a run of `quote_char` at the cursor (the caller has already
    /// checked the current character is one): if its length matches `hlen`
    /// exactly, it is the closing delimiter, so the frame is popped and
    /// `Quote(kind, End)` emitted. Otherwise the *whole run* — not just one
    /// character of it — is literal text. Falling back to the plain
    /// not-quote-or-escape literal scan here would immediately fail (the
    /// cursor sits on a quote character), so a non-matching run needs its
    /// own `Str` path rather than reusing `lex_literal_run`.
    fn close_quote_or_literal_run(&mut self, kind: StrKind, hlen: usize, quote_char: char) -> Symbol {
        let start = self.cursor.position();
        let n = self.peek_run(quote_char);
        self.cursor.advance_n(n);
        if n == hlen {
            self.stack.pop();
            Symbol::Quote(kind, Side::End)
        } else {
            Symbol::Str(self.cursor.slice_from(start).to_string())
        }
    }

    fn raw_str_body(&mut self, hlen: usize) -> Symbol {
        let c = self.cursor.current_char();
        if c == '\0' {
            return self.advance_unknown_char();
        }
        if c == '\n' || c == '\r' {
            self.cursor.advance();
            return Symbol::Eol;
        }
        if c == '"' {
            return self.close_quote_or_literal_run(StrKind::Raw, hlen, '"');
        }
        if c == '\\' {
            return self.lex_fixed_escape(StrKind::Raw);
        }
        self.lex_literal_run(|c| c != '"' && c != '\\' && c != '\n' && c != '\r')
    }

    fn fmt_str_body(&mut self, hlen: usize) -> Symbol {
        let c = self.cursor.current_char();
        if c == '\0' {
            return self.advance_unknown_char();
        }
        if c == '\n' || c == '\r' {
            self.cursor.advance();
            return Symbol::Eol;
        }
        if c == '\'' {
            return self.close_quote_or_literal_run(StrKind::Fmt, hlen, '\'');
        }
        if c == '`' {
            let n = self.peek_run('`');
            self.cursor.advance_n(n);
            self.stack.push(Entry::StrCode(n));
            return Symbol::Block(Side::Begin);
        }
        if c == '\\' {
            if let Some(sym) = self.lex_fixed_escape_opt(StrKind::Fmt) {
                return sym;
            }
            return self.lex_esc_seq();
        }
        self.lex_literal_run(|c| c != '\'' && c != '\\' && c != '\n' && c != '\r' && c != '`')
    }

    fn nat_str_body(&mut self, hlen: usize) -> Symbol {
        let c = self.cursor.current_char();
        if c == '\0' {
            return self.advance_unknown_char();
        }
        if c == '`' {
            return self.close_quote_or_literal_run(StrKind::Nat, hlen, '`');
        }
        self.lex_literal_run(|c| c != '`')
    }

    /// The interpolation-code region opened by a backtick run inside a
    /// `Fmt` string body. Tries to close first (a matching run of
    /// backticks); on failure falls through to ordinary top-level lexing,
    /// since the region contains arbitrary re-entrant Luna code.
    pub(crate) fn fmt_str_code(&mut self, hlen: usize) -> Symbol {
        if self.cursor.current_char() == '`' {
            let n = self.peek_run('`');
            if n == hlen {
                self.cursor.advance_n(n);
                self.stack.pop();
                return Symbol::Block(Side::End);
            }
        }
        self.top_entry_point()
    }

    /// Consumes the longest run of characters matching `keep`, always at
    /// least one (the caller only invokes this when the current character
    /// already satisfies `keep`).
    fn lex_literal_run(&mut self, keep: impl Fn(char) -> bool) -> Symbol {
        let start = self.cursor.position();
        while keep(self.cursor.current_char()) && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
        if self.cursor.position() == start {
            return self.advance_unknown_char();
        }
        Symbol::Str(self.cursor.slice_from(start).to_string())
    }

    /// The three escape forms common to both `Raw` and `Fmt` bodies:
    /// `\\`, a run of `"`, or a run of `'`. Assumes the current character is
    /// `\` and has not yet been consumed.
    fn lex_fixed_escape_opt(&mut self, _kind: StrKind) -> Option<Symbol> {
        debug_assert_eq!(self.cursor.current_char(), '\\');
        if self.cursor.peek_char(1) == '\\' {
            self.cursor.advance_n(2);
            return Some(Symbol::StrEsc(EscapeDescriptor::Slash));
        }
        if self.cursor.peek_char(1) == '"' {
            self.cursor.advance();
            let n = self.peek_run('"');
            self.cursor.advance_n(n);
            return Some(Symbol::StrEsc(EscapeDescriptor::QuoteEscape(StrKind::Raw, n)));
        }
        if self.cursor.peek_char(1) == '\'' {
            self.cursor.advance();
            let n = self.peek_run('\'');
            self.cursor.advance_n(n);
            return Some(Symbol::StrEsc(EscapeDescriptor::QuoteEscape(StrKind::Fmt, n)));
        }
        None
    }

    /// Raw-string escapes support only the three fixed forms; anything else
    /// following a backslash has no defined escape in a `Raw` body, so the
    /// backslash is emitted alone as a one-character `Str` run rather than
    /// silently absorbing whatever follows it.
    fn lex_fixed_escape(&mut self, kind: StrKind) -> Symbol {
        if let Some(sym) = self.lex_fixed_escape_opt(kind) {
            return sym;
        }
        self.cursor.advance();
        Symbol::Str("\\".to_string())
    }

    /// `Fmt`-only escape fallback: a run of decimal digits (`NumStrEsc`), a
    /// 1/2/3-letter mnemonic (`CharStrEsc`), or — if neither matches — the
    /// single following character reported as `StrWrongEsc`.
    fn lex_esc_seq(&mut self) -> Symbol {
        debug_assert_eq!(self.cursor.current_char(), '\\');
        self.cursor.advance();

        if self.cursor.current_char().is_ascii_digit() {
            let start = self.cursor.position();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
            let digits = self.cursor.slice_from(start);
            let value: u32 = digits.parse().unwrap_or(u32::MAX);
            return Symbol::StrEsc(EscapeDescriptor::NumStrEsc(value));
        }

        if let Some((len, code)) = lookup_mnemonic(self.cursor.remaining()) {
            self.cursor.advance_n(len);
            return Symbol::StrEsc(EscapeDescriptor::CharStrEsc(code));
        }

        let c = self.cursor.current_char();
        if c == '\0' {
            return Symbol::StrWrongEsc('\\' as u32);
        }
        self.cursor.advance();
        Symbol::StrWrongEsc(c as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryStack;

    fn lex_all(src: &str) -> Vec<Symbol> {
        let mut s = Scanner::new(EntryStack::new(), src);
        let mut out = Vec::new();
        while let Some(l) = s.next_lexeme() {
            out.push(l.symbol);
        }
        out
    }

    #[test]
    fn raw_string_round_trip() {
        let syms = lex_all(r#""hello""#);
        assert_eq!(
            syms,
            vec![
                Symbol::Quote(StrKind::Raw, Side::Begin),
                Symbol::Str("hello".into()),
                Symbol::Quote(StrKind::Raw, Side::End),
            ]
        );
    }

    #[test]
    fn empty_string_is_ambiguous_per_design() {
        let syms = lex_all(r#""""#);
        assert_eq!(syms, vec![Symbol::Unknown("\"".into()), Symbol::Quote(StrKind::Raw, Side::Begin)]);
    }

    #[test]
    fn triple_quote_raw_string_opens_and_closes() {
        let syms = lex_all("\"\"\"\" hi \"\"\"\" ");
        assert_eq!(syms[0], Symbol::Quote(StrKind::Raw, Side::Begin));
        assert!(syms.iter().any(|s| matches!(s, Symbol::Quote(StrKind::Raw, Side::End))));
    }

    #[test]
    fn closing_run_longer_than_opening_stays_literal() {
        // Opened with 4 quotes; a run of 5 at the tail does not match and is
        // reported whole, leaving the string entry open (unterminated).
        let syms = lex_all("\"\"\"\" hi \"\"\"\"\" ");
        assert_eq!(syms[0], Symbol::Quote(StrKind::Raw, Side::Begin));
        assert!(!syms.iter().any(|s| matches!(s, Symbol::Quote(StrKind::Raw, Side::End))));
        assert!(syms.iter().any(|s| matches!(s, Symbol::Str(t) if t == "\"\"\"\"\"")));
    }

    #[test]
    fn non_matching_quote_run_inside_body_is_one_literal_str() {
        // Opened with a single `"`, so the embedded `""` pair is a
        // non-matching run of length 2 and must come back as one `Str`
        // token containing both characters, not split into two `Unknown`s.
        let syms = lex_all("\"a\"\"b\"");
        assert_eq!(
            syms,
            vec![
                Symbol::Quote(StrKind::Raw, Side::Begin),
                Symbol::Str("a".into()),
                Symbol::Str("\"\"".into()),
                Symbol::Str("b".into()),
                Symbol::Quote(StrKind::Raw, Side::End),
            ]
        );
    }

    #[test]
    fn fmt_string_named_escape() {
        let syms = lex_all(r"'\n'");
        assert_eq!(
            syms,
            vec![
                Symbol::Quote(StrKind::Fmt, Side::Begin),
                Symbol::StrEsc(EscapeDescriptor::CharStrEsc(0x0A)),
                Symbol::Quote(StrKind::Fmt, Side::End),
            ]
        );
    }

    #[test]
    fn fmt_string_numeric_escape() {
        let syms = lex_all(r"'\65'");
        assert_eq!(
            syms,
            vec![
                Symbol::Quote(StrKind::Fmt, Side::Begin),
                Symbol::StrEsc(EscapeDescriptor::NumStrEsc(65)),
                Symbol::Quote(StrKind::Fmt, Side::End),
            ]
        );
    }

    #[test]
    fn fmt_string_wrong_escape() {
        let syms = lex_all(r"'\q'");
        assert_eq!(
            syms,
            vec![
                Symbol::Quote(StrKind::Fmt, Side::Begin),
                Symbol::StrWrongEsc('q' as u32),
                Symbol::Quote(StrKind::Fmt, Side::End),
            ]
        );
    }

    #[test]
    fn fmt_string_nested_interpolation() {
        let syms = lex_all("'a`x`b'");
        assert_eq!(
            syms,
            vec![
                Symbol::Quote(StrKind::Fmt, Side::Begin),
                Symbol::Str("a".into()),
                Symbol::Block(Side::Begin),
                Symbol::Var("x".into()),
                Symbol::Block(Side::End),
                Symbol::Str("b".into()),
                Symbol::Quote(StrKind::Fmt, Side::End),
            ]
        );
    }

    #[test]
    fn nested_interpolation_to_arbitrary_depth() {
        let syms = lex_all("'`'`x`'`");
        // Outer Fmt string -> interpolation -> inner Fmt string -> inner
        // interpolation -> identifier -> close inner code -> close inner
        // string -> close outer code. Depth 2 re-entry, never capped.
        assert!(syms.contains(&Symbol::Var("x".into())));
        let opens = syms
            .iter()
            .filter(|s| matches!(s, Symbol::Quote(StrKind::Fmt, Side::Begin)))
            .count();
        assert_eq!(opens, 2);
    }

    #[test]
    fn nat_string_has_no_escapes() {
        let syms = lex_all(r"`a\b`");
        assert_eq!(
            syms,
            vec![
                Symbol::Quote(StrKind::Nat, Side::Begin),
                Symbol::Str(r"a\b".into()),
                Symbol::Quote(StrKind::Nat, Side::End),
            ]
        );
    }
}
