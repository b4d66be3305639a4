use super::core::Scanner;
use crate::classify::is_dec_digit;
use crate::constants::{MARKER_END, METADATA_HEADER};
use crate::token::Symbol;

impl<'a> Scanner<'a> {
    /// `#`: a bare `#` disables the next token (parser's concern, the
    /// lexer only tags it); `##` introduces a documentation comment running
    /// to end of line; `###` introduces a build-metadata line via
    /// `lex_config`. A run of more than three `#` has no meaning and
    /// degrades to `Unknown`.
    pub(crate) fn lex_hash_run(&mut self) -> Symbol {
        let start = self.cursor.position();
        let n = self.peek_run('#');
        match n {
            1 => {
                self.cursor.advance();
                Symbol::Disable
            }
            2 => {
                self.cursor.advance_n(2);
                Symbol::Doc(self.consume_to_eol())
            }
            3 => {
                self.cursor.advance_n(3);
                self.lex_config(start)
            }
            _ => {
                self.cursor.advance_n(n);
                Symbol::Unknown(self.cursor.slice_from(start).to_string())
            }
        }
    }

    /// `lexConfig`: skips spaces, then requires the exact literal
    /// [`METADATA_HEADER`] followed by at least one space before the rest of
    /// the line is accepted as metadata text. Anything short of that full
    /// shape (wrong header, header with nothing after it) degrades to
    /// `Incorrect` carrying everything from the opening `###` — `lexConfig`
    /// currently has no other pragma it recognizes.
    fn lex_config(&mut self, hash_start: usize) -> Symbol {
        while self.cursor.current_char() == ' ' {
            self.cursor.advance();
        }
        if self.cursor.remaining().starts_with(METADATA_HEADER) {
            self.cursor.advance_n(METADATA_HEADER.chars().count());
            let space_start = self.cursor.position();
            while self.cursor.current_char() == ' ' {
                self.cursor.advance();
            }
            if self.cursor.position() > space_start {
                return Symbol::Metadata(self.consume_to_eol());
            }
        }
        self.cursor.seek(hash_start);
        let text = self.consume_to_eol();
        Symbol::Incorrect(text)
    }

    fn consume_to_eol(&mut self) -> String {
        let start = self.cursor.position();
        while !matches!(self.cursor.current_char(), '\n' | '\r' | '\0') {
            self.cursor.advance();
        }
        self.cursor.slice_from(start).to_string()
    }

    /// `«...»`: an editor/tooling marker. A decimal digit run right after
    /// the opening delimiter parses as the marker's integer value; anything
    /// else is consumed up to the closing delimiter (or end of input) and
    /// reported as `Incorrect`. Either way the closing delimiter, if
    /// present, is always consumed.
    pub(crate) fn lex_marker(&mut self) -> Symbol {
        self.cursor.advance();
        if is_dec_digit(self.cursor.current_char()) {
            let digits_start = self.cursor.position();
            while is_dec_digit(self.cursor.current_char()) {
                self.cursor.advance();
            }
            let digits = self.cursor.slice_from(digits_start).to_string();
            let value: u64 = digits.parse().unwrap_or(u64::MAX);
            if self.cursor.current_char() == MARKER_END {
                self.cursor.advance();
            }
            return Symbol::Marker(value);
        }

        let start = self.cursor.position();
        while !matches!(self.cursor.current_char(), '\0') && self.cursor.current_char() != MARKER_END {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start).to_string();
        if self.cursor.current_char() == MARKER_END {
            self.cursor.advance();
        }
        Symbol::Incorrect(format!("Marker {text}"))
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
    fn bare_hash_disables() {
        assert_eq!(lex_all("#"), vec![Symbol::Disable]);
    }

    #[test]
    fn double_hash_is_doc_comment() {
        assert_eq!(
            lex_all("## a doc line\n"),
            vec![Symbol::Doc(" a doc line".into()), Symbol::Eol]
        );
    }

    #[test]
    fn triple_hash_with_header_is_metadata() {
        assert_eq!(
            lex_all("### META build=release\n"),
            vec![Symbol::Metadata("build=release".into()), Symbol::Eol]
        );
    }

    #[test]
    fn triple_hash_without_header_is_incorrect() {
        assert_eq!(
            lex_all("### build=release\n"),
            vec![
                Symbol::Incorrect("### build=release".into()),
                Symbol::Eol
            ]
        );
    }

    #[test]
    fn triple_hash_header_with_no_trailing_space_is_incorrect() {
        assert_eq!(
            lex_all("### METAabc\n"),
            vec![Symbol::Incorrect("### METAabc".into()), Symbol::Eol]
        );
    }

    #[test]
    fn quadruple_hash_is_unknown() {
        assert_eq!(lex_all("####"), vec![Symbol::Unknown("####".into())]);
    }

    #[test]
    fn numeric_marker_parses_to_u64() {
        assert_eq!(lex_all("«42»"), vec![Symbol::Marker(42)]);
    }

    #[test]
    fn non_numeric_marker_is_incorrect() {
        assert_eq!(
            lex_all("«todo: fix»"),
            vec![Symbol::Incorrect("Marker todo: fix".into())]
        );
    }
}
