use super::core::Scanner;
use crate::classify::is_ident_body;
use crate::constants::keyword_for;
use crate::token::Symbol;

impl<'a> Scanner<'a> {
    /// Lowercase-headed identifiers: variables, fields, functions, and the
    /// nine reserved keywords. After the identifier body, an optional single
    /// trailing `?` or `!` and then any run of `'` are folded into the same
    /// token (`valid?`, `mutate!`, `x'`, `x''`).
    pub(crate) fn lex_var(&mut self) -> Symbol {
        let start = self.cursor.position();
        self.cursor.advance();
        while is_ident_body(self.cursor.current_char()) {
            self.cursor.advance();
        }
        if matches!(self.cursor.current_char(), '?' | '!') {
            self.cursor.advance();
        }
        while self.cursor.current_char() == '\'' {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        if let Some(sym) = keyword_for(text) {
            return sym;
        }
        Symbol::Var(text.to_string())
    }

    /// Uppercase-headed identifiers: type and data constructor names. Never
    /// a keyword — the reserved set is entirely lowercase.
    pub(crate) fn lex_cons(&mut self) -> Symbol {
        let start = self.cursor.position();
        self.cursor.advance();
        while is_ident_body(self.cursor.current_char()) {
            self.cursor.advance();
        }
        Symbol::Cons(self.cursor.slice_from(start).to_string())
    }
}
