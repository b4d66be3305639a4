use super::core::Scanner;
use crate::classify::is_regular_operator_char;
use crate::token::{Side, Symbol};

impl<'a> Scanner<'a> {
    pub(crate) fn lex_terminator(&mut self) -> Symbol {
        self.cursor.advance();
        Symbol::Terminator
    }

    pub(crate) fn lex_comma(&mut self) -> Symbol {
        self.cursor.advance();
        Symbol::Operator(",".to_string())
    }

    pub(crate) fn lex_block_delim(&mut self) -> Symbol {
        let side = if self.cursor.current_char() == '{' {
            Side::Begin
        } else {
            Side::End
        };
        self.cursor.advance();
        Symbol::Block(side)
    }

    pub(crate) fn lex_group_delim(&mut self) -> Symbol {
        let side = if self.cursor.current_char() == '(' {
            Side::Begin
        } else {
            Side::End
        };
        self.cursor.advance();
        Symbol::Group(side)
    }

    pub(crate) fn lex_list_delim(&mut self) -> Symbol {
        let side = if self.cursor.current_char() == '[' {
            Side::Begin
        } else {
            Side::End
        };
        self.cursor.advance();
        Symbol::List(side)
    }

    pub(crate) fn lex_eol_lf(&mut self) -> Symbol {
        self.cursor.advance();
        Symbol::Eol
    }

    pub(crate) fn lex_eol_crlf(&mut self) -> Symbol {
        self.cursor.advance();
        if self.cursor.current_char() == '\n' {
            self.cursor.advance();
        }
        Symbol::Eol
    }

    /// A run of `:` of length 1 opens a block (`BlockStart`); length 2 is
    /// the type-ascription operator (`Typed`); any other length has no
    /// meaning and degrades to `Unknown` carrying the whole run.
    pub(crate) fn lex_colon_run(&mut self) -> Symbol {
        let start = self.cursor.position();
        let n = self.peek_run(':');
        self.cursor.advance_n(n);
        match n {
            1 => Symbol::BlockStart,
            2 => Symbol::Typed,
            _ => Symbol::Unknown(self.cursor.slice_from(start).to_string()),
        }
    }

    /// A run of `.` of length 1 is member access, length 2 a range, length
    /// 3 the `Anything` punctuator; any other length is `Unknown`.
    pub(crate) fn lex_dot_run(&mut self) -> Symbol {
        let start = self.cursor.position();
        let n = self.peek_run('.');
        self.cursor.advance_n(n);
        match n {
            1 => Symbol::Accessor,
            2 => Symbol::Range,
            3 => Symbol::Anything,
            _ => Symbol::Unknown(self.cursor.slice_from(start).to_string()),
        }
    }

    /// A run of `=` of length 1 is assignment, length 2 the equality
    /// operator; any other length is `Unknown`.
    pub(crate) fn lex_equals_run(&mut self) -> Symbol {
        let start = self.cursor.position();
        let n = self.peek_run('=');
        self.cursor.advance_n(n);
        match n {
            1 => Symbol::Assignment,
            2 => Symbol::Operator("==".to_string()),
            _ => Symbol::Unknown(self.cursor.slice_from(start).to_string()),
        }
    }

    pub(crate) fn lex_type_app(&mut self) -> Symbol {
        self.cursor.advance();
        Symbol::TypeApp
    }

    pub(crate) fn lex_merge(&mut self) -> Symbol {
        self.cursor.advance();
        Symbol::Merge
    }

    /// A maximal run of operator characters, followed by a maximal run of
    /// `=`. A single trailing `=` turns the run into a `Modifier`; no
    /// trailing `=` at all leaves it a plain `Operator`; anything else
    /// (zero or two-or-more trailing `=`) is `Unknown` — this is a purely
    /// mechanical rule and makes no distinction between compound assignment
    /// (`+=`) and comparison spelled the same way (`<=`, `!=`): both fall
    /// out of the same "run, then `=`" shape.
    pub(crate) fn lex_operator_run(&mut self) -> Symbol {
        let start = self.cursor.position();
        while is_regular_operator_char(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let op = self.cursor.slice_from(start).to_string();
        let suffix_start = self.cursor.position();
        while self.cursor.current_char() == '=' {
            self.cursor.advance();
        }
        let suffix = self.cursor.slice_from(suffix_start).to_string();
        match suffix.as_str() {
            "=" => Symbol::Modifier(op),
            "" => Symbol::Operator(op),
            _ => Symbol::Unknown(op + &suffix),
        }
    }
}
