use luna_util::Span;

use crate::cursor::Cursor;
use crate::dispatch::dispatch_table;
use crate::entry::{Entry, EntryStack};
use crate::token::{Side, Symbol};

/// A [`Symbol`] together with the character widths the streaming pipeline
/// needs to turn it into a positioned [`crate::token::Token`]: how many
/// characters the symbol itself consumed, and how much trailing horizontal
/// whitespace was folded into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub span: Span,
    pub offset: Span,
    pub symbol: Symbol,
}

/// The re-entrant scanner: a cursor over borrowed source text plus the
/// entry-stack that decides which grammar governs the next symbol. This is
/// the "pure function over (remaining text, entry-stack)" the scanner
/// design collapses to — every public operation in this crate is built by
/// repeatedly calling [`Scanner::next_lexeme`].
pub struct Scanner<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) stack: EntryStack,
}

impl<'a> Scanner<'a> {
    pub fn new(stack: EntryStack, text: &'a str) -> Self {
        Self {
            cursor: Cursor::new(text),
            stack,
        }
    }

    pub fn entry_stack(&self) -> &EntryStack {
        &self.stack
    }

    pub fn into_entry_stack(self) -> EntryStack {
        self.stack
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Produces the next positioned lexeme, or `None` once the source is
    /// exhausted. `None` does not mean the entry stack is back at
    /// `TopLevel` — an unterminated string simply stops producing lexemes
    /// with its frame still pushed, which `tokenize_continuation` surfaces
    /// to the caller.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        // Ordinarily a token's own trailing-whitespace measurement leaves
        // the cursor sitting right after any horizontal whitespace, so
        // `top_entry_point` never sees a leading space. The one exception
        // is resuming a chunk whose boundary fell inside what would have
        // been trailing whitespace for the previous chunk's last token —
        // that whitespace was never measured (the buffer ran out first)
        // and reappears here as leading whitespace with no token of this
        // call's to attach it to. It is silently dropped rather than
        // inventing a whitespace-only symbol the grammar has no room for;
        // callers that care should choose resumption boundaries that don't
        // split a token's trailing whitespace. Whitespace inside a string
        // body is literal content and is never touched here.
        if matches!(self.stack.top(), Entry::TopLevel | Entry::StrCode(_)) {
            while matches!(self.cursor.current_char(), ' ' | '\t') {
                self.cursor.advance();
            }
        }
        if self.cursor.is_at_end() {
            return None;
        }
        let start = self.cursor.position();
        let symbol = self.lex_entry_point();
        let span = Span::new(self.cursor.char_len_from(start));

        let skip_whitespace = matches!(
            symbol,
            Symbol::Quote(_, Side::Begin) | Symbol::Block(Side::End)
        );
        let offset = if skip_whitespace {
            Span::ZERO
        } else {
            self.measure_trailing_whitespace()
        };

        Some(Lexeme {
            span,
            offset,
            symbol,
        })
    }

    fn lex_entry_point(&mut self) -> Symbol {
        match self.stack.top() {
            Entry::TopLevel => self.top_entry_point(),
            Entry::StrCode(hlen) => self.fmt_str_code(hlen),
            Entry::Str(kind, hlen) => self.str_body(kind, hlen),
        }
    }

    /// Dispatches on the current character via the fixed 200-entry table;
    /// anything at or beyond code point 200 is always `Unknown`.
    pub(crate) fn top_entry_point(&mut self) -> Symbol {
        let c = self.cursor.current_char();
        let cp = c as u32;
        if cp < 200 {
            let f = dispatch_table()[cp as usize];
            f(self)
        } else {
            self.cursor.advance();
            Symbol::Unknown(c.to_string())
        }
    }

    fn measure_trailing_whitespace(&mut self) -> Span {
        let mut weight = 0usize;
        loop {
            match self.cursor.current_char() {
                ' ' => {
                    weight += 1;
                    self.cursor.advance();
                }
                '\t' => {
                    weight += 4;
                    self.cursor.advance();
                }
                _ => break,
            }
        }
        Span::new(weight)
    }

    /// Counts a run of `c` starting at the cursor without consuming it.
    pub(crate) fn peek_run(&self, c: char) -> usize {
        let mut n = 0;
        while self.cursor.peek_char(n) == c {
            n += 1;
        }
        n
    }

    pub(crate) fn advance_unknown_char(&mut self) -> Symbol {
        let c = self.cursor.current_char();
        self.cursor.advance();
        Symbol::Unknown(c.to_string())
    }
}
