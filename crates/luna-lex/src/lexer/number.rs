use super::core::Scanner;
use crate::classify::{is_bin_digit, is_dec_digit, is_hex_digit, is_oct_digit};
use crate::token::{NumberBase, NumberLit, Symbol};

impl<'a> Scanner<'a> {
    /// Numbers: an optional `0x`/`0o`/`0b` radix prefix followed by a digit
    /// run in that radix, or a plain decimal literal with an optional
    /// fractional part and an optional exponent. Any identifier-body
    /// character immediately following a would-be-complete number (no
    /// separator) demotes the whole run to `Incorrect`, rather than
    /// silently splitting it into a number token followed by an identifier
    /// token.
    pub(crate) fn lex_number(&mut self) -> Symbol {
        let start = self.cursor.position();

        if self.cursor.current_char() == '0' {
            let (base, digit_ok): (NumberBase, fn(char) -> bool) = match self.cursor.peek_char(1) {
                'x' | 'X' => (NumberBase::Hexadecimal, is_hex_digit as fn(char) -> bool),
                'o' | 'O' => (NumberBase::Octal, is_oct_digit as fn(char) -> bool),
                'b' | 'B' => (NumberBase::Binary, is_bin_digit as fn(char) -> bool),
                _ => (NumberBase::Decimal, is_dec_digit as fn(char) -> bool),
            };
            if !matches!(base, NumberBase::Decimal) {
                self.cursor.advance_n(2);
                let digits_start = self.cursor.position();
                while digit_ok(self.cursor.current_char()) {
                    self.cursor.advance();
                }
                if self.cursor.position() == digits_start {
                    return self.finish_number_or_incorrect(start, None);
                }
                let integer = self.cursor.slice_from(digits_start).to_string();
                return self.finish_number_or_incorrect(
                    start,
                    Some(NumberLit {
                        base,
                        integer,
                        fraction: String::new(),
                        exponent: String::new(),
                    }),
                );
            }
        }

        let int_start = self.cursor.position();
        while is_dec_digit(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let integer = self.cursor.slice_from(int_start).to_string();

        let mut fraction = String::new();
        if self.cursor.current_char() == '.' && is_dec_digit(self.cursor.peek_char(1)) {
            self.cursor.advance();
            let frac_start = self.cursor.position();
            while is_dec_digit(self.cursor.current_char()) {
                self.cursor.advance();
            }
            fraction = self.cursor.slice_from(frac_start).to_string();
        }

        let mut exponent = String::new();
        if matches!(self.cursor.current_char(), 'e' | 'E') {
            let mark = self.cursor.position();
            self.cursor.advance();
            let sign_start = self.cursor.position();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            let exp_digits_start = self.cursor.position();
            while is_dec_digit(self.cursor.current_char()) {
                self.cursor.advance();
            }
            if self.cursor.position() == exp_digits_start {
                // No exponent digits after all; back out to just before `e`.
                self.cursor.seek(mark);
            } else {
                // `exponent` carries the optional sign and the digits, but
                // never the `e`/`E` marker itself.
                exponent = self.cursor.slice_from(sign_start).to_string();
            }
        }

        self.finish_number_or_incorrect(
            start,
            Some(NumberLit {
                base: NumberBase::Decimal,
                integer,
                fraction,
                exponent,
            }),
        )
    }

    fn finish_number_or_incorrect(&mut self, start: usize, lit: Option<NumberLit>) -> Symbol {
        if self.cursor.current_char().is_ascii_alphanumeric() {
            while self.cursor.current_char().is_ascii_alphanumeric() {
                self.cursor.advance();
            }
            return Symbol::Incorrect(self.cursor.slice_from(start).to_string());
        }
        match lit {
            Some(lit) => Symbol::Number(lit),
            None => Symbol::Incorrect(self.cursor.slice_from(start).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryStack;

    fn lex_one(src: &str) -> Symbol {
        Scanner::new(EntryStack::new(), src)
            .next_lexeme()
            .unwrap()
            .symbol
    }

    #[test]
    fn plain_decimal() {
        assert_eq!(
            lex_one("123"),
            Symbol::Number(NumberLit {
                base: NumberBase::Decimal,
                integer: "123".into(),
                fraction: String::new(),
                exponent: String::new(),
            })
        );
    }

    #[test]
    fn decimal_with_fraction_and_exponent() {
        assert_eq!(
            lex_one("1.5e-10"),
            Symbol::Number(NumberLit {
                base: NumberBase::Decimal,
                integer: "1".into(),
                fraction: "5".into(),
                exponent: "-10".into(),
            })
        );
    }

    #[test]
    fn hex_literal() {
        assert_eq!(
            lex_one("0xFF"),
            Symbol::Number(NumberLit {
                base: NumberBase::Hexadecimal,
                integer: "FF".into(),
                fraction: String::new(),
                exponent: String::new(),
            })
        );
    }

    #[test]
    fn uppercase_radix_prefix_is_accepted() {
        assert_eq!(
            lex_one("0XFF"),
            Symbol::Number(NumberLit {
                base: NumberBase::Hexadecimal,
                integer: "FF".into(),
                fraction: String::new(),
                exponent: String::new(),
            })
        );
        assert_eq!(
            lex_one("0B101"),
            Symbol::Number(NumberLit {
                base: NumberBase::Binary,
                integer: "101".into(),
                fraction: String::new(),
                exponent: String::new(),
            })
        );
        assert_eq!(
            lex_one("0O17"),
            Symbol::Number(NumberLit {
                base: NumberBase::Octal,
                integer: "17".into(),
                fraction: String::new(),
                exponent: String::new(),
            })
        );
    }

    #[test]
    fn empty_radix_digits_is_incorrect() {
        assert_eq!(lex_one("0x"), Symbol::Incorrect("0x".into()));
    }

    #[test]
    fn trailing_identifier_char_is_incorrect() {
        assert_eq!(lex_one("123abc"), Symbol::Incorrect("123abc".into()));
    }
}
