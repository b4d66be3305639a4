use luna_util::Span;

/// Which of the three quote characters opened a string entry, and therefore
/// which body grammar and escape set govern it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrKind {
    /// `"`-delimited: escapes limited to `\\`, a run of `"`, or a run of `'`.
    Raw,
    /// `'`-delimited: the same three escapes, plus named/numeric escapes and
    /// backtick-delimited interpolation.
    Fmt,
    /// `` ` ``-delimited: no escapes at all; only the closing run matters.
    Nat,
}

/// Which edge of a paired delimiter a token represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Begin,
    End,
}

/// The radix an integer or fractional literal was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberBase {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

/// A number literal, kept as its constituent digit runs rather than parsed
/// into a single numeric type — the lexer does not know the target width or
/// whether the parser wants a `Rational`, so it hands back exactly what was
/// written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NumberLit {
    pub base: NumberBase,
    /// Digits before the point, in the literal's own radix.
    pub integer: String,
    /// Digits after the point, decimal literals only; empty if absent.
    pub fraction: String,
    /// Exponent digits (decimal, may carry a leading `+`/`-`); empty if absent.
    pub exponent: String,
}

/// The escape form recognized inside a string body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EscapeDescriptor {
    /// `\\` escaping a literal backslash.
    Slash,
    /// A run of `"` or `'` escaped by a leading backslash, with its length.
    QuoteEscape(StrKind, usize),
    /// `\` followed by a run of decimal digits: a numeric code point escape.
    NumStrEsc(u32),
    /// `\` followed by a 1-, 2-, or 3-letter mnemonic from the ASCII control
    /// escape tables (`\n`, `\HT`, `\ESC`, ...), resolved to its code point.
    CharStrEsc(u32),
}

/// One lexical symbol: the payload half of a [`Token`], before span/offset
/// accounting is attached by the lexeme driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Synthetic sentinel emitted once at the very start of a token stream.
    Stx,
    /// Synthetic sentinel emitted once at the very end of a token stream.
    Etx,
    /// A single `\n` or `\r\n` line terminator.
    Eol,
    /// `;`, the explicit statement terminator.
    Terminator,
    /// `:`-run of length 1.
    BlockStart,
    /// `{` / `}`.
    Block(Side),
    /// `(` / `)`.
    Group(Side),
    /// `[` / `]`.
    List(Side),
    /// `«...»`-delimited editor/tooling marker, carrying its parsed decimal
    /// value.
    Marker(u64),

    /// A lowercase-headed identifier (variable, field, or function name).
    Var(String),
    /// An uppercase-headed identifier (type or data constructor name).
    Cons(String),

    KwAll,
    KwCase,
    KwClass,
    KwDef,
    KwImport,
    KwOf,
    KwType,
    KwForeign,
    KwNative,

    /// A maximal run of operator characters, not otherwise claimed by a
    /// keyword or fixed punctuator.
    Operator(String),
    /// An operator run immediately followed by `=` with no space in between
    /// (`+=`, `<<=`, ...), carrying the operator text without the `=`.
    Modifier(String),
    /// `.`-run of length 1: field/member access.
    Accessor,
    /// `.`-run of length 2: range construction (`..`).
    Range,
    /// `=`-run of length 1: assignment.
    Assignment,
    /// `@`: explicit type application.
    TypeApp,
    /// `|`: record/class merge.
    Merge,
    /// `.`-run of length 3 (`...`).
    Anything,
    /// `:`-run of length 2 (`::`): type ascription.
    Typed,

    Number(NumberLit),

    /// The opening or closing run of quote characters for a string entry.
    Quote(StrKind, Side),
    /// A run of literal text inside a string body, containing no escape.
    Str(String),
    /// A recognized escape sequence inside a string body.
    StrEsc(EscapeDescriptor),
    /// `\` followed by something matching none of the escape forms; carries
    /// the offending code point.
    StrWrongEsc(u32),

    /// `#`: disables the following token (parser-level, lexer just tags it).
    Disable,
    /// `##`-introduced documentation comment, carrying its text.
    Doc(String),
    /// `###`-introduced build metadata line, carrying its text.
    Metadata(String),

    /// Text the relevant sub-lexer could not bring to a valid conclusion
    /// (e.g. a number with trailing garbage), carrying what was consumed.
    Incorrect(String),
    /// A single character matched by none of the above, carrying itself.
    Unknown(String),
}

/// A positioned lexical token: a [`Symbol`] together with its own character
/// width (`span`) and the weighted horizontal whitespace that trails it
/// (`offset`). `span + offset`, summed over a full token stream, equals the
/// character length of the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<S> {
    pub span: Span,
    pub offset: Span,
    pub element: S,
}

impl<S> Token<S> {
    pub fn new(span: Span, offset: Span, element: S) -> Self {
        Self {
            span,
            offset,
            element,
        }
    }

    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Token<T> {
        Token {
            span: self.span,
            offset: self.offset,
            element: f(self.element),
        }
    }
}
