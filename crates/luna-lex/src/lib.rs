//! Stateful, re-entrant lexical analyzer for Luna source text.
//!
//! The scanner is a pure function over `(remaining text, entry stack) ->
//! (symbol, remaining text, entry stack)`, repeated by the streaming
//! pipeline in [`stream`] to produce a sequence of positioned [`Token`]s.
//! Three string literal kinds (`Raw`/`Fmt`/`Nat`) share one nested,
//! unlimited-depth interpolation mechanism: a `Fmt` string's backtick
//! regions re-enter the top-level grammar, so `'a`'b`x`c`d'` is just as
//! valid as a single level of nesting.
//!
//! Malformed source never produces a hard error from this crate — it
//! degrades to [`token::Symbol::Incorrect`], [`token::Symbol::StrWrongEsc`],
//! or [`token::Symbol::Unknown`] tokens instead. [`luna_util::ParseError`]
//! is reserved for the `try_*` file-reading entry points in [`stream`],
//! where I/O and UTF-8 decoding are the only things that can really fail.

mod classify;
mod constants;
mod cursor;
mod dispatch;
mod entry;
mod escapes;
mod lexer;
mod stream;
mod token;

pub use classify::is_regular_operator_char;
pub use constants::{MARKER_BEGIN, MARKER_END, METADATA_HEADER};
pub use entry::{Entry, EntryStack};
pub use lexer::{Lexeme, Scanner};
pub use stream::{
    tokenize, tokenize_chunks, tokenize_continuation, tokenize_file, tokenize_with,
    try_tokenize_chunks, try_tokenize_file, ChunkSource, ContinuationTokens, Tokens,
};
pub use token::{EscapeDescriptor, NumberBase, NumberLit, Side, StrKind, Symbol, Token};
