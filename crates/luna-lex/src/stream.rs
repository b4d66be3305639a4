//! The streaming pipeline: turns source text (or a sequence of chunks) into
//! a sequence of positioned [`Token`]s by repeatedly driving a [`Scanner`].
//!
//! [`tokenize`] is the whole-document convenience entry point — it wraps
//! the symbol sequence with `Stx`/`Etx` sentinels, emitted exactly once at
//! the very start and very end of the logical stream. [`tokenize_with`] and
//! [`tokenize_continuation`] are the resumable building blocks `tokenize`
//! is built from: for any partitioning of a text `T` into chunks `T_i` with
//! `s_0` the empty stack and each `s_i` the entry stack observed after
//! chunk `i - 1`, the concatenation of `tokenize_with(s_i, T_i)` yields the
//! same symbol sequence as a single `tokenize_with(s_0, T)` call, provided
//! chunk boundaries do not fall inside what would otherwise be a single
//! token's trailing whitespace (see the note on `Scanner::next_lexeme`).
//! They deliberately do not add their own `Stx`/`Etx` — those belong to the
//! logical document as a whole, not to each chunk.

use std::path::Path;

use luna_util::{ParseError, Span};

use crate::entry::EntryStack;
use crate::lexer::Scanner;
use crate::token::{Symbol, Token};

enum Phase {
    Start,
    Running,
    Done,
}

/// Iterator returned by [`tokenize`]: the full symbol stream for one
/// document, bracketed by a single `Stx` and a single `Etx`.
pub struct Tokens<'a> {
    scanner: Scanner<'a>,
    phase: Phase,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            scanner: Scanner::new(EntryStack::new(), text),
            phase: Phase::Start,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<Symbol>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Start => {
                self.phase = Phase::Running;
                Some(Token::new(Span::ZERO, Span::ZERO, Symbol::Stx))
            }
            Phase::Running => match self.scanner.next_lexeme() {
                Some(l) => Some(Token::new(l.span, l.offset, l.symbol)),
                None => {
                    self.phase = Phase::Done;
                    Some(Token::new(Span::ZERO, Span::ZERO, Symbol::Etx))
                }
            },
            Phase::Done => None,
        }
    }
}

/// Tokenizes a complete document, sentinels included.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens::new(text)
}

/// Resumes tokenizing `text` from a previously observed entry stack. No
/// `Stx`/`Etx` sentinels — this is a building block for chunked or
/// incremental consumers, not a whole-document entry point.
pub fn tokenize_with(stack: EntryStack, text: &str) -> impl Iterator<Item = Token<Symbol>> + '_ {
    let mut scanner = Scanner::new(stack, text);
    std::iter::from_fn(move || {
        scanner
            .next_lexeme()
            .map(|l| Token::new(l.span, l.offset, l.symbol))
    })
}

/// Iterator returned by [`tokenize_continuation`]: like [`tokenize_with`],
/// but each token also carries the entry stack observed immediately after
/// it, so a caller can persist exactly the state needed to resume on the
/// next chunk without re-deriving it.
pub struct ContinuationTokens<'a> {
    scanner: Scanner<'a>,
}

impl<'a> ContinuationTokens<'a> {
    fn new(stack: EntryStack, text: &'a str) -> Self {
        Self {
            scanner: Scanner::new(stack, text),
        }
    }

    /// The entry stack observed once this chunk is exhausted. Feed this
    /// into the next chunk's `tokenize_continuation` call to resume.
    pub fn entry_stack(&self) -> &EntryStack {
        self.scanner.entry_stack()
    }
}

impl<'a> Iterator for ContinuationTokens<'a> {
    type Item = Token<(Symbol, EntryStack)>;

    fn next(&mut self) -> Option<Self::Item> {
        let lexeme = self.scanner.next_lexeme()?;
        let stack_after = self.scanner.entry_stack().clone();
        Some(Token::new(lexeme.span, lexeme.offset, (lexeme.symbol, stack_after)))
    }
}

pub fn tokenize_continuation(stack: EntryStack, text: &str) -> ContinuationTokens<'_> {
    ContinuationTokens::new(stack, text)
}

/// A source of text chunks arriving incrementally — a file read in fixed
/// blocks, a network socket, or a test double feeding pre-split strings.
///
/// The current implementation (see [`tokenize_chunks`]) drains a
/// `ChunkSource` completely into one buffer before tokenizing, rather than
/// interleaving reads with scanning: an in-progress token (an identifier,
/// an operator run, a number) may not straddle a chunk boundary safely
/// without re-entrant buffering well beyond what the entry-stack model
/// gives for strings, and implementing that fully general buffering is not
/// attempted here. A `ChunkSource` is still a genuine extension point —
/// implementors only need to decide where their chunks come from, and any
/// splitting into unsafe boundaries only affects tokens that happen to
/// straddle one, not the rest of the stream.
pub trait ChunkSource {
    type Error;

    /// Returns the next chunk of text, or `None` once there is nothing left
    /// to read.
    fn read_next_chunk(&mut self) -> Result<Option<String>, Self::Error>;
}

fn drain_chunks<S: ChunkSource>(mut source: S) -> Result<String, S::Error> {
    let mut buffer = String::new();
    while let Some(chunk) = source.read_next_chunk()? {
        buffer.push_str(&chunk);
    }
    Ok(buffer)
}

pub fn try_tokenize_chunks<S: ChunkSource>(
    stack: EntryStack,
    source: S,
) -> Result<Vec<Token<Symbol>>, S::Error> {
    let buffer = drain_chunks(source)?;
    Ok(tokenize_with(stack, &buffer).collect())
}

pub fn tokenize_chunks<S: ChunkSource>(stack: EntryStack, source: S) -> Vec<Token<Symbol>>
where
    S::Error: std::fmt::Debug,
{
    try_tokenize_chunks(stack, source).unwrap_or_else(|e| panic!("chunk source failed: {e:?}"))
}

/// Reads `path` and tokenizes its contents, surfacing I/O or UTF-8 decode
/// failure as a [`ParseError`] rather than panicking.
pub fn try_tokenize_file(
    stack: EntryStack,
    path: impl AsRef<Path>,
) -> Result<Vec<Token<Symbol>>, ParseError> {
    let path_ref = path.as_ref();
    log::debug!("tokenizing file {}", path_ref.display());

    let bytes = std::fs::read(path_ref).map_err(|source| ParseError::Io {
        path: path_ref.display().to_string(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ParseError::InvalidUtf8 {
        path: path_ref.display().to_string(),
        source,
    })?;

    let tokens: Vec<_> = tokenize_with(stack, &text).collect();
    log::trace!("{} produced {} tokens", path_ref.display(), tokens.len());
    Ok(tokens)
}

/// Like [`try_tokenize_file`], but panics on I/O or UTF-8 decode failure
/// instead of returning a `Result` — for callers that have already decided
/// a missing or malformed file is unrecoverable.
pub fn tokenize_file(stack: EntryStack, path: impl AsRef<Path>) -> Vec<Token<Symbol>> {
    try_tokenize_file(stack, path).unwrap_or_else(|e| panic!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecSource(std::vec::IntoIter<String>);

    impl ChunkSource for VecSource {
        type Error = std::convert::Infallible;

        fn read_next_chunk(&mut self) -> Result<Option<String>, Self::Error> {
            Ok(self.0.next())
        }
    }

    #[test]
    fn tokenize_wraps_with_stx_and_etx() {
        let toks: Vec<_> = tokenize("x").map(|t| t.element).collect();
        assert_eq!(toks, vec![Symbol::Stx, Symbol::Var("x".into()), Symbol::Etx]);
    }

    #[test]
    fn tokenize_with_has_no_sentinels() {
        let toks: Vec<_> = tokenize_with(EntryStack::new(), "x").map(|t| t.element).collect();
        assert_eq!(toks, vec![Symbol::Var("x".into())]);
    }

    #[test]
    fn resumption_across_safe_chunk_boundary_matches_whole() {
        let whole: Vec<_> = tokenize_with(EntryStack::new(), "foo bar")
            .map(|t| t.element)
            .collect();

        let mut first = tokenize_continuation(EntryStack::new(), "foo ");
        let first_syms: Vec<_> = first.by_ref().map(|t| t.element.0).collect();
        let stack_after = first.entry_stack().clone();
        let second: Vec<_> = tokenize_with(stack_after, "bar").map(|t| t.element).collect();

        let mut resumed = first_syms;
        resumed.extend(second);
        assert_eq!(whole, resumed);
    }

    #[test]
    fn resumption_carries_open_string_across_chunks() {
        let mut first = tokenize_continuation(EntryStack::new(), r#""abc"#);
        let first_syms: Vec<_> = first.by_ref().map(|t| t.element.0).collect();
        let stack_after = first.entry_stack().clone();
        assert!(!stack_after.is_top_level());

        let second: Vec<_> = tokenize_with(stack_after, r#"def""#).map(|t| t.element).collect();
        assert_eq!(first_syms.last(), Some(&Symbol::Str("abc".into())));
        assert_eq!(second[0], Symbol::Str("def".into()));
        assert!(matches!(second.last(), Some(Symbol::Quote(crate::token::StrKind::Raw, crate::token::Side::End))));
    }

    #[test]
    fn chunk_source_drains_in_order() {
        let source = VecSource(vec!["foo".to_string(), " bar".to_string()].into_iter());
        let toks = tokenize_chunks(EntryStack::new(), source);
        let syms: Vec<_> = toks.into_iter().map(|t| t.element).collect();
        assert_eq!(syms, vec![Symbol::Var("foo".into()), Symbol::Var("bar".into())]);
    }
}
