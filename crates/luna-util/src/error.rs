use thiserror::Error;

/// The only hard-error surface the lexer exposes.
///
/// Malformed *source text* never reaches this type — the lexer degrades to
/// `Incorrect`/`StrWrongEsc`/`Unknown` tokens instead of failing.
/// `ParseError` exists solely for the `try_*` entry points that read a file
/// from disk, where I/O and UTF-8 decoding really can fail before a single
/// token is produced.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}
