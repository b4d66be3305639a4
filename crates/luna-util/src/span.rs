/// A character-counted width into the source text.
///
/// Luna tokens are measured in characters, not bytes, so `Span` is a plain
/// newtype over `usize` rather than a byte range — there is no source map
/// or file id here, because the lexer never needs to resolve a span back to
/// a line/column; that is the parser's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span(pub usize);

impl Span {
    pub const ZERO: Span = Span(0);

    pub fn new(chars: usize) -> Self {
        Self(chars)
    }

    pub fn chars(self) -> usize {
        self.0
    }
}

impl std::ops::Add for Span {
    type Output = Span;

    fn add(self, rhs: Span) -> Span {
        Span(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Span {
    fn add_assign(&mut self, rhs: Span) {
        self.0 += rhs.0;
    }
}
