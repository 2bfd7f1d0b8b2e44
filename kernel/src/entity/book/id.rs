use std::fmt::{Display, Formatter};
use vodca::{AsRefln, Fromln};

pub const FIRST_BOOK_ID: u32 = 101;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct BookId(u32);

impl BookId {
    pub fn new(id: impl Into<u32>) -> Self {
        Self(id.into())
    }

    pub fn first() -> Self {
        Self(FIRST_BOOK_ID)
    }

    /// Parses the decimal form shown to users. Anything else can never name a book.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u32>().ok().map(Self)
    }

    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
