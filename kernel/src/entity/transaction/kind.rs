use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionKind {
    Issue,
    Return,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Issue => write!(f, "Issue"),
            TransactionKind::Return => write!(f, "Return"),
        }
    }
}
