use std::fmt::{Display, Formatter};

use crate::entity::{HolderName, IssuedAt};

/// Holder and timestamp exist only while a book is out.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum BookStatus {
    #[default]
    Available,
    Issued {
        holder: HolderName,
        issued_at: IssuedAt,
    },
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued { .. } => write!(f, "Already Issued"),
        }
    }
}
