use std::fmt::Display;

use error_stack::Context;

use crate::entity::{HolderName, IssuedAt};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    Validation,
    NotFound,
    AlreadyIssued,
    NotIssued,
    InvalidDate,
    Io,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::NotFound => write!(f, "Book ID not found"),
            KernelError::AlreadyIssued => write!(f, "Book is already issued"),
            KernelError::NotIssued => write!(f, "Book is already available in the library"),
            KernelError::InvalidDate => write!(f, "Invalid date format. Please use YYYY-MM-DD"),
            KernelError::Io => write!(f, "Catalog source is not accessible"),
        }
    }
}

impl Context for KernelError {}

/// Attached to [`KernelError::AlreadyIssued`] reports.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IssuedTo {
    pub holder: HolderName,
    pub issued_at: IssuedAt,
}

impl Display for IssuedTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "This book is already issued to {} on {}",
            self.holder, self.issued_at
        )
    }
}
