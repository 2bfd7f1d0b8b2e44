mod holder;
mod id;
mod status;
mod title;

pub use self::{holder::*, id::*, status::*, title::*};
use crate::entity::common::IssuedAt;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    status: BookStatus,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, status: BookStatus) -> Self {
        Self { id, title, status }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, BookStatus::Available)
    }

    pub fn holder(&self) -> Option<&HolderName> {
        match &self.status {
            BookStatus::Available => None,
            BookStatus::Issued { holder, .. } => Some(holder),
        }
    }

    pub fn issued_at(&self) -> Option<&IssuedAt> {
        match &self.status {
            BookStatus::Available => None,
            BookStatus::Issued { issued_at, .. } => Some(issued_at),
        }
    }
}
