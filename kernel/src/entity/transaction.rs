mod kind;
mod late_fee;
mod log;

pub use self::{kind::*, late_fee::*, log::*};
use crate::entity::{BookId, BookTitle, HolderName, IssuedAt, ReturnedOn};
use destructure::Destructure;
use vodca::References;

/// One issue or return event. There are no setters: a transaction never changes once recorded.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Transaction {
    kind: TransactionKind,
    book_id: BookId,
    book_title: BookTitle,
    member_name: HolderName,
    issue_date: IssuedAt,
    return_date: Option<ReturnedOn>,
    late_fee: LateFee,
}

impl Transaction {
    pub fn issued(
        book_id: BookId,
        book_title: BookTitle,
        member_name: HolderName,
        issue_date: IssuedAt,
    ) -> Self {
        Self {
            kind: TransactionKind::Issue,
            book_id,
            book_title,
            member_name,
            issue_date,
            return_date: None,
            late_fee: LateFee::default(),
        }
    }

    pub fn returned(
        book_id: BookId,
        book_title: BookTitle,
        member_name: HolderName,
        issue_date: IssuedAt,
        return_date: ReturnedOn,
        late_fee: LateFee,
    ) -> Self {
        Self {
            kind: TransactionKind::Return,
            book_id,
            book_title,
            member_name,
            issue_date,
            return_date: Some(return_date),
            late_fee,
        }
    }
}
