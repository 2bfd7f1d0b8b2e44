use kernel::prelude::entity::{DestructTransaction, Transaction};
use time::PrimitiveDateTime;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionDto {
    pub kind: String,
    pub book_id: u32,
    pub book_title: String,
    pub member_name: String,
    pub issue_date: String,
    pub return_date: Option<String>,
    pub late_fee: u32,
}

impl From<Transaction> for TransactionDto {
    fn from(value: Transaction) -> Self {
        let DestructTransaction {
            kind,
            book_id,
            book_title,
            member_name,
            issue_date,
            return_date,
            late_fee,
        } = value.into_destruct();
        Self {
            kind: kind.to_string(),
            book_id: book_id.into(),
            book_title: book_title.into(),
            member_name: member_name.into(),
            issue_date: issue_date.to_string(),
            return_date: return_date.map(|date| date.to_string()),
            late_fee: late_fee.into(),
        }
    }
}

pub struct IssueBookDto {
    pub book_id: String,
    pub holder_name: String,
    pub issued_at: PrimitiveDateTime,
}

pub struct ReturnBookDto {
    pub book_id: String,
    pub return_date: String,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ReturnedBookDto {
    pub transaction: TransactionDto,
    pub overdue_days: i64,
}
