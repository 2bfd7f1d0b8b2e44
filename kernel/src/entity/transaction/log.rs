use crate::entity::Transaction;

/// Append-only, in call order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TransactionLog(Vec<Transaction>);

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, transaction: Transaction) {
        self.0.push(transaction);
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
