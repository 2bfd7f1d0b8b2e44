use crate::entity::{Catalog, LateFeePolicy, TransactionLog};

pub trait DependOnCatalog {
    fn catalog(&self) -> &Catalog;
    fn catalog_mut(&mut self) -> &mut Catalog;
}

pub trait DependOnTransactionLog {
    fn transaction_log(&self) -> &TransactionLog;
    fn transaction_log_mut(&mut self) -> &mut TransactionLog;
}

pub trait DependOnLateFeePolicy {
    fn late_fee_policy(&self) -> &LateFeePolicy;
}
