use driver::config::AppConfig;
use driver::database::TextFileCatalog;
use kernel::interface::query::DependOnCatalogQuery;
use kernel::interface::state::{DependOnCatalog, DependOnLateFeePolicy, DependOnTransactionLog};
use kernel::interface::update::DependOnCatalogModifier;
use kernel::prelude::entity::{Catalog, LateFeePolicy, TransactionLog};

/// The one library instance a console session works on.
pub struct AppModule {
    library_name: String,
    catalog: Catalog,
    transaction_log: TransactionLog,
    late_fee_policy: LateFeePolicy,
    source: TextFileCatalog,
}

impl AppModule {
    /// Starts empty; call `load_catalog` to read the backing file.
    pub fn new(config: AppConfig) -> Self {
        Self {
            library_name: config.library_name,
            catalog: Catalog::new(),
            transaction_log: TransactionLog::new(),
            late_fee_policy: LateFeePolicy::default(),
            source: TextFileCatalog::new(config.catalog_path),
        }
    }

    pub fn library_name(&self) -> &str {
        &self.library_name
    }
}

impl DependOnCatalog for AppModule {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }
}

impl DependOnTransactionLog for AppModule {
    fn transaction_log(&self) -> &TransactionLog {
        &self.transaction_log
    }

    fn transaction_log_mut(&mut self) -> &mut TransactionLog {
        &mut self.transaction_log
    }
}

impl DependOnLateFeePolicy for AppModule {
    fn late_fee_policy(&self) -> &LateFeePolicy {
        &self.late_fee_policy
    }
}

impl DependOnCatalogQuery for AppModule {
    type CatalogQuery = TextFileCatalog;
    fn catalog_query(&self) -> &Self::CatalogQuery {
        &self.source
    }
}

impl DependOnCatalogModifier for AppModule {
    type CatalogModifier = TextFileCatalog;
    fn catalog_modifier(&self) -> &Self::CatalogModifier {
        &self.source
    }
}
