use crate::KernelError;

pub trait CatalogQuery: 'static + Sync + Send {
    /// One entry per stored title, in id order.
    fn read_all_lines(&self) -> error_stack::Result<Vec<String>, KernelError>;
}

pub trait DependOnCatalogQuery: 'static + Sync + Send {
    type CatalogQuery: CatalogQuery;
    fn catalog_query(&self) -> &Self::CatalogQuery;
}
