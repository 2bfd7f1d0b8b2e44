use crate::KernelError;

pub trait CatalogModifier: 'static + Sync + Send {
    fn append_line(&self, line: &str) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCatalogModifier: 'static + Sync + Send {
    type CatalogModifier: CatalogModifier;
    fn catalog_modifier(&self) -> &Self::CatalogModifier;
}
