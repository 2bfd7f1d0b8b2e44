use kernel::interface::query::{CatalogQuery, DependOnCatalogQuery};
use kernel::interface::state::DependOnCatalog;
use kernel::interface::update::{CatalogModifier, DependOnCatalogModifier};
use kernel::prelude::entity::{BookTitle, Catalog};
use kernel::KernelError;

use crate::service::parse_book_id;
use crate::transfer::{BookDto, CreateBookDto, GetBookDto};

pub trait LoadCatalogService: DependOnCatalog + DependOnCatalogQuery {
    /// Rebuilds the catalog from the backing source and returns how many books it holds.
    ///
    /// An unreadable source leaves the catalog empty. The error is still returned so the caller
    /// can warn about it, but the instance stays usable.
    fn load_catalog(&mut self) -> error_stack::Result<usize, KernelError> {
        let lines = match self.catalog_query().read_all_lines() {
            Ok(lines) => lines,
            Err(report) => {
                tracing::warn!("Starting with an empty catalog: {report:?}");
                *self.catalog_mut() = Catalog::new();
                return Err(report);
            }
        };

        let catalog = Catalog::from_titles(lines.iter().map(|line| BookTitle::new(line.trim())));
        let count = catalog.len();
        *self.catalog_mut() = catalog;
        tracing::info!(count, "Catalog loaded");
        Ok(count)
    }
}

impl<T> LoadCatalogService for T where T: DependOnCatalog + DependOnCatalogQuery {}

pub trait AddBookService: DependOnCatalog + DependOnCatalogModifier {
    /// Persists the title first so a failed write never leaves a book only in memory.
    fn add_book(&mut self, dto: CreateBookDto) -> error_stack::Result<u32, KernelError> {
        let title = BookTitle::validated(dto.title)?;
        self.catalog_modifier().append_line(title.as_ref())?;
        let id = self.catalog_mut().insert(title);
        tracing::info!(%id, "Book added");
        Ok(id.into())
    }
}

impl<T> AddBookService for T where T: DependOnCatalog + DependOnCatalogModifier {}

pub trait GetBookService: DependOnCatalog {
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let id = parse_book_id(&dto.id)?;
        let book = self.catalog().get(&id)?;
        Ok(BookDto::from(book.clone()))
    }

    fn list_books(&self) -> Vec<BookDto> {
        self.catalog()
            .list_all()
            .map(|(_, book)| BookDto::from(book.clone()))
            .collect()
    }
}

impl<T> GetBookService for T where T: DependOnCatalog {}
