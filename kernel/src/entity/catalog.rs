use std::collections::BTreeMap;

use error_stack::Report;

use crate::entity::{Book, BookId, BookStatus, BookTitle, HolderName, IssuedAt};
use crate::KernelError;

/// Every book in the library keyed by id. Ids only grow, so key order is insertion order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Catalog {
    books: BTreeMap<BookId, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers titles sequentially from [`BookId::first`], one per source line.
    pub fn from_titles(titles: impl IntoIterator<Item = BookTitle>) -> Self {
        let mut catalog = Self::new();
        for title in titles {
            catalog.insert(title);
        }
        catalog
    }

    pub fn next_id(&self) -> BookId {
        self.books
            .keys()
            .next_back()
            .map_or_else(BookId::first, BookId::next)
    }

    pub fn insert(&mut self, title: BookTitle) -> BookId {
        let id = self.next_id();
        self.books
            .insert(id, Book::new(id, title, BookStatus::Available));
        id
    }

    pub fn get(&self, id: &BookId) -> error_stack::Result<&Book, KernelError> {
        self.books.get(id).ok_or_else(|| not_found(id))
    }

    pub fn set_issued(
        &mut self,
        id: &BookId,
        holder: HolderName,
        issued_at: IssuedAt,
    ) -> error_stack::Result<(), KernelError> {
        let book = self.books.get_mut(id).ok_or_else(|| not_found(id))?;
        book.substitute(|book| {
            *book.status = BookStatus::Issued { holder, issued_at };
        });
        Ok(())
    }

    pub fn set_available(&mut self, id: &BookId) -> error_stack::Result<(), KernelError> {
        let book = self.books.get_mut(id).ok_or_else(|| not_found(id))?;
        book.substitute(|book| {
            *book.status = BookStatus::Available;
        });
        Ok(())
    }

    pub fn list_all(&self) -> impl Iterator<Item = (&BookId, &Book)> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

fn not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("No book with id {id}"))
}
