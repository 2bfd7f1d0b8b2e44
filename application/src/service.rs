mod book;
mod circulation;

pub use self::{book::*, circulation::*};

use error_stack::Report;
use kernel::prelude::entity::BookId;
use kernel::KernelError;

pub(crate) fn parse_book_id(raw: &str) -> error_stack::Result<BookId, KernelError> {
    BookId::parse(raw).ok_or_else(|| {
        Report::new(KernelError::NotFound).attach_printable(format!("No book with id {raw}"))
    })
}
