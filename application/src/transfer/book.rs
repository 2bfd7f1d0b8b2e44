use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: u32,
    pub title: String,
    pub status: String,
    pub holder_name: Option<String>,
    pub issued_at: Option<String>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let holder_name = value.holder().map(ToString::to_string);
        let issued_at = value.issued_at().map(ToString::to_string);
        let DestructBook { id, title, status } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            status: status.to_string(),
            holder_name,
            issued_at,
        }
    }
}

pub struct GetBookDto {
    pub id: String,
}

pub struct CreateBookDto {
    pub title: String,
}
