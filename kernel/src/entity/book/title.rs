use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

pub const MAX_TITLE_LENGTH: usize = 25;

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Accepts titles entered by a user: non-empty and at most [`MAX_TITLE_LENGTH`] characters.
    pub fn validated(title: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let title = title.into();
        let length = title.chars().count();
        if title.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Book title cannot be empty. Try again.".to_string()));
        }
        if length > MAX_TITLE_LENGTH {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "Book title length is too long! Title length should be {MAX_TITLE_LENGTH} characters max. (got {length})"
            )));
        }
        if title.contains(['\n', '\r']) {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Book title must fit on a single line.".to_string()));
        }
        Ok(Self(title))
    }
}

impl Display for BookTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::BookTitle;
    use crate::KernelError;

    #[test]
    fn accepts_boundary_lengths() -> error_stack::Result<(), KernelError> {
        let single = BookTitle::validated("A")?;
        assert_eq!(single.as_ref(), "A");

        let longest = "x".repeat(25);
        let title = BookTitle::validated(longest.clone())?;
        assert_eq!(title.as_ref(), &longest);
        Ok(())
    }

    #[test]
    fn rejects_empty_and_overlong() {
        let empty = BookTitle::validated("").unwrap_err();
        assert_eq!(empty.current_context(), &KernelError::Validation);

        let overlong = BookTitle::validated("x".repeat(26)).unwrap_err();
        assert_eq!(overlong.current_context(), &KernelError::Validation);

        let multiline = BookTitle::validated("Dune\nEmma").unwrap_err();
        assert_eq!(multiline.current_context(), &KernelError::Validation);
    }

    #[test]
    fn counts_characters_not_bytes() -> error_stack::Result<(), KernelError> {
        let title = BookTitle::validated("é".repeat(25))?;
        assert_eq!(title.as_ref().chars().count(), 25);
        Ok(())
    }
}
