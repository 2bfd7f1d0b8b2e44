use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use kernel::interface::query::CatalogQuery;
use kernel::interface::update::CatalogModifier;
use kernel::KernelError;

use crate::error::{ConvertError, DriverError};

/// Catalog kept as a plain text file with one title per line.
#[derive(Debug, Clone)]
pub struct TextFileCatalog {
    path: PathBuf,
}

impl TextFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogQuery for TextFileCatalog {
    fn read_all_lines(&self) -> error_stack::Result<Vec<String>, KernelError> {
        TextFileInternal::read_all_lines(&self.path)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {}", self.path.display()))
    }
}

impl CatalogModifier for TextFileCatalog {
    fn append_line(&self, line: &str) -> error_stack::Result<(), KernelError> {
        TextFileInternal::append_line(&self.path, line)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to write {}", self.path.display()))
    }
}

pub(in crate::database) struct TextFileInternal;

impl TextFileInternal {
    fn read_all_lines(path: &Path) -> Result<Vec<String>, DriverError> {
        let content = fs::read_to_string(path)?;
        let lines = content.lines().map(String::from).collect::<Vec<_>>();
        tracing::debug!(path = %path.display(), count = lines.len(), "Read catalog lines");
        Ok(lines)
    }

    fn append_line(path: &Path, line: &str) -> Result<(), DriverError> {
        // An unterminated last line would otherwise swallow the new title.
        let needs_break = match fs::read(path) {
            Ok(bytes) => bytes.last().is_some_and(|last| *last != b'\n'),
            Err(error) if error.kind() == ErrorKind::NotFound => false,
            Err(error) => return Err(DriverError::from(error)),
        };
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        if needs_break {
            writeln!(file)?;
        }
        writeln!(file, "{line}")?;
        tracing::debug!(path = %path.display(), "Appended catalog line");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use error_stack::ResultExt;
    use kernel::interface::query::CatalogQuery;
    use kernel::interface::update::CatalogModifier;
    use kernel::KernelError;

    use crate::database::TextFileCatalog;

    #[test]
    fn append_then_read() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().change_context(KernelError::Io)?;
        let catalog = TextFileCatalog::new(dir.path().join("books.txt"));

        catalog.append_line("Dune")?;
        catalog.append_line("Emma")?;

        assert_eq!(catalog.read_all_lines()?, vec!["Dune", "Emma"]);
        Ok(())
    }

    #[test]
    fn append_after_unterminated_line() -> error_stack::Result<(), KernelError> {
        let dir = tempfile::tempdir().change_context(KernelError::Io)?;
        let path = dir.path().join("books.txt");
        fs::write(&path, "Dune\nEmma").change_context(KernelError::Io)?;
        let catalog = TextFileCatalog::new(&path);

        catalog.append_line("Ulysses")?;

        assert_eq!(catalog.read_all_lines()?, vec!["Dune", "Emma", "Ulysses"]);
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = TextFileCatalog::new(dir.path().join("absent.txt"));

        let error = catalog.read_all_lines().unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Io);
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = TextFileCatalog::new(dir.path().join("missing-dir").join("books.txt"));

        let error = catalog.append_line("Dune").unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Io);
    }
}
