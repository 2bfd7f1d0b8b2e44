use std::path::PathBuf;

use error_stack::ResultExt;
use kernel::KernelError;

use crate::env_or;
use crate::error::ConvertError;

static CATALOG_PATH: &str = "LMS_CATALOG_PATH";
static LIBRARY_NAME: &str = "LMS_LIBRARY_NAME";

static DEFAULT_CATALOG_PATH: &str = "List_of_books.txt";
static DEFAULT_LIBRARY_NAME: &str = "Community";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub library_name: String,
}

impl AppConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let catalog_path = env_or(CATALOG_PATH, DEFAULT_CATALOG_PATH)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {CATALOG_PATH}"))?;
        let library_name = env_or(LIBRARY_NAME, DEFAULT_LIBRARY_NAME)
            .convert_error()
            .attach_printable_lazy(|| format!("Failed to read {LIBRARY_NAME}"))?;
        Ok(Self {
            catalog_path: PathBuf::from(catalog_path),
            library_name,
        })
    }
}
