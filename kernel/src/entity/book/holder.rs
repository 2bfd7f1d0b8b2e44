use std::fmt::{Display, Formatter};

use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct HolderName(String);

impl HolderName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn validated(name: impl AsRef<str>) -> error_stack::Result<Self, KernelError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("Member name cannot be empty.".to_string()));
        }
        Ok(Self(name.to_string()))
    }
}

impl Display for HolderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
