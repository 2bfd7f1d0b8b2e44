use std::fmt::{Display, Formatter};

use error_stack::ResultExt;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct IssuedAt(PrimitiveDateTime);

impl IssuedAt {
    pub fn new(time: impl Into<PrimitiveDateTime>) -> Self {
        Self(time.into())
    }

    pub fn date(&self) -> Date {
        self.0.date()
    }
}

impl Display for IssuedAt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .0
            .format(format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct ReturnedOn(Date);

impl ReturnedOn {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Parses `YYYY-MM-DD`.
    pub fn parse(raw: &str) -> error_stack::Result<Self, KernelError> {
        let raw = raw.trim();
        Date::parse(raw, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .change_context(KernelError::InvalidDate)
            .attach_printable_lazy(|| format!("Could not read `{raw}` as a date"))
    }
}

impl Display for ReturnedOn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .0
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}
