mod book;
mod transaction;

pub use self::{book::*, transaction::*};
