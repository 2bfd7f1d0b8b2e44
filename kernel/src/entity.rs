mod book;
mod catalog;
mod common;
mod transaction;

pub use self::{book::*, catalog::*, common::*, transaction::*};
