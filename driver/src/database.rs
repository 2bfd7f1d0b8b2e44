pub use self::text_file::*;

mod text_file;
