//! Term rows and the result handle returned by provider queries

pub mod cursor;
pub mod models;

pub use cursor::TermCursor;
pub use models::*;
