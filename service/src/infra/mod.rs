//! Infrastructure layer.

pub mod database;

pub use self::database::{memory, Database, DatabaseMut, Memory};
