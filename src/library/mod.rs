//! Library catalog: books, borrowers, check-outs and the fee report

pub mod book;
pub mod catalog;
pub mod loader;
pub mod user;

pub use book::Book;
pub use catalog::{CatalogConfig, LibraryCatalog};
pub use user::User;
