use crate::core::types::{BookId, UserId};
use serde::Serialize;

/// A library member and the ids of the books on their record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub checked_out: Vec<BookId>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, checked_out: Vec<BookId>) -> Self {
        Self {
            id,
            name: name.into(),
            checked_out,
        }
    }

    pub fn has_books(&self) -> bool {
        !self.checked_out.is_empty()
    }
}
