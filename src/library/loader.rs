//! Reads the book catalog and the user list from CSV
//!
//! Catalog file: `id, title, author, genre, last_check_out, checked_out`
//! with dates as `YYYY-MM-DD`. Users file: `id, name[, {id id ...}]` where the
//! optional last column lists the ids of books on the user's record.

use super::book::Book;
use super::user::User;
use crate::core::csv_source::{CsvSource, Row};
use crate::core::errors::LoadError;
use crate::core::types::{BookId, UserId};
use chrono::NaiveDate;
use log::{info, warn};
use std::path::Path;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn load_books(path: &Path) -> Result<Vec<Book>, LoadError> {
    let mut books = Vec::new();
    CsvSource::open(path)?.for_each_row(|row| {
        books.push(book_from_row(&row)?);
        Ok(())
    })?;
    info!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

fn book_from_row(row: &Row<'_>) -> Result<Book, LoadError> {
    let id: BookId = row.parse(0, "id")?;
    let title = row.text(1, "title")?;
    let author = row.text(2, "author")?;
    let genre = row.text(3, "genre")?;

    let date_text = row.text(4, "last_check_out")?;
    let last_check_out = NaiveDate::parse_from_str(date_text, DATE_FORMAT)
        .map_err(|_| row.invalid("last_check_out", date_text))?;

    // Anything other than "true" counts as available
    let checked_out = row.text(5, "checked_out")?.eq_ignore_ascii_case("true");

    Ok(Book::new(id, title, author, genre, last_check_out, checked_out))
}

/// Load users, resolving their book ids against `books`
///
/// Ids missing from the catalog are dropped with a warning.
pub fn load_users(path: &Path, books: &[Book]) -> Result<Vec<User>, LoadError> {
    let mut users = Vec::new();
    CsvSource::open(path)?.for_each_row(|row| {
        let id: UserId = row.parse(0, "id")?;
        let name = row.text(1, "name")?;

        let mut checked_out = Vec::new();
        if row.len() > 2 {
            let list = row.text(2, "checked_out")?;
            for book_id in parse_book_ids(list).ok_or_else(|| row.invalid("checked_out", list))? {
                if books.iter().any(|b| b.id == book_id) {
                    checked_out.push(book_id);
                } else {
                    warn!("User {} references unknown book {}, skipping", id, book_id);
                }
            }
        }

        users.push(User::new(id, name, checked_out));
        Ok(())
    })?;
    info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Parse `{1 2 3}` into book ids; an empty field or `{}` yields no ids
pub fn parse_book_ids(text: &str) -> Option<Vec<BookId>> {
    let inner = text.trim().trim_start_matches('{').trim_end_matches('}');
    inner.split_whitespace().map(|id| id.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_ids() {
        assert_eq!(parse_book_ids("{4 18 33}"), Some(vec![4, 18, 33]));
        assert_eq!(parse_book_ids("{7}"), Some(vec![7]));
        assert_eq!(parse_book_ids("{}"), Some(vec![]));
        assert_eq!(parse_book_ids(""), Some(vec![]));
        assert_eq!(parse_book_ids("{1 x}"), None);
    }
}
