use crate::core::types::BookId;
use chrono::NaiveDate;
use serde::Serialize;

/// Days a book may be out before fees start
pub const GRACE_PERIOD_DAYS: i64 = 31;

/// Flat fee charged once the grace period is over
pub const BASE_FEE: f32 = 10.0;

/// Fee per day past the grace period
pub const DAILY_FEE: f32 = 1.5;

/// A catalog book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub last_check_out: NaiveDate,
    pub checked_out: bool,
}

impl Book {
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        last_check_out: NaiveDate,
        checked_out: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            last_check_out,
            checked_out,
        }
    }

    /// Late fee owed as of `today`
    ///
    /// Nothing is owed until the book has been out for the grace period;
    /// from then on it is the base fee plus a daily fee for every day past it.
    pub fn calculate_fees(&self, today: NaiveDate) -> f32 {
        let days_out = (today - self.last_check_out).num_days();
        if days_out >= GRACE_PERIOD_DAYS {
            BASE_FEE + (days_out - GRACE_PERIOD_DAYS) as f32 * DAILY_FEE
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} BY {}",
            self.title.to_uppercase(),
            self.author.to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn book_out_since(last: NaiveDate) -> Book {
        Book::new(1, "Dune", "Frank Herbert", "Science Fiction", last, true)
    }

    #[test]
    fn test_display_uppercases() {
        let book = Book::new(34, "The Little Prince", "Antoine de Saint-Exupery", "Fiction", date(2023, 1, 1), false);
        assert_eq!(book.to_string(), "THE LITTLE PRINCE BY ANTOINE DE SAINT-EXUPERY");
    }

    #[test]
    fn test_no_fee_inside_grace_period() {
        let today = date(2023, 9, 15);
        assert_eq!(book_out_since(date(2023, 9, 1)).calculate_fees(today), 0.0);
        assert_eq!(book_out_since(date(2023, 8, 16)).calculate_fees(today), 0.0);
    }

    #[test]
    fn test_fee_starts_on_day_31() {
        let today = date(2023, 9, 15);
        // 31 days out
        assert_eq!(book_out_since(date(2023, 8, 15)).calculate_fees(today), 10.0);
        // 32 days out
        assert_eq!(book_out_since(date(2023, 8, 14)).calculate_fees(today), 11.5);
    }

    #[test]
    fn test_long_overdue_fee() {
        // 284 days out: 10 + 253 * 1.5
        let fee = book_out_since(date(2022, 12, 5)).calculate_fees(date(2023, 9, 15));
        assert_eq!(fee, 389.5);
    }
}
