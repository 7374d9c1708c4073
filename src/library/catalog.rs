use super::book::Book;
use super::loader::{load_books, load_users};
use super::user::User;
use crate::core::errors::LoadError;
use crate::core::types::BookId;
use chrono::NaiveDate;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Genres summarized in the report, in report order, with the tab run that
/// lines their counts up
pub const REPORT_GENRES: [(&str, &str); 5] = [
    ("Adventure", "\t\t\t\t\t"),
    ("Fiction", "\t\t\t\t\t\t"),
    ("Classics", "\t\t\t\t\t"),
    ("Mystery", "\t\t\t\t\t\t"),
    ("Science Fiction", "\t\t\t\t\t"),
];

const RULE: &str = "====================================================\n";

/// Settings for catalog operations that depend on the current date
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Date stamped on check-outs and used to compute late fees
    pub today: NaiveDate,
}

impl CatalogConfig {
    pub fn new() -> Self {
        Self {
            today: NaiveDate::from_ymd_opt(2023, 9, 15).unwrap_or_default(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Library catalog of books and the users borrowing them
#[derive(Debug, Clone)]
pub struct LibraryCatalog {
    catalog: Vec<Book>,
    users: Vec<User>,
    config: CatalogConfig,
}

impl LibraryCatalog {
    /// Load the catalog first, then users resolved against it
    pub fn from_files(
        catalog_path: impl AsRef<Path>,
        users_path: impl AsRef<Path>,
        config: CatalogConfig,
    ) -> Result<Self, LoadError> {
        let catalog = load_books(catalog_path.as_ref())?;
        let users = load_users(users_path.as_ref(), &catalog)?;
        Ok(Self::new(catalog, users, config))
    }

    pub fn new(catalog: Vec<Book>, users: Vec<User>, config: CatalogConfig) -> Self {
        Self {
            catalog,
            users,
            config,
        }
    }

    pub fn book_catalog(&self) -> &[Book] {
        &self.catalog
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.catalog.iter().find(|b| b.id == id)
    }

    fn find_book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.catalog.iter_mut().find(|b| b.id == id)
    }

    /// Add an available book stamped with today's date, returning its id
    ///
    /// The id is one past the highest id in the catalog.
    pub fn add_book(&mut self, title: &str, author: &str, genre: &str) -> BookId {
        let id = self.catalog.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        self.catalog
            .push(Book::new(id, title, author, genre, self.config.today, false));
        debug!("Added book {} '{}'", id, title);
        id
    }

    /// Remove the book with `id`, returning it
    pub fn remove_book(&mut self, id: BookId) -> Option<Book> {
        let position = self.catalog.iter().position(|b| b.id == id)?;
        debug!("Removed book {}", id);
        Some(self.catalog.remove(position))
    }

    /// Check out an available book; false if it is unknown or already out
    pub fn check_out_book(&mut self, id: BookId) -> bool {
        let today = self.config.today;
        match self.find_book_mut(id) {
            Some(book) if !book.checked_out => {
                book.checked_out = true;
                book.last_check_out = today;
                true
            }
            _ => false,
        }
    }

    /// Return a checked-out book; false if it is unknown or not out
    pub fn return_book(&mut self, id: BookId) -> bool {
        match self.find_book_mut(id) {
            Some(book) if book.checked_out => {
                book.checked_out = false;
                true
            }
            _ => false,
        }
    }

    /// Whether the book exists and is on the shelf
    pub fn get_book_availability(&self, id: BookId) -> bool {
        self.find_book(id).map(|b| !b.checked_out).unwrap_or(false)
    }

    /// Number of copies with this title, ignoring case
    pub fn book_count(&self, title: &str) -> usize {
        let title = title.to_lowercase();
        self.catalog
            .iter()
            .filter(|b| b.title.to_lowercase() == title)
            .count()
    }

    pub fn search_for_book<F>(&self, filter: F) -> Vec<&Book>
    where
        F: Fn(&Book) -> bool,
    {
        self.catalog.iter().filter(|b| filter(*b)).collect()
    }

    pub fn search_for_users<F>(&self, filter: F) -> Vec<&User>
    where
        F: Fn(&User) -> bool,
    {
        self.users.iter().filter(|u| filter(*u)).collect()
    }

    /// Fees owed by `user` for books on their record that are still out
    pub fn user_fees(&self, user: &User) -> f32 {
        user.checked_out
            .iter()
            .filter_map(|id| self.find_book(*id))
            .filter(|b| b.checked_out)
            .map(|b| b.calculate_fees(self.config.today))
            .fold(0.0, |acc, fee| acc + fee)
    }

    /// Full text report: genre summary, books out, and fees owed
    pub fn generate_report(&self) -> String {
        let mut output = String::from("\t\t\t\tREPORT\n\n");
        output.push_str("\t\tSUMMARY OF BOOKS\n");
        output.push_str("GENRE\t\t\t\t\t\tAMOUNT\n");

        let mut total_books = 0;
        for (genre, tabs) in REPORT_GENRES {
            let count = self.catalog.iter().filter(|b| b.genre == genre).count();
            total_books += count;
            output.push_str(&format!("{}{}{}\n", genre, tabs, count));
        }
        output.push_str(RULE);
        output.push_str(&format!("\t\t\tTOTAL AMOUNT OF BOOKS\t{}\n\n", total_books));

        output.push_str("\t\t\tBOOKS CURRENTLY CHECKED OUT\n\n");
        let checked_out: Vec<&Book> = self.catalog.iter().filter(|b| b.checked_out).collect();
        for book in &checked_out {
            output.push_str(&format!("{}\n", book));
        }
        output.push_str(RULE);
        output.push_str(&format!("\t\t\tTOTAL AMOUNT OF BOOKS\t{}\n\n", checked_out.len()));

        output.push_str("\n\n\t\tUSERS THAT OWE BOOK FEES\n\n");
        let mut total_fees = 0.0f32;
        for user in self.users.iter().filter(|u| u.has_books()) {
            let fees = self.user_fees(user);
            total_fees += fees;
            output.push_str(&format!("{}\t\t\t\t\t${}\n", user.name, format_amount(fees)));
        }

        output.push_str(RULE);
        output.push_str(&format!("\t\t\t\tTOTAL DUE\t${}\n\n\n", format_amount(total_fees)));
        output.push_str("\n\n");
        output
    }

    /// Write the report to `path`, creating parent directories as needed
    pub fn write_report(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.generate_report())?;
        info!("Wrote library report to {}", path.display());
        Ok(())
    }
}

/// Amounts always show a fractional part, e.g. `0.0` or `389.5`
fn format_amount(amount: f32) -> String {
    // adding positive zero turns -0.0 into 0.0
    format!("{:?}", amount + 0.0)
}
