//! Row access shared by the factory and catalog loaders

use super::errors::LoadError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A CSV file whose first row is a header
///
/// Rows may have differing lengths; each field is trimmed.
pub struct CsvSource {
    path: PathBuf,
    reader: csv::Reader<File>,
}

/// One data row together with where it came from, for error reporting
pub struct Row<'a> {
    path: &'a Path,
    record: StringRecord,
}

impl CsvSource {
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
        let reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(file);
        Ok(Self {
            path: path.to_path_buf(),
            reader,
        })
    }

    /// Visit every non-blank data row in file order
    pub fn for_each_row<F>(&mut self, mut visit: F) -> Result<(), LoadError>
    where
        F: FnMut(Row<'_>) -> Result<(), LoadError>,
    {
        for result in self.reader.records() {
            let record = result.map_err(|e| LoadError::csv(&self.path, e))?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            visit(Row {
                path: &self.path,
                record,
            })?;
        }
        Ok(())
    }
}

impl<'a> Row<'a> {
    /// 1-based line number in the source file
    pub fn line(&self) -> u64 {
        self.record.position().map(|p| p.line()).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.record.len()
    }

    /// Raw text of column `index`
    pub fn text(&self, index: usize, field: &'static str) -> Result<&str, LoadError> {
        self.record.get(index).ok_or_else(|| LoadError::MissingField {
            path: self.path.display().to_string(),
            line: self.line(),
            field,
        })
    }

    /// Column `index` parsed with `FromStr`
    pub fn parse<T: FromStr>(&self, index: usize, field: &'static str) -> Result<T, LoadError> {
        let text = self.text(index, field)?;
        text.parse().map_err(|_| self.invalid(field, text))
    }

    /// Build an `InvalidField` error located at this row
    pub fn invalid(&self, field: &'static str, value: &str) -> LoadError {
        LoadError::InvalidField {
            path: self.path.display().to_string(),
            line: self.line(),
            field,
            value: value.to_string(),
        }
    }
}
