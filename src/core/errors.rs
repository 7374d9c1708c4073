use thiserror::Error;

/// Errors raised while loading factory or catalog CSV files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path}:{line}: missing column '{field}'")]
    MissingField {
        path: String,
        line: u64,
        field: &'static str,
    },

    #[error("{path}:{line}: invalid {field} '{value}'")]
    InvalidField {
        path: String,
        line: u64,
        field: &'static str,
        value: String,
    },
}

impl LoadError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        LoadError::Csv {
            path: path.display().to_string(),
            source,
        }
    }
}
