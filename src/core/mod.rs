pub mod collections;
pub mod csv_source;
pub mod errors;
pub mod execution;
pub mod types;
