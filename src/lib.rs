pub mod core;
pub mod factory;
pub mod library;

// Re-export commonly used types
pub use crate::core::errors::LoadError;
pub use crate::core::execution::{ConcurrencyMode, SimulationConfig};
pub use crate::factory::{CarPart, CarPartFactory, Order, PartMachine};
pub use crate::library::{Book, CatalogConfig, LibraryCatalog, User};
