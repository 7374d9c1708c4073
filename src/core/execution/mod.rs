pub mod config;

pub use config::{ConcurrencyMode, SimulationConfig};
