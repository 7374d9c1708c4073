/// Configuration for factory simulation runs
/// 
/// This module provides configuration types for controlling how machines are
/// ticked, how their randomness is seeded and how long their conveyor belts are.

/// Number of slots on a machine's conveyor belt unless configured otherwise
pub const DEFAULT_CONVEYOR_BELT_LENGTH: usize = 10;

/// Base seed used when none is configured
pub const DEFAULT_SEED: u64 = 20240901;

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    /// Sequential execution mode - machines are ticked in order within a single thread
    #[default]
    Sequential,
    /// Parallel execution mode using Rayon - machines are ticked concurrently,
    /// output is still collected in machine order
    Rayon,
}

/// Configuration for simulation execution
/// 
/// This struct holds configuration options that control how the simulation is executed,
/// including concurrency settings and the per-machine random seeding.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// The concurrency mode to use for execution
    pub concurrency_mode: ConcurrencyMode,
    /// The size of the thread pool for parallel execution
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
    /// Base seed; each machine mixes in its own id
    pub seed: u64,
    /// Number of slots on every conveyor belt
    pub conveyor_belt_length: usize,
}

impl SimulationConfig {
    /// Create a new simulation configuration with default values
    /// 
    /// Default configuration uses Sequential mode, no thread pool and a
    /// ten-slot conveyor belt
    pub fn new() -> Self {
        Self {
            concurrency_mode: ConcurrencyMode::default(),
            thread_pool_size: None,
            seed: DEFAULT_SEED,
            conveyor_belt_length: DEFAULT_CONVEYOR_BELT_LENGTH,
        }
    }
    
    /// Set the concurrency mode for the simulation
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }
    
    /// Set the thread pool size for parallel execution
    /// 
    /// # Note
    /// This setting only affects execution when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }

    /// Set the base random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the conveyor belt length; zero is raised to one slot
    pub fn with_conveyor_belt_length(mut self, length: usize) -> Self {
        self.conveyor_belt_length = length.max(1);
        self
    }

    /// Seed for the machine with the given id
    pub fn machine_seed(&self, machine_id: u32) -> u64 {
        self.seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(u64::from(machine_id))
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
