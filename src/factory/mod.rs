//! Car part factory simulation
//!
//! Machines tick once per simulated minute. Finished parts ride a conveyor
//! belt into a production bin, which is sorted into inventory and defect
//! counts at the end of each day. Orders are filled from inventory once the
//! run is over.

pub mod car_part_factory;
pub mod loader;
pub mod machine;
pub mod observer;
pub mod order;
pub mod part;

pub use car_part_factory::CarPartFactory;
pub use machine::PartMachine;
pub use observer::{BeltRecorder, FactoryObserver, LogObserver};
pub use order::{Order, OrderError};
pub use part::CarPart;
