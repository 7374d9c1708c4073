//! Generic containers shared by the factory and the library catalog

pub mod hash_table;
pub mod linked_stack;
pub mod list_queue;
pub mod traits;

pub use hash_table::{BasicHashFunction, HashTableSC};
pub use linked_stack::LinkedStack;
pub use list_queue::ListQueue;
pub use traits::{HashFunction, Map, Queue, Stack};
