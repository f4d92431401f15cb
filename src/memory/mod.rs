/*!
 * Memory Module
 * Partition allocation, placement policies and coalescing
 */

pub mod list;
pub mod manager;
pub mod policy;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use list::BlockList;
pub use manager::{coalesce, MemoryManager};
pub use policy::PlacementPolicy;
pub use traits::*;
pub use types::*;
