/*!
 * MMU Simulator Library
 * Contiguous single-partition allocator with FIFO, best-fit and worst-fit placement
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod simulation;

// Re-exports
pub use crate::core::{SimError, SimResult};
pub use memory::{
    coalesce, Allocator, Block, BlockList, BlockView, MemoryError, MemoryInfo, MemoryManager,
    MemoryStats, PlacementPolicy,
};
pub use monitoring::init_tracing;
pub use simulation::{Operation, Outcome, Simulation, SimulationConfig, SimulationReport};
