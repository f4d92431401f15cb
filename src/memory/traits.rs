/*!
 * Memory Traits
 * Partition management abstractions
 */

use super::policy::PlacementPolicy;
use super::types::*;
use crate::core::types::{Pid, Size};

/// Allocator interface driven by the simulation loop
pub trait Allocator {
    /// Give `size` addresses to `pid`, choosing the block by `policy`
    fn allocate(&mut self, pid: Pid, size: Size, policy: PlacementPolicy) -> MemoryResult<Block>;

    /// Return the first block owned by `pid` to the free list
    fn deallocate(&mut self, pid: Pid, policy: PlacementPolicy) -> MemoryResult<Block>;

    /// Merge address-adjacent free blocks, returning the number of merges
    fn coalesce(&mut self) -> usize;
}

/// Partition statistics provider
pub trait MemoryInfo {
    /// Get overall partition statistics
    fn stats(&self) -> MemoryStats;

    /// Size of the managed address range
    fn partition_size(&self) -> Size;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
