/*!
 * Memory Allocator Implementation
 * Allocation and deallocation logic
 */

use super::super::policy::PlacementPolicy;
use super::super::types::{Block, MemoryError, MemoryResult};
use super::MemoryManager;
use crate::core::types::{Pid, Size};
use tracing::{debug, info, warn};

impl MemoryManager {
    /// Allocate `size` addresses to `pid`
    ///
    /// Takes the first free block that is large enough. The free list order
    /// maintained by `policy` makes that block the earliest, smallest or
    /// largest candidate. On failure nothing is mutated.
    pub fn allocate(&mut self, pid: Pid, size: Size, policy: PlacementPolicy) -> MemoryResult<Block> {
        if pid == 0 {
            warn!(pid, size, "Rejected allocation for reserved PID");
            return Err(MemoryError::ReservedPid(pid));
        }
        if size == 0 {
            warn!(pid, "Rejected zero-size allocation");
            return Err(MemoryError::AllocationFailed { pid, size });
        }

        let Some(index) = self.free_list.find_first(|b| b.size() >= size) else {
            warn!(
                pid,
                size,
                free_blocks = self.free_list.len(),
                %policy,
                "Allocation failed: no free block large enough"
            );
            return Err(MemoryError::AllocationFailed { pid, size });
        };

        let mut block = self.free_list.remove_at(index)?;
        let remainder_end = block.end;
        block.owner = pid;
        block.end = block.start + size - 1;

        // Exact fits leave no fragment behind
        if remainder_end > block.end {
            let fragment = Block::free(block.end + 1, remainder_end);
            debug!(
                start = fragment.start,
                end = fragment.end,
                %policy,
                "Split block, returning fragment to free list"
            );
            policy.insert(&mut self.free_list, fragment);
        }

        self.alloc_list.insert_ordered_by_address(block);
        info!(pid, size, start = block.start, end = block.end, %policy, "Allocated block");
        Ok(block)
    }

    /// Release the block owned by `pid` back to the free list
    ///
    /// Freed blocks are never merged here; adjacent free blocks stay separate
    /// until the next coalesce pass.
    pub fn deallocate(&mut self, pid: Pid, policy: PlacementPolicy) -> MemoryResult<Block> {
        let Some(index) = self.alloc_list.find_first(|b| b.owner == pid) else {
            warn!(pid, "Deallocation failed: PID owns no memory");
            return Err(MemoryError::DeallocationNotFound { pid });
        };

        let mut block = self.alloc_list.remove_at(index)?;
        block.owner = 0;
        policy.insert(&mut self.free_list, block);

        info!(pid, start = block.start, end = block.end, %policy, "Deallocated block");
        Ok(block)
    }
}
