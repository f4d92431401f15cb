/*!
 * Memory Management
 *
 * Single-partition contiguous allocator.
 *
 * ## Layout
 *
 * The partition `[0, partition_size - 1]` is always covered exactly by two
 * ordered lists of disjoint blocks:
 *
 * - **free list**: order set by the active placement policy
 *   (arrival order, ascending size or descending size)
 * - **allocated list**: ascending address
 *
 * ## Operations
 *
 * - **Allocation**: first free block large enough wins; the policy's list order
 *   turns that into first-fit, best-fit or worst-fit. Larger blocks are split and
 *   the remainder goes back to the free list.
 * - **Deallocation**: the owner's block moves back to the free list unmerged.
 * - **Coalescing**: an explicit pass that re-sorts the free list by address and
 *   merges adjacent blocks.
 */

mod allocator;
mod coalesce;
mod stats;

pub use coalesce::coalesce;

use super::list::BlockList;
use super::policy::PlacementPolicy;
use super::traits::{Allocator, MemoryInfo};
use super::types::{Block, BlockView, MemoryError, MemoryResult, MemoryStats};
use crate::core::types::{Pid, Size};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Memory manager for one partition
///
/// Owns both block lists exclusively; callers only ever see borrowed views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryManager {
    pub(super) partition_size: Size,
    pub(super) free_list: BlockList,
    pub(super) alloc_list: BlockList,
}

impl MemoryManager {
    /// Create a manager whose free list holds the whole partition
    pub fn new(partition_size: Size) -> MemoryResult<Self> {
        if partition_size == 0 {
            return Err(MemoryError::InvalidPartition(partition_size));
        }

        let mut free_list = BlockList::new();
        free_list.insert_front(Block::free(0, partition_size - 1));

        info!(partition_size, "Memory manager initialized");
        Ok(Self {
            partition_size,
            free_list,
            alloc_list: BlockList::new(),
        })
    }

    pub fn partition_size(&self) -> Size {
        self.partition_size
    }

    pub fn free_list(&self) -> &BlockList {
        &self.free_list
    }

    pub fn alloc_list(&self) -> &BlockList {
        &self.alloc_list
    }

    /// Free blocks in current free-list order
    pub fn free_blocks(&self) -> impl Iterator<Item = BlockView> + '_ {
        self.free_list.iter().map(Block::view)
    }

    /// Allocated blocks in address order
    pub fn allocated_blocks(&self) -> impl Iterator<Item = BlockView> + '_ {
        self.alloc_list.iter().map(Block::view)
    }

    /// Allocated block owned by `pid`, if any
    pub fn block_of(&self, pid: Pid) -> Option<&Block> {
        self.alloc_list
            .find_first(|b| b.owner == pid)
            .and_then(|index| self.alloc_list.get(index))
    }
}

// Implement trait interfaces
impl Allocator for MemoryManager {
    fn allocate(&mut self, pid: Pid, size: Size, policy: PlacementPolicy) -> MemoryResult<Block> {
        MemoryManager::allocate(self, pid, size, policy)
    }

    fn deallocate(&mut self, pid: Pid, policy: PlacementPolicy) -> MemoryResult<Block> {
        MemoryManager::deallocate(self, pid, policy)
    }

    fn coalesce(&mut self) -> usize {
        MemoryManager::coalesce(self)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn partition_size(&self) -> Size {
        MemoryManager::partition_size(self)
    }
}
