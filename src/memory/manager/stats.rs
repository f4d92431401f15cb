/*!
 * Memory Statistics and Consistency Checks
 */

use super::super::types::{Block, MemoryError, MemoryResult, MemoryStats};
use super::MemoryManager;

impl MemoryManager {
    pub fn stats(&self) -> MemoryStats {
        let allocated_bytes = self.alloc_list.total_size();
        let free_bytes = self.free_list.total_size();
        let largest_free_block = self.free_list.iter().map(Block::size).max().unwrap_or(0);

        let external_fragmentation = if free_bytes == 0 {
            0.0
        } else {
            1.0 - (largest_free_block as f64 / free_bytes as f64)
        };

        MemoryStats {
            partition_size: self.partition_size,
            allocated_bytes,
            free_bytes,
            allocated_blocks: self.alloc_list.len(),
            free_blocks: self.free_list.len(),
            largest_free_block,
            external_fragmentation,
        }
    }

    /// Verify that both lists still tile the partition exactly
    ///
    /// Checks owner tags on each list, address order of the allocated list,
    /// disjointness across both lists and that together they cover
    /// `[0, partition_size - 1]` with no gap.
    pub fn check_invariants(&self) -> MemoryResult<()> {
        if let Some(b) = self.free_list.iter().find(|b| !b.is_free()) {
            return Err(corruption(format!("owned block {} on free list", b)));
        }
        if let Some(b) = self.alloc_list.iter().find(|b| b.is_free()) {
            return Err(corruption(format!("free block {} on allocated list", b)));
        }

        let allocated: Vec<&Block> = self.alloc_list.iter().collect();
        if allocated.windows(2).any(|w| w[0].start > w[1].start) {
            return Err(corruption("allocated list is not in address order".into()));
        }

        let mut all: Vec<&Block> = self.free_list.iter().chain(allocated).collect();
        all.sort_by_key(|b| b.start);

        let mut expected_start = 0;
        for block in all {
            if block.start < expected_start {
                return Err(corruption(format!("block {} overlaps its predecessor", block)));
            }
            if block.start > expected_start {
                return Err(corruption(format!(
                    "addresses {}..{} belong to no block",
                    expected_start, block.start
                )));
            }
            expected_start = block.end + 1;
        }

        if expected_start != self.partition_size {
            return Err(corruption(format!(
                "blocks cover {} addresses, partition holds {}",
                expected_start, self.partition_size
            )));
        }
        Ok(())
    }
}

fn corruption(detail: String) -> MemoryError {
    MemoryError::CorruptionDetected(detail)
}
