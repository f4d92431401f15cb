/*!
 * Free Block Coalescing
 * Address-order merge pass over the free list
 */

use super::super::list::BlockList;
use super::MemoryManager;
use tracing::{debug, info};

/// Coalesce a free list
///
/// Drains `free_list` front to back into an address-ordered list, then merges
/// every run of address-adjacent blocks into one. Whatever order the input
/// held is discarded. Running it on its own output changes nothing.
pub fn coalesce(free_list: BlockList) -> BlockList {
    coalesce_counted(free_list).0
}

/// Coalesce and report how many merges happened
pub(super) fn coalesce_counted(mut free_list: BlockList) -> (BlockList, usize) {
    let mut staged = BlockList::new();
    for block in free_list.drain() {
        staged.insert_ordered_by_address(block);
    }

    let mut merges = 0;
    let mut index = 0;
    while let (Some(current), Some(next)) =
        (staged.get(index).copied(), staged.get(index + 1).copied())
    {
        if current.is_adjacent_to(&next) {
            // Grow `current` and test it again against its new neighbour
            if let Some(block) = staged.get_mut(index) {
                block.end = next.end;
            }
            let _ = staged.remove_at(index + 1);
            merges += 1;
            debug!(start = current.start, end = next.end, "Merged adjacent free blocks");
        } else {
            index += 1;
        }
    }

    (staged, merges)
}

impl MemoryManager {
    /// Replace the free list with its coalesced form
    ///
    /// Returns the number of merges performed.
    pub fn coalesce(&mut self) -> usize {
        let before = self.free_list.len();
        let (merged, merges) = coalesce_counted(std::mem::take(&mut self.free_list));
        self.free_list = merged;

        info!(
            merges,
            blocks_before = before,
            blocks_after = self.free_list.len(),
            "Coalesced free list"
        );
        merges
    }
}
