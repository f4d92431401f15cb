/*!
 * Ordered Block List
 * Owned sequence of blocks with order-preserving insertion
 *
 * The list has no opinion about which order it holds. Whoever owns it picks
 * one insertion function per list and sticks with it:
 * - arrival order (`insert_back`) for FIFO free lists
 * - ascending size for best-fit free lists
 * - descending size for worst-fit free lists
 * - ascending address for the allocated list and coalesce staging
 *
 * Mixing insertion functions on one list silently breaks its order. Indices
 * are not stable across mutations.
 */

use super::types::{Block, MemoryError, MemoryResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Ordered container of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockList {
    blocks: VecDeque<Block>,
}

impl BlockList {
    pub fn new() -> Self {
        Self {
            blocks: VecDeque::new(),
        }
    }

    pub fn insert_front(&mut self, block: Block) {
        self.blocks.push_front(block);
    }

    pub fn insert_back(&mut self, block: Block) {
        self.blocks.push_back(block);
    }

    /// Insert before logical position `index`
    ///
    /// An index at or past the end appends instead of failing.
    pub fn insert_at(&mut self, block: Block, index: usize) {
        if index >= self.blocks.len() {
            self.blocks.push_back(block);
        } else {
            self.blocks.insert(index, block);
        }
    }

    /// Insert before the first block whose start exceeds `block.start`
    pub fn insert_ordered_by_address(&mut self, block: Block) {
        self.insert_before_first(block, |current, new| current.start > new.start);
    }

    /// Insert before the first block at least as large as `block`
    pub fn insert_ordered_by_size_ascending(&mut self, block: Block) {
        self.insert_before_first(block, |current, new| current.size() >= new.size());
    }

    /// Insert after every block at least as large as `block`
    pub fn insert_ordered_by_size_descending(&mut self, block: Block) {
        self.insert_before_first(block, |current, new| current.size() < new.size());
    }

    fn insert_before_first<F>(&mut self, block: Block, stop: F)
    where
        F: Fn(&Block, &Block) -> bool,
    {
        match self.blocks.iter().position(|current| stop(current, &block)) {
            Some(index) => self.blocks.insert(index, block),
            None => self.blocks.push_back(block),
        }
    }

    pub fn remove_front(&mut self) -> MemoryResult<Block> {
        self.blocks.pop_front().ok_or(MemoryError::EmptyContainer)
    }

    pub fn remove_back(&mut self) -> MemoryResult<Block> {
        self.blocks.pop_back().ok_or(MemoryError::EmptyContainer)
    }

    pub fn remove_at(&mut self, index: usize) -> MemoryResult<Block> {
        if self.blocks.is_empty() {
            return Err(MemoryError::EmptyContainer);
        }
        self.blocks
            .remove(index)
            .ok_or(MemoryError::IndexNotFound(index))
    }

    /// Position of the first block matching `predicate`
    pub fn find_first<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Block) -> bool,
    {
        self.blocks.iter().position(predicate)
    }

    pub fn contains<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Block) -> bool,
    {
        self.blocks.iter().any(predicate)
    }

    /// Position of a block equal to `block` by `(owner, start, end)`
    pub fn index_of(&self, block: &Block) -> Option<usize> {
        self.find_first(|current| current == block)
    }

    pub fn contains_block(&self, block: &Block) -> bool {
        self.contains(|current| current == block)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn front(&self) -> Option<&Block> {
        self.blocks.front()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter()
    }

    /// Remove every block, front to back
    pub fn drain(&mut self) -> impl Iterator<Item = Block> + '_ {
        self.blocks.drain(..)
    }

    /// Sum of block sizes
    pub fn total_size(&self) -> usize {
        self.blocks.iter().map(Block::size).sum()
    }
}

impl FromIterator<Block> for BlockList {
    /// Collects in iteration order, like repeated `insert_back`
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BlockList {
    type Item = Block;
    type IntoIter = std::collections::vec_deque::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::collections::vec_deque::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
