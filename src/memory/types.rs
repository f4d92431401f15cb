/*!
 * Memory Types
 * Common types for partition management
 */

use crate::core::limits::{
    FREE_OWNER, PRESSURE_CRITICAL_PCT, PRESSURE_HIGH_PCT, PRESSURE_MEDIUM_PCT,
};
use crate::core::types::{Address, Pid, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Failed allocations, deallocations and list lookups leave both lists
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum MemoryError {
    #[error("Memory allocation of {size} blocks for PID {pid} failed: no free block is large enough")]
    #[diagnostic(
        code(memory::allocation_failed),
        help("Deallocate or coalesce free blocks before retrying.")
    )]
    AllocationFailed { pid: Pid, size: Size },

    #[error("No memory is allocated to PID {pid}")]
    #[diagnostic(
        code(memory::deallocation_not_found),
        help("The process may never have allocated, or was already deallocated.")
    )]
    DeallocationNotFound { pid: Pid },

    #[error("Block container is empty")]
    #[diagnostic(code(memory::empty_container))]
    EmptyContainer,

    #[error("No block at index {0}")]
    #[diagnostic(code(memory::index_not_found))]
    IndexNotFound(usize),

    #[error("Invalid partition size {0}: must be positive")]
    #[diagnostic(code(memory::invalid_partition))]
    InvalidPartition(Size),

    #[error("PID {0} is reserved for free blocks")]
    #[diagnostic(code(memory::reserved_pid))]
    ReservedPid(Pid),

    #[error("Memory corruption detected: {0}")]
    #[diagnostic(
        code(memory::corruption_detected),
        help("The free and allocated lists no longer partition the address range.")
    )]
    CorruptionDetected(String),
}

/// A contiguous address range `[start, end]` tagged with its owner
///
/// `end` is inclusive, so a block always spans at least one address.
/// Equality is the `(owner, start, end)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub owner: Pid,
    pub start: Address,
    pub end: Address,
}

impl Block {
    /// Create a free block covering `[start, end]`
    pub fn free(start: Address, end: Address) -> Self {
        debug_assert!(start <= end, "block end precedes start");
        Self {
            owner: FREE_OWNER,
            start,
            end,
        }
    }

    /// Create a block owned by `owner`
    pub fn owned(owner: Pid, start: Address, end: Address) -> Self {
        debug_assert!(start <= end, "block end precedes start");
        Self { owner, start, end }
    }

    /// Number of addresses covered
    #[inline]
    pub fn size(&self) -> Size {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.owner == FREE_OWNER
    }

    /// True when `next` begins right after this block ends
    #[inline]
    pub fn is_adjacent_to(&self, next: &Block) -> bool {
        self.end.checked_add(1) == Some(next.start)
    }

    #[inline]
    pub fn overlaps(&self, other: &Block) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Read-only view handed to reporting
    pub fn view(&self) -> BlockView {
        BlockView {
            start: self.start,
            end: self.end,
            owner: self.owner,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)?;
        if !self.is_free() {
            write!(f, " PID {}", self.owner)?;
        }
        Ok(())
    }
}

/// `(start, end, owner)` triple exposed to the reporting collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockView {
    pub start: Address,
    pub end: Address,
    pub owner: Pid,
}

impl From<(Address, Address, Pid)> for BlockView {
    fn from((start, end, owner): (Address, Address, Pid)) -> Self {
        Self { start, end, owner }
    }
}

/// Partition statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub partition_size: Size,
    pub allocated_bytes: Size,
    pub free_bytes: Size,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
    /// Share of free space that lies outside the largest free block (0.0 - 1.0)
    pub external_fragmentation: f64,
}

impl MemoryStats {
    pub fn usage_percentage(&self) -> f64 {
        if self.partition_size == 0 {
            return 0.0;
        }
        (self.allocated_bytes as f64 / self.partition_size as f64) * 100.0
    }

    pub fn memory_pressure(&self) -> MemoryPressure {
        let usage = self.usage_percentage();
        if usage >= PRESSURE_CRITICAL_PCT {
            MemoryPressure::Critical
        } else if usage >= PRESSURE_HIGH_PCT {
            MemoryPressure::High
        } else if usage >= PRESSURE_MEDIUM_PCT {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
