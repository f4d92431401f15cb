/*!
 * Simulation Operations
 * Decoding script records and applying them to an allocator
 */

use crate::core::limits::COALESCE_SENTINEL;
use crate::core::types::{Pid, RawPid, Size};
use crate::memory::{Allocator, Block, MemoryError, PlacementPolicy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded script operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Allocate { pid: Pid, size: Size },
    Deallocate { pid: Pid },
    Coalesce,
}

impl Operation {
    /// Decode a raw `(pid, size)` record
    ///
    /// Positive ids allocate `size`, negative ids release `|pid|` and ignore
    /// `size`. The coalesce sentinel and id 0 both request a coalesce pass.
    pub fn decode(pid: RawPid, size: i64) -> Result<Self, String> {
        if pid == COALESCE_SENTINEL || pid == 0 {
            return Ok(Self::Coalesce);
        }

        let id = Pid::try_from(pid.unsigned_abs())
            .map_err(|_| format!("process id {} is out of range", pid))?;

        if pid > 0 {
            let size = Size::try_from(size)
                .map_err(|_| format!("allocation size {} must not be negative", size))?;
            Ok(Self::Allocate { pid: id, size })
        } else {
            Ok(Self::Deallocate { pid: id })
        }
    }

    /// Run this operation against `allocator`
    pub fn apply<A: Allocator>(&self, allocator: &mut A, policy: PlacementPolicy) -> Outcome {
        let result = match *self {
            Self::Allocate { pid, size } => allocator.allocate(pid, size, policy).map(Outcome::Allocated),
            Self::Deallocate { pid } => allocator.deallocate(pid, policy).map(Outcome::Deallocated),
            Self::Coalesce => Ok(Outcome::Coalesced {
                merges: allocator.coalesce(),
            }),
        };
        result.unwrap_or_else(Outcome::Failed)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Allocate { pid, size } => write!(f, "ALLOCATE: {} FROM PID: {}", size, pid),
            Self::Deallocate { pid } => write!(f, "DEALLOCATE MEM: PID {}", pid),
            Self::Coalesce => write!(f, "COALESCE/COMPACT"),
        }
    }
}

/// Result of applying one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "details", rename_all = "snake_case")]
pub enum Outcome {
    Allocated(Block),
    Deallocated(Block),
    Coalesced { merges: usize },
    Failed(MemoryError),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Error line printed under the step banner, if the step failed
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failed(MemoryError::AllocationFailed { size, .. }) => {
                Some(format!("Error: Memory Allocation {} blocks", size))
            }
            Self::Failed(MemoryError::DeallocationNotFound { pid }) => {
                Some(format!("Error: Can't locate Memory Used by PID: <{}>", pid))
            }
            Self::Failed(other) => Some(format!("Error: {}", other)),
            _ => None,
        }
    }
}
