/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (0 is reserved for free blocks)
pub type Pid = u32;

/// Address type for positions inside the partition
pub type Address = usize;

/// Size type for block and partition lengths
pub type Size = usize;

/// Raw process id as it appears in an operation script
///
/// Negative values request deallocation; the coalesce sentinel is out of range.
pub type RawPid = i64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
