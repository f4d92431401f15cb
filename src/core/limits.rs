/*!
 * System Limits and Constants
 *
 * Centralized location for the simulator's limits and reserved values.
 */

use super::types::{Pid, RawPid};

// =============================================================================
// SCRIPT FORMAT
// =============================================================================

/// Reserved process id that requests a coalesce pass
pub const COALESCE_SENTINEL: RawPid = -99999;

/// Maximum number of operation records accepted from one script
pub const MAX_OPERATIONS: usize = 200;

/// Character that starts a comment in a script line
pub const SCRIPT_COMMENT: char = '#';

// =============================================================================
// PARTITION
// =============================================================================

/// Owner id carried by free blocks
pub const FREE_OWNER: Pid = 0;

// =============================================================================
// MEMORY PRESSURE
// =============================================================================

/// Usage percentage at which pressure is reported as medium
pub const PRESSURE_MEDIUM_PCT: f64 = 60.0;

/// Usage percentage at which pressure is reported as high
pub const PRESSURE_HIGH_PCT: f64 = 80.0;

/// Usage percentage at which pressure is reported as critical
pub const PRESSURE_CRITICAL_PCT: f64 = 95.0;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Selects JSON log output when set to `1` or `true`
pub const ENV_TRACE_JSON: &str = "MMU_TRACE_JSON";

/// Selects the report format (`text` or `json`)
pub const ENV_OUTPUT: &str = "MMU_OUTPUT";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
