/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

/// Simulator errors with serialization support
///
/// Everything that can stop a run before or between operations. Recoverable
/// allocation failures stay `MemoryError`s and never abort a simulation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("usage: mmu <input file> -{{F | B | W}} [--json]\n(F=FIFO | B=BESTFIT | W=WORSTFIT)")]
    #[diagnostic(code(sim::usage))]
    Usage,

    #[error("Invalid placement policy '{0}'")]
    #[diagnostic(
        code(sim::invalid_policy),
        help("Use -F (FIFO), -B (BESTFIT) or -W (WORSTFIT).")
    )]
    InvalidPolicy(String),

    #[error("Failed to read script {path}: {message}")]
    #[diagnostic(
        code(sim::io),
        help("Check that the input file exists and is readable.")
    )]
    Io { path: String, message: String },

    #[error("Script is empty: expected a partition size on the first line")]
    #[diagnostic(code(sim::missing_partition_size))]
    MissingPartitionSize,

    #[error("Invalid partition size '{0}': must be a positive integer")]
    #[diagnostic(code(sim::invalid_partition_size))]
    InvalidPartitionSize(String),

    #[error("Syntax error on script line {line}: {reason}")]
    #[diagnostic(
        code(sim::script_syntax),
        help("Each operation line holds `<pid> <size>`; -99999 requests a coalesce.")
    )]
    ScriptSyntax { line: usize, reason: String },

    #[error("Script holds {count} operations, at most {max} are supported")]
    #[diagnostic(code(sim::too_many_operations))]
    TooManyOperations { count: usize, max: usize },

    #[error("Failed to render report: {0}")]
    #[diagnostic(code(sim::render))]
    Render(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),
}

impl SimError {
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn syntax(line: usize, reason: impl Into<String>) -> Self {
        Self::ScriptSyntax {
            line,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Render(err.to_string())
    }
}
