/*!
 * Operation Scripts
 * Parsing the partition size and operation records from text
 *
 * Format:
 * ```text
 * # partition size first
 * 100
 * 1 30        # pid 1 allocates 30
 * -1 0        # pid 1 releases its block
 * -99999 0    # coalesce
 * ```
 * Fields may be separated by whitespace or commas. For deallocation and
 * coalesce records the size field is optional.
 */

use super::operation::Operation;
use crate::core::errors::SimError;
use crate::core::limits::{MAX_OPERATIONS, SCRIPT_COMMENT};
use crate::core::types::{RawPid, SimResult, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Parsed script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub partition_size: Size,
    pub operations: Vec<Operation>,
}

/// Read and parse a script file
pub fn load_script(path: impl AsRef<Path>) -> SimResult<Script> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| SimError::io(path.display().to_string(), &e))?;
    parse_script(&text)
}

pub fn parse_script(text: &str) -> SimResult<Script> {
    let mut partition_size = None;
    let mut operations = Vec::new();

    for (line_no, raw) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let content = raw.split(SCRIPT_COMMENT).next().unwrap_or_default();
        let fields: Vec<&str> = content
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|f| !f.is_empty())
            .collect();
        if fields.is_empty() {
            continue;
        }

        if partition_size.is_none() {
            partition_size = Some(parse_partition_size(line_no, &fields)?);
            continue;
        }

        operations.push(parse_record(line_no, &fields)?);
        if operations.len() > MAX_OPERATIONS {
            return Err(SimError::TooManyOperations {
                count: operations.len(),
                max: MAX_OPERATIONS,
            });
        }
    }

    let partition_size = partition_size.ok_or(SimError::MissingPartitionSize)?;
    debug!(partition_size, operations = operations.len(), "Parsed script");
    Ok(Script {
        partition_size,
        operations,
    })
}

fn parse_partition_size(line_no: usize, fields: &[&str]) -> SimResult<Size> {
    if fields.len() != 1 {
        return Err(SimError::syntax(
            line_no,
            "the first line must hold only the partition size",
        ));
    }
    match fields[0].parse::<Size>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(SimError::InvalidPartitionSize(fields[0].to_string())),
    }
}

fn parse_record(line_no: usize, fields: &[&str]) -> SimResult<Operation> {
    if fields.len() > 2 {
        return Err(SimError::syntax(line_no, "expected `<pid> <size>`"));
    }

    let pid: RawPid = fields[0]
        .parse()
        .map_err(|_| SimError::syntax(line_no, format!("invalid process id '{}'", fields[0])))?;

    let size = match fields.get(1) {
        Some(field) => field
            .parse::<i64>()
            .map_err(|_| SimError::syntax(line_no, format!("invalid size '{}'", field)))?,
        None if pid > 0 => {
            return Err(SimError::syntax(line_no, "allocation is missing its size"));
        }
        None => 0,
    };

    Operation::decode(pid, size).map_err(|reason| SimError::syntax(line_no, reason))
}
