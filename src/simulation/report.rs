/*!
 * Report Rendering
 * Text and JSON output for simulation runs
 */

use super::runner::{SimulationReport, StepReport};
use crate::core::types::SimResult;
use crate::memory::BlockView;
use std::fmt::Write;

const BANNER: &str = "************************";

/// Render a block list under `title`
///
/// ```text
/// Free Memory:
/// Block 0:	 START: 30	 END: 99
/// ```
pub fn render_blocks<'a, I>(title: &str, blocks: I) -> String
where
    I: IntoIterator<Item = &'a BlockView>,
{
    let mut out = format!("{}:\n", title);
    for (index, block) in blocks.into_iter().enumerate() {
        let _ = write!(
            out,
            "Block {}:\t START: {}\t END: {}",
            index, block.start, block.end
        );
        if block.owner != 0 {
            let _ = write!(out, "\t PID: {}", block.owner);
        }
        out.push('\n');
    }
    out
}

/// Render one step: banner, operation, optional error, both lists
pub fn render_step(step: &StepReport) -> String {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    let _ = writeln!(out, "{}", step.operation);
    if let Some(message) = step.outcome.error_message() {
        out.push_str(&message);
        out.push('\n');
    }
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&render_blocks("Free Memory", &step.free));
    out.push_str(&render_blocks("\nAllocated Memory", &step.allocated));
    out.push_str("\n\n");
    out
}

pub fn render_text(report: &SimulationReport) -> String {
    report.steps.iter().map(render_step).collect()
}

pub fn render_json(report: &SimulationReport) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
