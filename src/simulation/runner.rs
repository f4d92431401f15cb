/*!
 * Simulation Runner
 * Sequential driver feeding operations to the memory manager
 */

use super::operation::{Operation, Outcome};
use super::script::Script;
use crate::core::types::{SimResult, Size};
use crate::memory::{BlockView, MemoryManager, MemoryStats, PlacementPolicy};
use crate::monitoring::StepSpan;
use serde::{Deserialize, Serialize};
use tracing::info;

/// State of both lists after one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub index: usize,
    pub operation: Operation,
    pub outcome: Outcome,
    pub free: Vec<BlockView>,
    pub allocated: Vec<BlockView>,
}

/// Everything a finished run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub partition_size: Size,
    pub policy: PlacementPolicy,
    pub steps: Vec<StepReport>,
    pub final_stats: MemoryStats,
}

impl SimulationReport {
    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_failure()).count()
    }
}

/// One simulation session
///
/// The policy is chosen once and passed into every manager call.
#[derive(Debug, Clone)]
pub struct Simulation {
    memory: MemoryManager,
    policy: PlacementPolicy,
    steps_run: usize,
}

impl Simulation {
    pub fn new(partition_size: Size, policy: PlacementPolicy) -> SimResult<Self> {
        let memory = MemoryManager::new(partition_size)?;
        info!(partition_size, %policy, "Simulation session started");
        Ok(Self {
            memory,
            policy,
            steps_run: 0,
        })
    }

    pub fn memory(&self) -> &MemoryManager {
        &self.memory
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// Apply one operation and snapshot both lists
    ///
    /// Recoverable failures are part of the report, never an error.
    pub fn step(&mut self, operation: Operation) -> StepReport {
        let index = self.steps_run;
        self.steps_run += 1;

        let mut span = StepSpan::new(index, &operation.to_string());
        let outcome = {
            let _entered = span.enter();
            operation.apply(&mut self.memory, self.policy)
        };
        match &outcome {
            Outcome::Failed(err) => span.record_error(&err.to_string()),
            _ => span.record_success(),
        }

        StepReport {
            index,
            operation,
            outcome,
            free: self.memory.free_blocks().collect(),
            allocated: self.memory.allocated_blocks().collect(),
        }
    }

    /// Run every operation in order
    pub fn run<I>(&mut self, operations: I) -> SimulationReport
    where
        I: IntoIterator<Item = Operation>,
    {
        let steps: Vec<StepReport> = operations.into_iter().map(|op| self.step(op)).collect();
        let report = SimulationReport {
            partition_size: self.memory.partition_size(),
            policy: self.policy,
            steps,
            final_stats: self.memory.stats(),
        };
        info!(
            steps = report.steps.len(),
            failures = report.failures(),
            "Simulation finished"
        );
        report
    }

    /// Create a session for `script` and run all of its operations
    pub fn run_script(script: &Script, policy: PlacementPolicy) -> SimResult<SimulationReport> {
        let mut simulation = Self::new(script.partition_size, policy)?;
        Ok(simulation.run(script.operations.iter().copied()))
    }
}
