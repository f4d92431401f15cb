/*!
 * MMU Simulator - Main Entry Point
 *
 * Usage: mmu <input file> -{F | B | W} [--json]
 *
 * Reads a partition size and a list of operations, replays them against one
 * partition under the chosen placement policy and prints both block lists
 * after every step.
 */

use mmu_sim::simulation::{load_script, render_json, render_step, OutputFormat};
use mmu_sim::{init_tracing, Simulation, SimulationConfig, SimulationReport};
use tracing::{info, warn};

fn main() -> miette::Result<()> {
    init_tracing();

    let config = SimulationConfig::from_args(std::env::args().skip(1))?;
    info!(
        script = %config.script_path.display(),
        policy = %config.policy,
        output = ?config.output,
        "Starting simulation"
    );

    let script = load_script(&config.script_path)?;
    let mut simulation = Simulation::new(script.partition_size, config.policy)?;

    let mut steps = Vec::with_capacity(script.operations.len());
    for operation in script.operations.iter().copied() {
        let step = simulation.step(operation);
        if config.output == OutputFormat::Text {
            print!("{}", render_step(&step));
        }
        steps.push(step);
    }

    let report = SimulationReport {
        partition_size: script.partition_size,
        policy: config.policy,
        steps,
        final_stats: simulation.memory().stats(),
    };

    if config.output == OutputFormat::Json {
        println!("{}", render_json(&report)?);
    }

    if report.failures() > 0 {
        warn!(failures = report.failures(), "Some operations could not be completed");
    }
    info!(
        pressure = %report.final_stats.memory_pressure(),
        fragmentation = report.final_stats.external_fragmentation,
        "Simulation complete"
    );
    Ok(())
}
