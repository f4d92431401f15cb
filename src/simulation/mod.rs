/*!
 * Simulation Module
 * Script-driven sequential driver and reporting
 */

pub mod config;
pub mod operation;
pub mod report;
pub mod runner;
pub mod script;

pub use config::{OutputFormat, SimulationConfig};
pub use operation::{Operation, Outcome};
pub use report::{render_blocks, render_json, render_step, render_text};
pub use runner::{Simulation, SimulationReport, StepReport};
pub use script::{load_script, parse_script, Script};
