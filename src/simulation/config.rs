/*!
 * Simulation Configuration
 * Command-line arguments and environment overrides
 */

use crate::core::errors::SimError;
use crate::core::limits::ENV_OUTPUT;
use crate::core::types::SimResult;
use crate::memory::PlacementPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report format written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Settings for one simulation run, fixed for the whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub script_path: PathBuf,
    pub policy: PlacementPolicy,
    pub output: OutputFormat,
}

impl SimulationConfig {
    /// Build from process arguments (program name excluded)
    ///
    /// Environment variables:
    /// - MMU_OUTPUT: `text` or `json`, overridden by `--text` / `--json`
    pub fn from_args<I>(args: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        Self::parse(args, std::env::var(ENV_OUTPUT).ok())
    }

    /// Usage: `<input file> -{F | B | W} [--json | --text]`
    pub fn parse<I>(args: I, env_output: Option<String>) -> SimResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut output = env_output
            .as_deref()
            .and_then(OutputFormat::from_env_value)
            .unwrap_or_default();
        let mut positional = Vec::new();

        for arg in args {
            match arg.as_str() {
                "--json" => output = OutputFormat::Json,
                "--text" => output = OutputFormat::Text,
                "-h" | "--help" => return Err(SimError::Usage),
                _ => positional.push(arg),
            }
        }

        let [path, flag]: [String; 2] = positional.try_into().map_err(|_| SimError::Usage)?;
        let policy = PlacementPolicy::from_flag(&flag)?;

        Ok(Self {
            script_path: PathBuf::from(path),
            policy,
            output,
        })
    }
}
