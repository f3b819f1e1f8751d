pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, LengthRequest};
use crate::utils::error::Result;
use crate::utils::validation::{validate_count, validate_path, Validate};
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

/// PIN lengths a run produces, in output order.
pub const PIN_LENGTHS: [u32; 3] = [4, 6, 8];

/// PINs generated per length when neither a flag nor the config file sets one.
pub const DEFAULT_COUNT: i64 = 10;

pub const DEFAULT_OUTPUT_PATH: &str = "pins.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "pingen")]
#[command(about = "Generate unique 4-, 6-, and 8-digit PINs using strong randomness")]
pub struct CliConfig {
    /// Number of 4-digit PINs to generate [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub count4: Option<i64>,

    /// Number of 6-digit PINs to generate [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub count6: Option<i64>,

    /// Number of 8-digit PINs to generate [default: 10]
    #[arg(long, allow_negative_numbers = true)]
    pub count8: Option<i64>,

    /// Path to the output text file [default: pins.txt]
    #[arg(long)]
    pub output: Option<String>,

    /// Optional TOML configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show program rules and exit
    #[arg(long)]
    pub info: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merge flags over the optional config file over built-in defaults.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> RunConfig {
        let base = file.map(TomlConfig::to_run_config).unwrap_or_default();

        RunConfig {
            count4: self.count4.unwrap_or(base.count4),
            count6: self.count6.unwrap_or(base.count6),
            count8: self.count8.unwrap_or(base.count8),
            output_path: self.output.clone().unwrap_or(base.output_path),
            monitor: self.monitor || base.monitor,
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub count4: i64,
    pub count6: i64,
    pub count8: i64,
    pub output_path: String,
    pub monitor: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count4: DEFAULT_COUNT,
            count6: DEFAULT_COUNT,
            count8: DEFAULT_COUNT,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            monitor: false,
        }
    }
}

impl ConfigProvider for RunConfig {
    fn requests(&self) -> Vec<LengthRequest> {
        PIN_LENGTHS
            .iter()
            .zip([self.count4, self.count6, self.count8])
            .map(|(&length, count)| LengthRequest::new(length, count))
            .collect()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output", &self.output_path)?;
        for request in self.requests() {
            validate_count(request.length, request.count)?;
        }
        Ok(())
    }
}
