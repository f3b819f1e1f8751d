pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, RunConfig};

pub use core::{
    derive::derive_pin, engine::PinEngine, entropy::OsEntropy, generator::generate_unique_pins,
};
pub use domain::model::{OutputDocument, Pin, PinSet};
pub use utils::error::{PinError, Result};
