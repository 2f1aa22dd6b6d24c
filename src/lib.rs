pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, LocalStorage};
pub use config::GeneratorConfig;

pub use crate::core::{
    engine::{GenerationReport, SynthEngine},
    pipeline::SyntheticPipeline,
};
pub use utils::error::{Result, SynthError};
