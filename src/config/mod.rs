// src/config/mod.rs

//! Configuration: TOML model, loading and validation.

pub mod loader;
pub mod model;
mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{AnalysisSection, ConfigFile, GameSection, RawConfigFile, WeightsSection};
