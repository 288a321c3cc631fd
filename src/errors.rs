// src/errors.rs

//! Crate-wide error type and helpers.

use thiserror::Error;

use crate::graph::NodeState;

#[derive(Error, Debug)]
pub enum GridironError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("node '{0}' is already registered")]
    DuplicateNode(String),

    #[error("node '{node}' declares unknown dependency '{dependency}'")]
    UnknownDependency { node: String, dependency: String },

    #[error("cycle detected in task graph: {0}")]
    Cycle(String),

    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("dependency '{dependency}' of node '{node}' has not completed")]
    DependencyNotSatisfied { node: String, dependency: String },

    #[error("node '{node}' cannot start from state '{state}'")]
    InvalidState { node: String, state: NodeState },

    #[error("node '{node}' failed: {message}")]
    NodeFailed { node: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GridironError>;
