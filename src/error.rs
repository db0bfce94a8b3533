//! Error types for baseimage-defs
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or querying the definitions document
#[derive(Error, Debug)]
pub enum DefsError {
    /// Definitions file could not be read
    #[error("Failed to read definitions file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Definitions file is not a valid document
    #[error("Failed to parse definitions file: {source}")]
    Parse {
        #[from]
        source: serde_yaml::Error,
    },

    /// The directory holding the running executable could not be resolved
    #[error("Failed to locate the program directory: {source}")]
    ExeLocation { source: std::io::Error },

    /// Architecture argument is not declared in the definitions
    #[error("Invalid Docker image architecture '{name}'")]
    UnknownArchitecture { name: String },

    /// Flavor argument matches no enumerated flavor
    #[error("Invalid Docker image flavor '{name}'")]
    UnknownFlavor { name: String },
}
