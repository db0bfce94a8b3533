//! Baseimage-defs - Docker baseimage build matrix helper
//!
//! This library derives the build parameters for every flavor of the Docker
//! baseimage (OS x variant x release, under a set of architectures) from a
//! static definitions document shipped next to the program.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and thin command functions
//! - [`core`] - Definitions data model, flavor enumeration, build arguments
//! - [`error`] - Error types and handling

pub mod cli;
pub mod core;
pub mod error;
