//! Core logic: definitions data model, flavor enumeration and build
//! argument resolution. No I/O beyond the single document read.

pub mod build_env;
pub mod defs;
pub mod flavor;
