//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod archs;
pub mod build_env;
pub mod flavors;
pub mod matrix;
pub mod qemu;

use clap::Subcommand;

use crate::core::defs::Definitions;
use crate::error::DefsError;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all Docker image flavors
    ListFlavors,

    /// List all Docker image architectures
    ListArchs,

    /// Print the build environment of a Docker image flavor
    PrintBuildEnv {
        /// Flavor of the Docker image
        flavor: String,

        /// Architecture of the Docker image
        arch: String,
    },

    /// Print the Travis matrix covering all flavors under all architectures
    PrintTravisMatrix,

    /// Print the QEMU architecture of a Docker image architecture
    GetQemuArch {
        /// Architecture of the Docker image
        arch: String,
    },
}

impl Commands {
    /// Execute the command against the loaded definitions
    pub fn run(self, defs: &Definitions) -> Result<(), DefsError> {
        match self {
            Self::ListFlavors => {
                flavors::execute(defs);
                Ok(())
            }
            Self::ListArchs => {
                archs::execute(defs);
                Ok(())
            }
            Self::PrintBuildEnv { flavor, arch } => build_env::execute(defs, &flavor, &arch),
            Self::PrintTravisMatrix => {
                matrix::execute(defs);
                Ok(())
            }
            Self::GetQemuArch { arch } => qemu::execute(defs, &arch),
        }
    }
}
