//! `print-build-env` command

use crate::core::build_env::BuildEnv;
use crate::core::defs::Definitions;
use crate::error::DefsError;

/// Print the resolved build arguments for one flavor and architecture
pub fn execute(defs: &Definitions, flavor: &str, arch: &str) -> Result<(), DefsError> {
    let env = BuildEnv::resolve(defs, flavor, arch)?;
    println!("{env}");
    Ok(())
}
