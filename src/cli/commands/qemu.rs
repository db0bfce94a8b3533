//! `get-qemu-arch` command

use crate::core::defs::Definitions;
use crate::error::DefsError;

/// Print the resolved emulator architecture for `arch`
pub fn execute(defs: &Definitions, arch: &str) -> Result<(), DefsError> {
    println!("{}", defs.qemu_arch(arch)?);
    Ok(())
}
