//! `print-travis-matrix` command

use crate::core::defs::Definitions;
use crate::core::flavor;

/// Render one matrix entry for an (architecture, flavor) pair
fn matrix_line(arch: &str, flavor: &str) -> String {
    format!("  - DOCKER_IMAGE_ARCH={arch:<8} DOCKER_IMAGE_FLAVOR={flavor}")
}

/// Print the CI matrix pairing every flavor with every architecture:
/// architectures in document order, flavors in enumeration order
pub fn execute(defs: &Definitions) {
    for arch in defs.architectures.keys() {
        for f in flavor::flavors(defs) {
            println!("{}", matrix_line(arch, &f.name));
        }
    }
}
