//! `list-archs` command

use crate::core::defs::Definitions;

/// Print every architecture name, one per line, in document order
pub fn execute(defs: &Definitions) {
    for arch in defs.architectures.keys() {
        println!("{arch}");
    }
}
