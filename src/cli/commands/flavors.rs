//! `list-flavors` command

use crate::core::defs::Definitions;
use crate::core::flavor;

/// Print every flavor name, one per line, in enumeration order
pub fn execute(defs: &Definitions) {
    for f in flavor::flavors(defs) {
        println!("{}", f.name);
    }
}
