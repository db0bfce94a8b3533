//! Flavor enumeration
//!
//! A flavor is one buildable (OS, variant, release) combination. The OS name
//! itself always doubles as the first variant; declared variants follow in
//! document order and are not deduplicated against the OS name, matching the
//! build scripts this tool feeds.

use crate::core::defs::Definitions;

/// One enumerated flavor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor<'a> {
    /// Derived flavor name (`os-release` or `os-release-variant`)
    pub name: String,
    /// OS name
    pub os: &'a str,
    /// Variant name (equal to `os` for the implicit default variant)
    pub variant: &'a str,
    /// Release name
    pub release: &'a str,
}

/// Derive the flavor name for an (OS, variant, release) combination
pub fn flavor_name(os: &str, variant: &str, release: &str) -> String {
    if os == variant {
        format!("{os}-{release}")
    } else {
        format!("{os}-{release}-{variant}")
    }
}

/// Enumerate all flavors in deterministic order: OS names in document
/// order, then variants as `[os] + declared_variants`, then releases in
/// document order.
pub fn flavors(defs: &Definitions) -> impl Iterator<Item = Flavor<'_>> {
    defs.flavors.iter().flat_map(|(os, record)| {
        let os = os.as_str();
        std::iter::once(os)
            .chain(record.variants.iter().map(String::as_str))
            .flat_map(move |variant| {
                record.releases.keys().map(move |release| Flavor {
                    name: flavor_name(os, variant, release),
                    os,
                    variant,
                    release: release.as_str(),
                })
            })
    })
}
