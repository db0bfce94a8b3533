//! Build argument resolution
//!
//! Resolves the per-architecture overrides for one flavor and renders the
//! `DOCKER_IMAGE_BUILD_ARG_*` lines consumed by the build scripts.

use std::fmt;

use crate::core::defs::Definitions;
use crate::core::flavor;
use crate::error::DefsError;

/// Variant name that switches the glibc build argument on
const GLIBC_VARIANT: &str = "glibc";

/// Resolved build arguments for one (flavor, architecture) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnv {
    /// Target architecture, as given
    pub arch: String,
    /// Build recipe identifier of the flavor's OS
    pub dockerfile: String,
    /// Fully-qualified base image reference (`{baseimage_arch}/{baseimage}`)
    pub baseimage: String,
    /// Whether the matched variant is the glibc variant
    pub glibc: bool,
    /// Resolved C-library architecture
    pub glibc_arch: String,
    /// Resolved emulator architecture
    pub qemu_arch: String,
}

impl BuildEnv {
    /// Resolve the build arguments for `flavor_name` under `arch`.
    ///
    /// The architecture is validated before any flavor lookup; the first
    /// enumerated flavor with a matching name wins.
    pub fn resolve(defs: &Definitions, flavor_name: &str, arch: &str) -> Result<Self, DefsError> {
        let record = defs.architecture(arch)?;

        let matched = flavor::flavors(defs)
            .find(|f| f.name == flavor_name)
            .ok_or_else(|| DefsError::UnknownFlavor {
                name: flavor_name.to_string(),
            })?;

        // Keys carried by the flavor come from these very maps
        let os_record = &defs.flavors[matched.os];
        let release = &os_record.releases[matched.release];
        let baseimage_arch = record.baseimage_arch_for(matched.os, arch);

        Ok(Self {
            arch: arch.to_string(),
            dockerfile: os_record.dockerfile.clone(),
            baseimage: format!("{baseimage_arch}/{}", release.baseimage),
            glibc: matched.variant == GLIBC_VARIANT,
            glibc_arch: record.glibc_arch_or(arch).to_string(),
            qemu_arch: record.qemu_arch_or(arch).to_string(),
        })
    }
}

impl fmt::Display for BuildEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DOCKER_IMAGE_BUILD_ARG_ARCH={}", self.arch)?;
        writeln!(f, "DOCKER_IMAGE_BUILD_ARG_DOCKERFILE={}", self.dockerfile)?;
        writeln!(f, "DOCKER_IMAGE_BUILD_ARG_BASEIMAGE={}", self.baseimage)?;
        writeln!(f, "DOCKER_IMAGE_BUILD_ARG_GLIBC={}", u8::from(self.glibc))?;
        writeln!(f, "DOCKER_IMAGE_BUILD_ARG_GLIBC_ARCH={}", self.glibc_arch)?;
        write!(f, "DOCKER_IMAGE_BUILD_ARG_QEMU_ARCH={}", self.qemu_arch)
    }
}
